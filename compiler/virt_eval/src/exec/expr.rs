//! Identifiers, object literals, member access and assignment.

use virt_ir::{Expr, ExprKind, Property};

use super::{eval_expr, EvalResult, Interrupt};
use crate::errors::{invalid_assignee, invalid_property_key, member_of_non_object};
use crate::value::ObjectMap;
use crate::{Environment, Value};

/// Properties in source order. Shorthand `{ key }` reads the variable `key`.
pub(super) fn eval_object(properties: &[Property], env: &Environment) -> EvalResult {
    let mut map = ObjectMap::with_capacity(properties.len());
    for property in properties {
        let value = match &property.value {
            Some(expr) => eval_expr(expr, env)?,
            None => env.lookup_var(&property.key)?,
        };
        map.insert(property.key.clone(), value);
    }
    Ok(Value::from_map(map))
}

/// `object.name` / `object[key]`. A missing key reads as nil.
pub(super) fn eval_member(
    object: &Expr,
    property: &Expr,
    computed: bool,
    env: &Environment,
) -> EvalResult {
    let map = match eval_expr(object, env)? {
        Value::Object(map) => map,
        other => return Err(member_of_non_object(other.type_name()).into()),
    };
    let key = property_key(property, computed, env)?;
    let value = map.borrow().get(&key).cloned();
    Ok(value.unwrap_or(Value::Nil))
}

/// Assign to a variable or upsert an object property. The result is the
/// assigned value.
pub(super) fn eval_assignment(assignee: &Expr, value: &Expr, env: &Environment) -> EvalResult {
    match &assignee.kind {
        ExprKind::Identifier(name) => {
            let value = eval_expr(value, env)?;
            Ok(env.assign_var(name, value)?)
        }
        ExprKind::Member {
            object,
            property,
            computed,
        } => {
            let map = match eval_expr(object, env)? {
                Value::Object(map) => map,
                other => return Err(member_of_non_object(other.type_name()).into()),
            };
            let key = property_key(property, *computed, env)?;
            let value = eval_expr(value, env)?;
            map.borrow_mut().insert(key, value.clone());
            Ok(value)
        }
        _ => Err(invalid_assignee().into()),
    }
}

/// The identifier's name for `.name`, otherwise the evaluated key.
fn property_key(property: &Expr, computed: bool, env: &Environment) -> Result<String, Interrupt> {
    if !computed {
        if let Some(name) = property.as_identifier() {
            return Ok(name.to_string());
        }
    }
    let key = eval_expr(property, env)?;
    key.property_key()
        .ok_or_else(|| invalid_property_key(key.type_name()).into())
}
