//! `Array`: helpers for index-keyed objects.
//!
//! The length of an array is its entry count, and `push`/`pop` address the
//! key equal to that count. Gaps left by other edits are not compacted.

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::native_expects;
use crate::value::ObjectMap;
use crate::{RuntimeError, Value};

pub(super) fn library() -> Value {
    let new = Value::native("new", |args, _| Ok(Value::array(args.iter().cloned())));

    let push = Value::native("push", |args, _| {
        let arr = array_arg("push", args)?;
        let element = args
            .get(1)
            .ok_or_else(|| native_expects("push", "an element as second argument"))?;
        {
            let mut map = arr.borrow_mut();
            let key = map.len().to_string();
            map.insert(key, element.clone());
        }
        Ok(Value::Object(arr))
    });

    let pop = Value::native("pop", |args, _| {
        let arr = array_arg("pop", args)?;
        let mut map = arr.borrow_mut();
        let Some(last) = map.len().checked_sub(1) else {
            return Ok(Value::Nil);
        };
        Ok(map.shift_remove(&last.to_string()).unwrap_or(Value::Nil))
    });

    let length = Value::native("length", |args, _| {
        let arr = array_arg("length", args)?;
        #[expect(
            clippy::cast_precision_loss,
            reason = "entry counts stay far below 2^53"
        )]
        let len = arr.borrow().len() as f64;
        Ok(Value::Number(len))
    });

    Value::object([
        ("new", new),
        ("push", push),
        ("pop", pop),
        ("length", length),
    ])
}

/// The first argument as an object map.
fn array_arg(native: &str, args: &[Value]) -> Result<Rc<RefCell<ObjectMap>>, RuntimeError> {
    match args.first() {
        Some(Value::Object(map)) => Ok(Rc::clone(map)),
        _ => Err(native_expects(native, "an object as first argument")),
    }
}
