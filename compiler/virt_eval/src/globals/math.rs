//! `math`: constants and `abs`.

use std::f64::consts;

use crate::errors::native_expects;
use crate::Value;

pub(super) fn library() -> Value {
    let abs = Value::native("abs", |args, _| {
        let [arg] = args else {
            return Err(native_expects("abs", "exactly one argument"));
        };
        match arg {
            Value::Number(n) => Ok(Value::Number(n.abs())),
            _ => Err(native_expects("abs", "a number as argument")),
        }
    });

    Value::object([
        ("E", Value::Number(consts::E)),
        ("LN2", Value::Number(consts::LN_2)),
        ("LN10", Value::Number(consts::LN_10)),
        ("LOG2E", Value::Number(consts::LOG2_E)),
        ("LOG10E", Value::Number(consts::LOG10_E)),
        ("PI", Value::Number(consts::PI)),
        ("SQRT1_2", Value::Number(consts::FRAC_1_SQRT_2)),
        ("SQRT2", Value::Number(consts::SQRT_2)),
        ("abs", abs),
    ])
}
