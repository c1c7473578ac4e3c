//! `proc`: the host process.

use crate::Value;

pub(super) fn library() -> Value {
    let exit = Value::native("exit", |args, _| {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "exit codes are small integers"
        )]
        let code = args.first().and_then(Value::as_number).unwrap_or(0.0) as i32;
        std::process::exit(code)
    });
    Value::object([("exit", exit)])
}
