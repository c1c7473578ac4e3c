//! `out`: printing.

use crate::print_handler::SharedPrintHandler;
use crate::Value;

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

pub(super) fn library(handler: &SharedPrintHandler) -> Value {
    let print = {
        let handler = handler.clone();
        Value::native("print", move |args, _| {
            handler.println(&join_args(args));
            Ok(Value::Nil)
        })
    };
    let warn = {
        let handler = handler.clone();
        Value::native("warn", move |args, _| {
            handler.eprintln(&join_args(args));
            Ok(Value::Nil)
        })
    };
    let error = {
        let handler = handler.clone();
        Value::native("error", move |args, _| {
            handler.eprintln(&join_args(args));
            Ok(Value::Nil)
        })
    };
    let clear = {
        let handler = handler.clone();
        Value::native("clear", move |_, _| {
            handler.print(CLEAR_SCREEN);
            Ok(Value::Nil)
        })
    };

    Value::object([
        ("print", print),
        ("warn", warn),
        ("error", error),
        ("clear", clear),
    ])
}

fn join_args(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
