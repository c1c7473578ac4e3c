#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

//! The native library installed by `GlobalEnvBuilder`.

use std::fs;

use pretty_assertions::assert_eq;
use virt_eval::{
    buffer_handler, create_global_env, run_source, GlobalEnvBuilder, ProgramError,
    SharedPrintHandler, Value,
};

fn capture(source: &str) -> (Value, String) {
    let handler = buffer_handler();
    let env = GlobalEnvBuilder::new()
        .print_handler(SharedPrintHandler::clone(&handler))
        .build();
    let value = run_source(source, &env).unwrap();
    (value, handler.get_output())
}

fn eval(source: &str) -> Value {
    capture(source).0
}

fn runtime_error(source: &str) -> String {
    let env = GlobalEnvBuilder::new()
        .print_handler(buffer_handler())
        .build();
    match run_source(source, &env) {
        Err(ProgramError::Runtime(err)) => err.message,
        other => panic!("expected a runtime error from {source:?}, got {other:?}"),
    }
}

// Constants

#[test]
fn global_constants() {
    let env = create_global_env();
    assert_eq!(run_source("true", &env).unwrap(), Value::Boolean(true));
    assert_eq!(run_source("null", &env).unwrap(), Value::Nil);
    assert_eq!(run_source("nil", &env).unwrap(), Value::Nil);
    assert_eq!(
        run_source("inf", &env).unwrap(),
        Value::Number(f64::INFINITY)
    );
    assert!(run_source("NaN", &env)
        .unwrap()
        .as_number()
        .unwrap()
        .is_nan());
}

// out

#[test]
fn print_joins_arguments_with_spaces() {
    let (value, output) = capture("out.print('a', 1, { k: 'v' }, nil, true)");
    assert_eq!(value, Value::Nil);
    assert_eq!(output, "a 1 { k: 'v' } nil true\n");
}

#[test]
fn print_with_no_arguments_prints_empty_line() {
    assert_eq!(capture("out.print()").1, "\n");
}

#[test]
fn warn_and_error_reach_the_handler() {
    let (_, output) = capture("out.warn('careful')\nout.error('broken', 2)");
    assert_eq!(output, "careful\nbroken 2\n");
}

#[test]
fn clear_emits_escape_sequence() {
    let (_, output) = capture("out.clear()");
    assert!(output.starts_with("\x1b["));
}

#[test]
fn printing_functions() {
    let (_, output) = capture("fn add(a, b) { a + b }\nout.print(add, out.print)");
    assert_eq!(output, "fn add(a, b) native fn print\n");
}

// math

#[test]
fn math_constants() {
    assert_eq!(eval("math.PI"), Value::Number(std::f64::consts::PI));
    assert_eq!(eval("math.SQRT1_2"), Value::Number(std::f64::consts::FRAC_1_SQRT_2));
    assert_eq!(eval("math.LOG10E"), Value::Number(std::f64::consts::LOG10_E));
}

#[test]
fn abs() {
    assert_eq!(eval("math.abs(0 - 3.5)"), Value::Number(3.5));
    assert_eq!(
        runtime_error("math.abs()"),
        "`abs` function expects exactly one argument"
    );
    assert_eq!(
        runtime_error("math.abs(1, 2)"),
        "`abs` function expects exactly one argument"
    );
    assert_eq!(
        runtime_error("math.abs('x')"),
        "`abs` function expects a number as argument"
    );
}

#[test]
fn native_errors_are_catchable() {
    let source = "
        let m = nil
        try { math.abs() } catch e { m = e }
        m";
    assert_eq!(
        eval(source),
        Value::string("`abs` function expects exactly one argument")
    );
}

// Array

#[test]
fn array_new_and_length() {
    assert_eq!(eval("Array.length(Array.new(1, 2, 3))"), Value::Number(3.0));
    assert_eq!(eval("Array.length(Array.new())"), Value::Number(0.0));
    assert_eq!(
        eval("let arr = Array.new('a', 'b')\narr[1]"),
        Value::string("b")
    );
}

#[test]
fn push_appends_in_place() {
    let source = "
        let a = [1, 2]
        let same = Array.push(a, 3)
        same[0] = 'first'
        a";
    assert_eq!(eval(source).to_string(), "{ 0: 'first', 1: 2, 2: 3 }");
}

#[test]
fn pop_removes_last_index() {
    let source = "
        let a = [1, 2, 3]
        let last = Array.pop(a)
        out.print(last, Array.length(a))
        a";
    let (value, output) = capture(source);
    assert_eq!(output, "3 2\n");
    assert_eq!(value.to_string(), "{ 0: 1, 1: 2 }");
}

#[test]
fn pop_on_empty_is_nil() {
    assert_eq!(eval("Array.pop([])"), Value::Nil);
}

#[test]
fn length_counts_every_key() {
    assert_eq!(eval("let a = [1, 2]\na.extra = 9\nArray.length(a)"), Value::Number(3.0));
}

#[test]
fn gaps_are_not_compacted() {
    // Keys 0, 1, extra: pop looks for key "2", which does not exist.
    let source = "
        let a = [1, 2]
        a.extra = 9
        Array.pop(a)";
    assert_eq!(eval(source), Value::Nil);
}

#[test]
fn array_argument_errors() {
    assert_eq!(
        runtime_error("Array.push(1, 2)"),
        "`push` function expects an object as first argument"
    );
    assert_eq!(
        runtime_error("Array.push([])"),
        "`push` function expects an element as second argument"
    );
    assert_eq!(
        runtime_error("Array.pop('no')"),
        "`pop` function expects an object as first argument"
    );
    assert_eq!(
        runtime_error("Array.length()"),
        "`length` function expects an object as first argument"
    );
}

// import

struct Modules {
    dir: tempfile::TempDir,
}

impl Modules {
    fn new(files: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        for (name, source) in files {
            fs::write(dir.path().join(name), source).unwrap();
        }
        Modules { dir }
    }

    fn builder(&self) -> GlobalEnvBuilder {
        GlobalEnvBuilder::new()
            .print_handler(buffer_handler())
            .module_root(self.dir.path())
    }

    fn run(&self, source: &str) -> Result<Value, ProgramError> {
        run_source(source, &self.builder().build())
    }
}

#[test]
fn import_returns_module_value() {
    let modules = Modules::new(&[("lib.vl", "let answer = 42\n{ answer }")]);
    assert_eq!(
        modules.run("const lib = import('lib')\nlib.answer").unwrap(),
        Value::Number(42.0)
    );
}

#[test]
fn imported_functions_keep_their_module_scope() {
    let modules = Modules::new(&[(
        "counter.vl",
        "let n = 0\n{ next: fn () { n = n + 1 n } }",
    )]);
    let source = "
        const counter = import('counter')
        counter.next()
        counter.next()";
    assert_eq!(modules.run(source).unwrap(), Value::Number(2.0));
}

#[test]
fn cached_imports_share_the_value() {
    let modules = Modules::new(&[("m.vl", "{ n: 1 }")]);
    let source = "
        let a = import('m', true)
        let b = import('m', true)
        a.n = 5
        b.n";
    assert_eq!(modules.run(source).unwrap(), Value::Number(5.0));
}

#[test]
fn uncached_imports_evaluate_again() {
    let modules = Modules::new(&[("m.vl", "{ n: 1 }")]);
    let source = "
        let a = import('m')
        let b = import('m')
        a.n = 5
        b.n";
    assert_eq!(modules.run(source).unwrap(), Value::Number(1.0));
}

#[test]
fn module_not_found() {
    let modules = Modules::new(&[]);
    let Err(ProgramError::Runtime(err)) = modules.run("import('nope')") else {
        panic!("expected a runtime error");
    };
    assert!(err.message.starts_with("module not found: nope"), "{}", err.message);
}

#[test]
fn module_syntax_error_is_a_load_failure() {
    let modules = Modules::new(&[("bad.vl", "let = 1")]);
    let Err(ProgramError::Runtime(err)) = modules.run("import('bad')") else {
        panic!("expected a runtime error");
    };
    assert!(
        err.message.starts_with("failed to load module bad: "),
        "{}",
        err.message
    );
}

#[test]
fn module_runtime_errors_propagate() {
    let modules = Modules::new(&[("boom.vl", "ghost")]);
    let Err(ProgramError::Runtime(err)) = modules.run("import('boom')") else {
        panic!("expected a runtime error");
    };
    assert_eq!(err.message, "cannot resolve variable: ghost");
}

#[test]
fn modules_print_through_the_same_handler() {
    let modules = Modules::new(&[("noisy.vl", "out.print('loading')\n1")]);
    let handler = buffer_handler();
    let env = modules
        .builder()
        .print_handler(SharedPrintHandler::clone(&handler))
        .build();
    run_source("import('noisy')", &env).unwrap();
    assert_eq!(handler.get_output(), "loading\n");
}

#[test]
fn custom_extension() {
    let modules = Modules::new(&[("lib.virt", "7")]);
    let env = modules.builder().module_extension("virt").build();
    assert_eq!(run_source("import('lib')", &env).unwrap(), Value::Number(7.0));
}

#[test]
fn import_needs_a_name() {
    assert_eq!(
        runtime_error("import(1)"),
        "`import` function expects a module name as first argument"
    );
}
