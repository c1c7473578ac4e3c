//! `import(name, cache?)`: load another script and return its value.

use std::fs;
use std::io::ErrorKind;

use crate::errors::{module_load_failed, module_not_found, native_expects};
use crate::{evaluate, RuntimeError, Value};

use super::GlobalEnvBuilder;

pub(super) fn native(builder: GlobalEnvBuilder) -> Value {
    Value::native("import", move |args, _| {
        let Some(name) = args.first().and_then(Value::as_str) else {
            return Err(native_expects("import", "a module name as first argument"));
        };
        let use_cache = args.get(1).is_some_and(Value::is_true);
        import_module(&builder, name, use_cache)
    })
}

/// Resolve `name` under the module root, then parse and evaluate the file in
/// a fresh root environment built from the same settings.
#[tracing::instrument(level = "debug", skip(builder))]
fn import_module(
    builder: &GlobalEnvBuilder,
    name: &str,
    use_cache: bool,
) -> Result<Value, RuntimeError> {
    let path = builder
        .module_root
        .join(format!("{name}.{}", builder.module_extension));

    if use_cache {
        let cached = builder.module_cache.borrow().get(&path).cloned();
        if let Some(value) = cached {
            tracing::trace!(path = %path.display(), "module cache hit");
            return Ok(value);
        }
    }

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(module_not_found(name, &path)),
        Err(err) => return Err(module_load_failed(name, &err)),
    };
    let program = virt_parse::produce_ast(&source).map_err(|err| module_load_failed(name, &err))?;

    let env = builder.build();
    let value = evaluate(&program, &env)?;

    if use_cache {
        builder
            .module_cache
            .borrow_mut()
            .insert(path, value.clone());
    }
    Ok(value)
}
