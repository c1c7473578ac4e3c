//! The root environment: constants plus the native library objects.

mod array;
mod import;
mod math;
mod out;
mod proc;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{Environment, Value};

/// Module values loaded with caching on, keyed by resolved path.
pub(crate) type ModuleCache = Rc<RefCell<FxHashMap<PathBuf, Value>>>;

/// Configures and builds root environments.
///
/// ```ignore
/// let env = GlobalEnvBuilder::new()
///     .print_handler(buffer_handler())
///     .module_root("scripts")
///     .build();
/// ```
///
/// Environments built from clones of one builder share its module cache.
#[derive(Clone)]
pub struct GlobalEnvBuilder {
    print_handler: SharedPrintHandler,
    module_root: PathBuf,
    module_extension: String,
    module_cache: ModuleCache,
}

impl GlobalEnvBuilder {
    /// Stdout output, modules resolved from the working directory with the
    /// `vl` extension.
    pub fn new() -> Self {
        GlobalEnvBuilder {
            print_handler: stdout_handler(),
            module_root: PathBuf::from("."),
            module_extension: "vl".to_string(),
            module_cache: ModuleCache::default(),
        }
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    /// Directory `import` resolves module names against.
    #[must_use]
    pub fn module_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.module_root = root.into();
        self
    }

    /// Extension appended to module names, without the dot.
    #[must_use]
    pub fn module_extension(mut self, extension: impl Into<String>) -> Self {
        self.module_extension = extension.into();
        self
    }

    /// A fresh root environment.
    pub fn build(&self) -> Environment {
        let env = Environment::new();

        env.define("true", Value::Boolean(true), true);
        env.define("false", Value::Boolean(false), true);
        env.define("nil", Value::Nil, true);
        env.define("null", Value::Nil, true);
        env.define("NaN", Value::Number(f64::NAN), true);
        env.define("inf", Value::Number(f64::INFINITY), true);

        env.define("out", out::library(&self.print_handler), true);
        env.define("proc", proc::library(), true);
        env.define("math", math::library(), true);
        env.define("Array", array::library(), true);
        env.define("import", import::native(self.clone()), true);

        debug!(module_root = %self.module_root.display(), "built global environment");
        env
    }
}

impl Default for GlobalEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A root environment with default settings.
pub fn create_global_env() -> Environment {
    GlobalEnvBuilder::new().build()
}
