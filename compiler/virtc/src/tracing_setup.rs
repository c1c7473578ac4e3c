//! Opt-in diagnostic logging.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber when `VIRT_LOG` (or, failing
/// that, `RUST_LOG`) holds a filter. Without either, nothing is installed.
///
/// ```text
/// VIRT_LOG=virt_eval=debug virt run script.vl
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = env_filter() else {
            return;
        };
        tracing_subscriber::registry()
            .with(filter)
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}

fn env_filter() -> Option<EnvFilter> {
    EnvFilter::try_from_env("VIRT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .ok()
}
