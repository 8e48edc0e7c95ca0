//! User-facing diagnostics shared by the loader, renderer and Graphviz driver.

use tracing::warn as trace_warn;

/// Prefix a message so every fatal error reads the same on stderr.
pub fn error_message(msg: impl Into<String>) -> String {
    format!("mapping-plan-viz: {}", msg.into())
}

/// Report a non-fatal condition. Goes through `tracing` so `RUST_LOG` can mute it.
pub fn warn(msg: impl Into<String>) {
    let msg = msg.into();
    trace_warn!("{}", msg);
}
