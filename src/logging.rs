//! Tracing setup for binaries built on this crate
//!
//! The library only emits events; nothing is printed unless a subscriber is
//! installed.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber.
///
/// `enable_debug` forces the `debug` level; otherwise `RUST_LOG` is honored
/// with `warn` as fallback. Repeated calls are ignored.
pub fn init_tracing(enable_debug: bool) {
    let env_filter = if enable_debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
