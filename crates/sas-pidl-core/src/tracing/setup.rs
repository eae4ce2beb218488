//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging.
///
/// Reads `SAS_PIDL_LOG` for per-target log levels, e.g.
/// `SAS_PIDL_LOG=sas_pidl::client=debug,sas_pidl_core=warn`.
/// Falls back to `sas_pidl=info` if unset or invalid.
///
/// Idempotent; later calls are no-ops. A subscriber installed elsewhere
/// first is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SAS_PIDL_LOG")
            .unwrap_or_else(|_| EnvFilter::new("sas_pidl=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
