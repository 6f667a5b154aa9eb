//! File-based logging initialization

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// Writes daily-rotated log files to `<data_dir>/logs/cartlink.log` with
/// non-blocking writes so logging never stalls the event loop. The filter
/// comes from `CARTLINK_LOG` (falling back to `client=info,warn`).
///
/// Returns the appender guard; dropping it flushes and stops the writer,
/// so the caller keeps it alive for the process lifetime. `None` means
/// logging could not be set up, which is reported on stderr and otherwise
/// non-fatal.
pub fn init(data_dir: &Path) -> Option<WorkerGuard> {
    let log_dir = data_dir.join("logs");
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "cartlink.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env("CARTLINK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("client=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Some(guard)
}
