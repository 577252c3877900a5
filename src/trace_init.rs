#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::OnceLock;

#[cfg(feature = "trace")]
use tracing_appender::non_blocking::WorkerGuard;

/// Held for the life of the process so buffered lines keep flushing.
#[cfg(feature = "trace")]
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "aido_engine=debug,aido_core=debug,aido_session=debug";

/// Write JSON-lines traces to `log_dir/aido-trace.jsonl`.
///
/// Only the first call installs a subscriber. `RUST_LOG` overrides the
/// default filter.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    GUARD.get_or_init(|| {
        let appender = tracing_appender::rolling::never(log_dir, "aido-trace.jsonl");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        // The host may already own the global dispatcher.
        if tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init()
            .is_ok()
        {
            tracing::debug!(dir = %log_dir.display(), "trace log opened");
        }
        guard
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
