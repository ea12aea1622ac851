use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

/// Installs a trace-level logger for this crate, so the request and
/// response lines of `HttpTransport` show up in failing test output.
///
/// Integration tests share a process, so only the first call installs the
/// subscriber. `RUST_LOG` overrides the filter.
pub fn tracing_logger() {
    let info_env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("self=trace,eth_personal_rpc=trace"));
    let subscriber = FmtSubscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_env_filter(info_env_filter)
        .with_thread_ids(true)
        .finish();

    // this will fail if global default was already set.  this typically
    // happens because tests are run in the same process.  so we just ignore the
    // error.
    let _result = tracing::subscriber::set_global_default(subscriber);
}
