use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Filter directives, e.g. `CLOUDCTL_LOG=cloudctl=trace`. Takes precedence
/// over `--verbose`.
pub const LOG_ENV: &str = "CLOUDCTL_LOG";

/// Installs a stderr subscriber: warnings only by default, debug with
/// `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    // A subscriber may already be installed when run from tests.
    let _ = tracing_subscriber::registry().with(layer).try_init();
}
