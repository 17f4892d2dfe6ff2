use crate::error::{GreeterError, GreeterResult};
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber: warnings and errors go to stderr, and
/// [`ErrorLayer`] lets [`GreeterError`] capture span traces.
///
/// Stdout is left alone since it carries the program's actual output.
pub fn init_tracing() -> GreeterResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::WARN),
        )
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|err| {
            Box::new(GreeterError::message(err.to_string()).context("Failed to initialize tracing"))
        })
}
