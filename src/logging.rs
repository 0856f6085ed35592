//! Diagnostic logging.
//!
//! The parsers emit `tracing` events; this installs the stderr subscriber
//! that renders them for the command-line tool.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::QuickTaskError;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "QUICKTASK_LOG";

/// Pick the filter directive: `QUICKTASK_LOG`, else `-v` count, else config.
#[must_use]
pub fn filter_directive(env: Option<&str>, verbose: u8, configured: &str) -> String {
    if let Some(env) = env.map(str::trim).filter(|v| !v.is_empty()) {
        return env.to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global stderr subscriber.
///
/// # Errors
///
/// Returns `QuickTaskError::Config` if the directive is not a valid filter.
pub fn init(verbose: u8, configured: &str) -> Result<(), QuickTaskError> {
    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env.as_deref(), verbose, configured);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| QuickTaskError::Config(format!("invalid log filter '{directive}': {e}")))?;

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init();

    Ok(())
}
