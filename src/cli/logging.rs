//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays clean for report lines and listings.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::GlobalOpts;

/// Environment variable holding a filter directive (e.g. `debug`, `bomplan=trace`)
pub const LOG_ENV: &str = "BOMPLAN_LOG";

/// Pick the default level from the global flags
pub fn level_for(opts: &GlobalOpts) -> Level {
    if opts.verbose {
        Level::DEBUG
    } else if opts.quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Install the stderr subscriber; `BOMPLAN_LOG` then `RUST_LOG` override the flags
pub fn init_logging(opts: &GlobalOpts) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            let level = level_for(opts).as_str().to_lowercase();
            EnvFilter::new(format!("bomplan={}", level))
        });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
