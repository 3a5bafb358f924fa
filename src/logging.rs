use crate::config::Config;
use std::fs::OpenOptions;
use std::sync::{Mutex, Once};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing (only once).
///
/// The terminal belongs to the UI, so events are only recorded when a
/// `log_file` is configured. `RUST_LOG` overrides the configured filter.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter.clone());

    TRACING_INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(EnvFilter::new(filter))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    });
    Ok(())
}
