use super::constants::{ENV_LOG, LOG_TARGET};

/// Default filter when neither `DECIMAL_LOG` nor `RUST_LOG` is set
pub fn default_filter() -> String {
    format!("info,{}=info", LOG_TARGET)
}

/// Install the global tracing subscriber. Call once, from the binary.
pub fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_filter());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
