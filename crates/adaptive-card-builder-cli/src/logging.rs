use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "CARD_BUILDER_LOG";

/// Install a stderr subscriber. Level comes from `CARD_BUILDER_LOG`
/// (e.g. `CARD_BUILDER_LOG=adaptive_card_builder=debug`), default `warn`.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
}
