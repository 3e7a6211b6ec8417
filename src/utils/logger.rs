use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` takes precedence over `level`, which takes precedence over `verbose`.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let fallback = match level {
        Some(level) => format!("box_demo={}", level.to_ascii_lowercase()),
        None if verbose => "box_demo=debug,info".to_string(),
        None => "box_demo=info".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
