use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global JSON subscriber.
///
/// `BACKEND_LOG` takes precedence over `RUST_LOG` so deployments can tune
/// this service without touching the host-wide filter.
pub fn init_tracing() {
    let env_filter = std::env::var("BACKEND_LOG")
        .map(EnvFilter::new)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
