use eyre::Result;

use hrportal_gateway::HttpBackend;
use hrportal_terminal::config;

mod app;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = config::load_config()?;
    if !config::has_config()
        && let Err(e) = config::save_config(&config)
    {
        tracing::warn!(error = %e, "could not write default config");
    }

    let backend = HttpBackend::new(&config.api_base)?;
    tracing::debug!(api_base = %backend.base_url(), "backend configured");

    app::App::new(&backend, &config)?.run().await
}

/// Logs go to stderr so they never interleave with the prompt on stdout.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("HRPORTAL_LOG_JSON").is_ok_and(|v| v == "1") {
        builder.json().init();
    } else {
        builder.init();
    }
}
