use glsync::presentation::cli::CliApp;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = CliApp::new();

    // RUST_LOG takes precedence over --verbose
    let default_level = if app.cli().verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("glsync={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!app.cli().no_color)
        .init();

    app.run().await
}
