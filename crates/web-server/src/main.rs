use anyhow::Context;
use web_server::AppState;

// Entry point for `cargo run -p web-server`: serve the dashboard with settings from
// `config.toml` and the environment.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configuration::load_config().context("Failed to load configuration")?;
    let _guard = configuration::init_tracing(&settings.logging)?;

    let bundle = bundle::global()
        .get_or_load(&settings.data.bundle_path)
        .with_context(|| format!("Failed to load data bundle from {}", settings.data.bundle_path.display()))?;

    let addr = settings.server.socket_addr()?;
    web_server::run_server(addr, AppState { bundle, views: settings.views }).await
}
