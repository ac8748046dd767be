use coderfest_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, KV store, storage, routes)
    let (_state, router) = coderfest_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    coderfest_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
