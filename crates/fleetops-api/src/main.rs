use fleetops_api::setup;
use fleetops_core::Config;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    let (_state, router) = setup::initialize_app(config.clone()).await?;
    setup::server::start_server(&config, router).await?;

    Ok(())
}
