use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_booking::{
    config::Config,
    controllers::{self, Console},
    AppState,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Логи в stderr, чтобы не мешать меню в stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(environment = %config.app.environment, "Starting cinema booking counter");

    let mut state = AppState::new(config)?;
    let mut counter = state.counter()?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    controllers::run(&mut counter, &mut console)?;

    info!("Counter closed");
    Ok(())
}
