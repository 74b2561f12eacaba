use tweetpulse::{config::Config, init, logging::setup_logger, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::new()?;
    setup_logger(config.log_level)?;

    let state = init(&config).await?;
    run(state, &config).await?;

    Ok(())
}
