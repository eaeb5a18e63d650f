use anyhow::Result;
use clap::Parser;
use ticklist::{cli::Cli, config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.init_config_path() {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;

    let memory = logger::Logger::new();
    logger::init(&config.logging, memory.clone())?;

    ui::run_app(config, memory).await?;

    Ok(())
}
