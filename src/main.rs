use clap::Parser;
use colored::*;
use ocean_twin_client::cli::{App, Cli};
use ocean_twin_client::error::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let app = match App::new() {
        Ok(app) => {
            info!("Ocean data client initialized.");
            app
        },
        Err(e) => {
            error!("Failed to initialize client: {:?}", e);
            println!("{}", "Error: Failed to initialize client. Check logs.".red());
            return Err(e);
        },
    };

    if let Err(e) = app.run(cli).await {
        error!("Command execution failed: {:?}", e);
        println!("{} {}", "Error executing command:".red(), e.to_string().red());
        return Err(e);
    }

    Ok(())
}
