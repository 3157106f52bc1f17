use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod commands;
mod config;
mod setup;

use cli::{Cli, Command};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Exercise CLI Entry Point
///
/// Parses the command line, wires dependencies, and runs the requested command.
/// - config/: Backend location and session seed
/// - setup/: Dependency injection
/// - commands/: One handler per subcommand
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter; toasts own stdout
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(config);

    // 5. Run command
    match cli.command {
        Command::Delete { ids } => container.delete_command.run(ids).await?,
    }

    Ok(())
}
