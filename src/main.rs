use clap::Parser;
use tracing::{debug, error};

use smartchef::app::Config;
use smartchef::cli::{self, favorites, generate, output, session, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    debug!(config = %cli.config.display(), "smartchef starting");

    let store = cli::open_store(&config);

    let result = match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => session::execute(&store).await,
        Commands::Generate(args) => generate::execute(&store, &args).await,
        Commands::Favorites(args) => favorites::execute_favorites(&store, &args),
        Commands::Preferences => favorites::execute_preferences(&store, &config),
    };

    store.flush().await;

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
