use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ranktrack::cli::{
    handle_account_command, handle_check_command, handle_section_command, AccountCommands,
    SectionCommands,
};
use ranktrack::client::ApiClient;
use ranktrack::config::{paths::TrackerPaths, settings::Settings};
use ranktrack::server::run_server;
use ranktrack::storage::{initialize_storage, Storage};
use ranktrack::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "ranktrack",
    version,
    about = "Terminal-based Valorant account and rank tracker",
    long_about = "ranktrack keeps a roster of Valorant accounts with their login \
                  credentials and current competitive ranks. A local server owns \
                  the data and refreshes ranks in the background; the TUI and the \
                  one-shot commands talk to it over HTTP."
)]
struct Cli {
    /// Tracker server URL for client commands
    #[arg(long, global = true, env = "RANKTRACK_SERVER_URL")]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Run the tracker server
    Serve {
        /// Port to listen on (overrides the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Section management commands
    #[command(subcommand)]
    Section(SectionCommands),

    /// Look up a player's current rank
    Check {
        /// In-game name
        username: String,
        /// Riot id tag (the part after '#')
        hashtag: String,
        /// Region the account plays in (defaults to the configured region)
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(url) = cli.server_url {
        settings.server_url = url;
    }

    match cli.command {
        Some(Commands::Tui) => {
            let client = api_client(&settings)?;
            run_tui(client, &settings)?;
        }
        Some(Commands::Serve { port }) => {
            init_tracing();
            if let Some(port) = port {
                settings.listen_port = port;
            }

            let storage = Storage::new(paths)?;
            initialize_storage(&storage)?;
            actix_web::rt::System::new().block_on(run_server(storage, settings))?;
        }
        Some(Commands::Account(cmd)) => {
            let client = api_client(&settings)?;
            handle_account_command(&client, &settings, cmd)?;
        }
        Some(Commands::Section(cmd)) => {
            let client = api_client(&settings)?;
            handle_section_command(&client, cmd)?;
        }
        Some(Commands::Check {
            username,
            hashtag,
            region,
        }) => {
            let client = api_client(&settings)?;
            handle_check_command(&client, &settings, &username, &hashtag, region)?;
        }
        Some(Commands::Config) => {
            println!("ranktrack Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Server URL:       {}", settings.server_url);
            println!(
                "  Listen address:   {}:{}",
                settings.listen_addr, settings.listen_port
            );
            println!("  Lookup base URL:  {}", settings.lookup_base_url);
            println!("  Default region:   {}", settings.default_region);
            println!("  Refresh interval: {}s", settings.refresh_interval_secs);
        }
        None => {
            println!("ranktrack - Terminal-based Valorant account and rank tracker");
            println!();
            println!("Run 'ranktrack --help' for usage information.");
            println!("Run 'ranktrack serve' to start the tracker server.");
            println!("Run 'ranktrack tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

/// Blocking client for the TUI and the one-shot commands
fn api_client(settings: &Settings) -> Result<ApiClient> {
    let timeout = Duration::from_secs(settings.request_timeout_secs);
    Ok(ApiClient::new(settings.server_url.clone(), timeout)?)
}

/// Structured logging for server mode
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
