//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use portico_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "portico")]
#[command(version)]
#[command(about = "Terminal front-end for the auth service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Submit a login without opening the auth page
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Submit a signup without opening the auth page
    Signup {
        /// Desired username
        #[arg(long)]
        username: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // default to the interactive auth page
    let Some(command) = cli.command else {
        // The TUI owns the terminal; logs go to a file. The guard must
        // outlive the page so buffered lines are flushed on exit.
        let _guard = logging::init_file(&config::paths::logs_dir())?;
        return portico_tui::run_auth_page(&config).await;
    };

    match command {
        Commands::Login { email, password } => {
            logging::init_stderr();
            commands::auth::login(&config, email, password).await
        }
        Commands::Signup {
            username,
            email,
            password,
        } => {
            logging::init_stderr();
            commands::auth::signup(&config, username, email, password).await
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
