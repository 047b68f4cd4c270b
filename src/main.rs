use anyhow::Result;
use chfx::core::log::init_logging;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// File that receives a copy of all info and warning messages
    #[arg(long, global = true, default_value = "currency_converter.log")]
    log_file: PathBuf,

    /// API key for exchangerate-api.com, overrides the config file
    #[arg(long, env = "CHFX_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for chfx::AppCommand {
    fn from(cmd: Commands) -> chfx::AppCommand {
        match cmd {
            Commands::Serve { bind } => chfx::AppCommand::Serve { bind },
            Commands::Rates => chfx::AppCommand::Rates,
            Commands::Convert { amount, from, to } => {
                chfx::AppCommand::Convert { amount, from, to }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Run the web application (default)
    Serve {
        /// Address to listen on, overrides the config file
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Display the current CHF exchange rates
    Rates,
    /// Convert an amount between two currencies
    Convert {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        from: String,
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, Some(&cli.log_file))?;

    let command = cli.command.unwrap_or(Commands::Serve { bind: None });
    let result = match command {
        Commands::Setup => chfx::cli::setup::setup(),
        cmd => chfx::run_command(cmd.into(), cli.config_path.as_deref(), cli.api_key).await,
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
