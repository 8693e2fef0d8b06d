use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::cli::{setup::setup, ui};
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                fxconv::AppCommand::Convert { amount, from, to }
            }
            Commands::Rates { base } => fxconv::AppCommand::Rates { base },
            Commands::Currencies => fxconv::AppCommand::Currencies,
            Commands::History { currency, limit } => {
                fxconv::AppCommand::History { currency, limit }
            }
            Commands::ClearHistory => fxconv::AppCommand::ClearHistory,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Source currency code (defaults to config)
        #[arg(short, long)]
        from: Option<String>,
        /// Target currency code (defaults to config)
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Display quick reference rates for popular currencies
    Rates {
        /// Base currency code (defaults to config)
        #[arg(short, long)]
        base: Option<String>,
    },
    /// List supported currencies
    Currencies,
    /// Display conversion history
    History {
        /// Only show conversions involving this currency
        #[arg(long)]
        currency: Option<String>,
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Remove all conversion history
    ClearHistory,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
        eprintln!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error));
        std::process::exit(1);
    }
    result
}
