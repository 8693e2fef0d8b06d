pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::HistoryStore;
use crate::core::config::AppConfig;
use crate::providers::ExchangeRateApiProvider;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: String,
        from: Option<String>,
        to: Option<String>,
    },
    Rates {
        base: Option<String>,
    },
    Currencies,
    History {
        currency: Option<String>,
        limit: Option<usize>,
    },
    ClearHistory,
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = ExchangeRateApiProvider::new(&config.provider.base_url);
    let storage = store::open_storage(&config.data_path()?);
    let history = HistoryStore::new(storage);

    match command {
        AppCommand::Convert { amount, from, to } => {
            let from = normalize_code(from.as_deref().unwrap_or(&config.default_from));
            let to = normalize_code(to.as_deref().unwrap_or(&config.default_to));
            cli::convert::run(&provider, &history, &amount, &from, &to).await
        }
        AppCommand::Rates { base } => {
            let base = normalize_code(base.as_deref().unwrap_or(&config.default_from));
            cli::rates::run(&provider, &base).await
        }
        AppCommand::Currencies => cli::currencies::run(&provider).await,
        AppCommand::History { currency, limit } => {
            let currency = currency.as_deref().map(normalize_code);
            cli::history::run(&history, currency.as_deref(), limit)
        }
        AppCommand::ClearHistory => cli::history::clear(&history),
    }
}
