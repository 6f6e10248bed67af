//! Interactive menu shell around the ledger services.

pub mod io;
pub mod output;
pub mod shell;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigManager;
use crate::errors::{ConfigError, StorageError};
use crate::services::ServiceError;
use crate::storage::{CsvStorage, LedgerStore};

use self::io::{InteractivePrompts, ScriptPrompts};
use self::output::OutputPreferences;
use self::shell::Shell;

/// Setting this variable switches the shell to line-based answers from stdin.
pub const SCRIPT_ENV: &str = "POCKET_LEDGER_CLI_SCRIPT";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        CliError::Service(ServiceError::Storage(err))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// Ledger table to use instead of the configured one.
    pub ledger_file: Option<PathBuf>,
}

pub fn run_cli(options: CliOptions) -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let manager = ConfigManager::new()?;
    let config = manager.load()?;

    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_output || mode == CliMode::Script,
    });

    let path = manager.ledger_path(&config, options.ledger_file.as_deref());
    let store = CsvStorage::new(path);
    store.initialize()?;
    tracing::info!(path = %store.path().display(), ?mode, "ledger shell starting");

    let format = config.currency_format();
    match mode {
        CliMode::Interactive => Shell::new(&store, InteractivePrompts::new(), format).run(),
        CliMode::Script => {
            let stdin = std::io::stdin();
            Shell::new(&store, ScriptPrompts::new(stdin.lock()), format).run()
        }
    }
}
