//! CLI mode
//!
//! Loads the link store only for commands that need it, then delegates to
//! the command handlers.

use crate::cli::Commands;
use crate::config::get_config;
use crate::interfaces::cli::{self, CliError};
use crate::runtime::lifetime::startup::prepare_store;

/// Run CLI mode
///
/// Reads the global configuration, see [`crate::config::init_config`].
pub async fn run_cli(cmd: Commands) -> Result<(), CliError> {
    let config = get_config();
    if !cli::needs_store(&cmd) {
        return cli::run_standalone_command(cmd, &config).await;
    }

    let mut store = prepare_store(&config)
        .await
        .map_err(|e| CliError::StorageError(format!("{:#}", e)))?;
    cli::run_cli_command(cmd, &mut store, &config).await
}
