//! CLI interface module
//!
//! Command handlers receive the loaded [`LinkStore`] and print their results.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::QuicktabError;
use crate::services::LinkStore;
use commands::{
    add_link, clear_links, config_generate, export_links, import_links, list_links, move_link,
    remove_link, run_image_command, search, show_icon, update_link,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<QuicktabError> for CliError {
    fn from(err: QuicktabError) -> Self {
        if err.is_rejection() {
            CliError::CommandError(err.to_string())
        } else {
            CliError::StorageError(err.to_string())
        }
    }
}

/// Whether `cmd` can run without loading the link store
pub fn needs_store(cmd: &Commands) -> bool {
    !matches!(cmd, Commands::Config { .. } | Commands::Search { .. })
}

/// Run a command that does not touch the link store
pub async fn run_standalone_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force).await,
        Commands::Search { query } => search(&query, &config.search),
        other => Err(CliError::CommandError(format!(
            "Command needs the link store: {:?}",
            other
        ))),
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(
    cmd: Commands,
    store: &mut LinkStore,
    config: &StaticConfig,
) -> Result<(), CliError> {
    match cmd {
        Commands::List { json } => list_links(store, json),

        Commands::Add {
            name,
            url,
            kind,
            icon,
            color,
        } => add_link(store, name, url, kind, icon, color).await,

        Commands::Update {
            row,
            link,
            name,
            url,
            kind,
            icon,
            color,
        } => update_link(store, row, link, name, url, kind, icon, color).await,

        Commands::Remove { row, link } => remove_link(store, row, link).await,

        Commands::Move {
            from_row,
            from_link,
            to_row,
            to_link,
            after,
        } => move_link(store, (from_row, from_link), (to_row, to_link), after).await,

        Commands::Export { file_path } => export_links(store, file_path).await,

        Commands::Import { file_path } => import_links(store, file_path).await,

        Commands::Clear { images } => clear_links(store, images).await,

        Commands::Image { action } => run_image_command(store, action).await,

        Commands::Icon { row, link } => show_icon(store, row, link, &config.icons).await,

        standalone @ (Commands::Search { .. } | Commands::Config { .. }) => {
            run_standalone_command(standalone, config).await
        }
    }
}
