//! Web search command

use colored::Colorize;

use crate::config::SearchConfig;
use crate::interfaces::cli::CliError;
use crate::services::build_search_url;

pub fn search(query: &[String], config: &SearchConfig) -> Result<(), CliError> {
    let query = query.join(" ");
    match build_search_url(&query, &config.engine_url) {
        Some(url) => {
            println!("{}", url.blue().underline());
            Ok(())
        }
        None => {
            println!("{} Empty query, nothing to search", "ℹ".bold().blue());
            Ok(())
        }
    }
}
