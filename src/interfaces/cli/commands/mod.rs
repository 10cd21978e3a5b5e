//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod icon;
mod images;
mod import_export;
mod links;
mod search;

pub use config_gen::config_generate;
pub use icon::show_icon;
pub use images::run_image_command;
pub use import_export::{export_links, import_links};
pub use links::{add_link, clear_links, list_links, move_link, remove_link, update_link};
pub use search::search;
