//! Command-line interface definitions using clap
//!
//! Positions are zero-based `ROW LINK` pairs, as printed by `quicktab list`.

use clap::{Parser, Subcommand};

/// quicktab - quick links for your new tab page
#[derive(Parser, Debug)]
#[command(name = "quicktab")]
#[command(version)]
#[command(about = "Manage the quick-link grid of a new tab page", long_about = None)]
pub struct Cli {
    /// Configuration file (default: quicktab.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all links, row by row
    List {
        /// Output the raw grid as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a link to the end of the grid
    Add {
        /// Display name
        name: String,

        /// Target URL
        url: String,

        /// Icon kind (auto, simple, lucide, local, upload)
        #[arg(long, short = 'k', default_value = "auto")]
        kind: String,

        /// Icon reference: icon name, file name or uploaded image id
        #[arg(long, short = 'i')]
        icon: Option<String>,

        /// Icon color for vector icons
        #[arg(long)]
        color: Option<String>,
    },

    /// Update fields of an existing link
    Update {
        row: usize,
        link: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long, short = 'k')]
        kind: Option<String>,

        #[arg(long, short = 'i')]
        icon: Option<String>,

        /// New color, pass "" to clear
        #[arg(long)]
        color: Option<String>,
    },

    /// Remove a link
    Remove { row: usize, link: usize },

    /// Move a link next to another position
    Move {
        from_row: usize,
        from_link: usize,
        to_row: usize,
        to_link: usize,

        /// Insert after the target instead of before it
        #[arg(long)]
        after: bool,
    },

    /// Export links and uploaded images to JSON
    Export {
        /// Output file path (default: stdout)
        file_path: Option<String>,
    },

    /// Import links from an export file, replacing the current grid
    Import {
        /// Input file path
        file_path: String,
    },

    /// Remove every link
    Clear {
        /// Also delete uploaded images
        #[arg(long)]
        images: bool,
    },

    /// Manage uploaded icon images
    Image {
        #[command(subcommand)]
        action: ImageCommands,
    },

    /// Show how a link's icon resolves
    Icon { row: usize, link: usize },

    /// Print the web search URL for a query
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Uploaded image commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ImageCommands {
    /// Upload an image file
    Add {
        /// Image file path
        file: String,

        /// Display name (default: file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Delete an uploaded image
    Remove { id: String },

    /// List uploaded images
    List,

    /// Delete all uploaded images
    Clear,
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: quicktab.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
