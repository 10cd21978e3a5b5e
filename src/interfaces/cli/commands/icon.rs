//! Icon resolution command

use colored::Colorize;

use crate::config::IconsConfig;
use crate::interfaces::cli::CliError;
use crate::services::{IconResolver, IconSource, LinkStore, Position};

pub async fn show_icon(
    store: &LinkStore,
    row: usize,
    link: usize,
    config: &IconsConfig,
) -> Result<(), CliError> {
    let pos = Position::new(row, link);
    let link = store
        .get_link(pos)
        .ok_or_else(|| CliError::CommandError(format!("No link at position {}", pos)))?;

    let resolver = IconResolver::from_config(config);
    let source = resolver.resolve(link, store.images()).await;

    let marker = if source.is_renderable() {
        "✓".bold().green()
    } else {
        "⚠".bold().yellow()
    };
    println!(
        "{} {} ({}): {}",
        marker,
        link.name.cyan(),
        link.icon.kind(),
        source
    );

    if let IconSource::Svg { markup } = &source {
        println!("{}", markup.dimmed());
    }
    Ok(())
}
