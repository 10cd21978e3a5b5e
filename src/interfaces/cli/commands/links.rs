//! Link management commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{LinkPatch, LinkStore, Position};
use crate::storage::{IconKind, Link, RawLink};

fn describe(link: &Link) -> String {
    let mut parts = vec![format!(
        "{} -> {}",
        link.name.cyan(),
        link.url.blue().underline()
    )];

    let kind = link.icon.kind();
    let icon = match link.icon.icon_ref() {
        Some(icon_ref) => format!("[{}: {}]", kind, icon_ref),
        None => format!("[{}]", kind),
    };
    parts.push(icon.dimmed().to_string());

    if let Some(color) = link.icon.color() {
        parts.push(color.dimmed().yellow().to_string());
    }
    parts.join(" ")
}

fn parse_kind(kind: &str) -> Result<IconKind, CliError> {
    kind.parse().map_err(CliError::ParseError)
}

pub fn list_links(store: &LinkStore, json: bool) -> Result<(), CliError> {
    let grid = store.grid();

    if json {
        let out = serde_json::to_string_pretty(grid)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize links: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if grid.is_empty() {
        println!("{} No quick links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Quick links:".bold().green());
    for (row_idx, row) in grid.rows().iter().enumerate() {
        println!();
        println!("  {}", format!("Row {}", row_idx).bold());
        for (link_idx, link) in row.iter().enumerate() {
            let pos = Position::new(row_idx, link_idx);
            println!("  {} {}", pos.to_string().magenta(), describe(link));
        }
    }
    println!();
    println!(
        "{} Total {} links in {} rows",
        "ℹ".bold().blue(),
        grid.link_count().to_string().green(),
        grid.row_count().to_string().green()
    );
    Ok(())
}

pub async fn add_link(
    store: &mut LinkStore,
    name: String,
    url: String,
    kind: String,
    icon: Option<String>,
    color: Option<String>,
) -> Result<(), CliError> {
    let kind = parse_kind(&kind)?;
    let raw = RawLink {
        name,
        url,
        kind: kind.to_string(),
        icon_ref: icon,
        color,
    };

    let pos = store.add_link(raw).await?;
    let link = store
        .get_link(pos)
        .ok_or_else(|| CliError::CommandError(format!("Link vanished from {}", pos)))?;

    println!(
        "{} Added link at {}: {}",
        "✓".bold().green(),
        pos.to_string().magenta(),
        describe(link)
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn update_link(
    store: &mut LinkStore,
    row: usize,
    link: usize,
    name: Option<String>,
    url: Option<String>,
    kind: Option<String>,
    icon: Option<String>,
    color: Option<String>,
) -> Result<(), CliError> {
    let patch = LinkPatch {
        name,
        url,
        kind: kind.as_deref().map(parse_kind).transpose()?,
        icon_ref: icon,
        color,
    };

    let pos = Position::new(row, link);
    let updated = store.update_link(pos, patch).await?;

    println!(
        "{} Updated link at {}: {}",
        "✓".bold().green(),
        pos.to_string().magenta(),
        describe(&updated)
    );
    Ok(())
}

pub async fn remove_link(store: &mut LinkStore, row: usize, link: usize) -> Result<(), CliError> {
    let pos = Position::new(row, link);
    let removed = store.remove_link(pos).await?;

    println!(
        "{} Removed link: {}",
        "✓".bold().green(),
        removed.name.cyan()
    );
    Ok(())
}

pub async fn move_link(
    store: &mut LinkStore,
    from: (usize, usize),
    to: (usize, usize),
    after: bool,
) -> Result<(), CliError> {
    let from = Position::new(from.0, from.1);
    let to = Position::new(to.0, to.1);
    let name = store
        .get_link(from)
        .map(|link| link.name.clone())
        .unwrap_or_default();

    store.move_link(from, to, after).await?;

    println!(
        "{} Moved {} {} {}",
        "✓".bold().green(),
        name.cyan(),
        if after { "after" } else { "before" },
        to.to_string().magenta()
    );
    Ok(())
}

pub async fn clear_links(store: &mut LinkStore, images: bool) -> Result<(), CliError> {
    let count = store.grid().link_count();
    store.clear_all().await;
    println!(
        "{} Removed {} links",
        "✓".bold().green(),
        count.to_string().green()
    );

    if images {
        let image_count = store.images().len();
        store.clear_uploaded_images().await;
        println!(
            "{} Removed {} uploaded images",
            "✓".bold().green(),
            image_count.to_string().green()
        );
    }
    Ok(())
}
