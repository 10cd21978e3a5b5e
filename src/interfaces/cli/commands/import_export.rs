//! Import and export commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkStore;

pub async fn export_links(store: &LinkStore, file_path: Option<String>) -> Result<(), CliError> {
    let snapshot = store.export();
    let content = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| CliError::CommandError(format!("Failed to serialize export: {}", e)))?;

    let Some(path) = file_path else {
        println!("{}", content);
        return Ok(());
    };

    tokio::fs::write(&path, content).await.map_err(|e| {
        CliError::StorageError(format!("Failed to write export file '{}': {}", path, e))
    })?;

    println!(
        "{} Exported {} links and {} images to: {}",
        "✓".bold().green(),
        snapshot.links.link_count().to_string().green(),
        store.images().len().to_string().green(),
        path.cyan()
    );
    Ok(())
}

pub async fn import_links(store: &mut LinkStore, file_path: String) -> Result<(), CliError> {
    let content = tokio::fs::read_to_string(&file_path).await.map_err(|e| {
        CliError::StorageError(format!("Failed to read import file '{}': {}", file_path, e))
    })?;

    let summary = store.import_str(&content).await?;

    println!(
        "{} Imported {} links in {} rows from: {} (format {})",
        "✓".bold().green(),
        summary.links.to_string().green(),
        summary.rows.to_string().green(),
        file_path.cyan(),
        summary.version
    );
    match summary.images {
        Some(count) => println!(
            "{} Replaced uploaded images ({} total)",
            "ℹ".bold().blue(),
            count.to_string().green()
        ),
        None => println!(
            "{} File has no uploaded images, existing images kept",
            "ℹ".bold().blue()
        ),
    }
    Ok(())
}
