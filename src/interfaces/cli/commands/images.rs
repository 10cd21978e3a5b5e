//! Uploaded image commands

use std::path::Path;

use colored::Colorize;

use crate::cli::ImageCommands;
use crate::interfaces::cli::CliError;
use crate::services::LinkStore;

pub async fn run_image_command(
    store: &mut LinkStore,
    action: ImageCommands,
) -> Result<(), CliError> {
    match action {
        ImageCommands::Add { file, name } => {
            let payload = tokio::fs::read(&file).await.map_err(|e| {
                CliError::StorageError(format!("Failed to read image '{}': {}", file, e))
            })?;

            let name = name.unwrap_or_else(|| {
                Path::new(&file)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });
            let id = store.add_uploaded_image(&name, &payload).await?;

            println!(
                "{} Uploaded image {} as {}",
                "✓".bold().green(),
                name.cyan(),
                id.magenta()
            );
            println!(
                "{} Use it with: quicktab add <NAME> <URL> --kind upload --icon {}",
                "ℹ".bold().blue(),
                id
            );
            Ok(())
        }

        ImageCommands::Remove { id } => match store.remove_uploaded_image(&id).await {
            Some(image) => {
                println!(
                    "{} Removed uploaded image: {} ({})",
                    "✓".bold().green(),
                    image.name.cyan(),
                    id.magenta()
                );
                Ok(())
            }
            None => Err(CliError::CommandError(format!(
                "Uploaded image does not exist: {}",
                id
            ))),
        },

        ImageCommands::List => {
            let images = store.images();
            if images.is_empty() {
                println!("{} No uploaded images", "ℹ".bold().blue());
                return Ok(());
            }

            println!("{}", "Uploaded images:".bold().green());
            for (id, image) in images {
                println!(
                    "  {} {} {}",
                    id.magenta(),
                    image.name.cyan(),
                    format!(
                        "({} bytes, {})",
                        image.data.len(),
                        image.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
                    )
                    .dimmed()
                );
            }
            println!(
                "{} Total {} images",
                "ℹ".bold().blue(),
                images.len().to_string().green()
            );
            Ok(())
        }

        ImageCommands::Clear => {
            let count = store.images().len();
            store.clear_uploaded_images().await;
            println!(
                "{} Removed {} uploaded images",
                "✓".bold().green(),
                count.to_string().green()
            );
            Ok(())
        }
    }
}
