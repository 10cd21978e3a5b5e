//! CLI argument parsing and command handler tests

use std::sync::Arc;

use clap::Parser;
use tempfile::TempDir;

use quicktab::cli::{Cli, Commands, ConfigCommands, ImageCommands};
use quicktab::config::StaticConfig;
use quicktab::interfaces::cli::{CliError, needs_store, run_cli_command, run_standalone_command};
use quicktab::services::{LinkSettings, LinkStore, Position};
use quicktab::storage::MemoryStore;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("quicktab").chain(args.iter().copied())).unwrap()
}

async fn empty_store() -> LinkStore {
    LinkStore::load(
        Arc::new(MemoryStore::new()),
        LinkSettings {
            seed_defaults: false,
            ..LinkSettings::default()
        },
    )
    .await
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_add() {
    let cli = parse(&[
        "--config", "custom.toml", "add", "Github", "https://github.com", "--kind", "simple",
        "--icon", "github", "--color", "#FFFFFF",
    ]);
    assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    assert_eq!(
        cli.command,
        Commands::Add {
            name: "Github".into(),
            url: "https://github.com".into(),
            kind: "simple".into(),
            icon: Some("github".into()),
            color: Some("#FFFFFF".into()),
        }
    );
}

#[test]
fn test_parse_add_defaults_to_automatic() {
    let cli = parse(&["add", "Mail", "https://mail.example.com"]);
    assert!(matches!(cli.command, Commands::Add { ref kind, icon: None, .. } if kind == "auto"));
}

#[test]
fn test_parse_move_and_global_config_after_subcommand() {
    let cli = parse(&["move", "0", "0", "1", "0", "--after", "-c", "x.toml"]);
    assert_eq!(cli.config.as_deref(), Some("x.toml"));
    assert_eq!(
        cli.command,
        Commands::Move {
            from_row: 0,
            from_link: 0,
            to_row: 1,
            to_link: 0,
            after: true,
        }
    );
}

#[test]
fn test_parse_nested_commands() {
    assert_eq!(
        parse(&["image", "add", "logo.png", "--name", "Logo"]).command,
        Commands::Image {
            action: ImageCommands::Add {
                file: "logo.png".into(),
                name: Some("Logo".into()),
            }
        }
    );
    assert_eq!(
        parse(&["config", "generate", "--force"]).command,
        Commands::Config {
            action: ConfigCommands::Generate {
                output_path: None,
                force: true,
            }
        }
    );
    assert_eq!(
        parse(&["search", "rust", "lifetimes"]).command,
        Commands::Search {
            query: vec!["rust".into(), "lifetimes".into()]
        }
    );
}

#[test]
fn test_parse_errors() {
    assert!(Cli::try_parse_from(["quicktab"]).is_err());
    assert!(Cli::try_parse_from(["quicktab", "remove", "a", "0"]).is_err());
    assert!(Cli::try_parse_from(["quicktab", "search"]).is_err());
}

#[test]
fn test_needs_store() {
    assert!(needs_store(&Commands::List { json: false }));
    assert!(!needs_store(&Commands::Search {
        query: vec!["x".into()]
    }));
}

// =============================================================================
// Handlers
// =============================================================================

#[tokio::test]
async fn test_add_move_remove_through_commands() {
    let config = StaticConfig::default();
    let mut store = empty_store().await;

    for args in [
        &["add", "A", "https://a.com"][..],
        &["add", "B", "https://b.com", "-k", "lucide", "-i", "cpu"][..],
        &["move", "0", "1", "0", "0"][..],
    ] {
        run_cli_command(parse(args).command, &mut store, &config)
            .await
            .unwrap();
    }
    assert_eq!(store.get_link(Position::new(0, 0)).unwrap().name, "B");

    run_cli_command(parse(&["remove", "0", "0"]).command, &mut store, &config)
        .await
        .unwrap();
    assert_eq!(store.grid().link_count(), 1);
}

#[tokio::test]
async fn test_command_errors_are_mapped() {
    let config = StaticConfig::default();
    let mut store = empty_store().await;

    let err = run_cli_command(parse(&["remove", "3", "3"]).command, &mut store, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));

    let err = run_cli_command(
        parse(&["add", "A", "https://a.com", "--kind", "sprite"]).command,
        &mut store,
        &config,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::ParseError(_)));

    let err = run_cli_command(
        parse(&["import", "/definitely/not/here.json"]).command,
        &mut store,
        &config,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::StorageError(_)));
}

#[tokio::test]
async fn test_export_then_import_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export.json");
    let path_str = path.to_string_lossy().into_owned();
    let config = StaticConfig::default();

    let mut source = empty_store().await;
    run_cli_command(parse(&["add", "A", "https://a.com"]).command, &mut source, &config)
        .await
        .unwrap();
    run_cli_command(parse(&["export", &path_str]).command, &mut source, &config)
        .await
        .unwrap();

    let mut target = empty_store().await;
    run_cli_command(parse(&["import", &path_str]).command, &mut target, &config)
        .await
        .unwrap();
    assert_eq!(target.grid(), source.grid());
}

#[tokio::test]
async fn test_image_commands() {
    let temp_dir = TempDir::new().unwrap();
    let image = temp_dir.path().join("logo.png");
    std::fs::write(&image, b"\x89PNG\r\n\x1a\n\x00\x00").unwrap();
    let config = StaticConfig::default();
    let mut store = empty_store().await;

    run_cli_command(
        parse(&["image", "add", &image.to_string_lossy()]).command,
        &mut store,
        &config,
    )
    .await
    .unwrap();

    let (id, uploaded) = store.images().iter().next().unwrap();
    assert_eq!(uploaded.name, "logo");
    let id = id.clone();

    run_cli_command(parse(&["image", "remove", &id]).command, &mut store, &config)
        .await
        .unwrap();
    let err = run_cli_command(parse(&["image", "remove", &id]).command, &mut store, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));
}

#[tokio::test]
async fn test_config_generate_writes_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("quicktab.toml");
    let config = StaticConfig::default();

    run_standalone_command(
        parse(&["config", "generate", &path.to_string_lossy(), "--force"]).command,
        &config,
    )
    .await
    .unwrap();

    let written: StaticConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written.links.row_capacity, 4);
}
