use clap::Parser;

use quicktab::cli::Cli;
use quicktab::config::init_config;
use quicktab::runtime::modes::run_cli;
use quicktab::system::init_logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = init_config(cli.config.as_deref());
    let log_guard = init_logging(&config.logging);

    if let Err(e) = run_cli(cli.command).await {
        eprintln!("{}", e.format_colored());
        drop(log_guard);
        std::process::exit(1);
    }
}
