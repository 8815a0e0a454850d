//! glfind - Main entry point

use clap::Parser;
use log::{debug, info};

use glfind::{run_command, Cli, GitlabClient, GitlabError, Resolver};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting glfind v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: url={}, page_size={}, batch={}, command={:?}",
        cli.url, cli.page_size, cli.batch, cli.command
    );

    let token = cli.token.clone().filter(|t| !t.is_empty()).ok_or_else(|| {
        GitlabError::Config(format!(
            "no access token provided; pass --token or set {}",
            glfind::config::env::TOKEN
        ))
    })?;

    let client = GitlabClient::new(token, &cli.url);
    let resolver = Resolver::new(client).with_page_size(cli.page_size);

    run_command(&resolver, &cli).await?;

    info!("Completed successfully");
    Ok(())
}
