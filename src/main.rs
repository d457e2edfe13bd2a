//! likes-harvest CLI
//!
//! Collects the images of your liked posts on X

use clap::Parser;
use likes_harvest::cli::{Cli, Runner};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = match Runner::from_cli(&cli) {
        Ok(runner) => runner,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    tokio::select! {
        result = runner.run() => {
            if let Err(e) = result {
                error!("{e}");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            std::process::exit(0);
        }
    }
}
