use clap::Parser;
use tracing_subscriber::EnvFilter;

use a3s_policy_scan::cli::{Cli, Commands};
use a3s_policy_scan::config::ScanConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so `classify` output stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ScanConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Classify {
            file,
            section_id,
            document,
        } => {
            a3s_policy_scan::cli::classify::execute(
                &config,
                file.as_deref(),
                &section_id,
                document,
            )?;
        }
        Commands::Serve { host, port } => {
            a3s_policy_scan::cli::serve::execute(config, host, port).await?;
        }
    }

    Ok(())
}
