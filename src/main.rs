use anyhow::Result;
use clap::{Parser, Subcommand};

/// mulyam - Mulyam Jewels website
#[derive(Parser)]
#[command(name = "mulyam")]
#[command(about = "Fashion jewelry for women, kids and pets", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Write robots.txt, sitemap.xml and the preview images to a directory
    Export {
        /// Output directory
        #[arg(long, default_value = "public")]
        out: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = mulyam::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mulyam::observability::init_observability("mulyam", env!("CARGO_PKG_VERSION"), &config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => mulyam::cli::serve(config, host, port).await,
        Commands::Export { out } => mulyam::cli::export(config, out).await,
    }
}
