//! Vitrine CLI - brand-site preview generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Brand-site preview generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the site description file
    #[arg(short, long, default_value = "site.toml")]
    site: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter site.toml in the current directory
    Init {
        /// Overwrite an existing site file
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the live preview server
    Preview {
        /// Port to listen on
        #[arg(short, long, default_value = "7777")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Generate the site and write it as an .html file
    Export {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Skip stylesheet minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Serve an exported site directory
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = "dist")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Preview { port, no_open } => {
            commands::preview::run(cli.site, port, !no_open).await?;
        }
        Commands::Export { output, no_minify } => {
            commands::export::run(cli.site, output, !no_minify).await?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(port, dir).await?;
        }
    }

    Ok(())
}
