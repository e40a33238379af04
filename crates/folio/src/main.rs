//! `folio` turns a portfolio's project and certificate lists into a static page.
//!
//! Content comes from `data/projects.json` and `data/certificates.json` next to
//! `folio.toml`, or from a remote base URL. A list that cannot be loaded is
//! replaced with the built-in one, so a build always produces a full page.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio", version)]
#[command(about = "Build a portfolio page from project and certificate JSON")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site config; relative paths inside it resolve from its directory
    #[arg(short, long, default_value = "folio.toml", global = true)]
    config: PathBuf,

    /// Log fetch, fallback and render details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write folio.toml, sample data/*.json and a static/ directory
    Init {
        /// Replace files that already exist
        #[arg(short, long)]
        yes: bool,
    },

    /// Serve the page and push card updates when data/*.json changes
    Dev {
        #[arg(short, long, default_value_t = 7777)]
        port: u16,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Leave the browser closed
        #[arg(long)]
        no_open: bool,
    },

    /// Render index.html, stylesheets and static files
    Build {
        /// Write here instead of the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the generated CSS readable
        #[arg(long)]
        no_minify: bool,
    },

    /// Preview an already built site
    Serve {
        #[arg(short, long, default_value_t = 4000)]
        port: u16,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Built site to serve
        #[arg(short, long, default_value = "dist")]
        dir: PathBuf,
    },
}

/// Log level comes from `RUST_LOG` when set, otherwise from `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init { yes } => commands::init::run(&cli.config, yes).await,
        Commands::Dev {
            port,
            host,
            no_open,
        } => commands::dev::run(&cli.config, host, port, !no_open).await,
        Commands::Build { output, no_minify } => {
            let minify = no_minify.then_some(false);
            commands::build::run(&cli.config, output, minify).await
        }
        Commands::Serve { port, host, dir } => commands::serve::run(&host, port, dir).await,
    }
}
