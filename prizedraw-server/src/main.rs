mod api;
mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::ServerConfig;
use prizedraw_core::{participants, DrawError, DrawService};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "prizedraw")]
#[command(about = "Prize draw control room - shuffled reveal with undo and reset")]
#[command(version)]
struct Cli {
    /// Directory holding the participants file and the draw log
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON file with prize bands, grand winners and file names
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP draw server
    Serve {
        /// Address to listen on
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Validate participants and show the prize layout
    Check,
    /// Print a sample shuffled sequence without touching the log
    Preview {
        /// Only show the first N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_directives(log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        match e {
            DrawError::MalformedRecord { record, field } => {
                eprintln!("Error: participant record #{} has no '{}'", record, field);
                eprintln!("Every row needs a non-empty name and urc");
            }
            DrawError::InsufficientPool { need, available } => {
                eprintln!("Error: not enough participants for the ranked prizes");
                eprintln!("Need: {}, Available: {}", need, available);
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> prizedraw_core::Result<()> {
    let server_config = ServerConfig::resolve(cli.data_dir, cli.config.as_deref())?;
    tracing::debug!("Using data directory {}", server_config.data_dir.display());

    if let Commands::Check = cli.command {
        // reports a short pool instead of refusing it
        let pool = participants::load_csv(&server_config.draw.participants_path)?;
        return commands::handle_check_command(&server_config.draw, &pool);
    }

    // a draw cannot be served without a valid pool
    let service = DrawService::from_config(server_config.draw)?;

    match cli.command {
        Commands::Serve { bind } => {
            commands::handle_serve_command(service, bind.unwrap_or_else(config::default_bind))
                .await
        }
        Commands::Check => Ok(()),
        Commands::Preview { limit } => commands::handle_preview_command(&service, limit),
    }
}

/// Filter for the binary (target `prizedraw`) and the core library
fn log_directives(level: &str) -> String {
    format!("prizedraw={},prizedraw_core={}", level, level)
}
