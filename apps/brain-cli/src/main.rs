//! Asset Brain terminal client
//!
//! Browses the property portfolio held by an Asset Brain backend and asks it
//! free-text questions:
//!
//! - One-shot subcommands that refresh and print a single view
//! - Query, upload, property detail and status commands
//! - An interactive shell (the default) that keeps one dashboard alive
//!
//! Views are printed to stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use brain_client::render::render_result;
use brain_client::{ClientConfig, Dashboard, View};
use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod output;
mod shell;

/// Command-line arguments for the Asset Brain client
#[derive(Parser, Debug)]
#[command(name = "brain")]
#[command(about = "Terminal dashboard for the Real Estate Asset Brain")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend origin, e.g. http://localhost:8000
    #[arg(long, env = "ASSET_BRAIN_URL")]
    base_url: Option<String>,

    /// Property that uploads are filed under
    #[arg(long)]
    property_id: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Portfolio totals and maintenance by category
    Dashboard,
    /// Every property with its lease
    Properties,
    /// Every maintenance work order
    Maintenance,
    /// Every uploaded document
    Documents,
    /// Ask a free-text question
    Query {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Upload a lease, invoice or photo
    Upload {
        path: PathBuf,
        /// Overrides the default property
        #[arg(long)]
        property_id: Option<String>,
    },
    /// One property and its maintenance history
    Property { id: String },
    /// Backend status banner
    Status,
    /// Interactive session
    Shell,
}

fn load_config(args: &Args) -> Result<ClientConfig> {
    let config = match &args.config {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("Loading configuration from {}", path.display()))?,
        None => ClientConfig::default(),
    };

    let mut config = config
        .with_env_overrides()
        .with_base_url(args.base_url.clone());
    if let Some(id) = &args.property_id {
        config.default_property_id = id.clone();
    }
    Ok(config)
}

async fn show_view(dashboard: &mut Dashboard<brain_client::HttpBackend>, view: View) -> Result<()> {
    dashboard.refresh_all().await;
    dashboard.select_view(view);
    print!("{}", dashboard.render_active_view()?);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&args)?;
    debug!(?config, "configuration loaded");

    let mut dashboard = Dashboard::connect(&config).context("Failed to create backend client")?;

    match args.command.unwrap_or(Command::Shell) {
        Command::Dashboard => show_view(&mut dashboard, View::Dashboard).await?,
        Command::Properties => show_view(&mut dashboard, View::Properties).await?,
        Command::Maintenance => show_view(&mut dashboard, View::Maintenance).await?,
        Command::Documents => show_view(&mut dashboard, View::Documents).await?,
        Command::Query { text } => {
            if let Some(result) = dashboard.submit_query(&text.join(" ")).await {
                println!("{}", render_result(&result));
            }
        }
        Command::Upload { path, property_id } => {
            let delivered =
                output::upload(&mut dashboard, &path, property_id.as_deref()).await;
            output::print_notices(dashboard.store_mut());
            if !delivered {
                std::process::exit(1);
            }
        }
        Command::Property { id } => output::property(&dashboard, &id).await,
        Command::Status => output::status(&dashboard).await,
        Command::Shell => shell::run(&mut dashboard).await?,
    }

    Ok(())
}
