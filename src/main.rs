//! CLI entry point for portfolio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "portfolio-rs")]
#[command(author = "Clarence Neil Meneses")]
#[command(version = "0.1.0")]
#[command(about = "A personal portfolio site with a project admin panel", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the site server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,

        /// Serve the starter content from memory instead of the data file
        #[arg(long)]
        ephemeral: bool,
    },

    /// List store content
    List {
        /// Type of content to list (projects, experience, certifications, stack)
        #[arg(default_value = "projects")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "portfolio_rs=debug,info"
    } else {
        "portfolio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing portfolio site in {:?}", target_dir);
            portfolio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio site in {:?}", target_dir);
        }

        Commands::Server {
            port,
            ip,
            ephemeral,
        } => {
            let portfolio = portfolio_rs::Portfolio::new(&base_dir)?;
            let store = if ephemeral {
                tracing::info!("Using an in-memory store; changes are not saved");
                portfolio.ephemeral_store()
            } else {
                portfolio.open_store()?
            };

            let ip = ip.unwrap_or_else(|| portfolio.config.server.ip.clone());
            let port = port.unwrap_or(portfolio.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            portfolio_rs::server::start(&portfolio, store, &ip, port).await?;
        }

        Commands::List { r#type } => {
            let portfolio = portfolio_rs::Portfolio::new(&base_dir)?;
            let store = portfolio.open_store()?;
            portfolio_rs::commands::list::run(store.as_ref(), &r#type).await?;
        }

        Commands::Version => {
            println!("portfolio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
