//! CLI entry point for quill

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "A static site generator for personal blogs and portfolios", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Filename for the new post (without extension)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate static files
    #[command(alias = "b")]
    Build,

    /// Start a local server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site content (post, tag)
    List {
        #[arg(default_value = "post")]
        r#type: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "quill=debug,info"
    } else {
        "quill=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            quill::commands::init::init_site(&target_dir)?;
            println!("Initialized empty site in {:?}", target_dir);
        }

        Commands::New { title, path } => {
            let app = quill::Quill::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            quill::commands::new::create_post(&app, &title, path.as_deref())?;
        }

        Commands::Build => {
            let app = quill::Quill::new(&base_dir)?;
            tracing::info!("Generating static files...");
            quill::commands::build::run(&app)?;
            println!("Generated successfully!");
        }

        Commands::Serve {
            port,
            ip,
            open,
            r#static,
        } => {
            let app = quill::Quill::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            app.build()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            quill::server::start(&app, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let app = quill::Quill::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let app = quill::Quill::new(&base_dir)?;
            quill::commands::list::run(&app, &r#type)?;
        }
    }

    Ok(())
}
