//! trellis command line.
//!
//! ```text
//! trellis serve [--base-path DIR] [--port PORT]
//! trellis new <PATH> [--name NAME]
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use trellis::app::{new_project, Application, WelcomeRoutes};
use trellis::lifecycle::{signals, Shutdown};
use trellis::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "trellis", version, about = "Minimal web application scaffold")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the application found at the base path
    Serve {
        /// Project root; config is read from <base-path>/config/app.toml
        #[arg(short, long, default_value = ".")]
        base_path: PathBuf,

        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Create a new project
    New {
        /// Directory to create
        path: PathBuf,

        /// Package name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { base_path, port } => {
            let mut app = Application::load(base_path)?;
            if let Some(port) = port {
                app.config_mut().server.port = port;
            }

            init_logging(&app.config().observability);
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                base_path = %app.base_path().display(),
                "trellis starting"
            );

            app.register(&WelcomeRoutes::default());

            let shutdown = Arc::new(Shutdown::new());
            signals::spawn_signal_listener(Arc::clone(&shutdown));

            app.run(shutdown.subscribe()).await?;
            tracing::info!("Shutdown complete");
        }
        Commands::New { path, name } => {
            let created = new_project(&path, name.as_deref())?;
            println!("Created project at {}", created.display());
            println!("  cd {} && cargo run", created.display());
        }
    }

    Ok(())
}
