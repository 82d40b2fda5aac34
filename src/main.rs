//! # Postline Main Entry Point
//!
//! Terminal CRUD client for a remote posts collection.

use anyhow::Result;
use postline::cmd_args::CommandLineArgs;
use postline::AppController;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing(args.verbose());

    let mut app = AppController::new(args)?;
    app.run().await?;

    println!("Bye!");
    Ok(())
}

/// Logs go to stderr so they never disturb the alternate screen.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("postline=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
