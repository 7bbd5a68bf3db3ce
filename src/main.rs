//! CLI entry point for escape-time Mandelbrot rendering

use clap::Parser;
use mandelgrid::io::cli::{Cli, RenderCommand};

fn main() -> mandelgrid::Result<()> {
    // Structured logging with env-based filter, defaulting to info
    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("logging disabled: {error}");
    }

    let cli = Cli::parse();
    RenderCommand::new(cli).execute()
}
