// src/main.rs
use anyhow::Result;
use clap::Parser;
use glyphs::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    run(args)
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
