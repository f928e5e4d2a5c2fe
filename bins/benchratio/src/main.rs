use benchratio::cmd::MainCmd;
use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn main() -> Result<()> {
    color_eyre::install()?;

    if std::env::var_os("RUST_BACKTRACE").is_none() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    // Diagnostics go to stderr, stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre!("failed to install tracing subscriber: {e}"))?;

    MainCmd::parse().run()?;

    Ok(())
}
