//! Subcommands of `benchratio`.
pub mod analyze;

use clap::Parser;

/// `benchratio` command.
#[derive(Parser, Debug)]
#[command(infer_subcommands = true)]
pub enum MainCmd {
    /// Derive the weight to gas ratio and optionally write the `RATIO` source file
    Analyze(analyze::Cmd),
}

/// Error of any subcommand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `analyze` failed.
    #[error(transparent)]
    Analyze(#[from] analyze::Error),
}

impl MainCmd {
    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Analyze(cmd) => cmd.run().map(drop).map_err(Into::into),
        }
    }
}
