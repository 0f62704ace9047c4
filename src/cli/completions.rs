//! Shell completion generation

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;
use crate::error::Result;

/// Generate static completions for the given shell on stdout.
pub fn run(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    generate(shell, &mut command, "mhflop", &mut std::io::stdout());
    Ok(())
}
