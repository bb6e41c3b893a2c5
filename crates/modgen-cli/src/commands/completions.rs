//! Implementation of the `modgen completions` command.

use clap::CommandFactory;
use clap_complete::{Shell as CompleteShell, generate};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Execute the `modgen completions` command.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let shell = match args.shell {
        Shell::Bash => CompleteShell::Bash,
        Shell::Zsh => CompleteShell::Zsh,
        Shell::Fish => CompleteShell::Fish,
        Shell::PowerShell => CompleteShell::PowerShell,
        Shell::Elvish => CompleteShell::Elvish,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "modgen", &mut std::io::stdout());
    Ok(())
}
