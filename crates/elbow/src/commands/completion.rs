use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, Shell};

/// Run the completion command.
pub fn run(shell: Shell) {
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::Powershell => clap_complete::Shell::PowerShell,
    };
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "elbow", &mut std::io::stdout());
}
