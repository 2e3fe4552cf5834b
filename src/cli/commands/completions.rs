//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::StudyError;

const BIN_NAME: &str = "studyflow";

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, StudyError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, StudyError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf).map_err(|e| StudyError::InvalidInput(format!("UTF-8 error: {e}")))
}

/// Installation instructions for shell completions.
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc:
source <(studyflow completions bash)
"
        .to_string(),
        Shell::Zsh => r"# Save to your fpath:
studyflow completions zsh > ~/.zsh/completions/_studyflow
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),
        Shell::Fish => r"# Save to fish completions directory:
studyflow completions fish > ~/.config/fish/completions/studyflow.fish
"
        .to_string(),
        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
studyflow completions powershell | Out-String | Invoke-Expression
"
        .to_string(),
        Shell::Elvish => r"# Save to elvish completions directory:
studyflow completions elvish > ~/.elvish/lib/studyflow.elv
# Then add to ~/.elvish/rc.elv:
use studyflow
"
        .to_string(),
        _ => format!("# Run: studyflow completions {shell} and source the output\n"),
    }
}
