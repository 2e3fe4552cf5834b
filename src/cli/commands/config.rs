//! Config command implementation.

use colored::Colorize;

use crate::cli::args::ConfigCommands;
use crate::config::{Config, Paths};
use crate::error::StudyError;
use crate::features::timer::{validate_break_minutes, validate_focus_minutes};
use crate::output::{format_config, OutputFormat};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error for out-of-range values or if the config cannot be saved.
pub fn config(
    config: &mut Config,
    cmd: Option<ConfigCommands>,
    format: OutputFormat,
) -> Result<String, StudyError> {
    let message = match cmd {
        None | Some(ConfigCommands::Show) => return format_config(config, format),
        Some(ConfigCommands::Path) => {
            let paths = Paths::new()?;
            return Ok(paths.config_file.display().to_string());
        }
        Some(ConfigCommands::Focus { minutes }) => {
            config.timer.focus_minutes = validate_focus_minutes(minutes)?;
            format!("Focus length set to {minutes} minutes")
        }
        Some(ConfigCommands::Break { minutes }) => {
            config.timer.break_minutes = validate_break_minutes(minutes)?;
            format!("Break length set to {minutes} minutes")
        }
        Some(ConfigCommands::Theme { theme }) => {
            config.appearance.theme = theme;
            format!("Theme set to {}", theme.name())
        }
    };

    config.save()?;

    match format {
        OutputFormat::Json => format_config(config, format),
        OutputFormat::Pretty => Ok(format!("{} {message}", "✓".green())),
    }
}
