use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::Theme;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "studyflow")]
#[command(about = "A focus timer that tracks study streaks and progress")]
#[command(long_about = "studyflow - focus timer and study tracker

Alternates focus and break phases, records every completed focus session,
and keeps daily statistics and streaks.

QUICK START:
  studyflow                 Open the timer
  studyflow start --focus 50 --break 10
  studyflow stats           Show your progress dashboard
  studyflow history         List recent sessions

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

Data lives in ~/.studyflow, or in $STUDYFLOW_HOME when set.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Profile to record progress under, instead of `general.user`
    #[arg(short, long, env = "STUDYFLOW_USER", global = true)]
    pub user: Option<String>,

    /// Without a subcommand the timer opens.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the focus timer
    ///
    /// Keys: space start/pause, r reset, +/- focus length, ]/[ break length,
    /// m play/pause music, n next track, q quit.
    Start(StartArgs),

    /// Show the progress dashboard
    ///
    /// Lifetime totals, streaks, a 14-day trend and this week's totals.
    Stats,

    /// List recently completed sessions
    History {
        /// Maximum number of sessions to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Record a focus session completed away from the timer
    Log {
        /// Session length in minutes (1-60)
        minutes: u32,
    },

    /// Print a motivational quote
    Quote,

    /// Choose ambient music
    Music(MusicArgs),

    /// View or change settings
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   studyflow completions zsh > ~/.zsh/completions/_studyflow
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,

        /// Print installation instructions instead of the script
        #[arg(long)]
        install: bool,
    },
}

#[derive(Args, Default)]
pub struct StartArgs {
    /// Focus length in minutes for this run (1-60)
    #[arg(short, long)]
    pub focus: Option<u32>,

    /// Break length in minutes for this run (1-30)
    #[arg(short, long = "break")]
    pub break_minutes: Option<u32>,

    /// Start the next phase automatically instead of pausing
    #[arg(long)]
    pub auto_continue: bool,
}

#[derive(Args)]
pub struct MusicArgs {
    #[command(subcommand)]
    pub command: Option<MusicCommands>,
}

#[derive(Subcommand)]
pub enum MusicCommands {
    /// List presets and the current selection
    List,

    /// Select a preset (lofi, rain, cafe, white-noise)
    Select {
        /// Preset id
        preset: String,
    },

    /// Use a custom http(s) stream URL
    Url {
        /// Stream URL
        url: String,
    },

    /// Set the volume (0-100)
    Volume {
        /// Volume level
        level: u8,
    },
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Set the default focus length in minutes (1-60)
    Focus {
        minutes: u32,
    },

    /// Set the default break length in minutes (1-30)
    Break {
        minutes: u32,
    },

    /// Set the color theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },

    /// Print the path of the config file
    Path,
}
