use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use studyflow::cli::args::{Cli, Commands, ConfigArgs, MusicArgs, StartArgs};
use studyflow::cli::commands;
use studyflow::config::{Config, Paths};

const LOG_ENV: &str = "STUDYFLOW_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

/// Send logs to the data directory so they never draw over the TUI.
fn init_logging(paths: &Paths) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let file = paths.ensure_dirs().ok().and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&paths.log_file)
            .ok()
    });

    let registry = tracing_subscriber::registry().with(filter);
    let init = match file {
        Some(file) => registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init(),
        None => {
            eprintln!(
                "{}: could not open {}, logging to stderr",
                "warning".yellow().bold(),
                paths.log_file.display()
            );
            registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()
        }
    };

    if let Err(e) = init {
        eprintln!("{}: logging disabled: {e}", "warning".yellow().bold());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = Paths::new()?;
    init_logging(&paths);
    tracing::debug!(root = %paths.root.display(), "starting studyflow");

    let mut config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("loading {}", paths.config_file.display()))?;
    let format = cli.output.unwrap_or(config.general.default_output);

    // A --user override applies to this run only and is never saved
    let mut session = config.clone();
    if let Some(user) = cli.user {
        session.general.user = user;
    }

    let output = match cli.command {
        None => commands::start(&session, &StartArgs::default())?,
        Some(Commands::Start(args)) => commands::start(&session, &args)?,
        Some(Commands::Stats) => commands::stats(&session, format)?,
        Some(Commands::History { limit }) => commands::history(&session, limit, format)?,
        Some(Commands::Log { minutes }) => commands::log_session(&session, minutes, format)?,
        Some(Commands::Quote) => commands::quote(format)?,
        Some(Commands::Music(MusicArgs { command })) => {
            commands::music(&mut config, command, format)?
        }
        Some(Commands::Config(ConfigArgs { command })) => {
            commands::config(&mut config, command, format)?
        }
        Some(Commands::Completions { shell, install }) => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
