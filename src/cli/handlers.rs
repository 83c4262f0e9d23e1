use crate::cli::commands::{Cli, Commands};
use crate::cli::output::store_json;
use crate::io::config_io::{self, load_config};
use crate::io::logging::{LogError, init_file_logging};
use crate::model::PlannerConfig;
use crate::tui::{self, RunOptions};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_path) = load_config(cli.config.as_deref())?;
    init_logging(&cli, &config)?;
    match &config_path {
        Some(path) => tracing::debug!(path = %path.display(), "config loaded"),
        None => tracing::debug!("no config file, using defaults"),
    }

    match cli.command {
        None => cmd_planner(&cli, config),
        Some(Commands::Config) => cmd_config(&config),
    }
}

/// Start file logging when a log file is configured (CLI flag wins over config)
fn init_logging(cli: &Cli, config: &PlannerConfig) -> Result<(), LogError> {
    let Some(path) = cli.log_file.as_ref().or(config.log.file.as_ref()) else {
        return Ok(());
    };
    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    init_file_logging(path, level)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Run the interactive planner
fn cmd_planner(cli: &Cli, config: PlannerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let show_clock = config.ui.show_clock && !cli.no_clock;
    let store = tui::run(RunOptions {
        config,
        initial_date: cli.date,
        show_clock,
    })?;
    if cli.json {
        println!("{}", store_json(&store)?);
    }
    Ok(())
}

/// Print the effective configuration
fn cmd_config(config: &PlannerConfig) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", config_io::config_to_string(config)?);
    Ok(())
}
