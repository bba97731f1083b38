//! recipetui - Main entry point
//!
//! Parses arguments, sets up logging and the terminal, and runs the app.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use recipetui::app::App;
use recipetui::cli::{Cli, Commands};
use recipetui::config_file::AppConfig;
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing. The TUI owns stdout, so logs go to a file or nowhere.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

/// Load the config file (if any) and apply command line overrides
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            AppConfig::load_from_file(path)?
        }
        None => AppConfig::default(),
    };
    if let Some(dir) = &cli.picker_dir {
        config.picker_dir = Some(dir.clone());
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.log_file.as_deref())?;
    info!("recipetui starting up");
    debug!("CLI arguments parsed: {:?}", cli);

    match &cli.command {
        Some(Commands::CheckConfig { path }) => {
            check_config(path);
            Ok(())
        }
        None => {
            let config = load_config(&cli)?;
            run_tui(config)
        }
    }
}

/// Validate a configuration file, exiting non-zero on failure
fn check_config(path: &Path) {
    match AppConfig::load_from_file(path).and_then(|config| config.validate()) {
        Ok(()) => {
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {}", path.display());
        }
        Err(e) => {
            error!("Configuration validation failed: {:#}", e);
            eprintln!("✗ Configuration validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Runs its restore hook when dropped, on success, error and panic alike
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leave raw mode and the alternate screen, and show the cursor again
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
}

/// Run the interactive TUI
fn run_tui(config: AppConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard {
        restore: restore_terminal,
    };
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal);

    if let Err(ref e) = result {
        error!("Application error: {}", e);
    }
    result.map_err(Into::into)
}
