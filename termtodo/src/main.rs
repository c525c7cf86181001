//! `TermTodo`: terminal-native todo list manager.
//!
//! Launches the TUI over a locally persisted task list. Configuration
//! via CLI flags, environment variables, or config file
//! (`~/.config/termtodo/config.toml`).
//!
//! ```bash
//! # Platform-default data dir
//! cargo run --bin termtodo
//!
//! # Explicit data dir and dark theme
//! cargo run --bin termtodo -- --data-dir /tmp/todo --theme dark
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use termtodo::app::App;
use termtodo::config::{AppConfig, CliArgs};
use termtodo::ui;
use termtodo_core::{FileStorage, MemoryStorage, Storage, TaskStore};

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            AppConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("termtodo starting");

    // Pick the storage backend before touching the terminal.
    let result = match config.resolve_data_dir() {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "using file storage");
            run_tui(TaskStore::load(FileStorage::new(dir)), &config)
        }
        None => {
            tracing::warn!("no data directory available, tasks will not be persisted");
            run_tui(TaskStore::load(MemoryStorage::new()), &config)
        }
    };

    tracing::info!("termtodo exiting");
    result
}

/// Set up the terminal, run the event loop, and restore the terminal.
fn run_tui<S: Storage>(store: TaskStore<S>, config: &AppConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, store, config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("termtodo.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop: draw, tick the notification timer, poll input.
fn run_app<S: Storage>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: TaskStore<S>,
    config: &AppConfig,
) -> io::Result<()> {
    let mut app = App::new(store)
        .with_theme(config.theme)
        .with_notification_ttl(config.notification_ttl);

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Expire the transient notification if its time is up.
        app.tick_notification();

        // Step 3: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
