//! projectdash - terminal dashboard for project menus
//!
//! A Ratatui-based dashboard that picks a menu from the working directory,
//! runs the actions behind it and asks for input through modal prompts.

mod app;
mod config;
mod menu;
mod project;
mod prompt;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::{DashConfig, START_DIR_ENV};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Route diagnostics to the log file; the terminal belongs to the dashboard
fn init_logging(config: &DashConfig) {
    let filter = EnvFilter::try_from_env("PROJECTDASH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "projectdash=info".into());

    let file = config.log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = DashConfig::load()?;
    init_logging(&config);

    let start_dir = config.start_dir(std::env::var_os(START_DIR_ENV).map(PathBuf::from))?;
    tracing::info!(dir = %start_dir.display(), "starting dashboard");
    let mut app = App::new(&config, start_dir)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("dashboard stopped: {err:#}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.terminal_size = Some((size.height, size.width));

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while an action is running so its output and prompts show promptly
        let poll_duration = if app.is_busy() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        app.tick().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
