//! Sarina's Kitchen TUI - terminal brochure and contact form
//!
//! A Ratatui-based TUI presenting the services, bio and contact pages of a
//! private-chef business, with a contact form delivered through EmailJS.

mod app;
mod config;
mod content;
mod platform;
mod relay;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::SiteConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use relay::EmailJsClient;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "kitchen-tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    let log_guard = init_logging();

    let site_config = SiteConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config file: {err:#}");
        SiteConfig::default()
    });
    let relay_config = site_config.relay_config();
    let relay = Arc::new(EmailJsClient::new(&relay_config));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(relay, relay_config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        // exit skips destructors, so flush pending log lines first
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data directory so output never lands on the TUI.
/// Falls back to stderr when the log file cannot be opened. The returned
/// guard flushes the background writer and must live until exit.
fn init_logging() -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kitchen_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    let log_writer = SiteConfig::data_dir().and_then(|dir| log_file_writer(&dir).ok());
    match log_writer {
        Some((non_blocking, guard)) => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(non_blocking),
                )
                .init();
            Some(guard)
        }
        None => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
    }
}

/// Non-blocking writer appending to `kitchen-tui.log` in `log_dir`.
/// Creates the directory if needed.
fn log_file_writer(log_dir: &Path) -> Result<(NonBlocking, WorkerGuard), InitError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(log_dir)?;
    Ok(tracing_appender::non_blocking(file_appender))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
            }
        }

        // Pick up finished relay calls
        app.poll_submissions();

        // Let spawned relay tasks make progress between frames
        tokio::task::yield_now().await;

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_writer_appends_to_file_in_log_dir() {
        let log_dir = std::env::temp_dir().join(format!("kitchen-tui-log-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&log_dir);

        let (mut writer, guard) = log_file_writer(&log_dir).unwrap();
        writer.write_all(b"relay dispatched\n").unwrap();
        // Dropping the guard flushes the background worker
        drop(guard);

        let logged = std::fs::read_to_string(log_dir.join(LOG_FILE)).unwrap();
        assert!(logged.contains("relay dispatched"));
        std::fs::remove_dir_all(&log_dir).unwrap();
    }
}
