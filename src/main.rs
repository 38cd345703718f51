//! locscope - commit history explorer
//!
//! Binary entry point for the TUI application.

use std::fs::File;
use std::io::{self, stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing_subscriber::EnvFilter;

use locscope::app::App;
use locscope::config::Config;
use locscope::loc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::parse();
    init_logging(config.log_file.as_deref())?;

    // Load fully before touching the terminal: a bad change log aborts with
    // a report and no partial view.
    let dataset = loc::load(&config.data, config.repo_url.as_deref())
        .wrap_err_with(|| format!("failed to load {}", config.data.display()))?;
    let app = App::new(dataset, &config);

    let terminal = ratatui::init();
    let result = run_with_mouse(terminal, app);
    ratatui::restore();
    result
}

/// Log to `log_file` when given; otherwise discard, since the UI owns stdout
fn init_logging(log_file: Option<&Path>) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
    Ok(())
}

/// Run the main loop with mouse capture, released on any exit path
fn run_with_mouse(terminal: DefaultTerminal, app: App) -> color_eyre::Result<()> {
    execute!(stdout(), EnableMouseCapture)?;
    let _guard = scopeguard::guard((), |_| {
        let _ = execute!(stdout(), DisableMouseCapture);
    });
    run(terminal, app)
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    tracing::info!(commits = app.controller.timeline().log().len(), "started");

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so an expired notification disappears even
/// while no input arrives.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            Event::Mouse(mouse) => {
                app.on_mouse_event(mouse);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
