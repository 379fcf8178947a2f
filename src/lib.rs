pub mod app;
pub mod cli;
pub mod domain;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use std::{
    fs::OpenOptions,
    io::{self, Stdout, Write},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::state::{AppMode, AppState};
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use domain::weather::WeatherState;
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    if cli.one_shot {
        let mut stdout = io::stdout().lock();
        return write_one_shot(&mut stdout, &cli);
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(&cli);
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx, &cli).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, &cli).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

/// Prints the readout for the initial sliders, as text lines or JSON.
pub fn write_one_shot(out: &mut impl Write, cli: &Cli) -> Result<()> {
    let weather = WeatherState::new(cli.temperature, cli.intensity, cli.wind, cli.cloudiness);
    let readout = weather.readout(cli.icon_mode());
    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &readout).context("serializing readout")?;
        writeln!(out)?;
    } else {
        for line in readout.lines() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Installs a fmt subscriber appending to `path`. The terminal belongs to the
/// UI, so nothing is logged unless a file is given.
pub fn init_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))?;
    info!(path = %path.display(), "logging initialized");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
