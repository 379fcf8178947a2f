use clap::Parser;
use ratatui::{Terminal, backend::TestBackend};
use weather_canvas::{app::state::AppState, cli::Cli, ui};

fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn state(args: &[&str]) -> AppState {
    let mut argv = vec!["weather-canvas", "--seed", "3", "--ascii-icons"];
    argv.extend_from_slice(args);
    AppState::new(&Cli::parse_from(argv))
}

#[test]
fn panel_shows_sliders_and_readout() {
    let mut state = state(&["--temperature", "-5", "--intensity", "60", "--wind", "-3.5"]);
    state.resize(100, 30);
    state.tick_frame(std::time::Instant::now());

    let screen = render_to_string(&state, 100, 30);
    assert!(screen.contains("Weather"));
    assert!(screen.contains("-5°C"));
    assert!(screen.contains("60%"));
    assert!(screen.contains("-3.5 m/s"));
    assert!(screen.contains("SNW Snow"));
    assert!(screen.contains("Temperature: -5°C / 23°F"));
    assert!(screen.contains("Wind: 3.5 m/s (NW)"));
    assert!(screen.contains("q quit"));
}

#[test]
fn sky_is_drawn_with_half_blocks() {
    let mut state = state(&[]);
    state.resize(80, 24);
    state.tick_frame(std::time::Instant::now());

    let screen = render_to_string(&state, 80, 24);
    let first_row = screen.lines().next().expect("row");
    assert!(first_row.starts_with('▀'));
}

#[test]
fn tiny_terminal_shows_resize_hint() {
    let state = state(&[]);
    let screen = render_to_string(&state, 30, 8);
    assert!(screen.contains("Terminal too small"));
}
