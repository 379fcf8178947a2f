#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{
        controls::{Control, control_value, value_label},
        state::AppState,
    },
    domain::weather::condition_icon,
};

const PANEL_BG: Color = Color::Rgb(24, 28, 38);
const PANEL_TEXT: Color = Color::Rgb(214, 222, 235);
const PANEL_MUTED: Color = Color::Rgb(120, 132, 150);
const ACCENT: Color = Color::Rgb(120, 200, 255);

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = Style::default().fg(PANEL_TEXT).bg(PANEL_BG);
    let block = Block::default()
        .title(" Weather ")
        .borders(Borders::ALL)
        .style(style)
        .border_style(Style::default().fg(PANEL_MUTED).bg(PANEL_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = panel_lines(state, usize::from(inner.width));
    frame.render_widget(Paragraph::new(lines).style(style), inner);
}

#[must_use]
pub fn panel_lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for control in Control::ALL {
        lines.extend(slider_lines(state, control, width));
    }
    lines.push(Line::default());

    let readout = state.weather.readout(state.icon_mode);
    let icon = state
        .icon
        .visible()
        .map_or("", |condition| condition_icon(condition, state.icon_mode));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{icon} "),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(readout.condition.label()),
    ]));
    for text in [
        readout.temperature,
        readout.precipitation,
        readout.wind,
        readout.cloudiness,
    ] {
        lines.push(Line::from(text));
    }
    lines.push(Line::default());
    for help in [
        "↑↓ select   ←→ adjust",
        "PgUp/PgDn coarse   d defaults",
        "q quit",
    ] {
        lines.push(Line::styled(help, Style::default().fg(PANEL_MUTED)));
    }
    lines
}

fn slider_lines(state: &AppState, control: Control, width: usize) -> [Line<'static>; 2] {
    let focused = state.controls.focus() == control;
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let value = value_label(&state.weather, control);
    let pad = width.saturating_sub(marker.chars().count() + control.label().len() + value.chars().count());

    let fraction = control
        .slider()
        .fraction(control_value(&state.weather, control));
    let bar = slider_bar(fraction, width.saturating_sub(4));

    [
        Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(control.label(), label_style),
            Span::raw(" ".repeat(pad)),
            Span::raw(value),
        ]),
        Line::from(Span::styled(
            format!("  {bar}"),
            Style::default().fg(if focused { ACCENT } else { PANEL_MUTED }),
        )),
    ]
}

#[must_use]
pub fn slider_bar(fraction: f32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let filled = (fraction.clamp(0.0, 1.0) * width as f32).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
