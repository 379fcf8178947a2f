use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const PANEL_WIDTH: u16 = 34;
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

#[must_use]
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

/// Sky on the left, control panel on the right. The panel never takes more
/// than half the width.
#[must_use]
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let panel = PANEL_WIDTH.min(area.width / 2);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(panel)])
        .split(area);
    (chunks[0], chunks[1])
}
