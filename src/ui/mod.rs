pub mod animation;
pub mod canvas;
pub mod clouds;
pub mod layout;
pub mod particles;
pub mod scene;
pub mod widgets;

use ratatui::{
    Frame,
    widgets::{Block, Borders, Paragraph},
};

use crate::{app::state::AppState, ui::widgets::sky::SkyView};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if !layout::fits(area) {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {}x{}.",
            layout::MIN_WIDTH,
            layout::MIN_HEIGHT
        ))
        .block(Block::default().borders(Borders::ALL).title("weather-canvas"));
        frame.render_widget(warning, area);
        return;
    }

    let (sky, panel) = layout::split_screen(area);
    frame.render_widget(
        SkyView {
            canvas: &state.canvas,
            gradient: state.weather.background(),
        },
        sky,
    );
    widgets::controls::render(frame, panel, state);
}
