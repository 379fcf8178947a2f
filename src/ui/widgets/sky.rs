#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::{
    domain::weather::{BackgroundGradient, Rgb},
    ui::canvas::{PixelCanvas, Rgba},
};

const HALF_BLOCK: char = '▀';

/// Blits a [`PixelCanvas`] over the background gradient, two dots per cell:
/// the upper dot as foreground of `▀`, the lower one as background.
pub struct SkyView<'a> {
    pub canvas: &'a PixelCanvas,
    pub gradient: BackgroundGradient,
}

impl Widget for SkyView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dot_rows = usize::from(area.height) * 2;
        for row in 0..area.height {
            let upper_dot = usize::from(row) * 2;
            for col in 0..area.width {
                let upper = self.dot_color(usize::from(col), upper_dot, dot_rows);
                let lower = self.dot_color(usize::from(col), upper_dot + 1, dot_rows);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(HALF_BLOCK).set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}

impl SkyView<'_> {
    fn dot_color(&self, x: usize, y: usize, dot_rows: usize) -> Color {
        let sky = lerp_rgb(
            rgb_to_f32(self.gradient.top),
            rgb_to_f32(self.gradient.bottom),
            gradient_ratio(y, dot_rows),
        );
        let color = match self.canvas.pixel(x, y) {
            Some(dot) => composite(dot, sky),
            None => sky,
        };
        to_color(color)
    }
}

fn gradient_ratio(y: usize, rows: usize) -> f32 {
    if rows <= 1 {
        0.0
    } else {
        (y as f32 / (rows - 1) as f32).clamp(0.0, 1.0)
    }
}

fn rgb_to_f32(c: Rgb) -> (f32, f32, f32) {
    (f32::from(c.0), f32::from(c.1), f32::from(c.2))
}

fn lerp_rgb(a: (f32, f32, f32), b: (f32, f32, f32), t: f32) -> (f32, f32, f32) {
    (
        a.0 + (b.0 - a.0) * t,
        a.1 + (b.1 - a.1) * t,
        a.2 + (b.2 - a.2) * t,
    )
}

fn composite(dot: Rgba, under: (f32, f32, f32)) -> (f32, f32, f32) {
    let a = dot.a.clamp(0.0, 1.0);
    (
        dot.r * 255.0 * a + under.0 * (1.0 - a),
        dot.g * 255.0 * a + under.1 * (1.0 - a),
        dot.b * 255.0 * a + under.2 * (1.0 - a),
    )
}

fn to_color(c: (f32, f32, f32)) -> Color {
    Color::Rgb(
        c.0.round().clamp(0.0, 255.0) as u8,
        c.1.round().clamp(0.0, 255.0) as u8,
        c.2.round().clamp(0.0, 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::weather::BackgroundBand,
        ui::canvas::{Point, Surface, Viewport},
    };

    fn render(canvas: &PixelCanvas, gradient: BackgroundGradient, w: u16, h: u16) -> Buffer {
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        SkyView { canvas, gradient }.render(area, &mut buf);
        buf
    }

    #[test]
    fn empty_canvas_shows_plain_gradient() {
        let gradient = BackgroundBand::SunnyClear.gradient();
        let canvas = PixelCanvas::new(Viewport::from_cells(4, 3));
        let buf = render(&canvas, gradient, 4, 3);

        assert_eq!(buf[(0, 0)].symbol(), "▀");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(0x87, 0xce, 0xeb));
        assert_eq!(buf[(3, 2)].bg, Color::Rgb(0xf0, 0xe6, 0x8c));
    }

    #[test]
    fn opaque_dots_replace_the_sky() {
        let gradient = BackgroundBand::Storm.gradient();
        let mut canvas = PixelCanvas::new(Viewport::from_cells(4, 2));
        canvas
            .fill_rect(Point::new(0.0, 0.0), 32.0, 8.0, Rgba::WHITE)
            .expect("rect");
        let buf = render(&canvas, gradient, 4, 2);
        for x in 0..4 {
            assert_eq!(buf[(x, 0)].fg, Color::Rgb(255, 255, 255));
        }
        assert_ne!(buf[(0, 0)].bg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn translucent_fog_lightens_the_sky() {
        let gradient = BackgroundBand::Freeze.gradient();
        let mut canvas = PixelCanvas::new(Viewport::from_cells(2, 2));
        canvas
            .fill_rect(Point::new(0.0, 0.0), 16.0, 32.0, Rgba::WHITE.with_alpha(0.2))
            .expect("rect");
        let buf = render(&canvas, gradient, 2, 2);
        let Color::Rgb(r, _, _) = buf[(0, 0)].fg else {
            panic!("expected rgb");
        };
        // 0xb3 * 0.8 + 255 * 0.2
        assert_eq!(r, 194);
    }

    #[test]
    fn gradient_ratio_handles_single_row() {
        assert!(gradient_ratio(0, 1).abs() < f32::EPSILON);
        assert!((gradient_ratio(3, 4) - 1.0).abs() < f32::EPSILON);
    }
}
