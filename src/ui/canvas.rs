#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

//! Drawing surfaces.
//!
//! Simulation code works in virtual pixels. [`PixelCanvas`] rasterizes into a
//! coarser dot grid where one dot is [`VIRTUAL_PIXELS_PER_DOT`] virtual pixels
//! wide and tall, which maps one dot to half a terminal cell. [`DrawLog`]
//! records the same calls without rasterizing.

use thiserror::Error;

/// Virtual pixels covered by one dot along each axis.
pub const VIRTUAL_PIXELS_PER_DOT: f32 = 8.0;

// Any point of a dot grid is within this distance of some dot center.
const MIN_DOT_RADIUS: f32 = 0.71;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[must_use]
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Canvas size in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a block of terminal cells, two dots per cell
    /// vertically.
    #[must_use]
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        let dot = VIRTUAL_PIXELS_PER_DOT as u32;
        Self {
            width: u32::from(columns) * dot,
            height: u32::from(rows) * 2 * dot,
        }
    }

    #[must_use]
    pub fn width_f32(self) -> f32 {
        self.width as f32
    }

    #[must_use]
    pub fn height_f32(self) -> f32 {
        self.height as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CanvasError {
    #[error("non-finite geometry passed to {shape}")]
    NonFinite { shape: &'static str },
    #[error("{shape} radius must be positive, got {radius}")]
    InvalidRadius { shape: &'static str, radius: f32 },
}

/// The 2D drawing context the fields render into.
pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Erases everything to transparent. Global alpha is left alone.
    fn clear(&mut self);

    fn global_alpha(&self) -> f32;

    fn set_global_alpha(&mut self, alpha: f32);

    fn fill_rect(
        &mut self,
        origin: Point,
        width: f32,
        height: f32,
        color: Rgba,
    ) -> Result<(), CanvasError>;

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
    ) -> Result<(), CanvasError>;

    fn fill_disc(&mut self, center: Point, radius: f32, color: Rgba) -> Result<(), CanvasError>;

    /// Fills a disc whose color runs from `inner` at the center to `outer` at
    /// `radius`.
    fn fill_radial_gradient(
        &mut self,
        center: Point,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    ) -> Result<(), CanvasError>;
}

fn check_points(shape: &'static str, points: &[Point]) -> Result<(), CanvasError> {
    if points.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(CanvasError::NonFinite { shape })
    }
}

fn check_radius(shape: &'static str, radius: f32) -> Result<(), CanvasError> {
    if !radius.is_finite() {
        return Err(CanvasError::NonFinite { shape });
    }
    if radius <= 0.0 {
        return Err(CanvasError::InvalidRadius { shape, radius });
    }
    Ok(())
}

type Segment = ((f32, f32), (f32, f32));

/// Liang-Barsky clip of a segment against `(min_x, min_y, max_x, max_y)`.
/// `None` when nothing of it lies inside.
fn clip_segment(
    from: (f32, f32),
    to: (f32, f32),
    (min_x, min_y, max_x, max_y): (f32, f32, f32, f32),
) -> Option<Segment> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;
    for (p, q) in [
        (-dx, from.0 - min_x),
        (dx, max_x - from.0),
        (-dy, from.1 - min_y),
        (dy, max_y - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((
        (from.0 + dx * t0, from.1 + dy * t0),
        (from.0 + dx * t1, from.1 + dy * t1),
    ))
}

/// Straight-alpha RGBA framebuffer.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    viewport: Viewport,
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
    global_alpha: f32,
}

impl PixelCanvas {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let width = (viewport.width_f32() / VIRTUAL_PIXELS_PER_DOT).ceil() as usize;
        let height = (viewport.height_f32() / VIRTUAL_PIXELS_PER_DOT).ceil() as usize;
        Self {
            viewport,
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width * height],
            global_alpha: 1.0,
        }
    }

    /// Size of the dot grid.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    fn blend(&mut self, x: isize, y: isize, color: Rgba) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let src_a = (color.a * self.global_alpha).clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        let dst = self.pixels[idx];
        let out_a = src_a + dst.a * (1.0 - src_a);
        let mix = |s: f32, d: f32| (s * src_a + d * dst.a * (1.0 - src_a)) / out_a;
        self.pixels[idx] = Rgba {
            r: mix(color.r, dst.r),
            g: mix(color.g, dst.g),
            b: mix(color.b, dst.b),
            a: out_a,
        };
    }

    // Visits every dot whose center lies within `radius` dots of `center`.
    fn for_each_dot_in_disc(
        &mut self,
        center: Point,
        radius: f32,
        mut shade: impl FnMut(f32) -> Rgba,
    ) {
        let cx = center.x / VIRTUAL_PIXELS_PER_DOT;
        let cy = center.y / VIRTUAL_PIXELS_PER_DOT;
        let r = (radius / VIRTUAL_PIXELS_PER_DOT).max(MIN_DOT_RADIUS);
        let x0 = (cx - r).floor() as isize;
        let x1 = (cx + r).ceil() as isize;
        let y0 = (cy - r).floor() as isize;
        let y1 = (cy + r).ceil() as isize;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= r {
                    let color = shade(dist / r);
                    self.blend(x, y, color);
                }
            }
        }
    }
}

impl Surface for PixelCanvas {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgba::TRANSPARENT);
    }

    fn global_alpha(&self) -> f32 {
        self.global_alpha
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(
        &mut self,
        origin: Point,
        width: f32,
        height: f32,
        color: Rgba,
    ) -> Result<(), CanvasError> {
        let corner = Point::new(origin.x + width, origin.y + height);
        check_points("rect", &[origin, corner])?;
        let x0 = (origin.x.min(corner.x) / VIRTUAL_PIXELS_PER_DOT).floor() as isize;
        let x1 = (origin.x.max(corner.x) / VIRTUAL_PIXELS_PER_DOT).ceil() as isize;
        let y0 = (origin.y.min(corner.y) / VIRTUAL_PIXELS_PER_DOT).floor() as isize;
        let y1 = (origin.y.max(corner.y) / VIRTUAL_PIXELS_PER_DOT).ceil() as isize;
        for y in y0.max(0)..y1.min(self.height as isize) {
            for x in x0.max(0)..x1.min(self.width as isize) {
                self.blend(x, y, color);
            }
        }
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
    ) -> Result<(), CanvasError> {
        check_points("line", &[from, to])?;
        if !width.is_finite() {
            return Err(CanvasError::NonFinite { shape: "line" });
        }
        let half = ((width / VIRTUAL_PIXELS_PER_DOT) / 2.0)
            .floor()
            .clamp(0.0, self.width.max(self.height) as f32) as isize;
        // Only the part of the segment that can reach the grid is stepped.
        let margin = half as f32 + 1.0;
        let bounds = (
            -margin,
            -margin,
            self.width as f32 + margin,
            self.height as f32 + margin,
        );
        let Some(((x0, y0), (x1, y1))) = clip_segment(
            (from.x / VIRTUAL_PIXELS_PER_DOT, from.y / VIRTUAL_PIXELS_PER_DOT),
            (to.x / VIRTUAL_PIXELS_PER_DOT, to.y / VIRTUAL_PIXELS_PER_DOT),
            bounds,
        ) else {
            return Ok(());
        };
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as usize;
        let mut last = None;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let x = (x0 + (x1 - x0) * t).floor() as isize;
            let y = (y0 + (y1 - y0) * t).floor() as isize;
            if last == Some((x, y)) {
                continue;
            }
            last = Some((x, y));
            for oy in -half..=half {
                for ox in -half..=half {
                    self.blend(x + ox, y + oy, color);
                }
            }
        }
        Ok(())
    }

    fn fill_disc(&mut self, center: Point, radius: f32, color: Rgba) -> Result<(), CanvasError> {
        check_points("disc", &[center])?;
        check_radius("disc", radius)?;
        self.for_each_dot_in_disc(center, radius, |_| color);
        Ok(())
    }

    fn fill_radial_gradient(
        &mut self,
        center: Point,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    ) -> Result<(), CanvasError> {
        check_points("radial gradient", &[center])?;
        check_radius("radial gradient", radius)?;
        self.for_each_dot_in_disc(center, radius, |t| inner.lerp(outer, t));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Rect {
        origin: Point,
        width: f32,
        height: f32,
        color: Rgba,
        alpha: f32,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
        alpha: f32,
    },
    Disc {
        center: Point,
        radius: f32,
        color: Rgba,
        alpha: f32,
    },
    RadialGradient {
        center: Point,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
        alpha: f32,
    },
}

/// Headless surface that records every accepted draw call together with the
/// global alpha in effect. Rejects the same geometry [`PixelCanvas`] rejects.
#[derive(Debug, Clone)]
pub struct DrawLog {
    viewport: Viewport,
    global_alpha: f32,
    pub ops: Vec<DrawOp>,
}

impl DrawLog {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            global_alpha: 1.0,
            ops: Vec::new(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    #[must_use]
    pub fn discs(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Disc { .. }))
            .count()
    }

    #[must_use]
    pub fn gradients(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::RadialGradient { .. }))
            .count()
    }
}

impl Surface for DrawLog {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn global_alpha(&self) -> f32 {
        self.global_alpha
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(
        &mut self,
        origin: Point,
        width: f32,
        height: f32,
        color: Rgba,
    ) -> Result<(), CanvasError> {
        check_points("rect", &[origin, Point::new(origin.x + width, origin.y + height)])?;
        self.ops.push(DrawOp::Rect {
            origin,
            width,
            height,
            color,
            alpha: self.global_alpha,
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
    ) -> Result<(), CanvasError> {
        check_points("line", &[from, to])?;
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
            alpha: self.global_alpha,
        });
        Ok(())
    }

    fn fill_disc(&mut self, center: Point, radius: f32, color: Rgba) -> Result<(), CanvasError> {
        check_points("disc", &[center])?;
        check_radius("disc", radius)?;
        self.ops.push(DrawOp::Disc {
            center,
            radius,
            color,
            alpha: self.global_alpha,
        });
        Ok(())
    }

    fn fill_radial_gradient(
        &mut self,
        center: Point,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    ) -> Result<(), CanvasError> {
        check_points("radial gradient", &[center])?;
        check_radius("radial gradient", radius)?;
        self.ops.push(DrawOp::RadialGradient {
            center,
            radius,
            inner,
            outer,
            alpha: self.global_alpha,
        });
        Ok(())
    }
}
