use rand::Rng;
use tracing::{debug, trace};

use crate::{
    domain::weather::PrecipitationKind,
    ui::canvas::{CanvasError, Point, Rgba, Surface, Viewport},
};

const RAIN_COLOR: Rgba = Rgba::BLUE;
const SNOW_COLOR: Rgba = Rgba::WHITE;
const STREAK_WIDTH: f32 = 1.0;
const STREAK_LENGTH_PER_SIZE: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub fall_speed: f32,
    pub drift_speed: f32,
    pub kind: PrecipitationKind,
}

impl Particle {
    pub fn spawn(
        kind: PrecipitationKind,
        wind_speed: f32,
        viewport: Viewport,
        rng: &mut impl Rng,
    ) -> Self {
        let base_fall = if kind == PrecipitationKind::Rain {
            3.0
        } else {
            1.0
        };
        Self {
            x: rng.random::<f32>() * viewport.width_f32(),
            y: rng.random::<f32>() * viewport.height_f32(),
            size: rng.random::<f32>() * 3.0 + 1.0,
            fall_speed: rng.random::<f32>() + base_fall,
            drift_speed: wind_speed,
            kind,
        }
    }

    /// Moves one frame, then wraps: falling off the bottom respawns at the top
    /// with a fresh column, leaving either side re-enters from the other.
    pub fn advance(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        let width = viewport.width_f32();
        let height = viewport.height_f32();
        self.y += self.fall_speed;
        self.x += self.drift_speed;
        if self.y > height {
            self.y = 0.0;
            self.x = rng.random::<f32>() * width;
        }
        if self.x > width {
            self.x = 0.0;
        } else if self.x < 0.0 {
            self.x = width;
        }
    }

    /// Mixed particles re-roll between a streak and a flake on every call.
    pub fn render(&self, surface: &mut impl Surface, rng: &mut impl Rng) -> Result<(), CanvasError> {
        match self.kind {
            PrecipitationKind::Rain => self.draw_streak(surface),
            PrecipitationKind::Snow => self.draw_flake(surface),
            PrecipitationKind::Mixed => {
                if rng.random_bool(0.5) {
                    self.draw_streak(surface)
                } else {
                    self.draw_flake(surface)
                }
            }
        }
    }

    fn draw_streak(&self, surface: &mut impl Surface) -> Result<(), CanvasError> {
        surface.stroke_line(
            Point::new(self.x, self.y),
            Point::new(
                self.x + self.drift_speed,
                self.y + self.size * STREAK_LENGTH_PER_SIZE,
            ),
            STREAK_WIDTH,
            RAIN_COLOR,
        )
    }

    fn draw_flake(&self, surface: &mut impl Surface) -> Result<(), CanvasError> {
        surface.fill_disc(Point::new(self.x, self.y), self.size, SNOW_COLOR)
    }
}

/// Live precipitation. Sized by intensity, typed by temperature.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Replaces the whole field. The new collection is built before the swap,
    /// so a frame never sees a half-populated field.
    pub fn reinitialize(
        &mut self,
        count: usize,
        kind: PrecipitationKind,
        wind_speed: f32,
        viewport: Viewport,
        rng: &mut impl Rng,
    ) {
        let fresh = (0..count)
            .map(|_| Particle::spawn(kind, wind_speed, viewport, rng))
            .collect::<Vec<_>>();
        self.particles = fresh;
        debug!(count, ?kind, "precipitation field reinitialized");
    }

    pub fn sync_wind(&mut self, wind_speed: f32) {
        for particle in &mut self.particles {
            particle.drift_speed = wind_speed;
        }
    }

    pub fn advance_frame(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        for particle in &mut self.particles {
            particle.advance(viewport, rng);
        }
    }

    /// Draws every particle and returns how many were skipped because the
    /// surface rejected them.
    pub fn render(&self, surface: &mut impl Surface, rng: &mut impl Rng) -> usize {
        let mut skipped = 0;
        for (index, particle) in self.particles.iter().enumerate() {
            if let Err(err) = particle.render(surface, rng) {
                trace!(index, %err, "skipping particle");
                skipped += 1;
            }
        }
        skipped
    }
}
