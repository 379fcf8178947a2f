use tracing::{debug, info};

use crate::{
    domain::weather::WeatherState,
    ui::{
        canvas::{CanvasError, Point, Rgba, Surface},
        scene::Scene,
    },
};

pub const FOG_COLOR: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// What one tick drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub fog: bool,
    pub clouds: usize,
    pub particles: usize,
    pub skipped: usize,
}

/// Per-frame driver. The host calls [`AnimationLoop::tick`] once per display
/// refresh; pacing lives with the host.
#[derive(Debug)]
pub struct AnimationLoop {
    state: LoopState,
    frames: u64,
}

impl AnimationLoop {
    #[must_use]
    pub fn start() -> Self {
        Self {
            state: LoopState::Running,
            frames: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            info!(frames = self.frames, "animation loop stopped");
        }
        self.state = LoopState::Stopped;
    }

    /// Clear, fog, clouds, precipitation. Returns `None` once stopped.
    pub fn tick(
        &mut self,
        weather: &WeatherState,
        scene: &mut Scene,
        surface: &mut impl Surface,
    ) -> Option<FrameReport> {
        if self.state == LoopState::Stopped {
            return None;
        }
        self.frames = self.frames.wrapping_add(1);

        surface.clear();
        let mut report = FrameReport {
            fog: weather.fog_enabled(),
            ..FrameReport::default()
        };
        if report.fog {
            report.skipped += usize::from(draw_fog(surface).is_err());
        }

        let viewport = scene.viewport;
        scene.clouds.advance_frame(viewport, &scene.layers);
        report.skipped += scene
            .clouds
            .render_layered(surface, &scene.layers, scene.drift);
        report.clouds = scene.clouds.len();

        scene.particles.advance_frame(viewport, &mut scene.rng);
        report.skipped += scene.particles.render(surface, &mut scene.rng);
        report.particles = scene.particles.len();

        if report.skipped > 0 {
            debug!(frame = self.frames, skipped = report.skipped, "frame had skipped draws");
        }
        Some(report)
    }
}

fn draw_fog(surface: &mut impl Surface) -> Result<(), CanvasError> {
    let viewport = surface.viewport();
    surface.fill_rect(
        Point::new(0.0, 0.0),
        viewport.width_f32(),
        viewport.height_f32(),
        FOG_COLOR,
    )
}
