use rand::Rng;
use tracing::{debug, trace};

use crate::ui::canvas::{CanvasError, Point, Rgba, Surface, Viewport};

/// One compositing pass over the whole cloud field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudLayer {
    pub speed_multiplier: f32,
    pub opacity: f32,
}

pub const DEFAULT_LAYERS: [CloudLayer; 3] = [
    CloudLayer {
        speed_multiplier: 0.2,
        opacity: 0.3,
    },
    CloudLayer {
        speed_multiplier: 0.4,
        opacity: 0.5,
    },
    CloudLayer {
        speed_multiplier: 0.6,
        opacity: 0.8,
    },
];

/// How a layer's speed multiplier is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloudDrift {
    /// Multiplier only shifts where the layer is drawn; stored drift is never
    /// touched.
    #[default]
    Stable,
    /// Multiplier is folded into the stored drift on every layer of every
    /// frame, so clouds slow down geometrically and end up parked.
    Compounding,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudParticle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub drift_speed: f32,
    pub opacity: f32,
    // Per-layer parallax lag behind `x`, kept inside the viewport width.
    lags: Vec<f32>,
}

impl CloudParticle {
    pub fn spawn(viewport: Viewport, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random::<f32>() * viewport.width_f32(),
            y: rng.random::<f32>() * viewport.height_f32() / 2.0,
            radius: rng.random::<f32>() * 50.0 + 20.0,
            drift_speed: rng.random::<f32>() * 0.5 - 0.25,
            opacity: rng.random::<f32>() * 0.6 + 0.4,
            lags: Vec::new(),
        }
    }

    /// Moves one frame and wraps horizontally. Each layer's lag grows by the
    /// share of the drift that layer does not follow.
    pub fn advance(&mut self, viewport: Viewport, layers: &[CloudLayer]) {
        let width = viewport.width_f32();
        self.x += self.drift_speed;
        if self.x > width {
            self.x = 0.0;
        } else if self.x < 0.0 {
            self.x = width;
        }

        self.lags.resize(layers.len(), 0.0);
        for (lag, layer) in self.lags.iter_mut().zip(layers) {
            let next = *lag + self.drift_speed * (1.0 - layer.speed_multiplier);
            let wrapped = if width > 0.0 { next.rem_euclid(width) } else { 0.0 };
            *lag = if wrapped >= width { 0.0 } else { wrapped };
        }
    }

    /// Where layer `layer` draws this cloud: as if it had always moved at the
    /// layer's fraction of its own drift.
    fn parallax_x(&self, layer: usize, width: f32) -> f32 {
        let lag = self.lags.get(layer).copied().unwrap_or(0.0);
        if width <= 0.0 || lag == 0.0 {
            return self.x;
        }
        (self.x - lag).rem_euclid(width)
    }

    fn draw_at(&self, surface: &mut impl Surface, x: f32) -> Result<(), CanvasError> {
        surface.fill_radial_gradient(
            Point::new(x, self.y),
            self.radius,
            Rgba::WHITE.with_alpha(self.opacity),
            Rgba::WHITE.with_alpha(0.0),
        )
    }
}

/// Live clouds. Sized by cloudiness, independent of wind.
#[derive(Debug, Default)]
pub struct CloudField {
    clouds: Vec<CloudParticle>,
}

impl CloudField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn clouds(&self) -> &[CloudParticle] {
        &self.clouds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    pub fn reinitialize(&mut self, count: usize, viewport: Viewport, rng: &mut impl Rng) {
        let fresh = (0..count)
            .map(|_| CloudParticle::spawn(viewport, rng))
            .collect::<Vec<_>>();
        self.clouds = fresh;
        debug!(count, "cloud field reinitialized");
    }

    pub fn advance_frame(&mut self, viewport: Viewport, layers: &[CloudLayer]) {
        for cloud in &mut self.clouds {
            cloud.advance(viewport, layers);
        }
    }

    /// Draws each cloud once per layer at the layer's opacity. Global alpha is
    /// back at 1 afterwards. Returns the number of skipped draws.
    pub fn render_layered(
        &mut self,
        surface: &mut impl Surface,
        layers: &[CloudLayer],
        drift: CloudDrift,
    ) -> usize {
        let width = surface.viewport().width_f32();
        let mut skipped = 0;
        for (layer_index, layer) in layers.iter().enumerate() {
            for (index, cloud) in self.clouds.iter_mut().enumerate() {
                let x = match drift {
                    CloudDrift::Compounding => {
                        cloud.drift_speed *= layer.speed_multiplier;
                        cloud.x
                    }
                    CloudDrift::Stable => cloud.parallax_x(layer_index, width),
                };
                surface.set_global_alpha(layer.opacity);
                let result = cloud.draw_at(surface, x);
                surface.set_global_alpha(1.0);
                if let Err(err) = result {
                    trace!(index, %err, "skipping cloud");
                    skipped += 1;
                }
            }
        }
        skipped
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::ui::canvas::{DrawLog, DrawOp};

    fn viewport() -> Viewport {
        Viewport::new(400, 300)
    }

    fn field(count: usize) -> CloudField {
        let mut field = CloudField::new();
        field.reinitialize(count, viewport(), &mut StdRng::seed_from_u64(3));
        field
    }

    fn cloud(x: f32, drift_speed: f32) -> CloudParticle {
        CloudParticle {
            x,
            y: 40.0,
            radius: 30.0,
            drift_speed,
            opacity: 0.7,
            lags: Vec::new(),
        }
    }

    #[test]
    fn reinitialize_builds_exact_count_in_upper_half() {
        let field = field(50);
        assert_eq!(field.len(), 50);
        for cloud in field.clouds() {
            assert!((0.0..=150.0).contains(&cloud.y));
            assert!((20.0..70.0).contains(&cloud.radius));
            assert!((-0.25..0.25).contains(&cloud.drift_speed));
            assert!((0.4..1.0).contains(&cloud.opacity));
        }
    }

    #[test]
    fn advance_wraps_horizontally_without_vertical_motion() {
        let mut right = cloud(399.9, 0.2);
        right.advance(viewport(), &DEFAULT_LAYERS);
        assert!(right.x.abs() < f32::EPSILON);
        assert!((right.y - 40.0).abs() < f32::EPSILON);

        let mut left = cloud(0.1, -0.2);
        left.advance(viewport(), &DEFAULT_LAYERS);
        assert!((left.x - 400.0).abs() < f32::EPSILON);
    }

    #[test]
    fn layered_render_draws_each_cloud_once_per_layer() {
        let mut field = field(10);
        let mut log = DrawLog::new(viewport());
        let skipped = field.render_layered(&mut log, &DEFAULT_LAYERS, CloudDrift::Stable);
        assert_eq!(skipped, 0);
        assert_eq!(log.gradients(), 30);

        let alphas = log
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::RadialGradient { alpha, .. } => Some(*alpha),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert!(alphas[..10].iter().all(|a| (a - 0.3).abs() < 1e-6));
        assert!(alphas[10..20].iter().all(|a| (a - 0.5).abs() < 1e-6));
        assert!(alphas[20..].iter().all(|a| (a - 0.8).abs() < 1e-6));
        assert!((log.global_alpha() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn gradient_fades_from_cloud_opacity_to_clear() {
        let mut field = CloudField {
            clouds: vec![cloud(100.0, 0.1)],
        };
        let mut log = DrawLog::new(viewport());
        field.render_layered(&mut log, &DEFAULT_LAYERS[..1], CloudDrift::Stable);
        let DrawOp::RadialGradient {
            radius,
            inner,
            outer,
            ..
        } = log.ops[0]
        else {
            panic!("expected a gradient, got {:?}", log.ops[0]);
        };
        assert!((radius - 30.0).abs() < f32::EPSILON);
        assert!((inner.a - 0.7).abs() < f32::EPSILON);
        assert!(outer.a.abs() < f32::EPSILON);
    }

    #[test]
    fn stable_drift_is_not_modified_by_rendering() {
        let mut field = field(8);
        let before = field
            .clouds()
            .iter()
            .map(|c| c.drift_speed)
            .collect::<Vec<_>>();
        for _ in 0..20 {
            field.advance_frame(viewport(), &DEFAULT_LAYERS);
            let mut log = DrawLog::new(viewport());
            field.render_layered(&mut log, &DEFAULT_LAYERS, CloudDrift::Stable);
        }
        let after = field
            .clouds()
            .iter()
            .map(|c| c.drift_speed)
            .collect::<Vec<_>>();
        assert_eq!(before, after);
    }

    #[test]
    fn stable_layers_sit_at_parallax_offsets() {
        let mut field = CloudField {
            clouds: vec![cloud(100.0, 0.25)],
        };
        for _ in 0..40 {
            field.advance_frame(viewport(), &DEFAULT_LAYERS);
        }
        // Moved 10 px; a layer at 0.2 should appear to have moved 2 px.
        let mut log = DrawLog::new(viewport());
        field.render_layered(&mut log, &DEFAULT_LAYERS[..1], CloudDrift::Stable);
        let DrawOp::RadialGradient { center, .. } = log.ops[0] else {
            panic!("expected a gradient");
        };
        assert!((field.clouds()[0].x - 110.0).abs() < 1e-3);
        assert!((center.x - 102.0).abs() < 1e-3);
    }

    #[test]
    fn layer_lag_stays_bounded_over_long_sessions() {
        let mut cloud = cloud(100.0, 0.25);
        let layer = DEFAULT_LAYERS[0];
        let step = f64::from(0.25_f32 * (1.0 - layer.speed_multiplier));
        let frames = 100_000_u32;
        for _ in 0..frames {
            cloud.advance(viewport(), &DEFAULT_LAYERS);
        }

        assert!(cloud.lags.iter().all(|lag| (0.0..400.0).contains(lag)));
        let expected = (f64::from(frames) * step).rem_euclid(400.0);
        let diff = (f64::from(cloud.lags[0]) - expected).abs();
        assert!(diff.min(400.0 - diff) < 2.0, "lag {} vs {expected}", cloud.lags[0]);

        let drawn = cloud.parallax_x(0, 400.0);
        assert!((0.0..=400.0).contains(&drawn));
    }

    #[test]
    fn compounding_drift_decays_every_frame() {
        let mut field = CloudField {
            clouds: vec![cloud(100.0, 0.2)],
        };
        let mut log = DrawLog::new(viewport());
        field.render_layered(&mut log, &DEFAULT_LAYERS, CloudDrift::Compounding);
        // 0.2 * 0.2 * 0.4 * 0.6
        assert!((field.clouds()[0].drift_speed - 0.0096).abs() < 1e-6);

        for _ in 0..10 {
            field.render_layered(&mut log, &DEFAULT_LAYERS, CloudDrift::Compounding);
        }
        assert!(field.clouds()[0].drift_speed.abs() < 1e-9);
    }

    #[test]
    fn compounding_draws_at_stored_position() {
        let mut field = CloudField {
            clouds: vec![cloud(123.0, 0.2)],
        };
        let mut log = DrawLog::new(viewport());
        field.render_layered(&mut log, &DEFAULT_LAYERS, CloudDrift::Compounding);
        assert!(log.ops.iter().all(|op| matches!(
            op,
            DrawOp::RadialGradient { center, .. } if (center.x - 123.0).abs() < f32::EPSILON
        )));
    }

    #[test]
    fn bad_cloud_is_skipped_and_alpha_restored() {
        let mut broken = cloud(10.0, 0.0);
        broken.radius = f32::NAN;
        let mut field = CloudField {
            clouds: vec![broken, cloud(50.0, 0.0)],
        };
        let mut log = DrawLog::new(viewport());
        let skipped = field.render_layered(&mut log, &DEFAULT_LAYERS, CloudDrift::Stable);
        assert_eq!(skipped, 3);
        assert_eq!(log.gradients(), 3);
        assert!((log.global_alpha() - 1.0).abs() < f32::EPSILON);
    }
}
