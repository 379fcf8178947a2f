use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    domain::weather::WeatherState,
    ui::{
        canvas::Viewport,
        clouds::{CloudDrift, CloudField, CloudLayer, DEFAULT_LAYERS},
        particles::ParticleField,
    },
};

/// Everything the animation loop draws, plus the random source it draws with.
#[derive(Debug)]
pub struct Scene {
    pub(crate) viewport: Viewport,
    pub(crate) particles: ParticleField,
    pub(crate) clouds: CloudField,
    pub(crate) layers: Vec<CloudLayer>,
    pub(crate) drift: CloudDrift,
    pub(crate) rng: StdRng,
}

impl Scene {
    /// Empty scene. Without a seed the random source is seeded from the OS.
    #[must_use]
    pub fn new(viewport: Viewport, drift: CloudDrift, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            viewport,
            particles: ParticleField::new(),
            clouds: CloudField::new(),
            layers: DEFAULT_LAYERS.to_vec(),
            drift,
            rng,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    #[must_use]
    pub fn clouds(&self) -> &CloudField {
        &self.clouds
    }

    pub fn populate(&mut self, weather: &WeatherState) {
        self.reinitialize_particles(weather);
        self.reinitialize_clouds(weather);
    }

    pub fn reinitialize_particles(&mut self, weather: &WeatherState) {
        self.particles.reinitialize(
            weather.particle_count(),
            weather.precipitation_kind(),
            weather.wind_speed,
            self.viewport,
            &mut self.rng,
        );
    }

    pub fn reinitialize_clouds(&mut self, weather: &WeatherState) {
        self.clouds
            .reinitialize(weather.cloud_count(), self.viewport, &mut self.rng);
    }

    pub fn sync_wind(&mut self, wind_speed: f32) {
        self.particles.sync_wind(wind_speed);
    }

    /// Both fields are rebuilt at the new size.
    pub fn resize(&mut self, viewport: Viewport, weather: &WeatherState) {
        debug!(width = viewport.width, height = viewport.height, "scene resized");
        self.viewport = viewport;
        self.populate(weather);
    }
}
