use serde::Serialize;

mod background;
mod conditions;
mod conversions;

pub use background::{BackgroundBand, BackgroundGradient, Rgb, background_band};
pub use conditions::{
    Condition, PrecipitationKind, classify_condition, classify_precipitation_kind, condition_icon,
    wind_direction_label,
};
pub use conversions::{
    celsius_to_fahrenheit, format_cloudiness, format_precipitation, format_temperature,
    format_wind,
};

use crate::cli::IconMode;

pub const DEFAULT_TEMPERATURE: i32 = 0;
pub const DEFAULT_INTENSITY: u8 = 50;
pub const DEFAULT_WIND_SPEED: f32 = 0.0;
pub const DEFAULT_CLOUDINESS: u8 = 50;

/// Authoritative slider values. Everything drawn on screen is derived from this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherState {
    pub temperature: i32,
    pub intensity: u8,
    pub wind_speed: f32,
    pub cloudiness: u8,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            intensity: DEFAULT_INTENSITY,
            wind_speed: DEFAULT_WIND_SPEED,
            cloudiness: DEFAULT_CLOUDINESS,
        }
    }
}

impl WeatherState {
    #[must_use]
    pub fn new(temperature: i32, intensity: u8, wind_speed: f32, cloudiness: u8) -> Self {
        Self {
            temperature,
            intensity,
            wind_speed,
            cloudiness,
        }
    }

    /// Stores the precipitation-related controls as given. Range checks belong
    /// to the controls.
    pub fn set_from_controls(&mut self, temperature: i32, intensity: u8, wind_speed: f32) {
        self.temperature = temperature;
        self.intensity = intensity;
        self.wind_speed = wind_speed;
    }

    pub fn set_cloudiness(&mut self, cloudiness: u8) {
        self.cloudiness = cloudiness;
    }

    #[must_use]
    pub fn precipitation_kind(&self) -> PrecipitationKind {
        classify_precipitation_kind(self.temperature)
    }

    #[must_use]
    pub fn condition(&self) -> Condition {
        classify_condition(self.temperature, self.intensity)
    }

    #[must_use]
    pub fn fog_enabled(&self) -> bool {
        self.temperature <= 0
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        usize::from(self.intensity)
    }

    #[must_use]
    pub fn cloud_count(&self) -> usize {
        usize::from(self.cloudiness)
    }

    #[must_use]
    pub fn background(&self) -> BackgroundGradient {
        background_band(self.temperature, self.intensity).gradient()
    }

    #[must_use]
    pub fn readout(&self, icons: IconMode) -> Readout {
        let condition = self.condition();
        let background = self.background();
        Readout {
            condition,
            icon: condition_icon(condition, icons),
            temperature: format_temperature(self.temperature),
            precipitation: format_precipitation(self.intensity),
            wind: format_wind(self.wind_speed),
            cloudiness: format_cloudiness(self.cloudiness),
            background: background.css(),
            fog: self.fog_enabled(),
        }
    }
}

/// Display-layer view of a [`WeatherState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readout {
    pub condition: Condition,
    pub icon: &'static str,
    pub temperature: String,
    pub precipitation: String,
    pub wind: String,
    pub cloudiness: String,
    pub background: String,
    pub fog: bool,
}

impl Readout {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{} {}", self.icon, self.condition.label()),
            self.temperature.clone(),
            self.precipitation.clone(),
            self.wind.clone(),
            self.cloudiness.clone(),
            format!("Background: {}", self.background),
            format!("Fog: {}", if self.fog { "on" } else { "off" }),
        ]
    }
}

#[cfg(test)]
mod tests;
