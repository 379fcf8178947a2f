#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use crate::domain::weather::WeatherState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Temperature,
    Precipitation,
    Wind,
    Cloudiness,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Temperature,
        Control::Precipitation,
        Control::Wind,
        Control::Cloudiness,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Control::Temperature => "Temperature",
            Control::Precipitation => "Precipitation",
            Control::Wind => "Wind",
            Control::Cloudiness => "Cloudiness",
        }
    }

    #[must_use]
    pub fn slider(self) -> Slider {
        match self {
            Control::Temperature => Slider::new(-20.0, 40.0, 1.0, 5.0),
            Control::Precipitation | Control::Cloudiness => Slider::new(0.0, 100.0, 1.0, 10.0),
            Control::Wind => Slider::new(-10.0, 10.0, 0.5, 2.0),
        }
    }

    fn index(self) -> usize {
        Control::ALL
            .iter()
            .position(|control| *control == self)
            .unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Control {
        Control::ALL[(self.index() + 1) % Control::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Control {
        Control::ALL[(self.index() + Control::ALL.len() - 1) % Control::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub coarse_step: f32,
}

impl Slider {
    const fn new(min: f32, max: f32, step: f32, coarse_step: f32) -> Self {
        Self {
            min,
            max,
            step,
            coarse_step,
        }
    }

    /// Position of `value` along the track, 0 at `min` and 1 at `max`.
    #[must_use]
    pub fn fraction(&self, value: f32) -> f32 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Which parts of the scene a control change invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneUpdate {
    None,
    Precipitation,
    Wind,
    Clouds,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Up,
    Down,
    CoarseUp,
    CoarseDown,
}

#[must_use]
pub fn control_value(weather: &WeatherState, control: Control) -> f32 {
    match control {
        Control::Temperature => weather.temperature as f32,
        Control::Precipitation => f32::from(weather.intensity),
        Control::Wind => weather.wind_speed,
        Control::Cloudiness => f32::from(weather.cloudiness),
    }
}

#[must_use]
pub fn value_label(weather: &WeatherState, control: Control) -> String {
    match control {
        Control::Temperature => format!("{}°C", weather.temperature),
        Control::Precipitation => format!("{}%", weather.intensity),
        Control::Wind => format!("{} m/s", weather.wind_speed),
        Control::Cloudiness => format!("{}%", weather.cloudiness),
    }
}

/// Moves one slider to `value` (clamped to its track) and writes the result
/// into `weather` the way the page controls do: the three precipitation
/// sliders are stored together, cloudiness on its own.
pub fn set_control(weather: &mut WeatherState, control: Control, value: f32) -> SceneUpdate {
    let slider = control.slider();
    let value = value.clamp(slider.min, slider.max);
    let before = *weather;
    match control {
        Control::Temperature => {
            weather.set_from_controls(value.round() as i32, weather.intensity, weather.wind_speed);
        }
        Control::Precipitation => {
            weather.set_from_controls(weather.temperature, value.round() as u8, weather.wind_speed);
        }
        Control::Wind => {
            weather.set_from_controls(weather.temperature, weather.intensity, value);
        }
        Control::Cloudiness => weather.set_cloudiness(value.round() as u8),
    }

    if *weather == before {
        SceneUpdate::None
    } else {
        match control {
            Control::Temperature | Control::Precipitation => SceneUpdate::Precipitation,
            Control::Wind => SceneUpdate::Wind,
            Control::Cloudiness => SceneUpdate::Clouds,
        }
    }
}

/// Focus and adjustment for the four sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPanel {
    focus: Control,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            focus: Control::Temperature,
        }
    }
}

impl ControlPanel {
    #[must_use]
    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn nudge(&self, weather: &mut WeatherState, nudge: Nudge) -> SceneUpdate {
        let slider = self.focus.slider();
        let delta = match nudge {
            Nudge::Up => slider.step,
            Nudge::Down => -slider.step,
            Nudge::CoarseUp => slider.coarse_step,
            Nudge::CoarseDown => -slider.coarse_step,
        };
        let current = control_value(weather, self.focus);
        set_control(weather, self.focus, current + delta)
    }
}
