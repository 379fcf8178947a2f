use serde::Serialize;

use crate::cli::IconMode;

/// What falls from the sky. Decided by temperature alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecipitationKind {
    Rain,
    Snow,
    Mixed,
}

/// Category shown by the icon. Uses different thresholds than
/// [`PrecipitationKind`]; the two are kept independent on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Rain,
    Snow,
    Mixed,
}

impl Condition {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Mixed => "Mixed",
        }
    }
}

#[must_use]
pub fn classify_precipitation_kind(temperature: i32) -> PrecipitationKind {
    match temperature {
        t if t < -2 => PrecipitationKind::Snow,
        -2..=2 => PrecipitationKind::Mixed,
        _ => PrecipitationKind::Rain,
    }
}

#[must_use]
pub fn classify_condition(temperature: i32, intensity: u8) -> Condition {
    if temperature > 20 && intensity == 0 {
        Condition::Sunny
    } else if temperature > 2 {
        Condition::Rain
    } else if temperature < -2 {
        Condition::Snow
    } else {
        Condition::Mixed
    }
}

/// Bucketed compass label for a signed wind speed. Positive and negative
/// buckets are not mirror images.
#[must_use]
pub fn wind_direction_label(speed: f32) -> &'static str {
    if speed == 0.0 {
        "Calm"
    } else if speed > 0.0 && speed <= 2.0 {
        "E"
    } else if speed > 2.0 && speed <= 4.0 {
        "NE"
    } else if speed > 4.0 {
        "N"
    } else if speed < 0.0 && speed >= -2.0 {
        "W"
    } else if speed < -2.0 && speed >= -4.0 {
        "NW"
    } else if speed < -4.0 {
        "S"
    } else {
        "Variable"
    }
}

#[must_use]
pub fn condition_icon(condition: Condition, mode: IconMode) -> &'static str {
    let (ascii, emoji, unicode) = match condition {
        Condition::Sunny => ("SUN", "☀️", "☀"),
        Condition::Rain => ("RAN", "🌧️", "☂"),
        Condition::Snow => ("SNW", "❄️", "❄"),
        Condition::Mixed => ("MIX", "🌦️", "☔"),
    };
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}
