use super::wind_direction_label;

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    (f64::from(celsius) * 9.0 / 5.0 + 32.0).round() as i32
}

#[must_use]
pub fn format_temperature(celsius: i32) -> String {
    format!(
        "Temperature: {celsius}°C / {}°F",
        celsius_to_fahrenheit(celsius)
    )
}

#[must_use]
pub fn format_precipitation(intensity: u8) -> String {
    format!("Precipitation: {intensity}%")
}

#[must_use]
pub fn format_wind(speed: f32) -> String {
    if speed == 0.0 {
        return "Wind: Calm".to_string();
    }
    format!("Wind: {} m/s ({})", speed.abs(), wind_direction_label(speed))
}

#[must_use]
pub fn format_cloudiness(cloudiness: u8) -> String {
    format!("Cloudiness: {cloudiness}%")
}
