use super::*;

#[test]
fn precipitation_kind_boundaries_lean_toward_mixed() {
    assert_eq!(classify_precipitation_kind(-3), PrecipitationKind::Snow);
    assert_eq!(classify_precipitation_kind(-2), PrecipitationKind::Mixed);
    assert_eq!(classify_precipitation_kind(0), PrecipitationKind::Mixed);
    assert_eq!(classify_precipitation_kind(2), PrecipitationKind::Mixed);
    assert_eq!(classify_precipitation_kind(3), PrecipitationKind::Rain);
}

#[test]
fn condition_prefers_sunny_only_when_warm_and_dry() {
    assert_eq!(classify_condition(25, 0), Condition::Sunny);
    assert_eq!(classify_condition(25, 1), Condition::Rain);
    assert_eq!(classify_condition(20, 0), Condition::Rain);
    assert_eq!(classify_condition(3, 0), Condition::Rain);
    assert_eq!(classify_condition(2, 40), Condition::Mixed);
    assert_eq!(classify_condition(-2, 40), Condition::Mixed);
    assert_eq!(classify_condition(-3, 40), Condition::Snow);
}

#[test]
fn wind_labels_follow_bucket_table() {
    let cases = [
        (0.0, "Calm"),
        (0.5, "E"),
        (2.0, "E"),
        (3.0, "NE"),
        (4.0, "NE"),
        (4.5, "N"),
        (-0.5, "W"),
        (-2.0, "W"),
        (-3.0, "NW"),
        (-4.0, "NW"),
        (-5.0, "S"),
    ];
    for (speed, label) in cases {
        assert_eq!(wind_direction_label(speed), label, "speed {speed}");
    }
}

#[test]
fn wind_label_falls_back_to_variable_for_nan() {
    assert_eq!(wind_direction_label(f32::NAN), "Variable");
}

#[test]
fn fahrenheit_conversion_rounding() {
    assert_eq!(celsius_to_fahrenheit(0), 32);
    assert_eq!(celsius_to_fahrenheit(20), 68);
    // 28.4 rounds down
    assert_eq!(celsius_to_fahrenheit(-2), 28);
    assert_eq!(celsius_to_fahrenheit(-40), -40);
    assert_eq!(celsius_to_fahrenheit(37), 99);
}

#[test]
fn formatted_strings_match_panel_text() {
    assert_eq!(format_temperature(-5), "Temperature: -5°C / 23°F");
    assert_eq!(format_precipitation(60), "Precipitation: 60%");
    assert_eq!(format_wind(0.0), "Wind: Calm");
    assert_eq!(format_wind(3.5), "Wind: 3.5 m/s (NE)");
    assert_eq!(format_wind(-5.0), "Wind: 5 m/s (S)");
    assert_eq!(format_cloudiness(75), "Cloudiness: 75%");
}

#[test]
fn background_bands_are_checked_in_priority_order() {
    assert_eq!(background_band(25, 0), BackgroundBand::SunnyClear);
    assert_eq!(background_band(15, 0), BackgroundBand::Mild);
    assert_eq!(background_band(20, 80), BackgroundBand::Mild);
    assert_eq!(background_band(10, 10), BackgroundBand::Cool);
    assert_eq!(background_band(0, 51), BackgroundBand::HeavyFreeze);
    assert_eq!(background_band(0, 50), BackgroundBand::Freeze);
    assert_eq!(background_band(-10, 0), BackgroundBand::Freeze);
    assert_eq!(background_band(30, 80), BackgroundBand::Storm);
    assert_eq!(background_band(30, 20), BackgroundBand::Overcast);
}

#[test]
fn background_css_uses_lowercase_hex() {
    assert_eq!(
        BackgroundBand::SunnyClear.gradient().css(),
        "linear-gradient(to bottom, #87ceeb, #f0e68c)"
    );
    assert_eq!(
        BackgroundBand::Storm.gradient().css(),
        "linear-gradient(to bottom, #4a90e2, #1e1e2f)"
    );
}

#[test]
fn default_state_matches_initial_sliders() {
    let state = WeatherState::default();
    assert_eq!(state.temperature, 0);
    assert_eq!(state.intensity, 50);
    assert!(state.wind_speed.abs() < f32::EPSILON);
    assert_eq!(state.cloudiness, 50);
    assert!(state.fog_enabled());
}

#[test]
fn warm_dry_readout_is_sunny_without_fog() {
    let state = WeatherState::new(25, 0, 0.0, 10);
    let readout = state.readout(IconMode::Ascii);
    assert_eq!(readout.condition, Condition::Sunny);
    assert_eq!(readout.icon, "SUN");
    assert!(!readout.fog);
    assert_eq!(state.particle_count(), 0);
}

#[test]
fn cold_wet_state_snows_with_fog() {
    let state = WeatherState::new(-5, 60, 0.0, 50);
    assert_eq!(state.precipitation_kind(), PrecipitationKind::Snow);
    assert_eq!(state.condition(), Condition::Snow);
    assert!(state.fog_enabled());
    assert_eq!(state.particle_count(), 60);
}

#[test]
fn setters_store_raw_values() {
    let mut state = WeatherState::default();
    state.set_from_controls(12, 7, -1.5);
    state.set_cloudiness(90);
    assert_eq!(state, WeatherState::new(12, 7, -1.5, 90));
}
