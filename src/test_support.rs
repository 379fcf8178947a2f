use crate::{
    app::state::AppState,
    cli::{Cli, CloudDriftArg},
};

pub(crate) fn test_cli() -> Cli {
    Cli {
        temperature: 0,
        intensity: 50,
        wind: 0.0,
        cloudiness: 50,
        fps: 30,
        seed: Some(42),
        cloud_drift: CloudDriftArg::Stable,
        ascii_icons: true,
        emoji_icons: false,
        log_file: None,
        one_shot: false,
        json: false,
    }
}

pub(crate) fn test_state() -> AppState {
    AppState::new(&test_cli())
}
