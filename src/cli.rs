#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::ui::clouds::CloudDrift;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum CloudDriftArg {
    /// Layers drift at fixed parallax offsets
    #[default]
    Stable,
    /// Layer multipliers compound into the stored drift every frame
    Compounding,
}

impl From<CloudDriftArg> for CloudDrift {
    fn from(value: CloudDriftArg) -> Self {
        match value {
            CloudDriftArg::Stable => CloudDrift::Stable,
            CloudDriftArg::Compounding => CloudDrift::Compounding,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-canvas",
    version,
    about = "Interactive particle weather visualization"
)]
pub struct Cli {
    /// Initial temperature in °C (-20..40)
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-20..=40)
    )]
    pub temperature: i32,

    /// Initial precipitation intensity in percent
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub intensity: u8,

    /// Initial wind speed in m/s, negative blows west
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub wind: f32,

    /// Initial cloud coverage in percent
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub cloudiness: u8,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Seed for particle placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// How cloud layer speed multipliers are applied
    #[arg(long, value_enum, default_value_t = CloudDriftArg::Stable)]
    pub cloud_drift: CloudDriftArg,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Write tracing output to this file (filter via RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the current readout to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Print the one-shot readout as JSON
    #[arg(long, requires = "one_shot")]
    pub json: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.wind.is_finite() {
            anyhow::bail!("--wind must be a finite number");
        }
        Ok(())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }
}
