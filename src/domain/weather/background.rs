use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Top-to-bottom sky gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundGradient {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl BackgroundGradient {
    #[must_use]
    pub fn css(&self) -> String {
        format!("linear-gradient(to bottom, {}, {})", self.top, self.bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundBand {
    SunnyClear,
    Mild,
    Cool,
    HeavyFreeze,
    Freeze,
    Storm,
    Overcast,
}

impl BackgroundBand {
    #[must_use]
    pub fn gradient(self) -> BackgroundGradient {
        let (top, bottom) = match self {
            BackgroundBand::SunnyClear => (Rgb(0x87, 0xce, 0xeb), Rgb(0xf0, 0xe6, 0x8c)),
            BackgroundBand::Mild => (Rgb(0x6a, 0xb3, 0xf1), Rgb(0xc2, 0xd8, 0xef)),
            BackgroundBand::Cool => (Rgb(0x8e, 0xca, 0xe6), Rgb(0x21, 0x9e, 0xbc)),
            BackgroundBand::HeavyFreeze => (Rgb(0xd6, 0xe6, 0xf2), Rgb(0xa9, 0xc9, 0xd9)),
            BackgroundBand::Freeze => (Rgb(0xb3, 0xd4, 0xe0), Rgb(0x60, 0x9d, 0xbb)),
            BackgroundBand::Storm => (Rgb(0x4a, 0x90, 0xe2), Rgb(0x1e, 0x1e, 0x2f)),
            BackgroundBand::Overcast => (Rgb(0x6b, 0x8e, 0x23), Rgb(0x55, 0x6b, 0x2f)),
        };
        BackgroundGradient { top, bottom }
    }
}

/// First matching band wins; the order of the checks is significant.
#[must_use]
pub fn background_band(temperature: i32, intensity: u8) -> BackgroundBand {
    if temperature > 20 && intensity == 0 {
        BackgroundBand::SunnyClear
    } else if temperature > 10 && temperature <= 20 {
        BackgroundBand::Mild
    } else if temperature > 0 && temperature <= 10 {
        BackgroundBand::Cool
    } else if temperature <= 0 && intensity > 50 {
        BackgroundBand::HeavyFreeze
    } else if temperature <= 0 {
        BackgroundBand::Freeze
    } else if intensity > 50 {
        BackgroundBand::Storm
    } else {
        BackgroundBand::Overcast
    }
}
