//! Engine configuration, host settings, and command-line parsing.

use bevy::prelude::*;
use std::{fmt, str::FromStr, time::Duration};
use thiserror::Error;

use crate::game::{ARENA_HEIGHT, ARENA_WIDTH, INITIAL_BIKE, MOVE_INTERVAL};

/// Errors raised while building a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidGrid { width: i32, height: i32 },
    #[error("starting bike does not fit in a {width}x{height} grid")]
    StartOutsideGrid { width: i32, height: i32 },
    #[error("base tick interval must be non-zero")]
    ZeroTickInterval,
    #[error("unknown bike color: {0}")]
    UnknownColor(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Parameters of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub base_tick: Duration,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            grid_width: ARENA_WIDTH,
            grid_height: ARENA_HEIGHT,
            base_tick: MOVE_INTERVAL,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.grid_width, self.grid_height);
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidGrid { width, height });
        }
        if INITIAL_BIKE.iter().any(|cell| !cell.is_within(width, height)) {
            return Err(ConfigError::StartOutsideGrid { width, height });
        }
        if self.base_tick.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

/// Bike paint. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BikeColor {
    Red,
    #[default]
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl BikeColor {
    pub const ALL: [BikeColor; 6] = [
        BikeColor::Red,
        BikeColor::Orange,
        BikeColor::Yellow,
        BikeColor::Green,
        BikeColor::Blue,
        BikeColor::Purple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BikeColor::Red => "red",
            BikeColor::Orange => "orange",
            BikeColor::Yellow => "yellow",
            BikeColor::Green => "green",
            BikeColor::Blue => "blue",
            BikeColor::Purple => "purple",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            BikeColor::Red => Color::srgb_u8(0xff, 0x00, 0x00),
            BikeColor::Orange => Color::srgb_u8(0xff, 0x88, 0x00),
            BikeColor::Yellow => Color::srgb_u8(0xff, 0xff, 0x00),
            BikeColor::Green => Color::srgb_u8(0x00, 0xff, 0x00),
            BikeColor::Blue => Color::srgb_u8(0x00, 0x88, 0xff),
            BikeColor::Purple => Color::srgb_u8(0x88, 0x00, 0xff),
        }
    }
}

impl fmt::Display for BikeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BikeColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        BikeColor::ALL
            .into_iter()
            .find(|color| color.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownColor(s.to_string()))
    }
}

/// Host-side presentation settings, handed to the renderer at startup.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub bike_color: BikeColor,
}

/// Parses `[--color <name>] [--seed <u64>]`.
pub fn parse_args<I>(args: I) -> Result<(Settings, EngineConfig), ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut settings = Settings::default();
    let mut config = EngineConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--color" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--color"))?;
                settings.bike_color = value.parse()?;
            }
            "--seed" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(value.clone()))?;
                config.seed = Some(seed);
            }
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }

    config.validate()?;
    Ok((settings, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.base_tick, Duration::from_millis(150));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        for (width, height) in [(0, 30), (40, 0), (-3, 10), (0, 0)] {
            let config = EngineConfig {
                grid_width: width,
                grid_height: height,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidGrid { width, height })
            );
        }
    }

    #[test]
    fn grid_must_hold_the_starting_bike() {
        let config = EngineConfig {
            grid_width: 10,
            grid_height: 30,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::StartOutsideGrid {
                width: 10,
                height: 30
            })
        );
    }

    #[test]
    fn zero_tick_is_rejected() {
        let config = EngineConfig {
            base_tick: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn colors_parse_case_insensitively() {
        assert_eq!("Purple".parse::<BikeColor>(), Ok(BikeColor::Purple));
        assert_eq!(" blue ".parse::<BikeColor>(), Ok(BikeColor::Blue));
        assert_eq!(
            "teal".parse::<BikeColor>(),
            Err(ConfigError::UnknownColor("teal".into()))
        );
        assert_eq!(BikeColor::default(), BikeColor::Orange);
    }

    #[test]
    fn parse_args_reads_color_and_seed() {
        let (settings, config) = parse_args(args(&["--color", "green", "--seed", "7"])).unwrap();
        assert_eq!(settings.bike_color, BikeColor::Green);
        assert_eq!(config.seed, Some(7));

        let (settings, config) = parse_args(Vec::new()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn parse_args_reports_bad_input() {
        assert_eq!(
            parse_args(args(&["--color"])),
            Err(ConfigError::MissingValue("--color"))
        );
        assert_eq!(
            parse_args(args(&["--seed", "abc"])),
            Err(ConfigError::InvalidSeed("abc".into()))
        );
        assert_eq!(
            parse_args(args(&["--fast"])),
            Err(ConfigError::UnknownArgument("--fast".into()))
        );
    }
}
