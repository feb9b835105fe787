//! Settings for [`FractalNoise`](crate::FractalNoise).
//!
//! Settings are plain serde data and are usually written as JSON5, so they can
//! carry comments alongside the numbers they explain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on [`NoiseSettings::octaves`].
pub const MAX_OCTAVES: u8 = 16;

/// An error that can occur while loading or validating [`NoiseSettings`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings text is not valid JSON5 or does not match the schema.
    #[error("Failed to parse noise settings: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A field holds `NaN` or an infinity.
    #[error("Noise setting `{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A field that scales coordinates or weights is zero or negative.
    #[error("Noise setting `{field}` must be positive, got {value}")]
    NonPositive {
        /// Name of the field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The octave count is outside `1..=MAX_OCTAVES`.
    #[error("Octave count must be between 1 and 16, got {0}")]
    Octaves(u8),
    /// An octave's frequency or the running weight sum overflows.
    #[error("Noise setting `{field}` overflows at octave {octave}")]
    OctaveOverflow {
        /// Name of the field driving the overflow.
        field: &'static str,
        /// First octave whose value is no longer finite.
        octave: u8,
    },
}

/// Coordinate transform and octave layering applied on top of simplex noise.
///
/// Missing fields take their [`Default`] values, which reproduce plain
/// single-octave simplex noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseSettings {
    /// Coordinate multiplier of the first octave.
    pub frequency: f64,
    /// Output multiplier.
    pub amplitude: f64,
    /// Added to x before scaling.
    pub offset_x: f64,
    /// Added to y before scaling. Unused by 1D sampling.
    pub offset_y: f64,
    /// Number of layered octaves.
    pub octaves: u8,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Weight multiplier between successive octaves.
    pub persistence: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            octaves: 1,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl NoiseSettings {
    /// Parse and validate settings from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json5::from_str(text)?;
        settings.validate()?;
        log::debug!("Loaded noise settings: {settings:?}");
        Ok(settings)
    }

    /// Check that every field is usable for sampling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("frequency", self.frequency),
            ("amplitude", self.amplitude),
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
            ("lacunarity", self.lacunarity),
            ("persistence", self.persistence),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }

        let scales = [
            ("frequency", self.frequency),
            ("lacunarity", self.lacunarity),
            ("persistence", self.persistence),
        ];
        if let Some(&(field, value)) = scales.iter().find(|(_, value)| *value <= 0.0) {
            return Err(ConfigError::NonPositive { field, value });
        }

        if !(1..=MAX_OCTAVES).contains(&self.octaves) {
            return Err(ConfigError::Octaves(self.octaves));
        }

        // Mirrors the per-octave terms FractalNoise precomputes.
        let mut weight_sum = 0.0;
        for octave in 0..self.octaves {
            let exponent = i32::from(octave);
            if !(self.frequency * self.lacunarity.powi(exponent)).is_finite() {
                return Err(ConfigError::OctaveOverflow {
                    field: "lacunarity",
                    octave,
                });
            }
            weight_sum += self.persistence.powi(exponent);
            if !weight_sum.is_finite() {
                return Err(ConfigError::OctaveOverflow {
                    field: "persistence",
                    octave,
                });
            }
        }
        Ok(())
    }
}
