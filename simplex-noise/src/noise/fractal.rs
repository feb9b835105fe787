//! Multi-octave fractal Brownian motion (fBm) built on [`SimplexNoise`].

use crate::config::{ConfigError, NoiseSettings};
use crate::noise::SimplexNoise;

/// Octave-summed simplex noise.
///
/// Each octave samples at `lacunarity` times the previous frequency with
/// `persistence` times the previous weight. The sum is divided by the total
/// weight, so the output keeps the range of a single octave scaled by
/// `amplitude`.
#[derive(Debug, Clone)]
pub struct FractalNoise {
    simplex: SimplexNoise,
    settings: NoiseSettings,
    /// `(frequency, weight)` of every octave.
    octaves: Vec<(f64, f64)>,
    /// `amplitude` divided by the sum of octave weights.
    scale: f64,
}

impl FractalNoise {
    /// Create a fractal sampler, rejecting settings that fail
    /// [`NoiseSettings::validate`].
    #[tracing::instrument(level = "debug", skip_all, fields(octaves = settings.octaves), err)]
    pub fn new(settings: NoiseSettings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let octaves: Vec<(f64, f64)> = (0..i32::from(settings.octaves))
            .map(|octave| {
                (
                    settings.frequency * settings.lacunarity.powi(octave),
                    settings.persistence.powi(octave),
                )
            })
            .collect();
        let weight_sum: f64 = octaves.iter().map(|&(_, weight)| weight).sum();
        let scale = settings.amplitude / weight_sum;

        Ok(Self {
            simplex: SimplexNoise::new(),
            settings,
            octaves,
            scale,
        })
    }

    /// The settings this sampler was built from.
    #[must_use]
    pub const fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    /// Sample 1D fractal noise at `x`.
    #[must_use]
    pub fn sample_1d(&self, x: f64) -> f64 {
        let x = x + self.settings.offset_x;
        let sum: f64 = self
            .octaves
            .iter()
            .map(|&(frequency, weight)| weight * self.simplex.get_value_1d(x * frequency))
            .sum();
        sum * self.scale
    }

    /// Sample 2D fractal noise at `(x, y)`.
    #[must_use]
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let x = x + self.settings.offset_x;
        let y = y + self.settings.offset_y;
        let sum: f64 = self
            .octaves
            .iter()
            .map(|&(frequency, weight)| {
                weight * self.simplex.get_value_2d(x * frequency, y * frequency)
            })
            .sum();
        sum * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fractal(settings: NoiseSettings) -> FractalNoise {
        FractalNoise::new(settings).expect("settings should be valid")
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "a single unit octave is the identity")]
    fn test_default_settings_match_simplex() {
        let noise = fractal(NoiseSettings::default());
        let simplex = SimplexNoise::new();

        for i in -200..200 {
            let x = f64::from(i) * 0.173;
            let y = f64::from(i) * -0.091 + 3.0;
            assert_eq!(noise.sample_1d(x), simplex.get_value_1d(x));
            assert_eq!(noise.sample_2d(x, y), simplex.get_value_2d(x, y));
        }
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "offsets and power-of-two frequencies are exact")]
    fn test_offset_and_frequency() {
        let noise = fractal(NoiseSettings {
            frequency: 0.5,
            offset_x: 10.0,
            offset_y: -4.0,
            ..NoiseSettings::default()
        });
        let simplex = SimplexNoise::new();

        for i in 0..100 {
            let x = f64::from(i) * 0.25;
            assert_eq!(noise.sample_1d(x), simplex.get_value_1d((x + 10.0) * 0.5));
            assert_eq!(
                noise.sample_2d(x, x),
                simplex.get_value_2d((x + 10.0) * 0.5, (x - 4.0) * 0.5)
            );
        }
    }

    #[test]
    fn test_octaves_are_weighted_and_normalized() {
        let noise = fractal(NoiseSettings {
            octaves: 2,
            ..NoiseSettings::default()
        });
        let simplex = SimplexNoise::new();

        for i in 0..100 {
            let x = f64::from(i) * 0.37;
            let expected =
                (simplex.get_value_1d(x) + 0.5 * simplex.get_value_1d(x * 2.0)) / 1.5;
            assert!((noise.sample_1d(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_amplitude_bounds_1d_output() {
        let noise = fractal(NoiseSettings {
            amplitude: 3.0,
            octaves: 6,
            frequency: 0.1,
            ..NoiseSettings::default()
        });

        for i in 0..5000 {
            let v = noise.sample_1d(f64::from(i) * 0.07);
            assert!((-3.0..=3.0).contains(&v), "fractal value {v} out of range");
        }
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let result = FractalNoise::new(NoiseSettings {
            octaves: 0,
            ..NoiseSettings::default()
        });
        assert!(matches!(result, Err(ConfigError::Octaves(0))));
    }

    #[test]
    fn test_rejects_settings_that_overflow_per_octave() {
        for settings in [
            NoiseSettings {
                persistence: 1e300,
                octaves: 3,
                ..NoiseSettings::default()
            },
            NoiseSettings {
                lacunarity: 1e200,
                octaves: 3,
                ..NoiseSettings::default()
            },
        ] {
            let result = FractalNoise::new(settings);
            assert!(
                matches!(result, Err(ConfigError::OctaveOverflow { .. })),
                "got {result:?}"
            );
        }
    }

    #[test]
    fn test_large_but_finite_settings_sample_finite() {
        let noise = fractal(NoiseSettings {
            persistence: 1e150,
            octaves: 2,
            ..NoiseSettings::default()
        });
        assert!(noise.sample_1d(1.3).is_finite());
        assert!(noise.sample_2d(1.3, 5.3).is_finite());
    }
}
