//! Scenario configuration.
//!
//! A [`Scenario`] bundles the selected law, the base parameters, and every
//! law's coefficients. It starts from built-in defaults, may be loaded from a
//! TOML file where every key is optional, and is then adjusted by flags or
//! interactive prompts before each run.

use std::{fs, io, path::Path};

use lanchester_core::{
    AttritionLaw, Forces, Horizon, LawKind, LinearLaw, ModernizedLaw, SquareLaw,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid scenario file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("time interval must be greater than zero")]
    ZeroTimeInterval,

    #[error("coefficient `{name}` must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },
}

/// Coefficients of the linear law, also read by the modernized law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinearCoefficients {
    /// Combat efficiency of RED units.
    pub r_l: f64,
    /// Combat efficiency of BLUE units.
    pub b_l: f64,
}

impl Default for LinearCoefficients {
    fn default() -> Self {
        Self {
            r_l: 0.00001,
            b_l: 0.00002,
        }
    }
}

/// Coefficients of the square law, also read by the modernized law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SquareCoefficients {
    /// Average number of RED units that damage each other per unit of time.
    pub r_s: f64,
    /// Average number of BLUE units that damage each other per unit of time.
    pub b_s: f64,
}

impl Default for SquareCoefficients {
    fn default() -> Self {
        Self { r_s: 0.2, b_s: 0.1 }
    }
}

/// Coefficients only the modernized law reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModernizedCoefficients {
    /// RED units camouflage ability factor.
    pub r_f: f64,
    /// BLUE units camouflage ability factor.
    pub b_f: f64,
    /// RED units ability to recognize.
    pub r_a: f64,
    /// BLUE units ability to recognize.
    pub b_a: f64,
    /// RED units information warfare ability coefficient.
    pub r_i: f64,
    /// BLUE units information warfare ability coefficient.
    pub b_i: f64,
}

impl Default for ModernizedCoefficients {
    fn default() -> Self {
        Self {
            r_f: 0.6,
            b_f: 0.2,
            r_a: 0.6,
            b_a: 0.2,
            r_i: 4.0,
            b_i: 4.0,
        }
    }
}

/// Everything needed to run one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// The selected attrition law.
    pub model: LawKind,
    /// Initial number of RED units.
    pub red: u32,
    /// Initial number of BLUE units.
    pub blue: u32,
    /// Total number of steps in the simulation.
    pub duration: u32,
    /// Time interval between steps.
    pub dt: u32,
    pub linear: LinearCoefficients,
    pub square: SquareCoefficients,
    pub modernized: ModernizedCoefficients,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            model: LawKind::Square,
            red: 8000,
            blue: 10000,
            duration: 100,
            dt: 1,
            linear: LinearCoefficients::default(),
            square: SquareCoefficients::default(),
            modernized: ModernizedCoefficients::default(),
        }
    }
}

impl Scenario {
    /// Parses a scenario from TOML, filling omitted keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid scenario.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not a valid scenario.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let scenario = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), model = %scenario.model, "loaded scenario");
        Ok(scenario)
    }

    /// Checks that the scenario can produce a meaningful run.
    ///
    /// Only the step interval and coefficient finiteness are checked; signs
    /// and ranges of coefficients are left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is zero or any coefficient is NaN or infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dt == 0 {
            return Err(ConfigError::ZeroTimeInterval);
        }

        let coefficients = [
            ("r_l", self.linear.r_l),
            ("b_l", self.linear.b_l),
            ("r_s", self.square.r_s),
            ("b_s", self.square.b_s),
            ("r_f", self.modernized.r_f),
            ("b_f", self.modernized.b_f),
            ("r_a", self.modernized.r_a),
            ("b_a", self.modernized.b_a),
            ("r_i", self.modernized.r_i),
            ("b_i", self.modernized.b_i),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteCoefficient { name, value });
            }
        }

        Ok(())
    }

    /// The initial strengths of both sides.
    #[must_use]
    pub fn initial(&self) -> Forces {
        Forces::new(f64::from(self.red), f64::from(self.blue))
    }

    /// The simulated horizon.
    #[must_use]
    pub fn horizon(&self) -> Horizon {
        Horizon::new(f64::from(self.duration), f64::from(self.dt))
    }

    #[must_use]
    pub fn square_law(&self) -> SquareLaw {
        SquareLaw {
            r_s: self.square.r_s,
            b_s: self.square.b_s,
        }
    }

    #[must_use]
    pub fn linear_law(&self) -> LinearLaw {
        LinearLaw {
            r_l: self.linear.r_l,
            b_l: self.linear.b_l,
        }
    }

    #[must_use]
    pub fn modernized_law(&self) -> ModernizedLaw {
        let ModernizedCoefficients {
            r_f,
            b_f,
            r_a,
            b_a,
            r_i,
            b_i,
        } = self.modernized;

        ModernizedLaw {
            r_l: self.linear.r_l,
            b_l: self.linear.b_l,
            r_s: self.square.r_s,
            b_s: self.square.b_s,
            r_f,
            b_f,
            r_a,
            b_a,
            r_i,
            b_i,
        }
    }

    /// The attrition law selected by [`Scenario::model`].
    #[must_use]
    pub fn law(&self) -> Box<dyn AttritionLaw> {
        match self.model {
            LawKind::Square => Box::new(self.square_law()),
            LawKind::Linear => Box::new(self.linear_law()),
            LawKind::Modernized => Box::new(self.modernized_law()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_file_uses_defaults() {
        let scenario = Scenario::from_toml_str("").unwrap();
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let scenario = Scenario::from_toml_str(
            r#"
            model = "modernized"
            red = 500
            dt = 2

            [square]
            b_s = 0.3

            [modernized]
            r_i = 1.5
            "#,
        )
        .unwrap();

        assert_eq!(scenario.model, LawKind::Modernized);
        assert_eq!(scenario.red, 500);
        assert_eq!(scenario.blue, 10000);
        assert_eq!(scenario.dt, 2);
        assert_relative_eq!(scenario.square.r_s, 0.2);
        assert_relative_eq!(scenario.square.b_s, 0.3);
        assert_relative_eq!(scenario.modernized.r_i, 1.5);
        assert_relative_eq!(scenario.modernized.b_i, 4.0);
    }

    #[test]
    fn rejects_unknown_model_and_keys() {
        assert!(matches!(
            Scenario::from_toml_str(r#"model = "quadratic""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Scenario::from_toml_str("green = 5"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Scenario::from_toml_str("red = -5"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Scenario::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let scenario = Scenario {
            dt: 0,
            ..Scenario::default()
        };
        assert!(matches!(
            scenario.validate(),
            Err(ConfigError::ZeroTimeInterval)
        ));
    }

    #[test]
    fn validate_rejects_non_finite_coefficients() {
        let mut scenario = Scenario::default();
        scenario.modernized.b_a = f64::NAN;

        let err = scenario.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonFiniteCoefficient { name: "b_a", .. }
        ));
    }

    #[test]
    fn validate_allows_negative_coefficients() {
        let mut scenario = Scenario::default();
        scenario.square.r_s = -0.5;
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn modernized_law_reuses_linear_and_square_coefficients() {
        let law = Scenario::default().modernized_law();
        assert_relative_eq!(law.r_l, 0.00001);
        assert_relative_eq!(law.b_s, 0.1);
        assert_relative_eq!(law.r_f, 0.6);
        assert_relative_eq!(law.b_i, 4.0);
    }

    #[test]
    fn law_follows_model() {
        for kind in LawKind::ALL {
            let scenario = Scenario {
                model: kind,
                ..Scenario::default()
            };
            assert_eq!(scenario.law().kind(), kind);
        }
    }

    #[test]
    fn base_parameters_convert_to_core_types() {
        let scenario = Scenario::default();
        assert_eq!(scenario.initial(), Forces::new(8000.0, 10000.0));
        assert_eq!(scenario.horizon(), Horizon::new(100.0, 1.0));
    }
}
