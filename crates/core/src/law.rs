use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::Forces;

/// A rule that advances both sides' strengths by one discrete step.
///
/// Implementations define how each side's losses depend on the current
/// strengths and the law's coefficients. The step is a pure function of its
/// inputs: no clamping, validation, or threshold checks happen here.
pub trait AttritionLaw {
    /// Returns the strengths after one step from `current`.
    #[must_use]
    fn step(&self, current: &Forces) -> Forces;

    /// Identifies which law this is.
    fn kind(&self) -> LawKind;
}

impl<L: AttritionLaw + ?Sized> AttritionLaw for &L {
    fn step(&self, current: &Forces) -> Forces {
        (**self).step(current)
    }

    fn kind(&self) -> LawKind {
        (**self).kind()
    }
}

/// Identifies one of the supported attrition laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LawKind {
    #[default]
    Square,
    Linear,
    Modernized,
}

impl LawKind {
    /// All laws in menu order.
    pub const ALL: [LawKind; 3] = [LawKind::Square, LawKind::Linear, LawKind::Modernized];

    /// The lowercase identifier used in scenario files and flags.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LawKind::Square => "square",
            LawKind::Linear => "linear",
            LawKind::Modernized => "modernized",
        }
    }

    /// The one-based position of this law in the selection menu.
    #[must_use]
    pub fn menu_number(self) -> u8 {
        match self {
            LawKind::Square => 1,
            LawKind::Linear => 2,
            LawKind::Modernized => 3,
        }
    }

    /// Whether the law reads the linear-law coefficients `r_l` and `b_l`.
    #[must_use]
    pub fn uses_linear_coefficients(self) -> bool {
        matches!(self, LawKind::Linear | LawKind::Modernized)
    }

    /// Whether the law reads the square-law coefficients `r_s` and `b_s`.
    #[must_use]
    pub fn uses_square_coefficients(self) -> bool {
        matches!(self, LawKind::Square | LawKind::Modernized)
    }
}

impl fmt::Display for LawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a law identifier cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attrition law `{0}`, expected square, linear, modernized, or 1-3")]
pub struct ParseLawKindError(pub String);

impl FromStr for LawKind {
    type Err = ParseLawKindError;

    /// Accepts a law name (case-insensitive) or its menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LawKind::ALL
            .into_iter()
            .find(|kind| {
                trimmed.eq_ignore_ascii_case(kind.name())
                    || trimmed == kind.menu_number().to_string()
            })
            .ok_or_else(|| ParseLawKindError(trimmed.to_owned()))
    }
}
