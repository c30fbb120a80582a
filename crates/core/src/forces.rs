use std::fmt;

/// Strength below which a side is considered eliminated.
pub const DEPLETION_THRESHOLD: f64 = 1e-6;

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Red,
    Blue,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => f.write_str("RED"),
            Side::Blue => f.write_str("BLUE"),
        }
    }
}

/// Which sides fell below [`DEPLETION_THRESHOLD`] in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depletion {
    Red,
    Blue,
    Both,
}

impl Depletion {
    /// Returns `true` if `side` was eliminated.
    #[must_use]
    pub fn includes(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Depletion::Both, _) | (Depletion::Red, Side::Red) | (Depletion::Blue, Side::Blue)
        )
    }
}

/// The RED and BLUE strengths at a single step.
///
/// Strengths are plain reals. They are never clamped, so a law that
/// overshoots past zero produces negative values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forces {
    pub red: f64,
    pub blue: f64,
}

impl Forces {
    #[must_use]
    pub const fn new(red: f64, blue: f64) -> Self {
        Self { red, blue }
    }

    /// Returns the strength of `side`.
    #[must_use]
    pub fn strength(&self, side: Side) -> f64 {
        match side {
            Side::Red => self.red,
            Side::Blue => self.blue,
        }
    }

    /// Reports which sides are strictly below [`DEPLETION_THRESHOLD`].
    ///
    /// Returns `None` while both sides remain in the fight. NaN strengths
    /// never count as depleted.
    #[must_use]
    pub fn depletion(&self) -> Option<Depletion> {
        match (
            self.red < DEPLETION_THRESHOLD,
            self.blue < DEPLETION_THRESHOLD,
        ) {
            (true, true) => Some(Depletion::Both),
            (true, false) => Some(Depletion::Red),
            (false, true) => Some(Depletion::Blue),
            (false, false) => None,
        }
    }

    /// Declares the winner for these strengths.
    ///
    /// RED wins only with strictly greater strength; ties go to BLUE.
    #[must_use]
    pub fn winner(&self) -> Side {
        if self.red > self.blue {
            Side::Red
        } else {
            Side::Blue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depletion_is_strict() {
        assert_eq!(Forces::new(1.0, 1.0).depletion(), None);
        assert_eq!(Forces::new(DEPLETION_THRESHOLD, 5.0).depletion(), None);
        assert_eq!(Forces::new(0.0, 5.0).depletion(), Some(Depletion::Red));
        assert_eq!(Forces::new(5.0, -3.0).depletion(), Some(Depletion::Blue));
        assert_eq!(Forces::new(0.0, 0.0).depletion(), Some(Depletion::Both));
    }

    #[test]
    fn nan_is_not_depleted() {
        assert_eq!(Forces::new(f64::NAN, 5.0).depletion(), None);
    }

    #[test]
    fn depletion_includes_sides() {
        assert!(Depletion::Both.includes(Side::Red));
        assert!(Depletion::Both.includes(Side::Blue));
        assert!(Depletion::Red.includes(Side::Red));
        assert!(!Depletion::Red.includes(Side::Blue));
        assert!(!Depletion::Blue.includes(Side::Red));
    }

    #[test]
    fn red_needs_strictly_more_to_win() {
        assert_eq!(Forces::new(10.0, 9.0).winner(), Side::Red);
        assert_eq!(Forces::new(9.0, 10.0).winner(), Side::Blue);
        assert_eq!(Forces::new(10.0, 10.0).winner(), Side::Blue);
        assert_eq!(Forces::new(-1.0, -2.0).winner(), Side::Red);
    }

    #[test]
    fn sides_display_in_upper_case() {
        assert_eq!(Side::Red.to_string(), "RED");
        assert_eq!(Side::Blue.to_string(), "BLUE");
    }
}
