use crate::{AttritionLaw, Forces, LawKind};

/// Lanchester's square law (aimed fire).
///
/// Each side's losses are proportional to the opponent's current strength:
///
/// ```text
/// R[t+1] = R[t] − b_s · B[t]
/// B[t+1] = B[t] − r_s · R[t+1]
/// ```
///
/// The update is sequential: BLUE's losses are computed from RED's strength
/// after RED has already taken this step's losses.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareLaw {
    /// Average number of BLUE units a RED unit disables per unit of time.
    pub r_s: f64,
    /// Average number of RED units a BLUE unit disables per unit of time.
    pub b_s: f64,
}

impl AttritionLaw for SquareLaw {
    fn step(&self, current: &Forces) -> Forces {
        let red = current.red - self.b_s * current.blue;
        let blue = current.blue - self.r_s * red;
        Forces { red, blue }
    }

    fn kind(&self) -> LawKind {
        LawKind::Square
    }
}
