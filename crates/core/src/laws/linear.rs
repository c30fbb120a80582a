use crate::{AttritionLaw, Forces, LawKind};

/// Lanchester's linear law (unaimed, area fire).
///
/// Each side's losses are proportional to the product of both strengths:
///
/// ```text
/// R[t+1] = R[t] − b_l · B[t] · R[t]
/// B[t+1] = B[t] − r_l · B[t] · R[t]
/// ```
///
/// Both updates read the pre-step strengths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearLaw {
    /// Combat efficiency of RED units.
    pub r_l: f64,
    /// Combat efficiency of BLUE units.
    pub b_l: f64,
}

impl AttritionLaw for LinearLaw {
    fn step(&self, current: &Forces) -> Forces {
        let exchange = current.blue * current.red;
        Forces {
            red: current.red - self.b_l * exchange,
            blue: current.blue - self.r_l * exchange,
        }
    }

    fn kind(&self) -> LawKind {
        LawKind::Linear
    }
}
