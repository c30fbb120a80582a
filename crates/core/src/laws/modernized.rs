use crate::{AttritionLaw, Forces, LawKind};

/// A modernized hybrid of the square and linear laws.
///
/// Each side's losses blend an aimed-fire (square) term and an area-fire
/// (linear) term. The aimed share is `(1 − own camouflage) · opponent
/// recognition`; the remainder goes to the area-fire term. The whole loss is
/// then scaled by the opponent's information-warfare multiplier:
///
/// ```text
/// R[t+1] = R[t] − (1−r_f)·b_a·r_s·B[t]·b_i − (1 − (1−r_f)·b_a)·r_l·B[t]·R[t]·b_i
/// B[t+1] = B[t] − (1−b_f)·r_a·b_s·R[t]·r_i − (1 − (1−b_f)·r_a)·b_l·B[t]·R[t]·r_i
/// ```
///
/// Both updates read the pre-step strengths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModernizedLaw {
    /// Area-fire coefficient in RED's losses.
    pub r_l: f64,
    /// Area-fire coefficient in BLUE's losses.
    pub b_l: f64,
    /// Aimed-fire coefficient in RED's losses.
    pub r_s: f64,
    /// Aimed-fire coefficient in BLUE's losses.
    pub b_s: f64,
    /// RED camouflage ability factor.
    pub r_f: f64,
    /// BLUE camouflage ability factor.
    pub b_f: f64,
    /// RED ability to recognize targets.
    pub r_a: f64,
    /// BLUE ability to recognize targets.
    pub b_a: f64,
    /// RED information-warfare multiplier.
    pub r_i: f64,
    /// BLUE information-warfare multiplier.
    pub b_i: f64,
}

impl ModernizedLaw {
    /// Fraction of RED losses caused by BLUE's aimed fire.
    fn red_aimed_share(&self) -> f64 {
        (1.0 - self.r_f) * self.b_a
    }

    /// Fraction of BLUE losses caused by RED's aimed fire.
    fn blue_aimed_share(&self) -> f64 {
        (1.0 - self.b_f) * self.r_a
    }
}

impl AttritionLaw for ModernizedLaw {
    fn step(&self, current: &Forces) -> Forces {
        let Forces { red, blue } = *current;
        let exchange = blue * red;

        let red_share = self.red_aimed_share();
        let red_loss = red_share * self.r_s * blue * self.b_i
            + (1.0 - red_share) * self.r_l * exchange * self.b_i;

        let blue_share = self.blue_aimed_share();
        let blue_loss = blue_share * self.b_s * red * self.r_i
            + (1.0 - blue_share) * self.b_l * exchange * self.r_i;

        Forces {
            red: red - red_loss,
            blue: blue - blue_loss,
        }
    }

    fn kind(&self) -> LawKind {
        LawKind::Modernized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{LinearLaw, SquareLaw};

    fn reference_law() -> ModernizedLaw {
        ModernizedLaw {
            r_l: 0.00001,
            b_l: 0.00002,
            r_s: 0.2,
            b_s: 0.1,
            r_f: 0.6,
            b_f: 0.2,
            r_a: 0.6,
            b_a: 0.2,
            r_i: 4.0,
            b_i: 4.0,
        }
    }

    #[test]
    fn blends_aimed_and_area_fire() {
        let next = reference_law().step(&Forces::new(8000.0, 10000.0));

        // RED: 0.064·B = 640 aimed, 0.92·r_l·B·R·4 = 2944 area.
        assert_relative_eq!(next.red, 4416.0, epsilon = 1e-9);
        // BLUE: 0.192·R = 1536 aimed, 0.52·b_l·B·R·4 = 3328 area.
        assert_relative_eq!(next.blue, 5136.0, epsilon = 1e-9);
    }

    #[test]
    fn full_camouflage_reduces_to_scaled_linear_law() {
        let law = ModernizedLaw {
            r_f: 1.0,
            b_f: 1.0,
            r_i: 1.0,
            b_i: 1.0,
            ..reference_law()
        };

        // `LinearLaw` charges RED with b_l while the modernized law charges
        // RED with r_l, so the coefficients swap.
        let start = Forces::new(500.0, 700.0);
        let next = law.step(&start);
        let swapped = LinearLaw {
            r_l: law.b_l,
            b_l: law.r_l,
        }
        .step(&start);

        assert_relative_eq!(next.red, swapped.red, epsilon = 1e-9);
        assert_relative_eq!(next.blue, swapped.blue, epsilon = 1e-9);
    }

    #[test]
    fn perfect_recognition_without_camouflage_is_simultaneous_square_law() {
        let law = ModernizedLaw {
            r_f: 0.0,
            b_f: 0.0,
            r_a: 1.0,
            b_a: 1.0,
            r_i: 1.0,
            b_i: 1.0,
            ..reference_law()
        };
        let start = Forces::new(100.0, 100.0);
        let next = law.step(&start);

        // Unlike `SquareLaw`, BLUE's losses read the pre-step RED strength.
        assert_relative_eq!(next.red, 100.0 - 0.2 * 100.0, epsilon = 1e-9);
        assert_relative_eq!(next.blue, 100.0 - 0.1 * 100.0, epsilon = 1e-9);

        let sequential = SquareLaw { r_s: 0.1, b_s: 0.2 }.step(&start);
        assert_relative_eq!(sequential.red, next.red, epsilon = 1e-9);
        assert!(sequential.blue > next.blue);
    }
}
