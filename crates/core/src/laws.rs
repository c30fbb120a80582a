//! The three supported attrition laws.
//!
//! Each law is a plain coefficient struct implementing
//! [`AttritionLaw`](crate::AttritionLaw). Coefficients are taken as given;
//! no law validates signs or ranges.

mod linear;
mod modernized;
mod square;

pub use linear::LinearLaw;
pub use modernized::ModernizedLaw;
pub use square::SquareLaw;
