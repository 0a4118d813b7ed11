//! Derived assessments consuming solver output
//!
//! Rating percentage, operating risk, icing/snow flags and the sag display
//! metric. All are deterministic rule tables or bounded formulas.

pub mod icing;
pub mod rating;
pub mod risk;
pub mod sag;

pub use icing::{
    classify_icing, classify_icing_snow, classify_snow, icing_ranges, IcingLevel, IcingSnowState,
    SnowLikelihood,
};
pub use rating::{rating_percent, MAX_RATING_PERCENT};
pub use risk::{classify_risk, RiskInputs, RiskLevel};
pub use sag::{estimate_sag, SagParameters};
