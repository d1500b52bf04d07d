pub mod engine;
pub mod messages;
pub mod outcome;
pub mod thresholds;

pub use engine::{compute, compute_with, InterpretOptions};
pub use messages::Locale;
pub use outcome::{
    FluidType, Interpretation, LightCriterion, LightCriterionResult, SaagCategory, SbpRisk,
};
