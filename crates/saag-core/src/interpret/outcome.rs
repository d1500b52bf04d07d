use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Differential diagnosis bucket selected by the SAAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaagCategory {
    /// SAAG ≥ 1.1 and ascitic protein < 2.5.
    PortalLowProtein,
    /// SAAG ≥ 1.1 and ascitic protein ≥ 2.5.
    PortalHighProtein,
    /// SAAG ≥ 1.1 without an ascitic protein value.
    PortalUnclassified,
    /// SAAG < 1.1.
    NonPortal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SbpRisk {
    /// PMN ≥ 250 cells/µL.
    Suspected,
    /// 100 ≤ PMN < 250 cells/µL.
    Borderline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidType {
    Exudate,
    Transudate,
}

impl fmt::Display for FluidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluidType::Exudate => write!(f, "Exudate"),
            FluidType::Transudate => write!(f, "Transudate"),
        }
    }
}

/// One of the Light sub-criteria, adapted for ascitic fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightCriterion {
    /// Ascitic / serum total protein.
    ProteinRatio,
    /// Ascitic / serum LDH.
    LdhRatio,
    /// Ascitic LDH against two thirds of the serum ULN.
    LdhVsUln,
}

/// Evaluation of a single Light sub-criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightCriterionResult {
    pub criterion: LightCriterion,
    /// Ratio for the ratio criteria, ascitic LDH (U/L) for `LdhVsUln`.
    pub value: Decimal,
    /// Threshold the value is compared against; the LDH cut-off for `LdhVsUln`.
    pub threshold: Decimal,
    /// True when `value > threshold`.
    pub supports_exudate: bool,
}

/// Full interpretation of one [`LabPanel`](crate::model::LabPanel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Ascitic albumin estimated from serum albumin, serum and ascitic protein.
    pub ascites_albumin_derived: Option<Decimal>,
    /// Measured ascitic albumin if given, otherwise the derived estimate.
    pub ascites_albumin_used: Option<Decimal>,
    /// Serum-ascites albumin gradient.
    pub saag: Option<Decimal>,
    pub saag_category: Option<SaagCategory>,
    pub sbp_risk: Option<SbpRisk>,
    /// Light sub-criteria that could be evaluated, in evaluation order.
    pub light_criteria: Vec<LightCriterionResult>,
    /// Light verdict; present only when a verdict line was emitted.
    pub fluid_type: Option<FluidType>,
    /// One line per evaluated Light sub-criterion plus supportive notes.
    pub light_details: Vec<String>,
    /// SAAG bucket narrative followed by the Light verdict narrative.
    pub impressions: Vec<String>,
    /// SBP alert (zero or one entry).
    pub flags: Vec<String>,
    /// Macroscopic and cytology advisories.
    pub extra_notes: Vec<String>,
}
