//! Clinical cut-offs used by the interpreter.

use rust_decimal::Decimal;

/// SAAG at or above this value (g/dL) implicates portal hypertension.
pub const SAAG_PORTAL: Decimal = Decimal::from_parts(11, 0, 0, false, 1);
/// Ascitic total protein (g/dL) separating the two portal-hypertension buckets.
pub const ASCITES_PROTEIN_HIGH: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// PMN count (cells/µL) diagnostic of spontaneous bacterial peritonitis.
pub const PMN_SBP: Decimal = Decimal::from_parts(250, 0, 0, false, 0);
/// Lower bound of the borderline PMN range.
pub const PMN_BORDERLINE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

pub const PROTEIN_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
pub const LDH_RATIO: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Ascitic glucose (mg/dL) below which an inflammatory process is supported.
pub const ASCITES_GLUCOSE_LOW: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
/// Ascitic/serum glucose fraction below which exudate is supported.
pub const GLUCOSE_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// RBC count (cells/µL) above which the tap is considered hemorrhagic.
pub const RBC_HEMORRHAGIC: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);
/// MN count (cells/µL) at which mononuclear predominance is reported.
pub const MN_PREDOMINANCE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Ascitic triglyceride level (mg/dL) confirming chylous ascites.
pub const CHYLOUS_TRIGLYCERIDE: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Cut-off for ascitic LDH as two thirds of the serum upper limit of normal.
pub fn ldh_uln_cutoff(uln: Decimal) -> Option<Decimal> {
    uln.checked_mul(Decimal::TWO)?.checked_div(Decimal::from(3))
}
