use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serum and ascitic fluid laboratory values for one paracentesis.
///
/// Every field is optional; `None` means "not measured". The record is
/// compared by value, so it can key a cache of interpretations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabPanel {
    /// Serum albumin (g/dL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serum_albumin: Option<Decimal>,
    /// Serum total protein (g/dL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serum_protein: Option<Decimal>,
    /// Ascitic total protein (g/dL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascites_protein: Option<Decimal>,
    /// Measured ascitic albumin (g/dL); replaces the derived estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascites_albumin_override: Option<Decimal>,
    /// Polymorphonuclear cells (cells/µL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmn: Option<Decimal>,
    /// Serum LDH (U/L).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serum_ldh: Option<Decimal>,
    /// Upper limit of normal for serum LDH (U/L).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldh_uln: Option<Decimal>,
    /// Ascitic LDH (U/L).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascites_ldh: Option<Decimal>,
    /// Serum glucose (mg/dL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serum_glucose: Option<Decimal>,
    /// Ascitic glucose (mg/dL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascites_glucose: Option<Decimal>,
    /// Rivalta test; `None` when not performed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rivalta_positive: Option<bool>,
    /// Free-text fluid color as written by the operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Free-text turbidity as written by the operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbidity: Option<String>,
    /// Mononuclear cells (cells/µL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mn_count: Option<Decimal>,
    /// Red blood cells (cells/µL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rbc_count: Option<Decimal>,
}

impl LabPanel {
    pub fn is_empty(&self) -> bool {
        *self == LabPanel::default()
    }

    pub fn number(&self, field: LabField) -> Option<Decimal> {
        match field {
            LabField::SerumAlbumin => self.serum_albumin,
            LabField::SerumProtein => self.serum_protein,
            LabField::AscitesProtein => self.ascites_protein,
            LabField::AscitesAlbumin => self.ascites_albumin_override,
            LabField::Pmn => self.pmn,
            LabField::SerumLdh => self.serum_ldh,
            LabField::LdhUln => self.ldh_uln,
            LabField::AscitesLdh => self.ascites_ldh,
            LabField::SerumGlucose => self.serum_glucose,
            LabField::AscitesGlucose => self.ascites_glucose,
            LabField::MnCount => self.mn_count,
            LabField::RbcCount => self.rbc_count,
            LabField::Rivalta | LabField::Color | LabField::Turbidity => None,
        }
    }

    /// Assign a numeric field. Returns false if `field` is not numeric.
    pub fn set_number(&mut self, field: LabField, value: Decimal) -> bool {
        let slot = match field {
            LabField::SerumAlbumin => &mut self.serum_albumin,
            LabField::SerumProtein => &mut self.serum_protein,
            LabField::AscitesProtein => &mut self.ascites_protein,
            LabField::AscitesAlbumin => &mut self.ascites_albumin_override,
            LabField::Pmn => &mut self.pmn,
            LabField::SerumLdh => &mut self.serum_ldh,
            LabField::LdhUln => &mut self.ldh_uln,
            LabField::AscitesLdh => &mut self.ascites_ldh,
            LabField::SerumGlucose => &mut self.serum_glucose,
            LabField::AscitesGlucose => &mut self.ascites_glucose,
            LabField::MnCount => &mut self.mn_count,
            LabField::RbcCount => &mut self.rbc_count,
            LabField::Rivalta | LabField::Color | LabField::Turbidity => return false,
        };
        *slot = Some(value);
        true
    }

    /// Assign a free-text field. Returns false if `field` is not a text field.
    pub fn set_text(&mut self, field: LabField, value: String) -> bool {
        match field {
            LabField::Color => self.color = Some(value),
            LabField::Turbidity => self.turbidity = Some(value),
            _ => return false,
        }
        true
    }

    /// Overlay every field set in `other` onto `self`.
    pub fn merge(&mut self, other: LabPanel) {
        for field in LabField::ALL {
            if let Some(v) = other.number(*field) {
                self.set_number(*field, v);
            }
        }
        if other.rivalta_positive.is_some() {
            self.rivalta_positive = other.rivalta_positive;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.turbidity.is_some() {
            self.turbidity = other.turbidity;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Flag,
    Text,
}

/// Identifies one input of a [`LabPanel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabField {
    SerumAlbumin,
    SerumProtein,
    AscitesProtein,
    AscitesAlbumin,
    Pmn,
    SerumLdh,
    LdhUln,
    AscitesLdh,
    SerumGlucose,
    AscitesGlucose,
    Rivalta,
    Color,
    Turbidity,
    MnCount,
    RbcCount,
}

impl LabField {
    pub const ALL: &'static [LabField] = &[
        LabField::SerumAlbumin,
        LabField::SerumProtein,
        LabField::AscitesProtein,
        LabField::AscitesAlbumin,
        LabField::Pmn,
        LabField::SerumLdh,
        LabField::LdhUln,
        LabField::AscitesLdh,
        LabField::SerumGlucose,
        LabField::AscitesGlucose,
        LabField::Rivalta,
        LabField::Color,
        LabField::Turbidity,
        LabField::MnCount,
        LabField::RbcCount,
    ];

    /// JSON key of the field in a serialized [`LabPanel`].
    pub fn key(self) -> &'static str {
        match self {
            LabField::SerumAlbumin => "serum_albumin",
            LabField::SerumProtein => "serum_protein",
            LabField::AscitesProtein => "ascites_protein",
            LabField::AscitesAlbumin => "ascites_albumin_override",
            LabField::Pmn => "pmn",
            LabField::SerumLdh => "serum_ldh",
            LabField::LdhUln => "ldh_uln",
            LabField::AscitesLdh => "ascites_ldh",
            LabField::SerumGlucose => "serum_glucose",
            LabField::AscitesGlucose => "ascites_glucose",
            LabField::Rivalta => "rivalta_positive",
            LabField::Color => "color",
            LabField::Turbidity => "turbidity",
            LabField::MnCount => "mn_count",
            LabField::RbcCount => "rbc_count",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LabField::SerumAlbumin => "Serum albumin",
            LabField::SerumProtein => "Serum total protein",
            LabField::AscitesProtein => "Ascitic total protein",
            LabField::AscitesAlbumin => "Ascitic albumin (measured)",
            LabField::Pmn => "PMN",
            LabField::SerumLdh => "Serum LDH",
            LabField::LdhUln => "Serum LDH ULN",
            LabField::AscitesLdh => "Ascitic LDH",
            LabField::SerumGlucose => "Serum glucose",
            LabField::AscitesGlucose => "Ascitic glucose",
            LabField::Rivalta => "Rivalta test",
            LabField::Color => "Color",
            LabField::Turbidity => "Turbidity",
            LabField::MnCount => "MN (mononuclear)",
            LabField::RbcCount => "RBC",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            LabField::SerumAlbumin
            | LabField::SerumProtein
            | LabField::AscitesProtein
            | LabField::AscitesAlbumin => Some("g/dL"),
            LabField::Pmn | LabField::MnCount | LabField::RbcCount => Some("cells/µL"),
            LabField::SerumLdh | LabField::LdhUln | LabField::AscitesLdh => Some("U/L"),
            LabField::SerumGlucose | LabField::AscitesGlucose => Some("mg/dL"),
            LabField::Rivalta | LabField::Color | LabField::Turbidity => None,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            LabField::Rivalta => FieldKind::Flag,
            LabField::Color | LabField::Turbidity => FieldKind::Text,
            _ => FieldKind::Number,
        }
    }

    /// Cell counts are whole numbers; a `.` or `,` followed by groups of
    /// three digits separates thousands.
    pub fn is_count(self) -> bool {
        matches!(self, LabField::Pmn | LabField::MnCount | LabField::RbcCount)
    }

    /// Fields reported in whole units, where a grouped value like "1.200" has
    /// no plausible decimal reading.
    pub fn is_whole_unit(self) -> bool {
        matches!(self.unit(), Some("U/L") | Some("mg/dL"))
    }
}

impl fmt::Display for LabField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
