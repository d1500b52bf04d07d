use crate::error::SaagError;
use crate::model::{LabField, LabPanel};
use rust_decimal::Decimal;

/// Accepted entry range for a numeric field, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl FieldRange {
    const fn up_to(max: u32) -> FieldRange {
        FieldRange {
            min: Decimal::ZERO,
            max: Decimal::from_parts(max, 0, 0, false, 0),
        }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Entry range for `field`, or `None` for non-numeric fields.
pub fn range_for(field: LabField) -> Option<FieldRange> {
    let range = match field {
        LabField::SerumAlbumin | LabField::AscitesAlbumin => FieldRange::up_to(8),
        LabField::SerumProtein => FieldRange::up_to(12),
        LabField::AscitesProtein => FieldRange::up_to(10),
        LabField::Pmn | LabField::MnCount => FieldRange::up_to(100_000),
        LabField::SerumLdh | LabField::LdhUln => FieldRange::up_to(10_000),
        LabField::AscitesLdh => FieldRange::up_to(5_000),
        LabField::SerumGlucose => FieldRange::up_to(1_000),
        LabField::AscitesGlucose => FieldRange::up_to(500),
        LabField::RbcCount => FieldRange::up_to(1_000_000),
        LabField::Rivalta | LabField::Color | LabField::Turbidity => return None,
    };
    Some(range)
}

/// Check every numeric value against its entry range.
///
/// The interpreter accepts any value; this is for callers that collect
/// values from people and want to reject obvious entry mistakes.
pub fn check_panel(panel: &LabPanel) -> Result<(), SaagError> {
    for field in LabField::ALL {
        let (Some(value), Some(range)) = (panel.number(*field), range_for(*field)) else {
            continue;
        };
        if !range.contains(value) {
            return Err(SaagError::OutOfRange {
                field: field.label().to_string(),
                value,
                min: range.min,
                max: range.max,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ranges() {
        assert_eq!(range_for(LabField::SerumProtein).unwrap().max, dec!(12));
        assert_eq!(range_for(LabField::RbcCount).unwrap().max, dec!(1000000));
        assert!(range_for(LabField::Color).is_none());
    }

    #[test]
    fn test_valid_panel_passes() {
        let panel = LabPanel {
            serum_albumin: Some(dec!(3.0)),
            ascites_ldh: Some(dec!(5000)),
            pmn: Some(dec!(0)),
            ..Default::default()
        };
        assert!(check_panel(&panel).is_ok());
    }

    #[test]
    fn test_out_of_range_reported() {
        let panel = LabPanel {
            serum_albumin: Some(dec!(30)),
            ..Default::default()
        };
        match check_panel(&panel) {
            Err(SaagError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "Serum albumin");
                assert_eq!(value, dec!(30));
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_rejected() {
        let panel = LabPanel {
            pmn: Some(dec!(-1)),
            ..Default::default()
        };
        assert!(check_panel(&panel).is_err());
    }
}
