use crate::model::LabField;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Map a free-form label from a lab sheet to a [`LabField`].
///
/// Steps:
/// 1. Drop parenthesized unit annotations like "(g/dL)" or "(sel/µL)"
/// 2. Lowercase, replace anything but a-z and 0-9 with underscores
/// 3. Collapse multiple underscores
/// 4. Look up in alias map (English and Indonesian labels)
pub fn normalize_label(raw: &str) -> Option<LabField> {
    let without_units = strip_unit_annotations(raw);
    let key = to_key(&without_units);
    ALIASES.get(key.as_str()).copied()
}

/// Remove "(...)" groups that contain a unit (a '/' or '%').
fn strip_unit_annotations(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')').map(|i| open + i) else {
            break;
        };
        let inner = &rest[open + 1..close];
        result.push_str(&rest[..open]);
        if !(inner.contains('/') || inner.contains('%')) {
            result.push_str(&rest[open..=close]);
        }
        rest = &rest[close + 1..];
    }
    result.push_str(rest);
    result
}

fn to_key(s: &str) -> String {
    let lower = s.trim().to_lowercase();
    let mut key = String::with_capacity(lower.len());
    let mut prev_underscore = true; // skip leading underscores
    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            key.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            key.push('_');
            prev_underscore = true;
        }
    }
    if key.ends_with('_') {
        key.pop();
    }
    key
}

static ALIASES: LazyLock<HashMap<&'static str, LabField>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    for field in LabField::ALL {
        m.insert(field.key(), *field);
    }

    // Albumin / protein
    m.insert("albumin_serum", LabField::SerumAlbumin);
    m.insert("serum_alb", LabField::SerumAlbumin);
    m.insert("alb_serum", LabField::SerumAlbumin);
    m.insert("serum_total_protein", LabField::SerumProtein);
    m.insert("total_serum_protein", LabField::SerumProtein);
    m.insert("protein_serum", LabField::SerumProtein);
    m.insert("protein_total_serum", LabField::SerumProtein);
    m.insert("ascitic_protein", LabField::AscitesProtein);
    m.insert("ascitic_total_protein", LabField::AscitesProtein);
    m.insert("ascites_total_protein", LabField::AscitesProtein);
    m.insert("protein_asites", LabField::AscitesProtein);
    m.insert("protein_total_asites", LabField::AscitesProtein);
    m.insert("ascites_albumin", LabField::AscitesAlbumin);
    m.insert("ascitic_albumin", LabField::AscitesAlbumin);
    m.insert("ascitic_albumin_measured", LabField::AscitesAlbumin);
    m.insert("measured_ascitic_albumin", LabField::AscitesAlbumin);
    m.insert("albumin_asites", LabField::AscitesAlbumin);
    m.insert("albumin_asites_terukur", LabField::AscitesAlbumin);

    // Cell counts
    m.insert("pmn_count", LabField::Pmn);
    m.insert("polymorphonuclear", LabField::Pmn);
    m.insert("polimorfonuklear", LabField::Pmn);
    m.insert("neutrophils", LabField::Pmn);
    m.insert("mn", LabField::MnCount);
    m.insert("mononuclear", LabField::MnCount);
    m.insert("mononuklear", LabField::MnCount);
    m.insert("mn_mononuclear", LabField::MnCount);
    m.insert("mn_mononuklear", LabField::MnCount);
    m.insert("rbc", LabField::RbcCount);
    m.insert("eritrosit", LabField::RbcCount);
    m.insert("eritrosit_rbc", LabField::RbcCount);
    m.insert("erythrocytes", LabField::RbcCount);
    m.insert("red_blood_cells", LabField::RbcCount);

    // LDH
    m.insert("ldh_serum", LabField::SerumLdh);
    m.insert("serum_ldh_uln", LabField::LdhUln);
    m.insert("ldh_serum_uln", LabField::LdhUln);
    m.insert("uln_ldh", LabField::LdhUln);
    m.insert("ldh_upper_limit_of_normal", LabField::LdhUln);
    m.insert("ascitic_ldh", LabField::AscitesLdh);
    m.insert("ldh_asites", LabField::AscitesLdh);

    // Glucose
    m.insert("glucose_serum", LabField::SerumGlucose);
    m.insert("blood_glucose", LabField::SerumGlucose);
    m.insert("glukosa_serum", LabField::SerumGlucose);
    m.insert("gula_darah_serum", LabField::SerumGlucose);
    m.insert("ascitic_glucose", LabField::AscitesGlucose);
    m.insert("glukosa_asites", LabField::AscitesGlucose);

    // Qualitative
    m.insert("rivalta", LabField::Rivalta);
    m.insert("rivalta_test", LabField::Rivalta);
    m.insert("rivalta_positif", LabField::Rivalta);
    m.insert("tes_rivalta", LabField::Rivalta);
    m.insert("colour", LabField::Color);
    m.insert("warna", LabField::Color);
    m.insert("appearance", LabField::Turbidity);
    m.insert("clarity", LabField::Turbidity);
    m.insert("kekeruhan", LabField::Turbidity);

    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_accepted() {
        for field in LabField::ALL {
            assert_eq!(normalize_label(field.key()), Some(*field));
        }
    }

    #[test]
    fn test_units_stripped() {
        assert_eq!(
            normalize_label("Albumin serum (g/dL)"),
            Some(LabField::SerumAlbumin)
        );
        assert_eq!(
            normalize_label("LDH serum ULN (U/L)"),
            Some(LabField::LdhUln)
        );
    }

    #[test]
    fn test_non_unit_parentheses_kept() {
        assert_eq!(
            normalize_label("MN (mononuklear) (sel/µL)"),
            Some(LabField::MnCount)
        );
        assert_eq!(
            normalize_label("Eritrosit (RBC) (sel/µL)"),
            Some(LabField::RbcCount)
        );
    }

    #[test]
    fn test_indonesian_labels() {
        assert_eq!(
            normalize_label("Protein total serum"),
            Some(LabField::SerumProtein)
        );
        assert_eq!(
            normalize_label("Gula darah serum (mg/dL)"),
            Some(LabField::SerumGlucose)
        );
        assert_eq!(normalize_label("Rivalta positif?"), Some(LabField::Rivalta));
        assert_eq!(normalize_label("Kekeruhan"), Some(LabField::Turbidity));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(normalize_label("Bilirubin"), None);
        assert_eq!(normalize_label(""), None);
    }
}
