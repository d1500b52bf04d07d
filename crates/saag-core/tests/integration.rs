//! End-to-end tests for loading a lab panel and interpreting it through the
//! public API.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use saag_core::interpret::{
    compute, FluidType, InterpretOptions, LightCriterion, Locale, SaagCategory, SbpRisk,
};
use saag_core::model::LabPanel;
use saag_core::{interpret, load_panel, InputFormat};

fn bedside_panel() -> LabPanel {
    LabPanel {
        serum_albumin: Some(dec!(3.0)),
        serum_protein: Some(dec!(6.5)),
        ascites_protein: Some(dec!(2.0)),
        serum_ldh: Some(dec!(220)),
        ascites_ldh: Some(dec!(180)),
        ldh_uln: Some(dec!(250)),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Albumin gradient
// ---------------------------------------------------------------------------
#[test]
fn cirrhotic_pattern_low_protein_bucket() {
    let panel = LabPanel {
        serum_albumin: Some(dec!(3.0)),
        serum_protein: Some(dec!(6.5)),
        ascites_protein: Some(dec!(2.0)),
        ..Default::default()
    };
    let result = compute(&panel);

    let derived = result.ascites_albumin_derived.unwrap();
    let saag = result.saag.unwrap();
    // (3.0 / 6.5) * 2.0 ≈ 0.923, SAAG ≈ 2.077
    assert!((derived - dec!(0.923)).abs() < dec!(0.001));
    assert!((saag - dec!(2.077)).abs() < dec!(0.001));
    assert_eq!(result.ascites_albumin_used, Some(derived));
    assert_eq!(result.saag_category, Some(SaagCategory::PortalLowProtein));
    assert!(result.impressions[0].starts_with("SAAG ≥1.1 g/dL & ascitic protein <2.5 g/dL"));
}

#[test]
fn measured_albumin_overrides_estimate() {
    let panel = LabPanel {
        ascites_albumin_override: Some(dec!(0.4)),
        ..bedside_panel()
    };
    let result = compute(&panel);
    assert_eq!(result.ascites_albumin_used, Some(dec!(0.4)));
    assert_eq!(result.saag, Some(dec!(2.6)));
    assert_eq!(
        result.ascites_albumin_derived,
        Some(dec!(3.0) / dec!(6.5) * dec!(2.0))
    );
}

#[test]
fn zero_serum_protein_suppresses_everything() {
    let panel = LabPanel {
        serum_albumin: Some(dec!(3.0)),
        serum_protein: Some(dec!(0)),
        ascites_protein: Some(dec!(0)),
        ..Default::default()
    };
    let result = compute(&panel);
    assert_eq!(result.ascites_albumin_derived, None);
    assert_eq!(result.saag, None);
    assert!(result.impressions.is_empty());
    assert!(result.light_details.is_empty());
}

// ---------------------------------------------------------------------------
// Light criteria
// ---------------------------------------------------------------------------
#[test]
fn ldh_criteria_make_exudate_despite_low_protein_ratio() {
    let result = compute(&bedside_panel());

    let kinds: Vec<LightCriterion> = result.light_criteria.iter().map(|c| c.criterion).collect();
    assert_eq!(
        kinds,
        vec![
            LightCriterion::ProteinRatio,
            LightCriterion::LdhRatio,
            LightCriterion::LdhVsUln
        ]
    );

    // 2.0 / 6.5 = 0.3077 ≤ 0.5
    assert!(!result.light_criteria[0].supports_exudate);
    // 180 / 220 = 0.818 > 0.6
    assert!(result.light_criteria[1].supports_exudate);
    // 180 > 2/3 × 250 = 166.67
    assert!(result.light_criteria[2].supports_exudate);
    assert!((result.light_criteria[2].threshold - dec!(166.67)).abs() < dec!(0.01));

    assert_eq!(result.fluid_type, Some(FluidType::Exudate));
    assert_eq!(result.impressions.len(), 2);
    assert!(result.impressions[1].contains("Exudate"));
}

// ---------------------------------------------------------------------------
// SBP
// ---------------------------------------------------------------------------
#[test]
fn pmn_boundaries() {
    let risk = |pmn: Decimal| {
        compute(&LabPanel {
            pmn: Some(pmn),
            ..Default::default()
        })
    };

    let at_threshold = risk(dec!(250));
    assert_eq!(at_threshold.sbp_risk, Some(SbpRisk::Suspected));
    assert_eq!(at_threshold.flags.len(), 1);

    let just_below = risk(dec!(249.999));
    assert_eq!(just_below.sbp_risk, Some(SbpRisk::Borderline));
    assert_eq!(just_below.flags.len(), 1);
    assert!(just_below.flags[0].contains("borderline"));

    let low = risk(dec!(99.999));
    assert_eq!(low.sbp_risk, None);
    assert!(low.flags.is_empty());
}

// ---------------------------------------------------------------------------
// Macroscopic notes
// ---------------------------------------------------------------------------
#[test]
fn milky_color_yields_single_note() {
    let panel = LabPanel {
        color: Some("milky appearance".into()),
        turbidity: None,
        rbc_count: Some(dec!(0)),
        mn_count: Some(dec!(0)),
        ..Default::default()
    };
    let result = compute(&panel);
    assert_eq!(result.extra_notes.len(), 1);
    assert!(result.extra_notes[0].contains("triglycerides"));
}

#[test]
fn chylous_color_and_turbidity_both_reported() {
    let panel = LabPanel {
        color: Some("Susu".into()),
        turbidity: Some("CHYLOUS".into()),
        ..Default::default()
    };
    assert_eq!(compute(&panel).extra_notes.len(), 2);
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------
#[test]
fn identical_input_gives_identical_output() {
    let panel = LabPanel {
        pmn: Some(dec!(310)),
        rivalta_positive: Some(true),
        ascites_glucose: Some(dec!(30)),
        serum_glucose: Some(dec!(110)),
        color: Some("bloody".into()),
        rbc_count: Some(dec!(25000)),
        ..bedside_panel()
    };
    let options = InterpretOptions::default();
    let first = serde_json::to_vec(&interpret(&panel, &options)).unwrap();
    let second = serde_json::to_vec(&interpret(&panel, &options)).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------
#[test]
fn indonesian_sheet_end_to_end() {
    let sheet = "\
Albumin serum (g/dL): 3,0
Protein total serum (g/dL): 6,5
Protein asites (g/dL): 2,0
PMN (sel/µL): 0
LDH serum (U/L): 220
LDH serum ULN (U/L): 250
LDH asites (U/L): 180
Gula darah serum (mg/dL): 100
Glukosa asites (mg/dL): 80
Rivalta positif?: negatif
Warna: milky/chylous
Kekeruhan: —
MN (mononuklear) (sel/µL): 0
Eritrosit (RBC) (sel/µL): 0
";
    let parsed = load_panel(sheet.as_bytes(), InputFormat::Sheet).unwrap();
    assert!(parsed.skipped_lines.is_empty());
    let expected = LabPanel {
        rivalta_positive: Some(false),
        pmn: Some(dec!(0)),
        serum_glucose: Some(dec!(100)),
        ascites_glucose: Some(dec!(80)),
        color: Some("milky/chylous".into()),
        mn_count: Some(dec!(0)),
        rbc_count: Some(dec!(0)),
        ..bedside_panel()
    };
    assert_eq!(parsed.panel, expected);

    let options = InterpretOptions { locale: Locale::Id };
    let result = interpret(&parsed.panel, &options);
    assert_eq!(result.saag_category, Some(SaagCategory::PortalLowProtein));
    assert_eq!(result.fluid_type, Some(FluidType::Exudate));
    assert!(result.flags.is_empty());
    assert_eq!(result.light_details.len(), 4);
    assert_eq!(
        result.light_details[3],
        "Rivalta: Negatif (positif → mendukung eksudat)"
    );
    assert!(result.impressions[1].contains("Eksudat"));
    assert_eq!(result.extra_notes.len(), 1);
}

#[test]
fn json_panel_loads() {
    let json = br#"{"serum_albumin": 2.1, "ascites_albumin_override": "1.6", "pmn": 40}"#;
    let parsed = load_panel(json, InputFormat::Json).unwrap();
    let result = compute(&parsed.panel);
    assert_eq!(result.saag, Some(dec!(0.5)));
    assert_eq!(result.saag_category, Some(SaagCategory::NonPortal));
    assert!(result.fluid_type.is_none());
}

#[test]
fn empty_json_panel_rejected() {
    assert!(load_panel(b"{}", InputFormat::Json).is_err());
    assert!(load_panel(b"not json", InputFormat::Json).is_err());
}

#[test]
fn format_from_extension() {
    use std::path::Path;
    assert_eq!(InputFormat::from_path(Path::new("a.JSON")), InputFormat::Json);
    assert_eq!(InputFormat::from_path(Path::new("labs.xlsx")), InputFormat::Xlsx);
    assert_eq!(InputFormat::from_path(Path::new("labs.txt")), InputFormat::Sheet);
    assert_eq!(InputFormat::from_path(Path::new("labs")), InputFormat::Sheet);
}
