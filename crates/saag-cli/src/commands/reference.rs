use rust_decimal::Decimal;
use saag_core::error::SaagError;
use saag_core::interpret::messages::fmt_dp;
use saag_core::interpret::thresholds;
use saag_core::interpret::{Locale, SaagCategory, SbpRisk};
use saag_core::limits::range_for;
use saag_core::model::LabField;
use std::fmt::Write;

use super::interpret::parse_locale;

struct ReferenceText {
    saag_formula: &'static str,
    albumin_estimate: &'static str,
    albumin_formula: &'static str,
    saag_algorithm: &'static str,
    light: &'static str,
    protein_ratio: &'static str,
    ldh_ratio: &'static str,
    ldh_uln: &'static str,
    supportive: &'static str,
    positive_rivalta: &'static str,
    ascitic_glucose: &'static str,
    serum_glucose: &'static str,
    sbp: &'static str,
    cutoffs: &'static str,
    chylous: &'static str,
    rbc: &'static str,
    mn: &'static str,
}

fn reference_text(locale: Locale) -> ReferenceText {
    match locale {
        Locale::En => ReferenceText {
            saag_formula: "SAAG = serum albumin - ascitic albumin (g/dL)",
            albumin_estimate: "Ascitic albumin, when not measured, is estimated as",
            albumin_formula: "(serum albumin / serum total protein) x ascitic total protein",
            saag_algorithm: "SAAG algorithm:",
            light: "Light criteria (adapted for ascites), any one supports an exudate:",
            protein_ratio: "ascitic / serum protein >",
            ldh_ratio: "ascitic / serum LDH >",
            ldh_uln: "ascitic LDH > 2/3 of the serum LDH upper limit of normal",
            supportive: "Supportive",
            positive_rivalta: "positive Rivalta",
            ascitic_glucose: "ascitic glucose <",
            serum_glucose: "x serum glucose",
            sbp: "Spontaneous bacterial peritonitis:",
            cutoffs: "Macroscopic/cytology cut-offs:",
            chylous: "chylous ascites confirmed by ascitic triglycerides >=",
            rbc: "hemorrhagic or traumatic tap",
            mn: "mononuclear predominance",
        },
        Locale::Id => ReferenceText {
            saag_formula: "SAAG = albumin serum - albumin asites (g/dL)",
            albumin_estimate: "Albumin asites, bila tidak diukur, diperkirakan sebagai",
            albumin_formula: "(albumin serum / protein total serum) x protein total asites",
            saag_algorithm: "Algoritma SAAG:",
            light: "Kriteria Light (adaptasi asites), satu kriteria cukup untuk eksudat:",
            protein_ratio: "protein asites / serum >",
            ldh_ratio: "LDH asites / serum >",
            ldh_uln: "LDH asites > 2/3 batas atas normal LDH serum",
            supportive: "Pendukung",
            positive_rivalta: "Rivalta positif",
            ascitic_glucose: "glukosa asites <",
            serum_glucose: "x glukosa serum",
            sbp: "Peritonitis bakterial spontan:",
            cutoffs: "Batas makroskopis/sitologi:",
            chylous: "asites kilosa dipastikan bila trigliserida asites >=",
            rbc: "tap hemoragik atau traumatik",
            mn: "predominan mononuklear",
        },
    }
}

/// Threshold as written in the narrative language.
fn num(locale: Locale, value: Decimal) -> String {
    let text = value.to_string();
    match locale {
        Locale::En => text,
        Locale::Id => text.replace('.', ","),
    }
}

pub fn run(lang: &str) -> Result<(), SaagError> {
    let locale = parse_locale(lang)?;
    print!("{}", format_reference(locale));
    Ok(())
}

pub fn format_reference(locale: Locale) -> String {
    let t = reference_text(locale);
    let mut out = String::new();

    let _ = writeln!(out, "{}\n", t.saag_formula);
    let _ = writeln!(out, "{}", t.albumin_estimate);
    let _ = writeln!(out, "  {}\n", t.albumin_formula);

    let _ = writeln!(out, "{}\n", t.saag_algorithm);
    for category in [
        SaagCategory::PortalLowProtein,
        SaagCategory::PortalHighProtein,
        SaagCategory::PortalUnclassified,
        SaagCategory::NonPortal,
    ] {
        let _ = writeln!(out, "  - {}", locale.saag_impression(category));
    }
    out.push('\n');

    let _ = writeln!(out, "{}\n", t.light);
    let _ = writeln!(
        out,
        "  - {} {}",
        t.protein_ratio,
        num(locale, thresholds::PROTEIN_RATIO)
    );
    let _ = writeln!(out, "  - {} {}", t.ldh_ratio, num(locale, thresholds::LDH_RATIO));
    let _ = writeln!(out, "  - {}", t.ldh_uln);
    let _ = writeln!(
        out,
        "  {}: {}, {} {} mg/dL, {} {} {}\n",
        t.supportive,
        t.positive_rivalta,
        t.ascitic_glucose,
        num(locale, thresholds::ASCITES_GLUCOSE_LOW),
        t.ascitic_glucose,
        num(locale, thresholds::GLUCOSE_RATIO),
        t.serum_glucose
    );

    let _ = writeln!(out, "{}\n", t.sbp);
    for risk in [SbpRisk::Suspected, SbpRisk::Borderline] {
        let _ = writeln!(out, "  - {}", locale.sbp_flag(risk));
    }
    out.push('\n');

    let _ = writeln!(out, "{}\n", t.cutoffs);
    let _ = writeln!(
        out,
        "  - {} {} mg/dL",
        t.chylous,
        num(locale, thresholds::CHYLOUS_TRIGLYCERIDE)
    );
    let _ = writeln!(
        out,
        "  - RBC > {} cells/uL: {}",
        num(locale, thresholds::RBC_HEMORRHAGIC),
        t.rbc
    );
    let _ = writeln!(
        out,
        "  - MN >= {} cells/uL: {}",
        num(locale, thresholds::MN_PREDOMINANCE),
        t.mn
    );

    out
}

pub fn fields() -> Result<(), SaagError> {
    println!("Accepted input fields (JSON key, label, unit, entry range):\n");

    let width = LabField::ALL
        .iter()
        .map(|f| f.key().len())
        .max()
        .unwrap_or(20);

    for field in LabField::ALL {
        let unit = field.unit().unwrap_or("");
        let range = match range_for(*field) {
            Some(r) => format!("{}-{}", fmt_dp(r.min, 0), fmt_dp(r.max, 0)),
            None => String::new(),
        };
        println!(
            "  {:<width$}  {:<28}  {:<9}  {}",
            field.key(),
            field.label(),
            unit,
            range,
            width = width
        );
    }

    println!();
    println!("Example JSON panel:");
    println!(
        r#"{{
  "serum_albumin": 3.0,
  "serum_protein": 6.5,
  "ascites_protein": 2.0,
  "pmn": 120,
  "serum_ldh": 220,
  "ldh_uln": 250,
  "ascites_ldh": 180,
  "rivalta_positive": false,
  "color": "straw"
}}"#
    );
    println!();
    println!("Text sheets use one 'label: value' per line; English and Indonesian");
    println!("labels are accepted and decimal commas are allowed.");

    Ok(())
}
