use crate::interpret::messages::{Locale, Note};
use crate::interpret::outcome::{
    FluidType, Interpretation, LightCriterion, LightCriterionResult, SaagCategory, SbpRisk,
};
use crate::interpret::thresholds;
use crate::model::LabPanel;
use rust_decimal::Decimal;

const CHYLOUS_COLOR_KEYWORDS: &[&str] = &["milky", "chylous", "susu"];
const BLOODY_COLOR_KEYWORDS: &[&str] = &["bloody", "darah", "serosanguinous"];
const BILE_COLOR_KEYWORDS: &[&str] = &["green", "hijau", "bile"];
const CLOUDY_TURBIDITY_KEYWORDS: &[&str] = &["cloudy", "keruh", "turbid", "hazy"];
const CHYLOUS_TURBIDITY_KEYWORDS: &[&str] = &["chylous", "milky", "susu"];

/// Options controlling how an interpretation is rendered into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterpretOptions {
    pub locale: Locale,
}

/// Interpret a lab panel with default options (English narrative).
pub fn compute(panel: &LabPanel) -> Interpretation {
    compute_with(panel, &InterpretOptions::default())
}

/// Interpret a lab panel.
///
/// Never fails: a missing dependency, a non-positive divisor or an
/// arithmetic overflow only suppresses the dependent value or line.
pub fn compute_with(panel: &LabPanel, options: &InterpretOptions) -> Interpretation {
    let locale = options.locale;

    let ascites_albumin_derived = derive_ascites_albumin(panel);
    let ascites_albumin_used = panel.ascites_albumin_override.or(ascites_albumin_derived);
    let saag = match (panel.serum_albumin, ascites_albumin_used) {
        (Some(serum), Some(ascites)) => serum.checked_sub(ascites),
        _ => None,
    };
    tracing::debug!(
        derived = ?ascites_albumin_derived,
        used = ?ascites_albumin_used,
        saag = ?saag,
        "albumin gradient"
    );

    let sbp_risk = panel.pmn.and_then(assess_sbp);
    let flags: Vec<String> = sbp_risk
        .map(|risk| locale.sbp_flag(risk).to_string())
        .into_iter()
        .collect();

    let mut impressions = Vec::new();

    let saag_category = saag.map(|s| categorize_saag(s, panel.ascites_protein));
    if let Some(category) = saag_category {
        tracing::debug!(?category, "SAAG bucket");
        impressions.push(locale.saag_impression(category).to_string());
    }

    let light = evaluate_light(panel, locale);
    if let Some(fluid_type) = light.fluid_type {
        tracing::debug!(
            %fluid_type,
            criteria = light.criteria.len(),
            "Light criteria verdict"
        );
        impressions.push(locale.light_verdict(fluid_type));
    }

    let extra_notes = macroscopic_notes(panel)
        .into_iter()
        .map(|note| locale.note(note).to_string())
        .collect();

    Interpretation {
        ascites_albumin_derived,
        ascites_albumin_used,
        saag,
        saag_category,
        sbp_risk,
        light_criteria: light.criteria,
        fluid_type: light.fluid_type,
        light_details: light.details,
        impressions,
        flags,
        extra_notes,
    }
}

/// `numerator / denominator`, only for a strictly positive denominator.
fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator <= Decimal::ZERO {
        return None;
    }
    numerator.checked_div(denominator)
}

/// Ascitic albumin ≈ (serum albumin / serum protein) × ascitic protein.
fn derive_ascites_albumin(panel: &LabPanel) -> Option<Decimal> {
    let serum_albumin = panel.serum_albumin?;
    let serum_protein = panel.serum_protein?;
    let ascites_protein = panel.ascites_protein?;
    ratio(serum_albumin, serum_protein)?.checked_mul(ascites_protein)
}

fn assess_sbp(pmn: Decimal) -> Option<SbpRisk> {
    if pmn >= thresholds::PMN_SBP {
        Some(SbpRisk::Suspected)
    } else if pmn >= thresholds::PMN_BORDERLINE {
        Some(SbpRisk::Borderline)
    } else {
        None
    }
}

fn categorize_saag(saag: Decimal, ascites_protein: Option<Decimal>) -> SaagCategory {
    if saag < thresholds::SAAG_PORTAL {
        return SaagCategory::NonPortal;
    }
    match ascites_protein {
        Some(p) if p < thresholds::ASCITES_PROTEIN_HIGH => SaagCategory::PortalLowProtein,
        Some(_) => SaagCategory::PortalHighProtein,
        None => SaagCategory::PortalUnclassified,
    }
}

struct LightEvaluation {
    criteria: Vec<LightCriterionResult>,
    details: Vec<String>,
    fluid_type: Option<FluidType>,
}

fn evaluate_light(panel: &LabPanel, locale: Locale) -> LightEvaluation {
    let mut criteria = Vec::new();

    if let (Some(serum), Some(ascites)) = (panel.serum_protein, panel.ascites_protein) {
        if let Some(value) = ratio(ascites, serum) {
            criteria.push(criterion(
                LightCriterion::ProteinRatio,
                value,
                thresholds::PROTEIN_RATIO,
            ));
        }
    }

    if let (Some(serum), Some(ascites)) = (panel.serum_ldh, panel.ascites_ldh) {
        if let Some(value) = ratio(ascites, serum) {
            criteria.push(criterion(
                LightCriterion::LdhRatio,
                value,
                thresholds::LDH_RATIO,
            ));
        }
    }

    if let (Some(uln), Some(ascites)) = (panel.ldh_uln, panel.ascites_ldh) {
        if uln > Decimal::ZERO {
            if let Some(cutoff) = thresholds::ldh_uln_cutoff(uln) {
                criteria.push(criterion(LightCriterion::LdhVsUln, ascites, cutoff));
            }
        }
    }

    let is_exudate = criteria.iter().any(|c| c.supports_exudate);
    let mut details: Vec<String> = criteria.iter().map(|c| locale.light_detail(c)).collect();

    if let Some(positive) = panel.rivalta_positive {
        details.push(locale.rivalta(positive).to_string());
    }
    if let Some(glucose) = panel.ascites_glucose {
        if glucose < thresholds::ASCITES_GLUCOSE_LOW {
            details.push(locale.low_ascites_glucose().to_string());
        }
        let serum_fraction = panel
            .serum_glucose
            .and_then(|serum| serum.checked_mul(thresholds::GLUCOSE_RATIO));
        if serum_fraction.is_some_and(|limit| glucose < limit) {
            details.push(locale.low_glucose_ratio().to_string());
        }
    }

    // A zero counts as "not entered" for the verdict gate.
    let has_light_data = [
        panel.serum_protein,
        panel.ascites_protein,
        panel.serum_ldh,
        panel.ascites_ldh,
        panel.ldh_uln,
    ]
    .iter()
    .any(|v| v.is_some_and(|v| !v.is_zero()));

    let fluid_type = has_light_data.then_some(if is_exudate {
        FluidType::Exudate
    } else {
        FluidType::Transudate
    });

    LightEvaluation {
        criteria,
        details,
        fluid_type,
    }
}

fn criterion(criterion: LightCriterion, value: Decimal, threshold: Decimal) -> LightCriterionResult {
    LightCriterionResult {
        criterion,
        value,
        threshold,
        supports_exudate: value > threshold,
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Macroscopic and cytology advisories, in fixed order. Checks are independent.
fn macroscopic_notes(panel: &LabPanel) -> Vec<Note> {
    let mut notes = Vec::new();

    if let Some(color) = panel.color.as_deref() {
        if contains_any(color, CHYLOUS_COLOR_KEYWORDS) {
            notes.push(Note::ChylousColor);
        }
        if contains_any(color, BLOODY_COLOR_KEYWORDS) {
            notes.push(Note::BloodyColor);
        }
        if contains_any(color, BILE_COLOR_KEYWORDS) {
            notes.push(Note::BileColor);
        }
    }

    if let Some(turbidity) = panel.turbidity.as_deref() {
        if contains_any(turbidity, CLOUDY_TURBIDITY_KEYWORDS) {
            notes.push(Note::CloudyFluid);
        }
        if contains_any(turbidity, CHYLOUS_TURBIDITY_KEYWORDS) {
            notes.push(Note::ChylousAppearance);
        }
    }

    if panel
        .rbc_count
        .is_some_and(|rbc| rbc > thresholds::RBC_HEMORRHAGIC)
    {
        notes.push(Note::HemorrhagicTap);
    }
    if panel
        .mn_count
        .is_some_and(|mn| mn >= thresholds::MN_PREDOMINANCE)
    {
        notes.push(Note::MononuclearPredominance);
    }

    notes
}
