//! Narrative text emitted by the interpreter, per locale.

use crate::interpret::outcome::{
    FluidType, LightCriterion, LightCriterionResult, SaagCategory, SbpRisk,
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language of the narrative lines. Numbers and typed fields are unaffected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    /// Bahasa Indonesia.
    Id,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Id];

    pub fn from_str_loose(s: &str) -> Option<Locale> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Locale::En),
            "id" | "ind" | "indonesian" | "bahasa" => Some(Locale::Id),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    pub fn sbp_flag(self, risk: SbpRisk) -> &'static str {
        match (self, risk) {
            (Locale::En, SbpRisk::Suspected) => {
                "PMN ≥250 cells/µL → Suspected SBP; manage per guidelines and inoculate blood culture bottles at the bedside."
            }
            (Locale::En, SbpRisk::Borderline) => {
                "PMN 100–249 cells/µL → borderline; consider a repeat tap and monitor symptoms."
            }
            (Locale::Id, SbpRisk::Suspected) => {
                "PMN ≥250 sel/µL → Curiga SBP; tata laksana sesuai pedoman dan lakukan kultur botol darah di bedside."
            }
            (Locale::Id, SbpRisk::Borderline) => {
                "PMN 100–249 sel/µL → borderline; pertimbangkan ulang pungsi/monitor gejala."
            }
        }
    }

    pub fn saag_impression(self, category: SaagCategory) -> &'static str {
        match (self, category) {
            (Locale::En, SaagCategory::PortalLowProtein) => {
                "SAAG ≥1.1 g/dL & ascitic protein <2.5 g/dL → Cirrhosis, late Budd–Chiari, massive liver metastases."
            }
            (Locale::En, SaagCategory::PortalHighProtein) => {
                "SAAG ≥1.1 g/dL & ascitic protein ≥2.5 g/dL → Heart failure/constrictive pericarditis, early Budd–Chiari, IVC obstruction, sinusoidal obstruction syndrome."
            }
            (Locale::En, SaagCategory::PortalUnclassified) => {
                "SAAG ≥1.1 g/dL → Portal hypertension (ascitic protein needed for sub-classification)."
            }
            (Locale::En, SaagCategory::NonPortal) => {
                "SAAG <1.1 g/dL → Non-portal: biliary leak, nephrotic syndrome, pancreatitis, peritoneal carcinomatosis, tuberculosis."
            }
            (Locale::Id, SaagCategory::PortalLowProtein) => {
                "SAAG ≥1,1 g/dL & Protein asites <2,5 g/dL → Cirrhosis, Late Budd–Chiari, Massive liver metastases."
            }
            (Locale::Id, SaagCategory::PortalHighProtein) => {
                "SAAG ≥1,1 g/dL & Protein asites ≥2,5 g/dL → Heart failure/Constrictive pericarditis, Early Budd–Chiari, IVC obstruction, Sinusoidal obstruction syndrome."
            }
            (Locale::Id, SaagCategory::PortalUnclassified) => {
                "SAAG ≥1,1 g/dL → Portal hipertensi (butuh nilai protein asites untuk sub-klasifikasi)."
            }
            (Locale::Id, SaagCategory::NonPortal) => {
                "SAAG <1,1 g/dL → Non-portal: Biliary leak, Nephrotic syndrome, Pancreatitis, Peritoneal carcinomatosis, Tuberculosis."
            }
        }
    }

    /// Detail line for one evaluated Light sub-criterion.
    pub fn light_detail(self, result: &LightCriterionResult) -> String {
        let cmp = if result.supports_exudate { ">" } else { "≤" };
        match (self, result.criterion) {
            (Locale::En, LightCriterion::ProteinRatio) => format!(
                "Ascitic/serum protein = {} {} 0.5",
                fmt_dp(result.value, 2),
                cmp
            ),
            (Locale::En, LightCriterion::LdhRatio) => format!(
                "Ascitic/serum LDH = {} {} 0.6",
                fmt_dp(result.value, 2),
                cmp
            ),
            (Locale::En, LightCriterion::LdhVsUln) => format!(
                "Ascitic LDH = {} {} 2/3 serum ULN ({})",
                fmt_dp(result.value, 0),
                cmp,
                fmt_dp(result.threshold, 0)
            ),
            (Locale::Id, LightCriterion::ProteinRatio) => format!(
                "Protein asites/serum = {} {} 0,5",
                fmt_dp(result.value, 2),
                cmp
            ),
            (Locale::Id, LightCriterion::LdhRatio) => format!(
                "LDH asites/serum = {} {} 0,6",
                fmt_dp(result.value, 2),
                cmp
            ),
            (Locale::Id, LightCriterion::LdhVsUln) => format!(
                "LDH asites = {} {} 2/3 ULN serum ({})",
                fmt_dp(result.value, 0),
                cmp,
                fmt_dp(result.threshold, 0)
            ),
        }
    }

    pub fn rivalta(self, positive: bool) -> &'static str {
        match (self, positive) {
            (Locale::En, true) => "Rivalta: Positive (positive → supports exudate)",
            (Locale::En, false) => "Rivalta: Negative (positive → supports exudate)",
            (Locale::Id, true) => "Rivalta: Positif (positif → mendukung eksudat)",
            (Locale::Id, false) => "Rivalta: Negatif (positif → mendukung eksudat)",
        }
    }

    pub fn low_ascites_glucose(self) -> &'static str {
        match self {
            Locale::En => "Ascitic glucose <50 mg/dL (supports an inflammatory/exudative process: infection/TB/malignancy)",
            Locale::Id => "Glukosa asites <50 mg/dL (mendukung proses inflamasi/eksudat: infeksi/TB/malignansi)",
        }
    }

    pub fn low_glucose_ratio(self) -> &'static str {
        match self {
            Locale::En => "Ascitic glucose far below serum glucose (supports exudate/inflammation)",
            Locale::Id => "Glukosa asites jauh lebih rendah dari serum (mendukung eksudat/inflamasi)",
        }
    }

    pub fn light_verdict(self, fluid_type: FluidType) -> String {
        match self {
            Locale::En => format!(
                "Light criteria (adapted for ascites): {}. Use together with SAAG & clinical context.",
                fluid_type
            ),
            Locale::Id => {
                let verdict = match fluid_type {
                    FluidType::Exudate => "Eksudat",
                    FluidType::Transudate => "Transudat",
                };
                format!(
                    "Kriteria Light (adaptasi asites): {}. Gunakan bersama SAAG & konteks klinis.",
                    verdict
                )
            }
        }
    }

    pub fn note(self, note: Note) -> &'static str {
        match (self, note) {
            (Locale::En, Note::ChylousColor) => {
                "Milky/chylous color → suspect chylous ascites; check ascitic triglycerides (≥200 mg/dL)."
            }
            (Locale::En, Note::BloodyColor) => {
                "Bloody color → hemorrhagic/traumatic; correlate with RBC count & clinical picture."
            }
            (Locale::En, Note::BileColor) => {
                "Greenish/bile-stained color → suspect bile leak; consider ascitic bilirubin."
            }
            (Locale::En, Note::CloudyFluid) => {
                "Cloudy fluid → supports an inflammatory/infectious process; correlate with cell count & culture."
            }
            (Locale::En, Note::ChylousAppearance) => {
                "Chylous appearance → suspect chylous ascites (TG ≥200 mg/dL)."
            }
            (Locale::En, Note::HemorrhagicTap) => {
                "RBC >10,000/µL → hemorrhagic/traumatic tap; interpret other indices with caution."
            }
            (Locale::En, Note::MononuclearPredominance) => {
                "MN ≥500/µL → mononuclear/lymphocyte predominance; consider TB peritonitis or malignancy (see ADA, cytology, culture)."
            }
            (Locale::Id, Note::ChylousColor) => {
                "Warna milky/chylous → curiga chylous ascites; periksa trigliserida asites (≥200 mg/dL)."
            }
            (Locale::Id, Note::BloodyColor) => {
                "Warna berdarah → hemoragik/traumatic; korelasikan dengan RBC & klinis."
            }
            (Locale::Id, Note::BileColor) => {
                "Warna kehijauan/bile-stained → curiga bile leak; pertimbangkan bilirubin asites."
            }
            (Locale::Id, Note::CloudyFluid) => {
                "Cairan keruh → mendukung proses inflamasi/infeksi; korelasikan dengan sel & kultur."
            }
            (Locale::Id, Note::ChylousAppearance) => {
                "Tampak chylous → curiga chylous ascites (TG ≥200 mg/dL)."
            }
            (Locale::Id, Note::HemorrhagicTap) => {
                "RBC >10.000/µL → hemoragik/traumatic tap; interpretasi indeks lain dengan hati-hati."
            }
            (Locale::Id, Note::MononuclearPredominance) => {
                "MN ≥500/µL → dominansi mononuklear/limfosit; pertimbangkan TB peritonitis atau malignansi (lihat ADA, sitologi, kultur)."
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Macroscopic or cytology advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    ChylousColor,
    BloodyColor,
    BileColor,
    CloudyFluid,
    ChylousAppearance,
    HemorrhagicTap,
    MononuclearPredominance,
}

/// Format a value with exactly `dp` decimal places, rounding half away from zero.
pub fn fmt_dp(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}
