use rust_decimal::Decimal;
use saag_core::interpret::messages::fmt_dp;
use saag_core::interpret::{Interpretation, Locale};
use saag_core::model::{FieldKind, LabField, LabPanel};
use saag_core::parsing::ParsedPanel;
use std::fmt::Write;

struct Headings {
    serum_albumin: &'static str,
    serum_protein: &'static str,
    albumin_used: &'static str,
    interpretation: &'static str,
    light: &'static str,
    light_empty: &'static str,
    alerts: &'static str,
    notes: &'static str,
}

fn headings(locale: Locale) -> Headings {
    match locale {
        Locale::En => Headings {
            serum_albumin: "Serum albumin",
            serum_protein: "Serum protein",
            albumin_used: "Ascitic albumin (used)",
            interpretation: "Interpretation (SAAG)",
            light: "Light criteria (adapted for ascites)",
            light_empty: "(enter protein & LDH data to see the Light evaluation)",
            alerts: "Alerts",
            notes: "Additional notes (macroscopic/cytology)",
        },
        Locale::Id => Headings {
            serum_albumin: "Albumin serum",
            serum_protein: "Protein serum",
            albumin_used: "Albumin asites (dipakai)",
            interpretation: "Interpretasi SAAG",
            light: "Kriteria Light (adaptasi asites)",
            light_empty: "(Isi data protein & LDH untuk melihat evaluasi Light)",
            alerts: "Alerts",
            notes: "Catatan tambahan (makroskopis/sitologi)",
        },
    }
}

pub fn print(panel: &LabPanel, result: &Interpretation, locale: Locale) {
    print!("{}", format_interpretation(panel, result, locale));
}

fn metric(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{} g/dL", fmt_dp(v, 2)),
        None => "-".to_string(),
    }
}

pub fn format_interpretation(panel: &LabPanel, result: &Interpretation, locale: Locale) -> String {
    let h = headings(locale);
    let mut out = String::new();

    let metrics = [
        (h.serum_albumin, metric(panel.serum_albumin)),
        (h.serum_protein, metric(panel.serum_protein)),
        (h.albumin_used, metric(result.ascites_albumin_used)),
        ("SAAG", metric(result.saag)),
    ];
    let width = metrics.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(10);
    for (label, value) in &metrics {
        let _ = writeln!(out, "  {:<width$}  {}", label, value, width = width);
    }
    out.push('\n');

    let _ = writeln!(out, "=== {} ===\n", h.interpretation);
    for imp in &result.impressions {
        let _ = writeln!(out, "  {}", imp);
    }
    if !result.impressions.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(out, "=== {} ===\n", h.light);
    if result.light_details.is_empty() {
        let _ = writeln!(out, "  {}", h.light_empty);
    } else {
        for line in &result.light_details {
            let _ = writeln!(out, "  - {}", line);
        }
    }
    out.push('\n');

    if !result.flags.is_empty() {
        let _ = writeln!(out, "=== {} ===\n", h.alerts);
        for flag in &result.flags {
            let _ = writeln!(out, "  ! {}", flag);
        }
        out.push('\n');
    }

    if !result.extra_notes.is_empty() {
        let _ = writeln!(out, "=== {} ===\n", h.notes);
        for note in &result.extra_notes {
            let _ = writeln!(out, "  - {}", note);
        }
        out.push('\n');
    }

    out
}

/// Format a parsed panel as a field/value listing.
pub fn format_parsed(parsed: &ParsedPanel) -> String {
    let mut out = String::new();
    let panel = &parsed.panel;

    let rows: Vec<(String, String)> = LabField::ALL
        .iter()
        .filter_map(|field| {
            let value = match field.kind() {
                FieldKind::Number => panel.number(*field).map(|v| match field.unit() {
                    Some(unit) => format!("{} {}", v, unit),
                    None => v.to_string(),
                }),
                FieldKind::Flag => panel.rivalta_positive.map(|p| {
                    if p {
                        "positive".to_string()
                    } else {
                        "negative".to_string()
                    }
                }),
                FieldKind::Text => match field {
                    LabField::Color => panel.color.clone(),
                    _ => panel.turbidity.clone(),
                },
            };
            value.map(|v| (field.label().to_string(), v))
        })
        .collect();

    let width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(10);
    for (label, value) in &rows {
        let _ = writeln!(out, "  {:<width$}  {}", label, value, width = width);
    }

    for w in &parsed.warnings {
        let _ = writeln!(out, "\n  warning: {}", w);
    }
    if !parsed.skipped_lines.is_empty() {
        let _ = writeln!(out, "\n  Skipped lines:");
        for s in &parsed.skipped_lines {
            let _ = writeln!(out, "    {}  ({})", s.line_text, s.reason);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use saag_core::interpret::{compute, compute_with, InterpretOptions};

    fn panel() -> LabPanel {
        LabPanel {
            serum_albumin: Some(dec!(3.0)),
            serum_protein: Some(dec!(6.5)),
            ascites_protein: Some(dec!(2.0)),
            pmn: Some(dec!(300)),
            ..Default::default()
        }
    }

    #[test]
    fn test_metrics_and_sections() {
        let p = panel();
        let text = format_interpretation(&p, &compute(&p), Locale::En);
        assert!(text.contains("SAAG                    2.08 g/dL"));
        assert!(text.contains("Ascitic albumin (used)  0.92 g/dL"));
        assert!(text.contains("=== Alerts ==="));
        assert!(text.contains("Suspected SBP"));
        assert!(!text.contains("Additional notes"));
    }

    #[test]
    fn test_missing_values_render_dash() {
        let p = LabPanel {
            pmn: Some(dec!(10)),
            ..Default::default()
        };
        let text = format_interpretation(&p, &compute(&p), Locale::En);
        assert!(text.contains("SAAG                    -"));
        assert!(text.contains("(enter protein & LDH data"));
        assert!(!text.contains("=== Alerts ==="));
    }

    #[test]
    fn test_indonesian_headings() {
        let p = panel();
        let options = InterpretOptions { locale: Locale::Id };
        let text = format_interpretation(&p, &compute_with(&p, &options), Locale::Id);
        assert!(text.contains("=== Kriteria Light (adaptasi asites) ==="));
        assert!(text.contains("Curiga SBP"));
    }

    #[test]
    fn test_format_parsed() {
        let parsed = ParsedPanel {
            panel: LabPanel {
                serum_albumin: Some(dec!(3.0)),
                rivalta_positive: Some(true),
                color: Some("straw".into()),
                ..Default::default()
            },
            warnings: vec![],
            skipped_lines: vec![],
        };
        let text = format_parsed(&parsed);
        assert!(text.contains("Serum albumin  3.0 g/dL"));
        assert!(text.contains("Rivalta test   positive"));
        assert!(text.contains("Color          straw"));
    }
}
