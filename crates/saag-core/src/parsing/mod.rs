pub mod normalize;
pub mod values;

use crate::error::SaagError;
use crate::model::{FieldKind, LabField, LabPanel};
use normalize::normalize_label;
use serde::{Deserialize, Serialize};
use values::{has_thousands_groups, parse_count, parse_flag, parse_number, parse_text};

/// A sheet line that did not contribute a value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line_text: String,
    pub reason: String,
}

/// Result of parsing a lab sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedPanel {
    pub panel: LabPanel,
    /// Lines that were recognised but are worth a second look.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_lines: Vec<SkippedLine>,
}

/// Parse a plain-text lab sheet.
///
/// One value per line, as `label: value`, `label = value`, `label<TAB>value`
/// or label and value separated by two or more spaces. Blank lines and lines
/// starting with `#` are ignored.
pub fn parse_lab_sheet(text: &str) -> Result<ParsedPanel, SaagError> {
    let mut rows = Vec::new();
    let mut unsplit = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match split_line(trimmed) {
            Some((label, value)) => rows.push((label.to_string(), value.to_string())),
            None => unsplit.push(SkippedLine {
                line_text: trimmed.to_string(),
                reason: "no label/value separator".into(),
            }),
        }
    }

    let mut parsed = parse_rows(&rows)?;
    for skipped in &unsplit {
        tracing::warn!(line = %skipped.line_text, reason = %skipped.reason, "skipped lab sheet line");
    }
    unsplit.append(&mut parsed.skipped_lines);
    parsed.skipped_lines = unsplit;
    Ok(parsed)
}

/// Build a panel from `(label, value)` pairs, as read from a text sheet or
/// the first two columns of a workbook.
pub fn parse_rows(rows: &[(String, String)]) -> Result<ParsedPanel, SaagError> {
    let mut panel = LabPanel::default();
    let mut seen: Vec<LabField> = Vec::new();
    let mut warnings = Vec::new();
    let mut skipped_lines = Vec::new();

    for (label, value) in rows {
        let line_text = format!("{}: {}", label.trim(), value.trim());

        let Some(field) = normalize_label(label) else {
            skipped_lines.push(SkippedLine {
                line_text,
                reason: "unknown label".into(),
            });
            continue;
        };

        let assigned = match assign(&mut panel, field, value) {
            Ok(assigned) => assigned,
            Err(e) => {
                skipped_lines.push(SkippedLine {
                    line_text,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if assigned {
            if seen.contains(&field) {
                warnings.push(format!(
                    "{} given more than once; using '{}'",
                    field.label(),
                    value.trim()
                ));
            }
            seen.push(field);
        }
    }

    for skipped in &skipped_lines {
        tracing::warn!(line = %skipped.line_text, reason = %skipped.reason, "skipped lab sheet line");
    }

    if seen.is_empty() {
        return Err(SaagError::ParseError(
            "no recognised lab values found in sheet".into(),
        ));
    }

    tracing::info!(
        fields = seen.len(),
        skipped = skipped_lines.len(),
        "parsed lab sheet"
    );

    Ok(ParsedPanel {
        panel,
        warnings,
        skipped_lines,
    })
}

/// Store `value` in `field`. Returns false when the value is a placeholder.
fn assign(panel: &mut LabPanel, field: LabField, value: &str) -> Result<bool, SaagError> {
    match field.kind() {
        FieldKind::Number => {
            let parsed = if field.is_count() {
                parse_count(value)?
            } else if field.is_whole_unit() && has_thousands_groups(value) {
                return Err(SaagError::ParseError(format!(
                    "ambiguous thousands separator in '{}'",
                    value.trim()
                )));
            } else {
                parse_number(value)?
            };
            match parsed {
                Some(v) => Ok(panel.set_number(field, v)),
                None => Ok(false),
            }
        }
        FieldKind::Flag => match parse_flag(value)? {
            Some(v) => {
                panel.rivalta_positive = Some(v);
                Ok(true)
            }
            None => Ok(false),
        },
        FieldKind::Text => match parse_text(value) {
            Some(v) => Ok(panel.set_text(field, v)),
            None => Ok(false),
        },
    }
}

fn split_line(line: &str) -> Option<(&str, &str)> {
    let (label, value) = if let Some(pair) = line.split_once('\t') {
        pair
    } else if let Some(pair) = line.split_once(':') {
        pair
    } else if let Some(pair) = line.split_once('=') {
        pair
    } else {
        line.split_once("  ")?
    };
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    Some((label, value.trim()))
}
