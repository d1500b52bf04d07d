pub mod error;
pub mod extraction;
pub mod interpret;
pub mod limits;
pub mod model;
pub mod parsing;

use error::SaagError;
use interpret::{InterpretOptions, Interpretation};
use model::LabPanel;
use parsing::ParsedPanel;
use std::path::Path;

/// File formats a lab panel can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A serialized [`LabPanel`].
    Json,
    /// Two-column workbook (label, value).
    Xlsx,
    /// Plain-text `label: value` sheet.
    Sheet,
}

impl InputFormat {
    /// Pick a format from the file extension; anything unknown is a text sheet.
    pub fn from_path(path: &Path) -> InputFormat {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => InputFormat::Json,
            "xlsx" | "xlsm" => InputFormat::Xlsx,
            _ => InputFormat::Sheet,
        }
    }
}

/// Main API entry point: interpret ascitic fluid results.
///
/// Pure and infallible; see [`interpret::compute_with`].
pub fn interpret(panel: &LabPanel, options: &InterpretOptions) -> Interpretation {
    interpret::compute_with(panel, options)
}

/// Load a lab panel from file contents.
pub fn load_panel(bytes: &[u8], format: InputFormat) -> Result<ParsedPanel, SaagError> {
    match format {
        InputFormat::Json => {
            let panel: LabPanel = serde_json::from_slice(bytes)?;
            if panel.is_empty() {
                return Err(SaagError::ParseError("JSON panel has no values".into()));
            }
            Ok(ParsedPanel {
                panel,
                warnings: vec![],
                skipped_lines: vec![],
            })
        }
        InputFormat::Xlsx => {
            let rows = extraction::read_xlsx_rows(bytes)?;
            parsing::parse_rows(&rows)
        }
        InputFormat::Sheet => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                SaagError::UnsupportedInput(format!("lab sheet is not valid UTF-8: {e}"))
            })?;
            parsing::parse_lab_sheet(text)
        }
    }
}

/// Read and parse a lab panel file, choosing the format by extension.
pub fn load_panel_file(path: &Path) -> Result<ParsedPanel, SaagError> {
    let bytes = std::fs::read(path)?;
    load_panel(&bytes, InputFormat::from_path(path))
}
