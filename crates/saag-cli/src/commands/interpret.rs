use saag_core::error::SaagError;
use saag_core::interpret::{InterpretOptions, Locale};
use saag_core::limits;
use saag_core::model::LabPanel;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: Option<PathBuf>,
    overrides: LabPanel,
    output_format: &str,
    lang: &str,
    range_check: bool,
) -> Result<(), SaagError> {
    let locale = parse_locale(lang)?;

    let mut panel = match input_file {
        Some(path) => {
            let parsed = saag_core::load_panel_file(&path)?;
            tracing::info!(
                path = %path.display(),
                skipped = parsed.skipped_lines.len(),
                "loaded lab panel"
            );
            for w in &parsed.warnings {
                tracing::warn!("{w}");
            }
            parsed.panel
        }
        None => LabPanel::default(),
    };

    // Values given on the command line win over the file.
    panel.merge(overrides);

    if panel.is_empty() {
        return Err(SaagError::UnsupportedInput(
            "no lab values given; pass an input file or value options such as --serum-albumin"
                .into(),
        ));
    }

    if range_check {
        limits::check_panel(&panel)?;
    }

    let result = saag_core::interpret(&panel, &InterpretOptions { locale });

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print(&panel, &result, locale),
    }

    Ok(())
}

pub fn parse_locale(lang: &str) -> Result<Locale, SaagError> {
    Locale::from_str_loose(lang).ok_or_else(|| {
        let available: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();
        SaagError::UnsupportedInput(format!(
            "unknown language '{}'. Available: {}",
            lang,
            available.join(", ")
        ))
    })
}
