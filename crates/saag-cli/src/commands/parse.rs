use saag_core::error::SaagError;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), SaagError> {
    let parsed = saag_core::load_panel_file(&input_file)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file; the panel alone so it
            // can be fed back to `saag interpret`.
            let json = serde_json::to_string_pretty(&parsed.panel)?;
            std::fs::write(&path, json)?;
            eprintln!("Parsed lab panel written to {}", path.display());
            for w in &parsed.warnings {
                eprintln!("  warning: {w}");
            }
            if !parsed.skipped_lines.is_empty() {
                eprintln!(
                    "  {} line(s) skipped during parsing",
                    parsed.skipped_lines.len()
                );
            }
        }
        None => match output_format {
            "json" => output::json::print(&parsed)?,
            _ => println!("{}", output::table::format_parsed(&parsed)),
        },
    }

    Ok(())
}
