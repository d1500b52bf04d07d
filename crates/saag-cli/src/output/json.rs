use saag_core::error::SaagError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), SaagError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
