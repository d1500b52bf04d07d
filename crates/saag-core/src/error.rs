use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum SaagError {
    #[error("failed to parse lab sheet: {0}")]
    ParseError(String),

    #[error("failed to read xlsx workbook: {0}")]
    Xlsx(String),

    #[error("{field} = {value} is outside the accepted range {min}..={max}")]
    OutOfRange {
        field: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
