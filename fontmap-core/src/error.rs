use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontMapError {
    #[error("Font normalization unavailable for family: {family:?}")]
    NormalizationUnavailable { family: String },

    #[error("Invalid font request: {0}")]
    InvalidRequest(String),

    #[error("Invalid font spec: {0}")]
    InvalidFontSpec(String),
}

pub type Result<T> = std::result::Result<T, FontMapError>;
