use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Invalid value `{value}` for `{key}`: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}
