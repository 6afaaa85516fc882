use strum::Display;
use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to check blog title existence: {0}")]
    TitleCheckFailed(#[source] DataLayerError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unspecified error",
            ErrorCode::BR_0001 => "Database error",
            ErrorCode::BR_0002 => "Failed to check blog title existence",
            ErrorCode::BR_0003 => "Blog created but notification could not be published",
            ErrorCode::BR_0004 => "Could not establish subscription",
            ErrorCode::BR_0005 => "Mapping error",
            ErrorCode::BR_0006 => "Validation error",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::TitleCheckFailed(_) => ErrorCode::BR_0002,
            ServiceError::Repository(error) => error.error_code(),
        }
    }
}
