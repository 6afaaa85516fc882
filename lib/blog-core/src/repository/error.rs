use thiserror::Error;

use crate::service::error::ErrorCode;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Already exists")]
    AlreadyExists,

    #[error("Record not updated")]
    RecordNotUpdated,

    #[error("Response could not be mapped")]
    MappingError,

    #[error("Database error: {0}")]
    Db(#[from] anyhow::Error),
}

impl DataLayerError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Db(_) => ErrorCode::BR_0001,
            Self::MappingError => ErrorCode::BR_0005,
            Self::AlreadyExists | Self::RecordNotUpdated => ErrorCode::BR_0000,
        }
    }
}
