use blog_core::service::error::ErrorCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponseRestDTO {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

#[derive(Debug, Serialize)]
pub struct Cause {
    pub message: String,
}

impl ErrorResponseRestDTO {
    pub fn for_panic(panic_msg: String) -> Self {
        Self {
            code: ErrorCode::BR_0000.to_string(),
            message: panic_msg,
            cause: Some(Cause {
                message: "Panic".to_string(),
            }),
        }
    }
}
