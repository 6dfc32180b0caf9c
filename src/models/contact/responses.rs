use serde::Serialize;

use crate::errors::FieldErrors;

#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactRejected {
    pub success: bool,
    pub errors: FieldErrors,
}
