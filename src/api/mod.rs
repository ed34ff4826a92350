pub mod employee;
pub mod health;
pub mod leave_request;

use crate::ledger::LedgerError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

impl ResponseError for LedgerError {
    fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::Validation(_) | LedgerError::Conflict(_) | LedgerError::State(_) => {
                StatusCode::BAD_REQUEST
            }
            LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            LedgerError::Storage(e) => {
                tracing::error!(error = %e, "Ledger storage failure");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}
