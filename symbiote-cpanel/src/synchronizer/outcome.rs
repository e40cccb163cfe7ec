use symbiote_types::error::ErrorBody;

use crate::api::{ApiError, CpanelResponse, STATUS_METHOD_NOT_ALLOWED};

/// How the backend answered a request.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Success(CpanelResponse),
    /// The session is not allowed to call the endpoint (HTTP 405). The user has to log in again.
    Unauthorized,
    Rejected { status: u16, body: ErrorBody },
    Unreachable(ApiError),
}

impl Outcome {

    /// Message for a failure banner. `fallback` is used when the backend did not say what went wrong.
    pub fn failure_message(&self, fallback: &str) -> String {
        match self {
            Outcome::Rejected { body, .. } => body.message_or(fallback),
            Outcome::Unreachable(cause) => cause.to_string(),
            Outcome::Success(_) | Outcome::Unauthorized => String::from(fallback),
        }
    }
}

impl From<Result<CpanelResponse, ApiError>> for Outcome {
    fn from(result: Result<CpanelResponse, ApiError>) -> Self {
        match result {
            Ok(response) if response.is_success() => Outcome::Success(response),
            Ok(response) if response.status == STATUS_METHOD_NOT_ALLOWED => Outcome::Unauthorized,
            Ok(response) => Outcome::Rejected {
                status: response.status,
                body: ErrorBody::parse(&response.body),
            },
            Err(cause) => Outcome::Unreachable(cause),
        }
    }
}
