use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub enum ApiError {
    InvalidImo,
    RetrievalFailed,
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
pub struct ErrorResponse {
    error: ApiError,
    description: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidImo => f.write_str("an invalid IMO number was received"),
            ApiError::RetrievalFailed => f.write_str(
                "there was an error retrieving the pilotage data, check the IMO you have entered",
            ),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidImo => StatusCode::BAD_REQUEST,
            ApiError::RetrievalFailed => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let error = ErrorResponse {
            error: *self,
            description: format!("{self}"),
        };
        HttpResponse::build(self.status_code()).json(&error)
    }
}
