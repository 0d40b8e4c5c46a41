use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{registration::RegistrationError, validation::FieldError, ApiError};

#[derive(Serialize, ToSchema)]
pub struct ErrorResp {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, body) = match self {
            ApiError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResp {
                    message: "Error during validation".to_string(),
                    errors: Some(errors),
                },
            ),
            ApiError::ClientError(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResp {
                    message,
                    errors: None,
                },
            ),
            ApiError::ServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResp {
                    message,
                    errors: None,
                },
            ),
        };

        (status_code, Json(body)).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, task: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, RegistrationError> {
    fn into_response(self, task: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            if e.is_client_error() {
                info!(task, rejected = e.to_string());
                return ApiError::ClientError(e.to_string());
            }

            error!(task, error = format!("{:?}", e));
            ApiError::ServerError("Internal server error".to_string())
        })
    }
}
