use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::users::UserError;
use thiserror::Error;
use tracing::error;

/// Every handler failure; rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::User(UserError::Validation(_)) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::User(UserError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::User(UserError::Consistency(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            if let ApiError::User(e) = &self {
                error!(code = e.code(), detail = e.detail().unwrap_or_default(), "request failed");
            }
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(ApiError::from(UserError::Validation("x".into())).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(UserError::NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(UserError::Consistency("x".into())).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::BadRequest("Invalid JSON body".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn messages_hide_internal_detail() {
        assert_eq!(ApiError::from(UserError::Consistency("user 2 still present".into())).to_string(), "Failed to delete user");
        assert_eq!(ApiError::from(UserError::Validation("name missing".into())).to_string(), "Name and email are required");
        assert_eq!(ApiError::from(UserError::NotFound).to_string(), "User not found");
    }
}
