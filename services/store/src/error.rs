use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use marquee_domain::form::FormErrors;

/// Store service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum StoreServiceError {
    #[error("movie not found")]
    MovieNotFound,
    #[error("review not found")]
    ReviewNotFound,
    #[error("cart item not found")]
    CartItemNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("invalid form")]
    InvalidForm(FormErrors),
    #[error("malformed form body: {0}")]
    MalformedForm(#[from] FormRejection),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StoreServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::ReviewNotFound => "REVIEW_NOT_FOUND",
            Self::CartItemNotFound => "CART_ITEM_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidForm(_) => "INVALID_FORM",
            Self::MalformedForm(_) => "MALFORMED_FORM",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<FormErrors> for StoreServiceError {
    fn from(errors: FormErrors) -> Self {
        Self::InvalidForm(errors)
    }
}

impl IntoResponse for StoreServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MovieNotFound
            | Self::ReviewNotFound
            | Self::CartItemNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Self::MalformedForm(rejection) => rejection.status(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::InvalidForm(ref errors) = self {
            body["errors"] = serde_json::to_value(errors).unwrap_or_default();
        }
        (status, axum::Json(body)).into_response()
    }
}
