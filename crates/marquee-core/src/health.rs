use axum::extract::State;
use axum::http::StatusCode;
use sea_orm::DatabaseConnection;

use crate::error::AppError;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check; pings the database.
pub async fn readyz(State(db): State<DatabaseConnection>) -> Result<StatusCode, AppError> {
    db.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "database ping failed");
        AppError::Unavailable
    })?;
    Ok(StatusCode::OK)
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
