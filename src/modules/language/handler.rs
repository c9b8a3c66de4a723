use super::dto::LanguageResponse;
use super::service::LanguageService;
use crate::common::response::{ApiError, ErrorBody};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

pub const LANGUAGES_ERROR: &str = "Failed to fetch languages";

/// List languages supported by the movie database
#[utoipa::path(
    get,
    path = "/get-languages",
    responses(
        (status = 200, description = "Supported languages", body = Vec<LanguageResponse>),
        (status = 500, description = "Upstream language list unavailable", body = ErrorBody)
    ),
    tag = "Movies"
)]
pub async fn get_languages(State(state): State<AppState>) -> impl IntoResponse {
    match LanguageService::list(state).await {
        Ok(languages) => Json(languages).into_response(),
        Err(e) => {
            error!(error = %e, "Fetching languages failed");
            ApiError(LANGUAGES_ERROR.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}
