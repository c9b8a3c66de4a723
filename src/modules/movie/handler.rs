use super::dto::{MovieQuery, MovieResponse};
use super::model::MovieOutcome;
use super::service::MovieService;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{error, warn};

/// Suggest one random movie matching the filters
#[utoipa::path(
    get,
    path = "/get-movie",
    params(MovieQuery),
    responses(
        (status = 200, description = "A matching movie, or a popular English movie as fallback", body = MovieResponse),
        (status = 404, description = "Nothing found even with the fallback query", body = MovieResponse),
        (status = 400, description = "Query string could not be read", body = MovieResponse),
        (status = 502, description = "Movie database request failed", body = MovieResponse)
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let Query(pairs) = match query {
        Ok(pairs) => pairs,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable query string");
            return (
                StatusCode::BAD_REQUEST,
                Json(MovieResponse::error(rejection.body_text())),
            );
        }
    };
    let outcome = MovieService::suggest(state, MovieQuery::from_pairs(pairs).into_filters()).await;

    let status = match &outcome {
        MovieOutcome::Success(_) | MovieOutcome::Fallback(..) => StatusCode::OK,
        MovieOutcome::NotFound(_) => StatusCode::NOT_FOUND,
        MovieOutcome::UpstreamError(e) => {
            error!(error = %e, "Movie suggestion failed");
            StatusCode::BAD_GATEWAY
        }
    };

    (status, Json(MovieResponse::from(outcome)))
}
