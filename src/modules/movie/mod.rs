use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub mod dto;
pub mod filters;
pub mod handler;
pub mod model;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/get-movie", get(handler::get_movie))
}
