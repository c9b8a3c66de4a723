use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/get-languages", get(handler::get_languages))
}
