use crate::state::AppState;
use axum::Router;

mod dto;
mod errors;
pub mod handlers;
mod queries;
pub mod repo;
mod repo_types;
pub mod services;
mod sql;
mod validate;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
