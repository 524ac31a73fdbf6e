use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/signup", post(handlers::sign_up))
        .route("/api/login", post(handlers::log_in))
        .route("/api/logout", post(handlers::log_out))
        .route("/api/goals", get(handlers::list_goals).post(handlers::create_goal))
        .route("/api/goals/:id/progress", post(handlers::update_progress))
        .route("/api/goals/:id/complete", post(handlers::complete_goal))
        .route("/api/goals/:id", delete(handlers::delete_goal))
        .route("/api/account/password", post(handlers::change_password))
        .route("/api/account/email", post(handlers::set_email))
        .with_state(state)
}
