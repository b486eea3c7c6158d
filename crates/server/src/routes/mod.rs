pub mod course;
pub mod health;

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Routes open to anonymous callers
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/courses", get(course::get_courses))
}

/// Routes that require a bearer token; the caller layers authentication on top
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", post(course::create_course))
        .route(
            "/courses/{id}",
            get(course::get_course_by_id).patch(course::update_course),
        )
        .route("/courses/{id}/delete", patch(course::soft_delete_course))
        .route("/courses/{id}/restore", patch(course::restore_course))
        .route("/authors/{id}/courses", get(course::get_courses_by_author))
}
