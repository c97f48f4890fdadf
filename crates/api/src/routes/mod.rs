pub mod admin;
pub mod health;
pub mod message;
pub mod notification;
pub mod student;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /users                         register (public)
/// /users/login                   login (public)
/// /users/me                      current account
///
/// /admin/students                student overview (?bucket=eligible|risk)
/// /admin/targets                 assign target
/// /admin/scholarship             academically eligible students
///
/// /student/profile               get, update
/// /student/targets               list own targets
/// /student/targets/{id}          update status
/// /student/dashboard             progress and eligibility
/// /student/resume                plain-text resume
///
/// /notifications                 send (admin), list own
/// /notifications/{id}/read       mark read
///
/// /messages                      send
/// /messages/conversations        contact directory
/// /messages/{user_id}            conversation history
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/admin", admin::router())
        .nest("/student", student::router())
        .nest("/notifications", notification::router())
        .nest("/messages", message::router())
}
