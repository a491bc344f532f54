use crate::handlers::activities::{list_activities, signup, unregister};
use crate::server::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Create the activities routes with state
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route("/activities/{activity_name}/unregister", post(unregister))
}
