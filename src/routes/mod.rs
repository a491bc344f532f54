pub mod activities;

use crate::handlers;
use crate::models::activities::{Activity, ErrorDetail, MessageResponse};
use crate::server::AppState;
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::activities::list_activities,
        handlers::activities::signup,
        handlers::activities::unregister
    ),
    components(schemas(Activity, MessageResponse, ErrorDetail))
)]
struct ApiDoc;

/// Create the main API router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root_redirect))
        .route("/health", get(health_check))
        .merge(activities::routes())
}

/// Health check endpoint for container health monitoring
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Send browsers from the service root to the front-end
async fn root_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}
