use crate::error::AppError;
use crate::models::activities::{Activity, EmailQuery, ErrorDetail, MessageResponse};
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{info, warn};

// One non-empty local part, one non-empty domain with a dot, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

fn validate_email(email: &str) -> Result<(), AppError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        warn!("Rejected malformed email: {:?}", email);
        Err(AppError::InvalidEmail(email.to_string()))
    }
}

/// List activities
///
/// Returns every activity keyed by name, including its current roster.
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "Activities listed successfully", body = HashMap<String, Activity>)
    )
)]
#[axum::debug_handler]
pub async fn list_activities(State(state): State<AppState>) -> Json<HashMap<String, Activity>> {
    Json(state.directory.snapshot())
}

/// Sign up for an activity
///
/// Appends the student's email to the activity's roster. The activity name
/// must match a directory key exactly; capacity is advisory and never
/// enforced here.
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    responses(
        (status = 200, description = "Signed up successfully", body = MessageResponse),
        (status = 400, description = "Already signed up or invalid email", body = ErrorDetail),
        (status = 404, description = "Activity not found", body = ErrorDetail)
    ),
    params(
        ("activity_name" = String, Path, description = "Activity name (exact, case-sensitive)"),
        ("email" = String, Query, description = "Student email address")
    )
)]
#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    validate_email(&query.email)?;

    state
        .directory
        .signup(&activity_name, &query.email)
        .map_err(|err| {
            warn!("Signup for {} rejected: {}", activity_name, err);
            AppError::from(err)
        })?;

    info!("Signed up {} for {}", query.email, activity_name);

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

/// Unregister from an activity
///
/// Removes the student's email from the activity's roster.
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/unregister",
    responses(
        (status = 200, description = "Unregistered successfully", body = MessageResponse),
        (status = 400, description = "Not registered or invalid email", body = ErrorDetail),
        (status = 404, description = "Activity not found", body = ErrorDetail)
    ),
    params(
        ("activity_name" = String, Path, description = "Activity name (exact, case-sensitive)"),
        ("email" = String, Query, description = "Student email address")
    )
)]
#[axum::debug_handler]
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    validate_email(&query.email)?;

    state
        .directory
        .unregister(&activity_name, &query.email)
        .map_err(|err| {
            warn!("Unregister from {} rejected: {}", activity_name, err);
            AppError::from(err)
        })?;

    info!("Unregistered {} from {}", query.email, activity_name);

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
