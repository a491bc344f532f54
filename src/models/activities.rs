use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An extracurricular activity and its roster
///
/// The activity name is the directory key, not a record field, so the wire
/// shape of a record is exactly these four fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    /// Free-text description of the activity
    pub description: String,

    /// Free-text meeting schedule
    pub schedule: String,

    /// Advisory roster size; signup never enforces it
    pub max_participants: u32,

    /// Signed-up student emails, in signup order
    pub participants: Vec<String>,
}

/// Query parameters for signup and unregister
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Student email address
    pub email: String,
}

/// Confirmation message returned by signup and unregister
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation naming the activity and email
    pub message: String,
}

/// Error body shape shared by all failure responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable description of what went wrong
    pub detail: String,
}
