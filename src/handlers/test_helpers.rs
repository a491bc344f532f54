use crate::directory::ActivityDirectory;
use crate::models::activities::Activity;
use crate::server::AppState;

/// Create a test AppState backed by the standard seed roster
pub fn create_test_state() -> AppState {
    AppState {
        directory: ActivityDirectory::with_defaults(),
    }
}

/// Create a test AppState holding exactly one activity
pub fn create_state_with_activity(name: &str, activity: Activity) -> AppState {
    let directory = ActivityDirectory::new();
    directory.insert(name, activity);
    AppState { directory }
}
