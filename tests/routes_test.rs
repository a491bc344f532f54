use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mergington_http::{
    handlers::test_helpers::{create_state_with_activity, create_test_state},
    models::activities::{Activity, ErrorDetail, MessageResponse},
    routes,
};
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .body(Body::empty())
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_list_activities_route() {
    // Create the router with a seeded test state
    let app = routes::create_api_router().with_state(create_test_state());

    // Request the full activity listing
    let response = app.oneshot(get("/activities")).await.unwrap();

    // Check the response status
    assert_eq!(response.status(), StatusCode::OK);

    // The body is a mapping from activity name to record
    let activities: HashMap<String, Activity> = body_json(response).await;
    assert!(activities.contains_key("Chess Club"));
    assert!(activities.contains_key("Programming Class"));

    // Every record carries the four record fields with a list-typed roster
    for activity in activities.values() {
        assert!(!activity.description.is_empty());
        assert!(!activity.schedule.is_empty());
        assert!(activity.max_participants > 0);
        assert!(activity.participants.len() <= activity.max_participants as usize);
    }
}

#[tokio::test]
async fn test_signup_route() {
    let app = routes::create_api_router().with_state(create_test_state());

    // Sign up a new student; the path segment is percent-encoded
    let response = app
        .clone()
        .oneshot(post(
            "/activities/Chess%20Club/signup?email=newstudent@mergington.edu",
        ))
        .await
        .unwrap();

    // Check the response status
    assert_eq!(response.status(), StatusCode::OK);

    // The confirmation names the student and the activity
    let confirmation: MessageResponse = body_json(response).await;
    assert!(confirmation.message.contains("Signed up"));
    assert!(confirmation.message.contains("newstudent@mergington.edu"));

    // The roster grew by exactly one and contains both emails
    let response = app.clone().oneshot(get("/activities")).await.unwrap();
    let activities: HashMap<String, Activity> = body_json(response).await;
    let chess = &activities["Chess Club"];
    assert_eq!(chess.participants.len(), 3);
    assert!(
        chess
            .participants
            .contains(&"michael@mergington.edu".to_string())
    );
    assert!(
        chess
            .participants
            .contains(&"newstudent@mergington.edu".to_string())
    );
}

#[tokio::test]
async fn test_signup_duplicate_student() {
    let app = routes::create_api_router().with_state(create_test_state());

    // michael@mergington.edu is already on the seeded Chess Club roster
    let response = app
        .clone()
        .oneshot(post(
            "/activities/Chess%20Club/signup?email=michael@mergington.edu",
        ))
        .await
        .unwrap();

    // Check the response status
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The error body follows the {"detail": ...} shape
    let error: ErrorDetail = body_json(response).await;
    assert!(error.detail.contains("already signed up"));

    // The roster is unchanged
    let response = app.clone().oneshot(get("/activities")).await.unwrap();
    let activities: HashMap<String, Activity> = body_json(response).await;
    assert_eq!(activities["Chess Club"].participants.len(), 2);
}

#[tokio::test]
async fn test_signup_unknown_activity() {
    let app = routes::create_api_router().with_state(create_test_state());

    let response = app
        .clone()
        .oneshot(post(
            "/activities/Quidditch%20Club/signup?email=newstudent@mergington.edu",
        ))
        .await
        .unwrap();

    // Check the response status
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorDetail = body_json(response).await;
    assert_eq!(error.detail, "Activity not found");

    // Nothing was created as a side effect
    let response = app.clone().oneshot(get("/activities")).await.unwrap();
    let activities: HashMap<String, Activity> = body_json(response).await;
    assert!(!activities.contains_key("Quidditch Club"));
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = routes::create_api_router().with_state(create_test_state());

    let response = app
        .clone()
        .oneshot(post("/activities/Chess%20Club/signup?email=not-an-email"))
        .await
        .unwrap();

    // Check the response status
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorDetail = body_json(response).await;
    assert_eq!(error.detail, "Invalid email address");

    // The roster is unchanged
    let response = app.clone().oneshot(get("/activities")).await.unwrap();
    let activities: HashMap<String, Activity> = body_json(response).await;
    assert_eq!(activities["Chess Club"].participants.len(), 2);
}

#[tokio::test]
async fn test_unregister_route() {
    let app = routes::create_api_router().with_state(create_test_state());

    // Remove a seeded participant
    let response = app
        .clone()
        .oneshot(post(
            "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
        ))
        .await
        .unwrap();

    // Check the response status
    assert_eq!(response.status(), StatusCode::OK);

    let confirmation: MessageResponse = body_json(response).await;
    assert!(confirmation.message.contains("Unregistered"));

    // The roster shrank by exactly one and no longer contains the email
    let response = app.clone().oneshot(get("/activities")).await.unwrap();
    let activities: HashMap<String, Activity> = body_json(response).await;
    let chess = &activities["Chess Club"];
    assert_eq!(chess.participants.len(), 1);
    assert!(
        !chess
            .participants
            .contains(&"michael@mergington.edu".to_string())
    );

    // Unregistering the same email again is rejected
    let response = app
        .clone()
        .oneshot(post(
            "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDetail = body_json(response).await;
    assert!(error.detail.contains("not registered"));
}

#[tokio::test]
async fn test_unregister_unknown_activity() {
    let app = routes::create_api_router().with_state(create_test_state());

    let response = app
        .oneshot(post(
            "/activities/Quidditch%20Club/unregister?email=michael@mergington.edu",
        ))
        .await
        .unwrap();

    // Check the response status
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorDetail = body_json(response).await;
    assert_eq!(error.detail, "Activity not found");
}

#[tokio::test]
async fn test_signup_past_capacity() {
    // A one-seat activity that is already full
    let app_state = create_state_with_activity(
        "Chess Boxing",
        Activity {
            description: "Alternate rounds of chess and boxing".to_string(),
            schedule: "Saturdays, 10:00 AM - 12:00 PM".to_string(),
            max_participants: 1,
            participants: vec!["first@mergington.edu".to_string()],
        },
    );
    let app = routes::create_api_router().with_state(app_state);

    // Capacity is advisory only, so the signup still succeeds
    let response = app
        .clone()
        .oneshot(post(
            "/activities/Chess%20Boxing/signup?email=second@mergington.edu",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/activities")).await.unwrap();
    let activities: HashMap<String, Activity> = body_json(response).await;
    let activity = &activities["Chess Boxing"];
    assert_eq!(activity.participants.len(), 2);
    assert!(activity.participants.len() > activity.max_participants as usize);
}

#[tokio::test]
async fn test_root_redirects_to_front_end() {
    let app = routes::create_api_router().with_state(create_test_state());

    let response = app.oneshot(get("/")).await.unwrap();

    // Check the response status and target
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn test_health_route() {
    let app = routes::create_api_router().with_state(create_test_state());

    let response = app.oneshot(get("/health")).await.unwrap();

    // Check the response status
    assert_eq!(response.status(), StatusCode::OK);
}
