use axum::http::StatusCode;
use serde_json::json;

use pressure_guide_domain::testing::{ReadingFixture, MIDNIGHT_UTC};

use super::{app_with, empty_app, get, post_json};

#[tokio::test]
async fn test_record_and_fetch_reading() {
    let app = empty_app();

    let (status, created) = post_json(
        app.clone(),
        "/api/v1/readings",
        json!({
            "systolic": 128,
            "diastolic": 82,
            "pulse": 70,
            "timestamp": MIDNIGHT_UTC,
            "posture": "sitting",
            "tags": ["caffeine"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["systolic"], 128);
    assert_eq!(created["posture"], "sitting");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = get(app.clone(), &format!("/api/v1/readings/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = get(app, "/api/v1/readings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_record_reading_lists_every_issue() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/readings",
        json!({ "diastolic": 250, "pulse": 10, "timestamp": MIDNIGHT_UTC }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    let codes: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["systolic_required", "diastolic_out_of_range", "pulse_out_of_range"]);
}

#[tokio::test]
async fn test_get_unknown_reading() {
    let (status, body) = get(empty_app(), "/api/v1/readings/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_list_readings_with_window() {
    let fixture = ReadingFixture::new()
        .at_hour(1, 120, 80)
        .at_hour(5, 125, 82)
        .at_hour(9, 130, 85);
    let start = MIDNIGHT_UTC + 2 * 3600;
    let end = MIDNIGHT_UTC + 9 * 3600;

    let (status, body) = get(app_with(&fixture), &format!("/api/v1/readings?start={}&end={}", start, end)).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body.as_array().unwrap().iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
}

#[tokio::test]
async fn test_inverted_window_is_bad_request() {
    let (status, body) = get(empty_app(), "/api/v1/readings?start=200&end=100").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}
