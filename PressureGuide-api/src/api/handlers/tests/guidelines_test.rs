use axum::http::StatusCode;
use serde_json::json;

use super::{empty_app, get, post_json};

#[tokio::test]
async fn test_list_guidelines() {
    let (status, body) = get(empty_app(), "/api/v1/guidelines").await;

    assert_eq!(status, StatusCode::OK);
    let guidelines = body.as_array().unwrap();
    let tokens: Vec<&str> = guidelines.iter().map(|g| g["guideline"].as_str().unwrap()).collect();
    assert_eq!(tokens, vec!["aha_acc", "esc_esh", "jsh", "who"]);

    let aha = &guidelines[0];
    assert_eq!(aha["is_default"], true);
    assert_eq!(aha["thresholds"]["crisis"]["systolic_at_least"], 180);
    assert_eq!(aha["thresholds"]["elevated"]["shape"], "systolic_with_low_diastolic");
    assert_eq!(guidelines[1]["thresholds"]["elevated"]["shape"], "high_normal_range");
}

#[tokio::test]
async fn test_classify_reading() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/classify",
        json!({ "systolic": 120, "diastolic": 80, "pulse": 72 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fell_back"], false);
    let assessment = &body["assessment"];
    assert_eq!(assessment["guideline"], "aha_acc");
    assert_eq!(assessment["category"], "stage_1");
    assert_eq!(assessment["is_high_alert"], false);
    assert_eq!(assessment["pulse_pressure"], 40);
    assert_eq!(assessment["mean_arterial_pressure"], 93);
    assert_eq!(assessment["validation"]["is_valid"], true);
}

#[tokio::test]
async fn test_classify_with_other_guideline() {
    let (_, body) = post_json(
        empty_app(),
        "/api/v1/classify",
        json!({ "systolic": 135, "diastolic": 85, "guideline": "esc_esh" }),
    )
    .await;

    assert_eq!(body["assessment"]["guideline"], "esc_esh");
    assert_eq!(body["assessment"]["category"], "elevated");
}

#[tokio::test]
async fn test_classify_unknown_guideline_falls_back() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/classify",
        json!({ "systolic": 185, "diastolic": 95, "guideline": "nice" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fell_back"], true);
    assert_eq!(body["assessment"]["guideline"], "aha_acc");
    assert_eq!(body["assessment"]["category"], "crisis");
    assert_eq!(body["assessment"]["is_high_alert"], true);
}

#[tokio::test]
async fn test_classify_still_reports_invalid_values() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/classify",
        json!({ "systolic": 80, "diastolic": 80 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assessment"]["validation"]["is_valid"], false);
    assert_eq!(
        body["assessment"]["validation"]["errors"][0]["code"],
        "systolic_not_above_diastolic"
    );
}

#[tokio::test]
async fn test_classify_integer_limits() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/classify",
        json!({ "systolic": i32::MAX, "diastolic": -1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assessment"]["category"], "crisis");
    assert_eq!(body["assessment"]["pulse_pressure"], 2_147_483_648_i64);
    assert_eq!(body["assessment"]["validation"]["is_valid"], false);
}
