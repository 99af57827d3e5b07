// tests/integration/expenses/validation_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{app_helper, request, test_data};

#[tokio::test]
async fn test_create_without_description() {
    let (app, _db) = app_helper::setup_app().await;

    let payload = json!({
        "amount": 10.5,
        "category": "Food",
        "date": "2024-01-01"
    });
    let res = app
        .clone()
        .oneshot(request::json_request("POST", "/api/expenses", Some(&payload)))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = request::read_json(res).await;
    assert_eq!(body["error_type"], "validation_errors");
    assert_eq!(
        body["validation_errors"]["description"][0],
        "The description field is required."
    );
    assert!(body["validation_errors"].get("amount").is_none());

    // 何も保存されていないことを確認
    let res = app
        .clone()
        .oneshot(request::json_request("GET", "/api/expenses", None))
        .await
        .unwrap();
    let expenses = request::read_json(res).await;
    assert!(expenses.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_malformed_fields_reports_each_field() {
    let (app, _db) = app_helper::setup_app().await;

    let payload = json!({
        "description": "",
        "amount": "ten dollars",
        "category": 5,
        "date": "2024-13-45"
    });
    let res = app
        .oneshot(request::json_request("POST", "/api/expenses", Some(&payload)))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = request::read_json(res).await;
    let errors = body["validation_errors"].as_object().unwrap();
    assert_eq!(errors.len(), 4);
    assert_eq!(
        errors["amount"][0],
        "The amount field must be a number."
    );
    assert_eq!(errors["category"][0], "The category field must be a string.");
    assert_eq!(errors["date"][0], "The date field must be a valid date.");
}

#[tokio::test]
async fn test_update_with_invalid_body_keeps_stored_state() {
    let (app, _db) = app_helper::setup_app().await;

    let res = app
        .clone()
        .oneshot(request::json_request(
            "POST",
            "/api/expenses",
            Some(&test_data::lunch_expense()),
        ))
        .await
        .unwrap();
    let created = request::read_json(res).await;
    let uri = format!("/api/expenses/{}", created["id"].as_str().unwrap());

    // 部分更新は受け付けない（全項目必須）
    let partial = json!({ "description": "Dinner" });
    let res = app
        .clone()
        .oneshot(request::json_request("PUT", &uri, Some(&partial)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = request::read_json(res).await;
    for field in ["amount", "category", "date"] {
        assert!(body["validation_errors"].get(field).is_some());
    }

    let res = app
        .clone()
        .oneshot(request::json_request("GET", &uri, None))
        .await
        .unwrap();
    let fetched = request::read_json(res).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_missing_record_is_not_found_before_validation() {
    let (app, _db) = app_helper::setup_app().await;

    // ID の解決と存在確認がボディの検証より先に行われる
    for uri in [
        "/api/expenses/nonexistent-id".to_string(),
        format!("/api/expenses/{}", Uuid::new_v4()),
    ] {
        for method in ["PUT", "PATCH"] {
            let res = app
                .clone()
                .oneshot(request::json_request(method, &uri, Some(&json!({}))))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
            let body = request::read_json(res).await;
            assert_eq!(body["error_type"], "not_found");
        }

        let res = app
            .clone()
            .oneshot(request::raw_json_request("PUT", &uri, "{not json"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_update_existing_record_with_malformed_json() {
    let (app, _db) = app_helper::setup_app().await;

    let res = app
        .clone()
        .oneshot(request::json_request(
            "POST",
            "/api/expenses",
            Some(&test_data::lunch_expense()),
        ))
        .await
        .unwrap();
    let created = request::read_json(res).await;
    let uri = format!("/api/expenses/{}", created["id"].as_str().unwrap());

    let res = app
        .clone()
        .oneshot(request::raw_json_request("PUT", &uri, "{not json"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_amount_exceeding_column_precision() {
    let (app, _db) = app_helper::setup_app().await;

    let mut payload = test_data::lunch_expense();
    payload["amount"] = json!(1e20);
    let res = app
        .clone()
        .oneshot(request::json_request("POST", "/api/expenses", Some(&payload)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = request::read_json(res).await;
    assert_eq!(
        body["validation_errors"]["amount"][0],
        "The amount field must be less than 10000000000000."
    );

    // 上限ちょうど手前の値は保存できる
    payload["amount"] = json!("9999999999999.99");
    let res = app
        .clone()
        .oneshot(request::json_request("POST", "/api/expenses", Some(&payload)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = request::read_json(res).await;
    let stored = created["amount"].as_f64().unwrap();
    assert!((stored - 9999999999999.99).abs() < 0.01);

    let uri = format!("/api/expenses/{}", created["id"].as_str().unwrap());
    let mut update = test_data::dinner_expense();
    update["amount"] = json!("10000000000000");
    let res = app
        .clone()
        .oneshot(request::json_request("PUT", &uri, Some(&update)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = app
        .clone()
        .oneshot(request::json_request("GET", &uri, None))
        .await
        .unwrap();
    let fetched = request::read_json(res).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, _db) = app_helper::setup_app().await;

    let res = app
        .oneshot(request::raw_json_request(
            "POST",
            "/api/expenses",
            "{\"description\": \"Lunch\",",
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = request::read_json(res).await;
    assert_eq!(body["error_type"], "bad_request");
}
