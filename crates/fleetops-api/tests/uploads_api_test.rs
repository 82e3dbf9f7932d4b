mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

use helpers::fixtures::{
    count_rider_orders, csv_bytes, seed_assignment, seed_company, seed_rider, set_rate,
};
use helpers::{post_statement, setup_test_app};

async fn upload_simple(app: &helpers::TestApp, company_id: i64, code: &str, date: &str) -> Uuid {
    let file = csv_bytes(&[&["Rider ID", "Orders"], &[code, "2"]]);
    let response = post_statement(&app.server, "orders.csv", file, company_id, date, None).await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["data"]["uploadId"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap()
}

#[tokio::test]
async fn test_list_uploads_newest_first_with_company_filter() {
    let app = setup_test_app().await;
    set_rate(&app.pool, "50").await;

    let company_a = seed_company(&app.pool, "Alpha Fleet").await;
    let rider_a = seed_rider(&app.pool, company_a, "Jane Doe").await;
    seed_assignment(&app.pool, company_a, rider_a, "A1").await;

    let company_b = seed_company(&app.pool, "Beta Fleet").await;
    let rider_b = seed_rider(&app.pool, company_b, "John Roe").await;
    seed_assignment(&app.pool, company_b, rider_b, "B1").await;

    let first = upload_simple(&app, company_a, "A1", "2026-06-15").await;
    let second = upload_simple(&app, company_a, "A1", "2026-06-16").await;
    upload_simple(&app, company_b, "B1", "2026-06-15").await;

    let response = app
        .server
        .get("/orders/uploads")
        .add_query_param("company_id", company_a)
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let uploads = body["data"].as_array().unwrap();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0]["id"], second.to_string());
    assert_eq!(uploads[1]["id"], first.to_string());

    let response = app.server.get("/orders/uploads").await;
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_uploads_respects_limit_and_offset() {
    let app = setup_test_app().await;
    set_rate(&app.pool, "50").await;

    let company_id = seed_company(&app.pool, "Acme Fleet").await;
    let rider_id = seed_rider(&app.pool, company_id, "Jane Doe").await;
    seed_assignment(&app.pool, company_id, rider_id, "R1").await;

    for day in 10..13 {
        upload_simple(&app, company_id, "R1", &format!("2026-06-{day}")).await;
    }

    let response = app
        .server
        .get("/orders/uploads")
        .add_query_param("limit", 2)
        .await;
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = app
        .server
        .get("/orders/uploads")
        .add_query_param("limit", 2)
        .add_query_param("offset", 2)
        .await;
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_upload_returns_metadata() {
    let app = setup_test_app().await;
    set_rate(&app.pool, "50").await;

    let company_id = seed_company(&app.pool, "Acme Fleet").await;
    let rider_id = seed_rider(&app.pool, company_id, "Jane Doe").await;
    seed_assignment(&app.pool, company_id, rider_id, "R1").await;
    let upload_id = upload_simple(&app, company_id, "R1", "2026-06-15").await;

    let response = app.server.get(&format!("/orders/uploads/{upload_id}")).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["id"], upload_id.to_string());
    assert_eq!(body["data"]["status"], "processed");
    assert_eq!(body["data"]["fileName"], "orders.csv");
    assert_eq!(body["data"]["orderDate"], "2026-06-15");
}

#[tokio::test]
async fn test_get_unknown_upload_is_404() {
    let app = setup_test_app().await;

    let response = app
        .server
        .get(&format!("/orders/uploads/{}", Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Upload not found");
}

#[tokio::test]
async fn test_upload_rows_listed_in_statement_order() {
    let app = setup_test_app().await;
    set_rate(&app.pool, "50").await;

    let company_id = seed_company(&app.pool, "Acme Fleet").await;
    for (rider, code) in [("A", "R1"), ("B", "R2"), ("C", "R3")] {
        let rider_id = seed_rider(&app.pool, company_id, rider).await;
        seed_assignment(&app.pool, company_id, rider_id, code).await;
    }

    let file = csv_bytes(&[
        &["Rider ID", "Orders"],
        &["R2", "1"],
        &["R3", "2"],
        &["R1", "3"],
    ]);
    let response =
        post_statement(&app.server, "orders.csv", file, company_id, "2026-06-15", None).await;
    response.assert_status_ok();
    let upload_id: Uuid = response.json::<serde_json::Value>()["data"]["uploadId"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    let response = app
        .server
        .get(&format!("/orders/uploads/{upload_id}/rows"))
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let rows = body["data"].as_array().unwrap();
    let codes: Vec<&str> = rows
        .iter()
        .map(|row| row["externalRiderId"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["R2", "R3", "R1"]);

    // Sheet positions are persisted and drive the listing order.
    let numbers: Vec<i64> = rows
        .iter()
        .map(|row| row["rowNumber"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![2, 3, 4]);
}

#[tokio::test]
async fn test_rows_of_unknown_upload_is_404() {
    let app = setup_test_app().await;

    let response = app
        .server
        .get(&format!("/orders/uploads/{}/rows", Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_upload_cascades_to_rows() {
    let app = setup_test_app().await;
    set_rate(&app.pool, "50").await;

    let company_id = seed_company(&app.pool, "Acme Fleet").await;
    let rider_id = seed_rider(&app.pool, company_id, "Jane Doe").await;
    seed_assignment(&app.pool, company_id, rider_id, "R1").await;
    let upload_id = upload_simple(&app, company_id, "R1", "2026-06-15").await;
    assert_eq!(count_rider_orders(&app.pool).await, 1);

    let response = app
        .server
        .delete(&format!("/orders/uploads/{upload_id}"))
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "Upload deleted");
    assert_eq!(body["data"]["id"], upload_id.to_string());

    let response = app.server.get(&format!("/orders/uploads/{upload_id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(count_rider_orders(&app.pool).await, 0);

    let response = app
        .server
        .delete(&format!("/orders/uploads/{upload_id}"))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
