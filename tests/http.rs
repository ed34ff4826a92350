use actix_web::{
    App,
    http::{Method, StatusCode, header},
    test,
    web::Data,
};
use leave_ledger::config::Config;
use leave_ledger::routes;
use leave_ledger::store::MemoryStore;
use leave_ledger::LeaveLedger;
use serde_json::{Value, json};
use std::sync::Arc;

fn test_config(api_prefix: &str) -> Config {
    Config {
        rate_per_min: 0,
        api_prefix: api_prefix.to_string(),
        ..Config::default()
    }
}

macro_rules! app {
    ($prefix:expr) => {{
        let config = test_config($prefix);
        let limiter = routes::limiter_config(config.rate_per_min).unwrap();
        let ledger = Data::new(LeaveLedger::new(Arc::new(MemoryStore::new())));
        test::init_service(
            App::new()
                .wrap(routes::cors(&config))
                .app_data(ledger)
                .configure(|cfg| routes::configure(cfg, &config, &limiter)),
        )
        .await
    }};
}

fn employee_body(email: &str) -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": email,
        "department": "Engineering",
        "joining_date": "2024-01-01"
    })
}

#[actix_web::test]
async fn health_is_ok() {
    let app = app!("");
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[actix_web::test]
async fn leave_lifecycle_over_http() {
    let app = app!("");

    let req = test::TestRequest::get().uri("/employees/next-id").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["next_id"], "E001");

    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(employee_body("ada@example.com"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Employee created");
    assert_eq!(body["employee"]["id"], "E001");
    assert_eq!(body["employee"]["leave_balance"], 24);

    let req = test::TestRequest::post()
        .uri("/leaves/apply")
        .set_json(json!({
            "employee_id": "E001",
            "start_date": "2024-03-01",
            "end_date": "2024-03-05",
            "reason": "holiday"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["leave"]["id"], "L001");
    assert_eq!(body["leave"]["days"], 5);
    assert_eq!(body["leave"]["status"], "PENDING");

    let req = test::TestRequest::get().uri("/leaves/pending").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pending"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::post()
        .uri("/leaves/approve")
        .set_json(json!({ "id": "L001" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Leave approved");
    assert_eq!(body["leave"]["status"], "APPROVED");

    let req = test::TestRequest::get().uri("/employees/E001/balance").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "employee_id": "E001", "balance": 19 }));

    let req = test::TestRequest::post()
        .uri("/leaves/approve")
        .set_json(json!({ "id": "L001" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("PENDING"));

    let req = test::TestRequest::get().uri("/leaves/next-id").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["next_id"], "L002");
}

#[actix_web::test]
async fn errors_map_to_status_codes() {
    let app = app!("");

    let req = test::TestRequest::get().uri("/employees/E404/balance").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Employee not found");

    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(json!({
            "name": "Bad Date",
            "email": "bad@example.com",
            "department": "Ops",
            "joining_date": "someday"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(employee_body("ada@example.com"))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(employee_body("ADA@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email already exists");

    let req = test::TestRequest::post()
        .uri("/leaves/reject")
        .set_json(json!({ "id": "L404", "reason": "n/a" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/leaves/apply")
        .set_json(json!({
            "employee_id": "E001",
            "start_date": "2024-04-01",
            "end_date": "2024-04-30"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn routes_honour_the_api_prefix() {
    let app = app!("/api");

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(employee_body("ada@example.com"))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get().uri("/api/employees").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["employees"][0]["email"], "ada@example.com");

    let req = test::TestRequest::get().uri("/employees").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn rejection_over_http_replaces_reason() {
    let app = app!("");

    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(employee_body("ada@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/leaves/apply")
        .set_json(json!({
            "id": "L100",
            "employee_id": "E001",
            "start_date": "2024-03-01",
            "end_date": "2024-03-01",
            "reason": "dentist"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["leave"]["id"], "L100");

    let req = test::TestRequest::post()
        .uri("/leaves/reject")
        .set_json(json!({ "id": "L100", "reason": "coverage gap" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Leave rejected");
    assert_eq!(body["leave"]["status"], "REJECTED");
    assert_eq!(body["leave"]["reason"], "coverage gap");

    let req = test::TestRequest::get().uri("/employees/E001/balance").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["balance"], 24);
}

#[actix_web::test]
async fn preflight_from_the_frontend_origin_is_allowed() {
    let app = app!("");

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/leaves/apply")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );

    let req = test::TestRequest::get()
        .uri("/leaves/pending")
        .insert_header((header::ORIGIN, "http://127.0.0.1:5173"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://127.0.0.1:5173"
    );
}

#[actix_web::test]
async fn unknown_origin_gets_no_cors_grant() {
    let app = app!("");

    let req = test::TestRequest::get()
        .uri("/leaves/pending")
        .insert_header((header::ORIGIN, "https://evil.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[actix_web::test]
async fn malformed_body_gets_a_json_message() {
    let app = app!("");

    let req = test::TestRequest::post()
        .uri("/leaves/apply")
        .set_json(json!({ "start_date": "2024-03-01", "end_date": "2024-03-02" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("employee_id"));
}
