//! End-to-end API tests against an in-memory application state.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use folio_api::state::AppState;
use folio_api::{handlers, json_config};

async fn spawn_app() -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new()))
            .app_data(json_config())
            .configure(handlers::configure_routes),
    )
    .await
}

fn valid_project_body() -> Value {
    json!({
        "title": "Folio",
        "content": "A portfolio backend",
        "projectLink": "https://folio.example.com",
        "githubLink": "https://github.com/folio/folio",
        "coverImageUrl": "https://cdn.example.com/cover.png"
    })
}

#[actix_web::test]
async fn health_reports_healthy() {
    let app = spawn_app().await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["message"], json!("API is running properly"));
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn create_then_publish_blog() {
    let app = spawn_app().await;

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(json!({"title": "Hello", "content": "World", "status": "draft"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("draft"));
    assert!(body["data"]["publishedAt"].is_null());
    let id = body["data"]["id"].as_str().unwrap().to_owned();

    let req = test::TestRequest::put()
        .uri(&format!("/api/blogs/{id}"))
        .set_json(json!({"status": "published"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], json!("published"));
    assert_eq!(body["data"]["title"], json!("Hello"));
}

#[actix_web::test]
async fn get_unknown_blog_is_404_envelope() {
    let app = spawn_app().await;

    let req = test::TestRequest::get()
        .uri("/api/blogs/doesnotexist")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Blog not found"));
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn invalid_status_filter_is_rejected() {
    let app = spawn_app().await;

    let req = test::TestRequest::get()
        .uri("/api/blogs?status=archived")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
}

#[actix_web::test]
async fn status_filter_partitions_blogs() {
    let app = spawn_app().await;

    for (title, status) in [("a", "draft"), ("b", "draft"), ("c", "published")] {
        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(json!({"title": title, "content": "body", "status": status}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/api/blogs?status=draft")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get().uri("/api/blogs").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn invalid_project_creates_nothing() {
    let app = spawn_app().await;

    // Missing projectLink (among others) must be itemized and leave the
    // store untouched.
    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({"title": "Folio", "content": "A CMS"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid project data"));
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == json!("projectLink")));

    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn project_round_trip_keeps_unpatched_fields() {
    let app = spawn_app().await;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(valid_project_body())
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["isGroup"], json!(false));
    let id = body["data"]["id"].as_str().unwrap().to_owned();

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{id}"))
        .set_json(json!({"isGroup": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["isGroup"], json!(true));
    assert_eq!(body["data"]["title"], json!("Folio"));
    assert_eq!(
        body["data"]["projectLink"],
        json!("https://folio.example.com")
    );
}

#[actix_web::test]
async fn delete_is_idempotent_observable() {
    let app = spawn_app().await;

    let req = test::TestRequest::post()
        .uri("/api/gallery")
        .set_json(json!({"name": "sunset", "url": "https://cdn.example.com/sunset.png"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_str().unwrap().to_owned();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/gallery/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], json!("Image deleted successfully"));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/gallery/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
}

#[actix_web::test]
async fn malformed_json_gets_envelope() {
    let app = spawn_app().await;

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
}

#[actix_web::test]
async fn states_are_isolated_between_apps() {
    let first = spawn_app().await;
    let second = spawn_app().await;

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(json!({"title": "Only here", "content": "body"}))
        .to_request();
    assert_eq!(test::call_service(&first, req).await.status(), 201);

    let req = test::TestRequest::get().uri("/api/blogs").to_request();
    let body: Value = test::read_body_json(test::call_service(&second, req).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
