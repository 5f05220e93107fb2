//! End-to-end HTTP behavior against a small fixed content store.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use folio_server::{AppState, PortfolioServer, ServerConfig};
use folio_store::StaticContentStore;
use folio_types::{Experience, ExperienceType, Profile, Project, Skill};
use folio_validate::{ContactValidator, ValidationConfig};

fn test_store() -> StaticContentStore {
    StaticContentStore::new(
        vec![Skill::new("Languages", "☕", ["Java", "Python"])],
        vec![Project {
            id: "test-project".into(),
            title: "Test Project".into(),
            kind: "Test".into(),
            description: "A test project".into(),
            technologies: vec!["Java".into(), "Spring Boot".into()],
            github_url: "https://github.com/test/test".into(),
            demo_url: None,
            icon: "🧪".into(),
            highlights: Vec::new(),
        }],
        vec![Experience::new(
            "2023 - Present",
            "Software Engineer",
            "Test Company",
            "Test description",
            ExperienceType::Work,
        )],
    )
    .expect("valid test store")
}

fn app() -> Router {
    let validator = ContactValidator::standard(ValidationConfig::default()).expect("validator");
    let state = AppState::new(Arc::new(test_store()), Profile::default(), validator);
    PortfolioServer::with_state(ServerConfig::default(), state).router()
}

async fn get(path: &str) -> Response {
    app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

async fn post_form(path: &str, body: &'static str) -> Response {
    app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response")
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

async fn json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}

async fn text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf-8 body")
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

// ==========================================
// Pages
// ==========================================

#[tokio::test]
async fn home_page_renders_all_content_and_empty_form() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
    let html = text(response).await;
    assert!(html.contains("Nii Amatey Tagoe"));
    assert!(html.contains("Languages"));
    assert!(html.contains("Test Project"));
    assert!(html.contains("Test Company"));
    assert!(html.contains("name=\"name\" value=\"\""));
    assert!(html.contains("name=\"email\" value=\"\""));
}

#[tokio::test]
async fn valid_contact_redirects_with_flash_cookie() {
    let response = post_form(
        "/contact",
        "name=John+Doe&email=john%40example.com&subject=Job+Opportunity&message=I+have+a+job+opportunity+for+you%21",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/#contact");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("folio_flash=contact-sent"));
}

#[tokio::test]
async fn invalid_contact_rerenders_in_place() {
    let response = post_form(
        "/contact",
        "name=&email=invalid-email&subject=Hi&message=Short",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let html = text(response).await;
    for field in ["name", "email", "subject", "message"] {
        assert!(html.contains(&format!("id=\"{field}-error\"")), "no error for {field}");
    }
    assert!(html.contains("Test Project"));
}

#[tokio::test]
async fn only_violating_fields_are_flagged() {
    let response = post_form(
        "/contact",
        "name=Ada&email=ada%40example.com&subject=Hi&message=This+message+is+long+enough",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = text(response).await;
    assert!(html.contains("id=\"subject-error\""));
    assert!(!html.contains("id=\"name-error\""));
    assert!(!html.contains("id=\"email-error\""));
    assert!(!html.contains("id=\"message-error\""));
}

#[tokio::test]
async fn missing_fields_count_as_empty() {
    let response = post_form("/contact", "name=Ada").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = text(response).await;
    assert!(html.contains("Email is required"));
}

#[tokio::test]
async fn duplicate_keys_rerender_with_errors() {
    let response = post_form("/contact", "name=a&name=b").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());
    let html = text(response).await;
    assert!(html.contains("Name is required"));
    assert!(html.contains("id=\"message-error\""));
}

#[tokio::test]
async fn contact_without_form_content_type_rerenders() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .body(Body::from("name=Ada"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
    assert!(text(response).await.contains("Email is required"));
}

#[tokio::test]
async fn flash_is_shown_once_and_cleared() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "folio_flash=contact-sent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cleared = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cleared.contains("Max-Age=0"));
    assert!(text(response).await.contains("Thank you for your message!"));

    let again = get("/").await;
    assert!(again.headers().get(header::SET_COOKIE).is_none());
    assert!(!text(again).await.contains("Thank you for your message!"));
}

#[tokio::test]
async fn projects_and_about_pages() {
    let projects = text(get("/projects").await).await;
    assert!(projects.contains("Test Project"));
    assert!(!projects.contains("Test Company"));

    let about = text(get("/about").await).await;
    assert!(about.contains("Languages"));
    assert!(about.contains("Test Company"));
    assert!(!about.contains("Test Project"));
}

#[tokio::test]
async fn unknown_page_is_html_404() {
    let response = get("/nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(content_type(&response).starts_with("text/html"));
}

// ==========================================
// API
// ==========================================

#[tokio::test]
async fn api_portfolio_returns_all_data() {
    let response = get("/api/v1/portfolio").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    let body = json(response).await;
    assert_eq!(body["name"], "Nii Amatey Tagoe");
    assert_eq!(body["skills"].as_array().unwrap().len(), 1);
    assert_eq!(body["projects"].as_array().unwrap().len(), 1);
    assert_eq!(body["experiences"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn api_skills() {
    let body = json(get("/api/v1/skills").await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["category"], "Languages");
}

#[tokio::test]
async fn api_projects() {
    let body = json(get("/api/v1/projects").await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Test Project");
    assert_eq!(body[0]["githubUrl"], "https://github.com/test/test");
}

#[tokio::test]
async fn api_project_by_id() {
    let response = get("/api/v1/projects/test-project").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    let body = json(response).await;
    assert_eq!(body["id"], "test-project");
    assert_eq!(body["title"], "Test Project");
}

#[tokio::test]
async fn api_project_by_unknown_id_is_404() {
    let response = get("/api/v1/projects/non-existent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn api_experiences() {
    let body = json(get("/api/v1/experiences").await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Software Engineer");
    assert_eq!(body[0]["type"], "WORK");
}

#[tokio::test]
async fn api_health_is_fixed() {
    let response = get("/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json(response).await,
        serde_json::json!({ "status": "UP", "service": "portfolio-api", "version": "1.0.0" })
    );
}

#[tokio::test]
async fn api_unknown_route_is_json_404() {
    let response = get("/api/v1/nothing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_type(&response), "application/json");
}

#[tokio::test]
async fn repeated_reads_are_byte_identical() {
    for path in [
        "/api/v1/portfolio",
        "/api/v1/skills",
        "/api/v1/projects",
        "/api/v1/projects/test-project",
        "/api/v1/experiences",
        "/api/v1/health",
    ] {
        let first = body_bytes(get(path).await).await;
        let second = body_bytes(get(path).await).await;
        assert_eq!(first, second, "{path}");
    }
}
