use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{AppConfig, Mode};
use tower::ServiceExt;

use server::startup::{build_app, seeded_users};

const ORIGIN: &str = "http://localhost:3000";
const ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

fn app_with(mode: Mode, cors_origin: Option<&str>, logging: bool) -> Router {
    let config = AppConfig {
        mode,
        cors_origin: cors_origin.map(str::to_string),
        logging_enabled: logging,
        ..AppConfig::default()
    };
    build_app(&config, seeded_users())
}

fn get_root(origin: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/");
    if let Some(o) = origin {
        builder = builder.header("origin", o);
    }
    builder.body(Body::empty()).expect("request")
}

#[tokio::test]
async fn development_mode_sets_cors_headers() -> anyhow::Result<()> {
    let app = app_with(Mode::Development, Some(ORIGIN), false);
    let resp = app.oneshot(get_root(Some(ORIGIN))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], ORIGIN);
    assert_eq!(resp.headers()["access-control-allow-headers"], ALLOW_HEADERS);
    Ok(())
}

#[tokio::test]
async fn mismatched_origin_gets_no_allow_origin() -> anyhow::Result<()> {
    let app = app_with(Mode::Test, Some(ORIGIN), false);
    let resp = app.oneshot(get_root(Some("http://other.example"))).await?;
    assert!(resp.headers().get("access-control-allow-origin").is_none());
    assert_eq!(resp.headers()["access-control-allow-headers"], ALLOW_HEADERS);
    Ok(())
}

#[tokio::test]
async fn wildcard_origin_is_echoed() -> anyhow::Result<()> {
    let app = app_with(Mode::Development, Some("*"), false);
    let resp = app.oneshot(get_root(Some("http://anything.example"))).await?;
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    Ok(())
}

#[tokio::test]
async fn production_mode_has_no_cors_headers() -> anyhow::Result<()> {
    let app = app_with(Mode::Production, Some("*"), true);
    let resp = app.oneshot(get_root(Some(ORIGIN))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("access-control-allow-origin").is_none());
    assert!(resp.headers().get("access-control-allow-headers").is_none());
    Ok(())
}

#[tokio::test]
async fn preflight_is_answered_directly() -> anyhow::Result<()> {
    let app = app_with(Mode::Development, Some(ORIGIN), false);
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/users")
        .header("origin", ORIGIN)
        .header("access-control-request-method", "POST")
        .body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], ORIGIN);
    assert_eq!(resp.headers()["access-control-allow-headers"], ALLOW_HEADERS);
    let methods = resp.headers()["access-control-allow-methods"].to_str()?;
    assert!(methods.contains("DELETE"));
    Ok(())
}

#[tokio::test]
async fn exact_origin_responses_vary_on_origin() -> anyhow::Result<()> {
    let app = app_with(Mode::Development, Some(ORIGIN), false);
    let resp = app.oneshot(get_root(Some(ORIGIN))).await?;
    let vary: Vec<String> = resp
        .headers()
        .get_all("vary")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_ascii_lowercase)
        .collect();
    assert!(vary.iter().any(|v| v.contains("origin")), "vary: {vary:?}");
    Ok(())
}

#[tokio::test]
async fn request_logging_does_not_alter_responses() -> anyhow::Result<()> {
    common::utils::logging::init_logging_default();
    let app = app_with(Mode::Development, None, true);
    let resp = app.clone().oneshot(get_root(None)).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let req = Request::builder().uri("/api/users/999").body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
