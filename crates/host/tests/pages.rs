mod common;

use axum::http::StatusCode;
use servo_web_host::config::Config;

use common::{app, app_with, get, get_json};

#[tokio::test]
async fn test_index_lists_panels() {
    let (app, _) = app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    for page in ["/pwm.html", "/servo.html", "/position-3d.html", "/calibrate.html"] {
        assert!(body.contains(page), "index does not link {page}");
    }
}

#[tokio::test]
async fn test_panel_pages_declare_their_preset() {
    let (app, _) = app();
    for (page, preset) in [
        ("/pwm.html", "pwm"),
        ("/servo.html", "servo"),
        ("/position-2d.html", "position_2d"),
        ("/position-3d.html", "position_3d"),
        ("/calibrate.html", "calibrate"),
    ] {
        let (status, body) = get(&app, page).await;
        assert_eq!(status, StatusCode::OK, "{page}");
        assert!(body.contains(&format!("data-panel=\"{preset}\"")), "{page}");
    }
}

#[tokio::test]
async fn test_missing_asset_is_404() {
    let (app, _) = app();
    let (status, _) = get(&app, "/nope.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_config_js_carries_device_base() {
    let (app, _) = app();
    let (status, body) = get(&app, "/config.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "window.SERVO_WEB_CONFIG = { deviceBase: \"\" };");

    let mut config = Config::default();
    config.server.device_base = "http://169.254.1.1".into();
    let (app, _) = app_with(&config);
    let (_, body) = get(&app, "/config.js").await;
    assert!(body.contains("deviceBase: \"http://169.254.1.1\""), "{body}");
}

#[tokio::test]
async fn test_health_and_panels_api() {
    let (app, _) = app();
    let health = get_json(&app, "/api/health").await;
    assert_eq!(health["status"], "ok");

    let panels = get_json(&app, "/api/panels").await;
    let names: Vec<&str> = panels["panels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["pwm", "servo", "position_2d", "calibrate", "position_3d"]
    );
    assert_eq!(panels["panels"][3]["transform"]["divisor"], 6666.66);
}
