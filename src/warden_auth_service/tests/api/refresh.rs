use serde_json::json;
use warden_core::TokenIssuer;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_new_access_token_for_valid_refresh_token() {
    let app = TestApp::new().await;
    let login = app.signup_and_login().await;
    let refresh = login["refreshToken"].as_str().unwrap();

    let response = app.post_refresh(Some(&format!("Bearer {refresh}"))).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("refreshToken").is_none());

    let access = app
        .token_issuer
        .verify_access_token(body["accessToken"].as_str().unwrap())
        .unwrap();
    let original = app.token_issuer.verify_refresh_token(refresh).unwrap();
    assert_eq!(access.payload, original.payload);
}

#[tokio::test]
async fn should_return_401_for_bad_headers() {
    let app = TestApp::new().await;
    let login = app.signup_and_login().await;
    let access = login["accessToken"].as_str().unwrap();
    let refresh = login["refreshToken"].as_str().unwrap();

    let headers = [
        None,
        Some(refresh.to_string()),
        Some("Bearer".to_string()),
        Some("Bearer not-a-token".to_string()),
        Some(format!("Basic {refresh}")),
        Some(format!("Bearer {access}")),
    ];

    for header in headers {
        let response = app.post_refresh(header.as_deref()).await;
        assert_eq!(
            response.status().as_u16(),
            401,
            "Failed for header: {header:?}"
        );
        assert!(response.text().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn should_return_401_for_expired_refresh_token() {
    let app = TestApp::with_refresh_ttl(-60).await;
    let login = app.signup_and_login().await;
    let refresh = login["refreshToken"].as_str().unwrap();

    let response = app.post_refresh(Some(&format!("Bearer {refresh}"))).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_allow_configured_origin() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/refresh", app.address))
        .header("Origin", "http://localhost:8000")
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:8000")
    );
}
