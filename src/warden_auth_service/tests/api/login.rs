use serde_json::json;
use warden_core::{Role, TokenIssuer};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_200_with_both_tokens() {
    let app = TestApp::new().await;

    let body = app.signup_and_login().await;

    let access = body["accessToken"].as_str().expect("accessToken");
    let refresh = body["refreshToken"].as_str().expect("refreshToken");

    let access = app.token_issuer.verify_access_token(access).unwrap();
    let refresh = app.token_issuer.verify_refresh_token(refresh).unwrap();
    assert_eq!(access.payload, refresh.payload);
    assert_eq!(access.payload.name, "loo");
    assert_eq!(access.payload.role, Role::User);
}

#[tokio::test]
async fn should_return_403_for_wrong_password() {
    let app = TestApp::new().await;
    app.signup_and_login().await;

    let response = app
        .post_login(&json!({ "email": "loo@hotmail.com", "password": "1234" }))
        .await;

    assert_eq!(response.status().as_u16(), 403);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_return_404_for_unknown_email() {
    let app = TestApp::new().await;
    app.signup_and_login().await;

    let response = app
        .post_login(&json!({ "email": "hy@gmail.com", "password": "123" }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_match_email_case_insensitively() {
    let app = TestApp::new().await;
    app.signup_and_login().await;

    let response = app
        .post_login(&json!({ "email": "Loo@Hotmail.COM", "password": "123" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_return_500_if_malformed_input() {
    let app = TestApp::new().await;
    app.signup_and_login().await;

    let inputs = [
        json!({ "password": "123" }),
        json!({ "email": "loo@hotmail.com" }),
        json!({ "email": 42, "password": "123" }),
    ];

    for input in inputs {
        let response = app.post_login(&input).await;
        assert_eq!(
            response.status().as_u16(),
            500,
            "Failed for input: {input:?}"
        );
        assert!(response.text().await.unwrap().is_empty());
    }
}
