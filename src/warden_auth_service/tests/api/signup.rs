use serde_json::json;

use crate::helpers::{TestApp, default_signup};

#[tokio::test]
async fn should_return_201_with_empty_body_for_valid_input() {
    let app = TestApp::new().await;

    let response = app.post_signup(&default_signup()).await;

    assert_eq!(response.status().as_u16(), 201);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    app.post_signup(&default_signup()).await;

    let response = app
        .post_signup(&json!({
            "name": "hy",
            "email": "LOO@hotmail.com",
            "password": "456"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errCode"], "DUPLICATE_KEY");
    assert_eq!(
        body["errMessage"],
        "'loo@hotmail.com' already exist. Select another email."
    );
}

#[tokio::test]
async fn should_return_500_for_invalid_input() {
    let app = TestApp::new().await;

    let inputs = [
        json!({ "name": "loo", "email": "loo.hotmail.com", "password": "123" }),
        json!({ "name": "loo", "email": "loo@hotmail.com", "password": "" }),
        json!({ "name": "  ", "email": "loo@hotmail.com", "password": "123" }),
    ];

    for input in inputs {
        let response = app.post_signup(&input).await;
        assert_eq!(
            response.status().as_u16(),
            500,
            "Failed for input: {input:?}"
        );
        assert!(response.text().await.unwrap().is_empty());
    }

    let response = app
        .post_login(&json!({ "email": "loo@hotmail.com", "password": "123" }))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_500_if_malformed_input() {
    let app = TestApp::new().await;

    let inputs = [
        json!({ "email": "loo@hotmail.com", "password": "123" }),
        json!({ "name": "loo", "password": "123" }),
        json!({ "name": true, "email": "loo@hotmail.com", "password": "123" }),
    ];

    for input in inputs {
        let response = app.post_signup(&input).await;
        assert_eq!(
            response.status().as_u16(),
            500,
            "Failed for input: {input:?}"
        );
        assert!(response.text().await.unwrap().is_empty());
    }
}
