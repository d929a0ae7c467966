use reqwest::{Client, Response};
use secrecy::Secret;
use serde_json::{Value, json};
use warden_adapters::{
    config::{AllowedOrigins, constants::test},
    hashing::Argon2Hasher,
    persistence::HashMapAccountStore,
    tokens::{JwtConfig, JwtTokenIssuer},
};
use warden_auth_service::AuthService;

pub const ACCESS_SECRET: &str = "test-access-secret";
pub const REFRESH_SECRET: &str = "test-refresh-secret";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub token_issuer: JwtTokenIssuer,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_refresh_ttl(3600).await
    }

    /// Spawn the service on a random port with the in-memory store.
    pub async fn with_refresh_ttl(refresh_ttl: i64) -> Self {
        let token_issuer = JwtTokenIssuer::new(
            JwtConfig::new(Secret::from(ACCESS_SECRET.to_string()), 900),
            JwtConfig::new(Secret::from(REFRESH_SECRET.to_string()), refresh_ttl),
        );
        // cheap parameters keep the suite fast
        let hasher = Argon2Hasher::new(64, 1, 1);
        let service = AuthService::new(HashMapAccountStore::new(), hasher, token_issuer.clone());

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let origins = AllowedOrigins::from(vec!["http://localhost:8000".to_string()]);
        tokio::spawn(service.run_standalone(listener, Some(origins)));

        Self {
            address,
            http_client: Client::new(),
            token_issuer,
        }
    }

    pub async fn post_signup(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/signup", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_refresh(&self, authorization: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}/refresh", self.address));
        if let Some(authorization) = authorization {
            request = request.header("Authorization", authorization);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Sign up `loo@hotmail.com` / `123` and log in, returning the login body.
    pub async fn signup_and_login(&self) -> Value {
        let response = self.post_signup(&default_signup()).await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self
            .post_login(&json!({ "email": "loo@hotmail.com", "password": "123" }))
            .await;
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.expect("login body is json")
    }
}

pub fn default_signup() -> Value {
    json!({
        "name": "loo",
        "email": "loo@hotmail.com",
        "password": "123"
    })
}
