use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::post,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use warden_adapters::config::AllowedOrigins;
use warden_axum::routes::{login, refresh, signup};
use warden_core::{AccountStore, CredentialHasher, TokenIssuer};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The credential service: signup, login and refresh routes.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService from its three collaborators
    ///
    /// # Arguments
    /// * `account_store` - Store for account records (must be Clone)
    /// * `hasher` - Password hasher (must be Clone)
    /// * `token_issuer` - Access/refresh token issuer (must be Clone)
    ///
    /// Each route is given only the state it needs.
    pub fn new<U, H, T>(account_store: U, hasher: H, token_issuer: T) -> Self
    where
        U: AccountStore + Clone + 'static,
        H: CredentialHasher + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
    {
        let router = Router::new()
            // Signup needs the store and the hasher
            .route("/signup", post(signup::<U, H>))
            .with_state((account_store.clone(), hasher.clone()))
            // Login needs all three
            .route("/login", post(login::<U, H, T>))
            .with_state((account_store, hasher, token_issuer.clone()))
            // Refresh only needs the token issuer
            .route("/refresh", post(refresh::<T>))
            .with_state(token_issuer);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be nested into another one
    ///
    /// CORS is only added when `allowed_origins` is given and non-empty.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server on `listener`
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
