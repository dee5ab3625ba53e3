pub mod token_icon;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use crate::{services::{LinkChecker, TokenIconResolver}, Config};

pub use token_icon::{check_token_icon, get_token_icon, render_token_icon};

pub fn create_router<C>(resolver: TokenIconResolver<C>, config: Config) -> Router
where
    C: LinkChecker + Clone + 'static,
{
    let cors_layer = create_cors_layer(&config);
    let app_state = (resolver, config);

    Router::new()
        .route("/health", get(health_check))
        // Token icon endpoints
        .route("/api/token-icon", get(get_token_icon::<C>))
        .route("/api/token-icon/exists", get(check_token_icon::<C>))
        .route("/api/token-icon/img", get(render_token_icon::<C>))
        .layer(cors_layer)
        .with_state(app_state)
}

fn create_cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .flatten()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        // Default to permissive for development
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

async fn health_check() -> &'static str {
    "OK"
}
