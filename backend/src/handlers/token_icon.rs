use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use crate::{
    services::{append_token_icon, LinkChecker, TokenIconResolver},
    Config,
};

type AppState<C> = (TokenIconResolver<C>, Config);

#[derive(Debug, Deserialize)]
pub struct TokenIconQuery {
    pub chain_id: String,
    pub address_hash: String,
}

#[derive(Debug, Serialize)]
pub struct TokenIconResponse {
    pub url: String,
    pub is_default: bool,
}

#[derive(Debug, Deserialize)]
pub struct CheckLinkQuery {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckLinkResponse {
    pub url: Option<String>,
    pub exists: bool,
}

#[derive(Debug, Deserialize)]
pub struct RenderIconQuery {
    pub chain_id: String,
    pub address_hash: String,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub display: Option<bool>,
}

/// Resolve the icon URL for a token
pub async fn get_token_icon<C: LinkChecker + Clone + 'static>(
    State((resolver, _config)): State<AppState<C>>,
    Query(query): Query<TokenIconQuery>,
) -> Json<TokenIconResponse> {
    let icon = resolver.resolve(&query.chain_id, &query.address_hash).await;

    tracing::info!(
        "Token icon lookup chain={} address={} -> {}",
        query.chain_id,
        query.address_hash,
        icon
    );

    Json(TokenIconResponse {
        is_default: icon.is_default(),
        url: icon.into_string(),
    })
}

/// Report whether a URL answers with a success status
pub async fn check_token_icon<C: LinkChecker + Clone + 'static>(
    State((resolver, _config)): State<AppState<C>>,
    Query(query): Query<CheckLinkQuery>,
) -> Json<CheckLinkResponse> {
    let exists = resolver.checker().check_url_exists(query.url.as_deref()).await;
    Json(CheckLinkResponse { url: query.url, exists })
}

/// Render the `<img>` fragment for a token, or 204 when nothing should be shown
pub async fn render_token_icon<C: LinkChecker + Clone + 'static>(
    State((resolver, config)): State<AppState<C>>,
    Query(query): Query<RenderIconQuery>,
) -> Response {
    let display = query.display.unwrap_or(config.display_token_icons);
    let size = query.size.or(Some(config.token_icon_size));
    let mut container = Vec::new();

    append_token_icon(
        &resolver,
        Some(&mut container),
        &query.chain_id,
        &query.address_hash,
        display,
        size,
        config.asset_base_url.as_deref(),
    )
    .await;

    if container.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let html: String = container.iter().map(|img| img.to_html()).collect();
    Html(html).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, Router};
    use serde_json::Value;
    use tower::ServiceExt;
    use crate::{handlers::create_router, services::test_support::ScriptedChecker};

    const PRIMARY: &str = "https://tokens.app.pulsex.com/images/tokens/0xABC.png";

    fn app(checker: ScriptedChecker, config: Config) -> Router {
        create_router(TokenIconResolver::new(checker), config)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app(ScriptedChecker::default(), Config::default()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_get_token_icon() {
        let checker = ScriptedChecker::with_existing([PRIMARY]);
        let (status, body) = get(
            app(checker, Config::default()),
            "/api/token-icon?chain_id=1&address_hash=0xABC",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["url"], PRIMARY);
        assert_eq!(json["is_default"], false);
    }

    #[tokio::test]
    async fn test_get_token_icon_unknown_chain() {
        let checker = ScriptedChecker::default();
        let (status, body) = get(
            app(checker.clone(), Config::default()),
            "/api/token-icon?chain_id=56&address_hash=0xABC",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["url"], "/images/icons/token_icon_default.svg");
        assert_eq!(json["is_default"], true);
        assert!(checker.probed().is_empty());
    }

    #[tokio::test]
    async fn test_get_token_icon_missing_params() {
        let (status, _) = get(
            app(ScriptedChecker::default(), Config::default()),
            "/api/token-icon?chain_id=1",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_check_token_icon() {
        let checker = ScriptedChecker::with_existing([PRIMARY]);
        let uri = format!("/api/token-icon/exists?url={}", PRIMARY);
        let (status, body) = get(app(checker.clone(), Config::default()), &uri).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["exists"], true);

        let (_, body) = get(app(checker, Config::default()), "/api/token-icon/exists").await;
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["exists"], false);
        assert!(json["url"].is_null());
    }

    #[tokio::test]
    async fn test_render_token_icon() {
        let checker = ScriptedChecker::with_existing([PRIMARY]);
        let config = Config {
            token_icon_size: 16,
            ..Config::default()
        };
        let (status, body) = get(
            app(checker, config),
            "/api/token-icon/img?chain_id=1&address_hash=0xABC",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            format!(r#"<img width="16" height="16" src="{}" class="mr-1">"#, PRIMARY)
        );
    }

    #[tokio::test]
    async fn test_render_token_icon_hidden() {
        let checker = ScriptedChecker::with_existing([PRIMARY]);
        let (status, body) = get(
            app(checker.clone(), Config::default()),
            "/api/token-icon/img?chain_id=1&address_hash=0xABC&display=false",
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let config = Config {
            display_token_icons: false,
            ..Config::default()
        };
        let (status, _) = get(
            app(checker, config),
            "/api/token-icon/img?chain_id=1&address_hash=0xABC",
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_render_token_icon_unknown_chain() {
        let checker = ScriptedChecker::default();
        let (status, body) = get(
            app(checker.clone(), Config::default()),
            "/api/token-icon/img?chain_id=56&address_hash=0xABC",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"<img width="20" height="20" src="/images/icons/token_icon_default.svg" class="mr-1">"#
        );
        assert!(checker.probed().is_empty());

        let config = Config {
            asset_base_url: Some("https://explorer.example".to_string()),
            ..Config::default()
        };
        let (status, _) = get(
            app(checker.clone(), config),
            "/api/token-icon/img?chain_id=56&address_hash=0xABC",
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(
            checker.probed_urls(),
            vec!["https://explorer.example/images/icons/token_icon_default.svg".to_string()]
        );
    }
}
