//! Router assembly

use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Mount the context routers under `/api` and add cross-cutting layers
pub fn build_app(account: Router, campaign: Router, frontend_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/accounts", account)
        .nest("/api/campaigns", campaign)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(frontend_origins))
}

fn cors_layer(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use account::{AccountConfig, InMemoryAccountRepository, account_router_generic};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use campaign::{InMemoryCampaignRepository, campaign_router_generic};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(
            account_router_generic(InMemoryAccountRepository::new(), AccountConfig::development()),
            campaign_router_generic(InMemoryCampaignRepository::new()),
            &["http://localhost:40922".to_string()],
        )
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_nested_routes_are_mounted() {
        let response = app()
            .oneshot(
                Request::get("/api/campaigns/statuses/PAID/transitions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app()
            .oneshot(
                Request::get(format!("/api/accounts/{}", uuid_like()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/campaigns")
                    .header(header::ORIGIN, "http://localhost:40922")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:40922"
        );
    }

    fn uuid_like() -> &'static str {
        "6f1c2f7e-8a41-4c2b-9d57-3b0e7a6d9c10"
    }
}
