//! HTTP router.
//!
//! Routes are nested under `/api/`. Layer stack (outermost → innermost):
//! CORS → Cache-Control → handler. The body cap is enforced by the body
//! extractor so every oversized request gets the same JSON 413.

use axum::extract::DefaultBodyLimit;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Uri};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// Build the API router from a pre-constructed `ApiContext`.
pub fn build_router(ctx: ApiContext) -> Router {
    let cors = cors_layer(ctx.cors_origin.as_deref());
    let body_limit = ctx.max_body_bytes;

    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/symptom-checker", post(endpoints::symptom_checker::check))
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(cors)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    match origin {
        None => layer.allow_origin(AllowOrigin::any()),
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(value) => layer.allow_origin(AllowOrigin::exact(value)),
            Err(_) => {
                tracing::warn!(origin, "Invalid CORS origin, cross-origin requests disabled");
                layer
            }
        },
    }
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
