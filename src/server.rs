use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    http::{HeaderName, Request, Response, StatusCode, Uri},
    routing::get,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::{
    config::{AppConfig, StoreBackend},
    response::{ApiResponse, Meta},
    routes::{create_api_router, doc::scalar_docs, health},
    state::AppState,
    store::{MemoryStore, OrderStore, SanityClient},
};

pub async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn OrderStore>> {
    let store: Arc<dyn OrderStore> = match config.store {
        StoreBackend::Sanity => {
            let sanity = config
                .sanity
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("sanity store selected without configuration"))?;
            tracing::info!(
                project = %sanity.project_id,
                dataset = %sanity.dataset,
                "using sanity order store"
            );
            Arc::new(SanityClient::new(sanity)?)
        }
        StoreBackend::Memory => {
            let store = match &config.memory_seed_file {
                Some(path) => MemoryStore::from_seed_file(path).await?,
                None => MemoryStore::default(),
            };
            tracing::warn!("using in-memory order store; changes are lost on exit");
            Arc::new(store)
        }
    };
    Ok(store)
}

pub fn build_app(state: AppState) -> Router {
    let concurrency_limit_layer = ConcurrencyLimitLayer::new(100);

    let request_id_header = HeaderName::from_static("x-request-id");
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(scalar_docs())
        .fallback(not_found)
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(concurrency_limit_layer)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
