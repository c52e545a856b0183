use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri, header},
};
use serde_json::{Value, json};
use storefront_admin::{
    config::SanityConfig,
    models::OrderStatus,
    store::{OrderQuery, OrderStore, PatchExt, SanityClient, StoreError},
};

const API_VERSION: &str = "2025-01-13";

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    params: HashMap<String, String>,
    authorization: Option<String>,
    body: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

/// Stands in for the content lake: records every request and answers like
/// the hosted API. The `locked` dataset refuses everything.
async fn record(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let path = uri.path().to_string();
    log.lock().expect("log lock").push(Recorded {
        method,
        path: path.clone(),
        params,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).ok(),
    });

    if path.ends_with("/locked") {
        return (StatusCode::FORBIDDEN, "dataset is private".to_string());
    }
    if path.contains("/data/query/") {
        let result = json!({
            "result": [{
                "_id": "o1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "total": 12.5,
                "orderDate": "2025-01-20T10:15:00.000Z",
                "status": "pending",
                "cartItems": [{ "productName": "Desk Lamp", "image": null }, null]
            }]
        });
        return (StatusCode::OK, result.to_string());
    }
    (StatusCode::OK, json!({ "transactionId": "tx1", "results": [] }).to_string())
}

async fn spawn_stub() -> anyhow::Result<(SocketAddr, Log)> {
    let log = Log::default();
    let app = Router::new().fallback(record).with_state(log.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((addr, log))
}

fn client(addr: SocketAddr, dataset: &str, token: Option<&str>) -> anyhow::Result<SanityClient> {
    let config = SanityConfig {
        project_id: "test".into(),
        dataset: dataset.into(),
        api_version: API_VERSION.into(),
        token: token.map(str::to_string),
        api_host: Some(format!("http://{addr}/")),
        timeout_secs: 5,
    };
    Ok(SanityClient::new(&config)?)
}

fn requests(log: &Log) -> Vec<Recorded> {
    log.lock().expect("log lock").clone()
}

#[tokio::test]
async fn query_sends_groq_and_decodes_result() -> anyhow::Result<()> {
    let (addr, log) = spawn_stub().await?;
    let store = client(addr, "production", Some("tok"))?;

    let orders = store.query(&OrderQuery::ALL_ORDERS).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "o1");
    assert_eq!(orders[0].customer_name(), "Ada Lovelace");
    assert_eq!(orders[0].status, Some(OrderStatus::Pending));
    assert_eq!(orders[0].cart_items.len(), 1);

    let sent = requests(&log);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::GET);
    assert_eq!(sent[0].path, format!("/v{API_VERSION}/data/query/production"));
    assert_eq!(
        sent[0].params.get("query"),
        Some(&OrderQuery::ALL_ORDERS.to_groq())
    );
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer tok"));
    Ok(())
}

#[tokio::test]
async fn patch_and_delete_post_mutations() -> anyhow::Result<()> {
    let (addr, log) = spawn_stub().await?;
    let store = client(addr, "production", Some("tok"))?;

    store.patch("o1").set("status", "dispatch").commit().await?;
    store.delete("o1").await?;

    let sent = requests(&log);
    assert_eq!(sent.len(), 2);
    for request in &sent {
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, format!("/v{API_VERSION}/data/mutate/production"));
        assert_eq!(request.authorization.as_deref(), Some("Bearer tok"));
    }
    assert_eq!(
        sent[0].body,
        Some(json!({ "mutations": [{ "patch": { "id": "o1", "set": { "status": "dispatch" } } }] }))
    );
    assert_eq!(
        sent[1].body,
        Some(json!({ "mutations": [{ "delete": { "id": "o1" } }] }))
    );
    Ok(())
}

#[tokio::test]
async fn no_token_sends_no_authorization() -> anyhow::Result<()> {
    let (addr, log) = spawn_stub().await?;
    let store = client(addr, "production", None)?;

    store.query(&OrderQuery::ALL_ORDERS).await?;

    assert_eq!(requests(&log)[0].authorization, None);
    Ok(())
}

#[tokio::test]
async fn error_status_maps_to_server_error() -> anyhow::Result<()> {
    let (addr, _log) = spawn_stub().await?;
    let store = client(addr, "locked", Some("tok"))?;

    let err = store
        .query(&OrderQuery::ALL_ORDERS)
        .await
        .expect_err("locked dataset refuses queries");
    assert!(
        matches!(&err, StoreError::Server { status: 403, body } if body == "dataset is private"),
        "unexpected error: {err:?}"
    );

    let err = store
        .patch("o1")
        .set("status", "success")
        .commit()
        .await
        .expect_err("locked dataset refuses mutations");
    assert!(matches!(err, StoreError::Server { status: 403, .. }));
    Ok(())
}
