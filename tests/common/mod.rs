use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Queries received by the fake `/search` endpoint, in arrival order.
pub type Seen = Arc<Mutex<Vec<String>>>;

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{}", addr)
}

/// A backend that knows Hades (1145360) and Portal 2 (620).
///
/// `/summarize` answers 500 for app id `500` and an unexpected body for `garbled`.
pub fn fake_backend(seen: Seen) -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/summarize", get(summarize))
        .with_state(seen)
}

async fn search(
    State(seen): State<Seen>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let query = params.get("q").cloned().unwrap_or_default();
    seen.lock().unwrap().push(query.clone());

    let games = [
        (json!(1145360), "Hades"),
        (json!("1145350"), "Hades II"),
        (json!(620), "Portal 2"),
    ];
    let needle = query.to_lowercase();
    let matches: Vec<Value> = games
        .iter()
        .filter(|(_, name)| name.to_lowercase().contains(&needle))
        .map(|(id, name)| json!({ "appid": id, "name": name }))
        .collect();
    Json(Value::Array(matches))
}

async fn summarize(Query(params): Query<HashMap<String, String>>) -> Result<Json<Value>, StatusCode> {
    match params.get("app_id").map(String::as_str) {
        Some("620") => Ok(Json(json!({
            "game": "Portal 2",
            "app_id": 620,
            "summary": {
                "praised": ["Puzzle design", "Co-op campaign"],
                "criticized": ["Short length"]
            }
        }))),
        Some("500") => Err(StatusCode::INTERNAL_SERVER_ERROR),
        Some("garbled") => Ok(Json(json!({ "unexpected": true }))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

/// A backend whose every endpoint fails with `status`.
pub fn failing_backend(status: StatusCode) -> Router {
    Router::new()
        .route("/search", get(move || async move { status }))
        .route("/summarize", get(move || async move { status }))
}
