use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    use crate::test_utils::test_app_state_without_store;

    #[tokio::test]
    async fn health_returns_ok() {
        let app_state = test_app_state_without_store();
        let server = TestServer::new(router().with_state(app_state)).unwrap();

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }
}
