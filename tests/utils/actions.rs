use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt; // for `oneshot`

use super::{assertions::ResponseAssertion, setup::TestApp};

// ============================================================================
// Action Helpers
// ============================================================================

impl TestApp {
    /// Send a request with an empty body and capture the JSON response
    pub async fn send(&self, method: &str, uri: &str) -> ResponseAssertion {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status: StatusCode = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        ResponseAssertion::new(status, serde_json::from_slice(&body).unwrap())
    }

    /// POST /deck with the given query string (without the leading `?`)
    pub async fn create_deck(&self, query: &str) -> ResponseAssertion {
        if query.is_empty() {
            self.send("POST", "/deck").await
        } else {
            self.send("POST", &format!("/deck?{query}")).await
        }
    }

    /// Creates an unshuffled deck from the given codes and returns its id
    pub async fn create_unshuffled_deck(&self, codes: &str) -> String {
        self.create_deck(&format!("shuffle=false&cards={codes}"))
            .await
            .ok()
            .deck_id()
    }

    pub async fn open_deck(&self, deck_id: &str) -> ResponseAssertion {
        self.send("GET", &format!("/deck/{deck_id}/open")).await
    }

    pub async fn draw_cards(&self, deck_id: &str, count: u32) -> ResponseAssertion {
        self.send("POST", &format!("/deck/{deck_id}/draw-cards?draw={count}"))
            .await
    }
}
