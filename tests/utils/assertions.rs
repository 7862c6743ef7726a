//! Test assertion helpers - fluent API for verifying HTTP responses
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::http::StatusCode;
use serde_json::Value;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct ResponseAssertion {
    pub status: StatusCode,
    pub body: Value,
}

impl ResponseAssertion {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// Assert a 200 response
    pub fn ok(self) -> Self {
        assert_eq!(
            self.status,
            StatusCode::OK,
            "expected success, got body {}",
            self.body
        );
        self
    }

    /// Assert a 500 response carrying exactly `message`
    pub fn error(self, message: &str) -> Self {
        assert_eq!(self.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(self.body["error"], message, "unexpected error message");
        self
    }

    /// Assert a 500 response whose message starts with `prefix`
    pub fn error_starting_with(self, prefix: &str) -> Self {
        assert_eq!(self.status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = self.body["error"].as_str().expect("error should be a string");
        assert!(
            message.starts_with(prefix),
            "expected error starting with {prefix:?}, got {message:?}"
        );
        self
    }

    pub fn remaining(self, expected: u64) -> Self {
        assert_eq!(self.body["remaining"], expected, "unexpected remaining count");
        self
    }

    pub fn shuffled(self, expected: bool) -> Self {
        assert_eq!(self.body["shuffled"], expected, "unexpected shuffled flag");
        self
    }

    /// Assert the card codes in `cards`, in order
    pub fn codes(self, expected: &[&str]) -> Self {
        assert_eq!(self.card_codes(), expected, "unexpected card codes");
        self
    }

    pub fn deck_id(&self) -> String {
        self.body["deck_id"]
            .as_str()
            .expect("response should contain a deck_id")
            .to_string()
    }

    pub fn card_codes(&self) -> Vec<String> {
        self.body["cards"]
            .as_array()
            .expect("response should contain cards")
            .iter()
            .map(|card| card["code"].as_str().unwrap().to_string())
            .collect()
    }
}
