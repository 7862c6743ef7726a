use std::sync::Arc;

use axum::Router;
use decks::{build_router, config::DecksConfig, AppState, Catalog, InMemoryDeckRepository};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryDeckRepository>,
    pub catalog: Arc<Catalog>,
}

pub struct TestAppBuilder {
    suits: Vec<String>,
    values: Vec<String>,
}

impl TestAppBuilder {
    /// Starts from the standard 52-card configuration
    pub fn new() -> Self {
        Self {
            suits: to_strings(&["CLUBS", "DIAMONDS", "HEARTS", "SPADES"]),
            values: to_strings(&[
                "ACE", "2", "3", "4", "5", "6", "7", "8", "9", "TEN", "JACK", "QUEEN", "KING",
            ]),
        }
    }

    pub fn with_suits(mut self, suits: &[&str]) -> Self {
        self.suits = to_strings(suits);
        self
    }

    pub fn with_values(mut self, values: &[&str]) -> Self {
        self.values = to_strings(values);
        self
    }

    pub fn build(self) -> TestApp {
        let catalog = Catalog::new(&DecksConfig {
            suits: self.suits,
            values: self.values,
        })
        .expect("test configuration should be valid");
        let catalog = Arc::new(catalog);
        let repository = Arc::new(InMemoryDeckRepository::new());

        let app_state = AppState::new(repository.clone(), Arc::clone(&catalog));

        TestApp {
            router: build_router(app_state),
            repository,
            catalog,
        }
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
