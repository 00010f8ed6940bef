//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;

use dreamtasks::api::{ApiService, Endpoints};
use dreamtasks::config::HttpConfig;
use dreamtasks::storage::{LocalStorage, MemoryStorage};
use dreamtasks::store::{AppState, Store};

/// Backoff unit used by tests so retries finish quickly.
pub const TEST_BACKOFF_MS: u64 = 20;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL nothing is listening on.
pub fn dead_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn test_http_config() -> HttpConfig {
    HttpConfig {
        timeout_seconds: 5,
        connect_timeout_seconds: 1,
        max_retries: 3,
        retry_backoff_base_ms: TEST_BACKOFF_MS,
        ..HttpConfig::default()
    }
}

/// API client with every endpoint pointed at `base`.
pub fn api_at(base: &str) -> ApiService {
    ApiService::new(Endpoints::all_at(base), &test_http_config()).expect("client builds")
}

/// Store over in-memory storage whose API calls go to `base`.
pub fn memory_store(base: &str) -> Store {
    Store::new(
        api_at(base),
        LocalStorage::new(MemoryStorage::new()),
        AppState::default(),
    )
}

pub const QUOTES_PAGE: &str = r#"{
    "count": 2, "totalCount": 2, "page": 1, "totalPages": 1,
    "results": [
        {"_id": "q1", "content": "Well begun is half done.", "author": "Aristotle", "tags": []},
        {"_id": "q2", "content": "Small steps every day.", "author": "Anonymous", "tags": []}
    ]
}"#;
