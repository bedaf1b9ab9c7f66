//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use bart_summarizer::config::{Config, SecureString};
use bart_summarizer::inference::SummarizerClient;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Default config pointed at `url`.
pub fn config_for(url: &str) -> Config {
    let mut config = Config::default();
    config.endpoint.url = url.to_string();
    config.endpoint.timeout_seconds = Some(5);
    config
}

/// Client for `url` authenticated with `test-key`.
pub fn client_for(url: &str) -> SummarizerClient {
    SummarizerClient::new(&config_for(url), SecureString::new("test-key".to_string()))
        .expect("Failed to build client")
}
