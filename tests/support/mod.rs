//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::time::Duration;

use labctl::{Client, ClientConfig};
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> Client {
    client_with_token(server, None)
}

pub fn client_with_token(server: &MockServer, token: Option<&str>) -> Client {
    Client::new(ClientConfig {
        base_url: server.uri(),
        access_token: token.map(str::to_string),
        timeout: Duration::from_secs(30),
    })
    .unwrap()
}
