#![allow(dead_code)]

use ballot_client::ApiClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub async fn server_and_client() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::from_base_url(format!("{}/api/v1/", server.uri()))
        .expect("client builds");
    (server, client)
}

pub fn election_json(id: &str, status: &str, candidates: &[&str]) -> Value {
    let candidates: Vec<Value> = candidates
        .iter()
        .enumerate()
        .map(|(i, name)| json!({"_id": format!("c{}", i + 1), "name": name}))
        .collect();
    json!({
        "_id": id,
        "title": "Student Council 2025",
        "description": "Annual council election",
        "candidates": candidates,
        "status": status,
        "start_time": "2025-03-01T08:00:00",
        "end_time": "2025-03-01T18:00:00",
        "created_by": "admin-1",
        "created_at": "2025-02-01T12:00:00",
        "total_votes": 0
    })
}

pub fn user_json(role: &str) -> Value {
    json!({
        "_id": "u1",
        "email": "a@x.com",
        "full_name": "A",
        "role": role,
        "is_active": true,
        "created_at": "2025-01-01T00:00:00"
    })
}
