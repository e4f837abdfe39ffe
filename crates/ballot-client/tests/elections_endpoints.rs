mod common;

use ballot_client::ApiError;
use ballot_core::enums::ElectionStatus;
use ballot_core::requests::{CandidateCreate, CandidateUpdate, ElectionCreate, FileUpload, VoteRequest};
use chrono::{TimeZone, Utc};
use common::{election_json, server_and_client};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn create_request() -> ElectionCreate {
    ElectionCreate {
        title: "Student Council 2025".into(),
        description: Some("Annual council election".into()),
        start_time: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn list_and_active_use_distinct_paths() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/elections/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            election_json("e1", "draft", &[]),
            election_json("e2", "active", &["Ada"])
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/elections/active"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([election_json("e2", "active", &["Ada"])])),
        )
        .mount(&server)
        .await;

    let all = client.list_elections().await.expect("list succeeds");
    assert_eq!(all.len(), 2);
    let active = client.active_elections().await.expect("active succeeds");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].status, ElectionStatus::Active);
}

#[tokio::test]
async fn create_sends_utc_timestamps() {
    let (server, client) = server_and_client().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/elections/"))
        .and(body_json(json!({
            "title": "Student Council 2025",
            "description": "Annual council election",
            "start_time": "2025-03-01T08:00:00Z",
            "end_time": "2025-03-01T18:00:00Z"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(election_json("e1", "draft", &[])))
        .expect(1)
        .mount(&server)
        .await;

    let election = client.create_election(&create_request()).await.expect("created");
    assert_eq!(election.status, ElectionStatus::Draft);
}

#[tokio::test]
async fn inverted_window_is_rejected_locally() {
    let (server, client) = server_and_client().await;
    let mut request = create_request();
    std::mem::swap(&mut request.start_time, &mut request.end_time);

    let err = client.create_election(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn lifecycle_actions_post_to_their_segments() {
    let (server, client) = server_and_client().await;
    for (segment, status) in [
        ("activate", "active"),
        ("end", "ended"),
        ("publish-results", "results_published"),
    ] {
        Mock::given(method("POST"))
            .and(path(format!("/api/v1/elections/e1/{segment}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(election_json("e1", status, &[])))
            .expect(1)
            .mount(&server)
            .await;
    }

    assert_eq!(
        client.activate_election("e1").await.unwrap().status,
        ElectionStatus::Active
    );
    assert_eq!(client.end_election("e1").await.unwrap().status, ElectionStatus::Ended);
    assert_eq!(
        client.publish_results("e1").await.unwrap().status,
        ElectionStatus::ResultsPublished
    );
}

#[tokio::test]
async fn not_found_uses_message_field() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/elections/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Election not found"})))
        .mount(&server)
        .await;

    let err = client.get_election("missing").await.unwrap_err();
    assert_eq!(err.to_string(), "Election not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn non_json_error_body_falls_back() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/elections/e1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client.get_election("e1").await.unwrap_err();
    assert_eq!(err.to_string(), "An error occurred");
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/elections/e1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let err = client.get_election("e1").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn cast_vote_posts_candidate_id() {
    let (server, client) = server_and_client().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/elections/e1/vote"))
        .and(body_json(json!({"candidate_id": "c1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Vote cast successfully"})))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client
        .cast_vote("e1", &VoteRequest { candidate_id: "c1".into() })
        .await
        .expect("vote accepted");
    assert_eq!(receipt.message, "Vote cast successfully");
}

#[tokio::test]
async fn results_and_votes() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/elections/e1/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "election_id": "e1",
            "election_title": "Council",
            "total_votes": 3,
            "candidates": [{"name": "Ada", "votes": 3}],
            "status": "results_published",
            "end_time": "2025-03-01T18:00:00"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/elections/e1/votes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"candidate_id": "c1"}])))
        .mount(&server)
        .await;

    assert_eq!(client.election_results("e1").await.unwrap().total_votes, 3);
    assert_eq!(client.election_votes("e1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn add_candidate_sends_multipart_without_empty_fields() {
    let (server, client) = server_and_client().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/elections/e1/candidates"))
        .and(body_string_contains("name=\"name\""))
        .and(body_string_contains("Ada Lovelace"))
        .and(body_string_contains("name=\"photo\"; filename=\"ada.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(election_json("e1", "draft", &["Ada Lovelace"])))
        .expect(1)
        .mount(&server)
        .await;

    let candidate = CandidateCreate {
        bio: Some(String::new()),
        photo: Some(FileUpload::new("ada.png", vec![0x89, 0x50]).with_content_type("image/png")),
        ..CandidateCreate::named("Ada Lovelace")
    };
    let election = client.add_candidate("e1", &candidate).await.expect("added");
    assert_eq!(election.candidates.len(), 1);

    let requests = server.received_requests().await.expect("recording enabled");
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("name=\"bio\""));
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn update_candidate_failure_uses_update_fallback() {
    let (server, client) = server_and_client().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/elections/e1/candidates/c1"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({})))
        .mount(&server)
        .await;

    let update = CandidateUpdate {
        party: Some("Analytical".into()),
        ..CandidateUpdate::default()
    };
    let err = client
        .with_token("abc")
        .update_candidate("e1", "c1", &update)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Update failed");
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let client = ballot_client::ApiClient::from_base_url("http://127.0.0.1:9/api/v1").unwrap();
    let err = client.list_elections().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
