//! End-to-end tests driving the RPC router in-memory, without binding a
//! socket. Each request goes through the real axum extractors and the real
//! engine; time is driven by a shared manual clock.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use adac_governance::{GovernanceEngine, GovernanceParams, ManualClock};
use adac_ledger::InMemoryLedger;
use adac_rpc::RpcServer;
use adac_types::{Address, Timestamp, TokenAmount};

const VOTING_PERIOD: u64 = 259_200;

fn app() -> (Arc<ManualClock>, Router) {
    let ledger = Arc::new(InMemoryLedger::new());
    ledger.set_balance(Address::new("proposer"), TokenAmount::new(200_000));
    ledger.set_balance(Address::new("voter1"), TokenAmount::new(50_000));
    let clock = Arc::new(ManualClock::new(Timestamp::new(5_000)));
    let engine = Arc::new(GovernanceEngine::new(
        ledger,
        clock.clone(),
        GovernanceParams::default(),
    ));
    (clock, RpcServer::router(engine))
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn propose_body() -> serde_json::Value {
    serde_json::json!({
        "proposer": "proposer",
        "title": "Test Proposal",
        "description": "A test proposal",
    })
}

#[tokio::test]
async fn propose_returns_id() {
    let (_clock, router) = app();
    let (status, body) = send(&router, "POST", "/proposal", Some(propose_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn propose_without_balance_is_forbidden() {
    let (_clock, router) = app();
    let mut body = propose_body();
    body["proposer"] = "voter1".into();
    let (status, body) = send(&router, "POST", "/proposal", Some(body)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "insufficient_balance");
}

#[tokio::test]
async fn propose_with_empty_title_is_bad_request() {
    let (_clock, router) = app();
    let mut body = propose_body();
    body["title"] = "".into();
    let (status, body) = send(&router, "POST", "/proposal", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn get_proposal_reports_derived_state() {
    let (clock, router) = app();
    send(&router, "POST", "/proposal", Some(propose_body())).await;

    let (status, body) = send(&router, "GET", "/proposal/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "active");
    assert_eq!(body["for_votes"], "0");
    assert_eq!(body["executed"], false);

    clock.advance(VOTING_PERIOD + 1);
    let (_, body) = send(&router, "GET", "/proposal/1", None).await;
    assert_eq!(body["state"], "defeated");
}

#[tokio::test]
async fn unknown_proposal_is_404() {
    let (_clock, router) = app();
    let (status, body) = send(&router, "GET", "/proposal/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn vote_then_double_vote() {
    let (_clock, router) = app();
    send(&router, "POST", "/proposal", Some(propose_body())).await;

    let vote = serde_json::json!({"proposal_id": 1, "voter": "voter1", "support": true});
    let (status, _) = send(&router, "POST", "/vote", Some(vote.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, "POST", "/vote", Some(vote)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "already_voted");

    let (_, body) = send(&router, "GET", "/proposal/1", None).await;
    assert_eq!(body["for_votes"], "50000");
}

#[tokio::test]
async fn zero_power_voter_is_forbidden() {
    let (_clock, router) = app();
    send(&router, "POST", "/proposal", Some(propose_body())).await;
    let vote = serde_json::json!({"proposal_id": 1, "voter": "stranger", "support": true});
    let (status, body) = send(&router, "POST", "/vote", Some(vote)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "zero_voting_power");
}

#[tokio::test]
async fn execute_lifecycle_over_http() {
    let (clock, router) = app();
    send(&router, "POST", "/proposal", Some(propose_body())).await;
    let vote = serde_json::json!({"proposal_id": 1, "voter": "voter1", "support": true});
    send(&router, "POST", "/vote", Some(vote)).await;

    let execute = serde_json::json!({"proposal_id": 1});
    let (status, body) = send(&router, "POST", "/execute", Some(execute.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "voting_still_open");

    clock.advance(VOTING_PERIOD + 1);
    let (status, _) = send(&router, "POST", "/execute", Some(execute.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, "POST", "/execute", Some(execute)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "already_executed");

    let (_, body) = send(&router, "GET", "/proposal/1", None).await;
    assert_eq!(body["executed"], true);
    assert_eq!(body["state"], "executed");
}

#[tokio::test]
async fn proposals_listing_paginates() {
    let (_clock, router) = app();
    for _ in 0..3 {
        send(&router, "POST", "/proposal", Some(propose_body())).await;
    }
    let (status, body) = send(&router, "GET", "/proposals?count=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["proposals"].as_array().unwrap().len(), 2);
    assert_eq!(body["next_offset"], 2);

    let (_, body) = send(&router, "GET", "/proposals?count=2&offset=2", None).await;
    assert_eq!(body["proposals"].as_array().unwrap().len(), 1);
    assert!(body.get("next_offset").is_none());
}

#[tokio::test]
async fn voter_info_and_stats_endpoints() {
    let (_clock, router) = app();
    send(&router, "POST", "/proposal", Some(propose_body())).await;
    let vote = serde_json::json!({"proposal_id": 1, "voter": "voter1", "support": true});
    send(&router, "POST", "/vote", Some(vote)).await;

    let (status, body) = send(&router, "GET", "/voter/voter1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_power_used"], "50000");
    assert_eq!(body["votes"].as_array().unwrap().len(), 1);

    let (status, body) = send(&router, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_proposals"], 1);
    assert_eq!(body["total_votes"], 1);
    assert_eq!(body["unique_voters"], 1);
}

#[tokio::test]
async fn health_endpoint_is_ok() {
    let (_clock, router) = app();
    let (status, _) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
