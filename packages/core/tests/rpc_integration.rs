//! End-to-end tests driving the real JSON-RPC client against a
//! wiremocked node.
//!
//! The mock node stubs `getrawmempool`, `getrawtransaction` and
//! `decoderawtransaction` so the full pipeline (client, extractor,
//! bucketer, percentiles) runs exactly as it would against bitcoind,
//! minus the network.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mempool_fee_levels::estimator::{
    EstimatorConfig, EstimatorError, FeeLevelEngine, MempoolSource,
};
use mempool_fee_levels::services::rpc::CoreRpcClient;

fn rpc_result(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "result": result,
        "error": null,
        "id": "mempool-fee-levels",
    }))
}

fn rpc_error(code: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_json(json!({
        "result": null,
        "error": { "code": code, "message": message },
        "id": "mempool-fee-levels",
    }))
}

async fn stub_call(server: &MockServer, request: serde_json::Value, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(request))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn stub_transaction(server: &MockServer, txid: &str, decoded: serde_json::Value) {
    let raw = format!("raw_{}", txid);
    stub_call(
        server,
        json!({ "method": "getrawtransaction", "params": [txid] }),
        rpc_result(json!(raw)),
    )
    .await;
    stub_call(
        server,
        json!({ "method": "decoderawtransaction", "params": [raw] }),
        rpc_result(decoded),
    )
    .await;
}

fn client_for(server: &MockServer) -> CoreRpcClient {
    CoreRpcClient::new(server.uri(), "user".into(), "pass".into()).unwrap()
}

/// A node with one confirmed funding transaction and two mempool
/// spenders at 400 and 100 sat/B, each 600_000 bytes, plus one evicted
/// entry whose lookup fails.
async fn mock_node() -> MockServer {
    let server = MockServer::start().await;

    stub_call(
        &server,
        json!({ "method": "getrawmempool" }),
        rpc_result(json!(["fast", "slow", "evicted"])),
    )
    .await;

    stub_transaction(
        &server,
        "fund",
        json!({
            "txid": "fund",
            "size": 200,
            "vsize": 200,
            "vin": [],
            "vout": [
                { "n": 0, "value": 5.0 },
                { "n": 1, "value": 5.0 }
            ]
        }),
    )
    .await;

    stub_transaction(
        &server,
        "fast",
        json!({
            "txid": "fast",
            "size": 600_000,
            "vsize": 600_000,
            "vin": [ { "txid": "fund", "vout": 0 } ],
            "vout": [ { "n": 0, "value": 2.6 } ]
        }),
    )
    .await;

    stub_transaction(
        &server,
        "slow",
        json!({
            "txid": "slow",
            "size": 600_000,
            "vsize": 600_000,
            "vin": [ { "txid": "fund", "vout": 1 } ],
            "vout": [ { "n": 0, "value": 4.4 } ]
        }),
    )
    .await;

    stub_call(
        &server,
        json!({ "method": "getrawtransaction", "params": ["evicted"] }),
        rpc_error(-5, "No such mempool or blockchain transaction"),
    )
    .await;

    server
}

#[tokio::test]
async fn full_pipeline_splits_oversized_mempool_into_two_blocks() {
    let server = mock_node().await;
    let client = client_for(&server);

    let engine = FeeLevelEngine::new(Arc::new(client), EstimatorConfig::default());
    let summaries = engine.estimate().await.unwrap();

    // Two 600k transactions cannot share a 1M block; the evicted entry
    // is skipped without failing the run.
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].p50, 400.0);
    assert_eq!(summaries[1].p50, 100.0);
}

#[tokio::test]
async fn client_lists_mempool_txids() {
    let server = mock_node().await;
    let client = client_for(&server);

    let txids = client.mempool_txids().await.unwrap();

    assert_eq!(txids, vec!["fast", "slow", "evicted"]);
}

#[tokio::test]
async fn client_resolves_raw_then_decoded_transaction() {
    let server = mock_node().await;
    let client = client_for(&server);

    let tx = client.decoded_transaction("fast").await.unwrap();

    assert_eq!(tx.txid, "fast");
    assert_eq!(tx.size, 600_000);
    assert_eq!(tx.vin.len(), 1);
    assert_eq!(tx.vout[0].value, 2.6);
}

#[tokio::test]
async fn node_error_on_mempool_listing_is_fatal() {
    let server = MockServer::start().await;
    stub_call(
        &server,
        json!({ "method": "getrawmempool" }),
        rpc_error(-28, "Loading block index..."),
    )
    .await;

    let engine = FeeLevelEngine::new(
        Arc::new(client_for(&server)),
        EstimatorConfig::default(),
    );
    let result = engine.estimate().await;

    assert!(matches!(result, Err(EstimatorError::MempoolListing { .. })));
}

#[tokio::test]
async fn unreachable_node_is_a_fatal_listing_error() {
    // Port 1 is never serving; the client must fail on the listing call.
    let client = CoreRpcClient::new(
        "http://127.0.0.1:1".to_string(),
        "user".into(),
        "pass".into(),
    )
    .unwrap();

    let engine = FeeLevelEngine::new(Arc::new(client), EstimatorConfig::default());
    let result = engine.estimate().await;

    assert!(matches!(result, Err(EstimatorError::MempoolListing { .. })));
}
