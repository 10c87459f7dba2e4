//! Client integration tests for remme-sdk
//!
//! Tests RPC method wrappers against the mock transport.

use remme_sdk::types::family;
use remme_sdk::{Account, Bet, ListQuery, MockTransport, RemmeClient, SdkError};
use serde_json::{json, Value};

const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn client() -> (RemmeClient, MockTransport) {
    let transport = MockTransport::new();
    (RemmeClient::with_transport(transport.clone()), transport)
}

fn decode_transaction(params: &Value) -> Value {
    let raw = hex::decode(params["data"].as_str().unwrap()).unwrap();
    serde_json::from_slice(&raw).unwrap()
}

fn decode_payload(transaction: &Value) -> Value {
    let raw = hex::decode(transaction["payload"].as_str().unwrap()).unwrap();
    serde_json::from_slice(&raw).unwrap()
}

// ==================== Account Tests ====================

#[tokio::test]
async fn test_get_balance() {
    let (client, transport) = client();
    transport.set_response("get_balance", json!(13500));

    let address = "a".repeat(70);
    assert_eq!(client.get_balance(&address).await.unwrap(), 13500);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "get_balance");
    assert_eq!(requests[0].1, json!({ "public_key_address": address }));
}

#[tokio::test]
async fn test_transfer_tokens_submits_signed_transaction() {
    let (client, transport) = client();
    let batch_id = "c".repeat(128);
    transport.set_response("send_raw_transaction", json!(batch_id));

    let account = Account::from_private_key_hex(KEY).unwrap();
    let to = "1".repeat(70);
    let id = client.transfer_tokens(&account, &to, 100).await.unwrap();
    assert_eq!(id, batch_id);

    let requests = transport.requests();
    assert_eq!(requests[0].0, "send_raw_transaction");
    let transaction = decode_transaction(&requests[0].1);
    assert_eq!(transaction["header"]["family_name"], family::ACCOUNT);
    assert_eq!(transaction["header"]["signer_public_key"], account.public_key());

    let payload = decode_payload(&transaction);
    assert_eq!(payload["method"], "transfer");
    assert_eq!(payload["data"], json!({ "address_to": to, "value": 100 }));
}

// ==================== Listing Tests ====================

#[tokio::test]
async fn test_list_batches_sends_only_set_filters() {
    let (client, transport) = client();
    transport.set_response("list_batches", json!({ "data": [] }));

    let query = ListQuery {
        limit: Some(2),
        reverse: true,
        ..Default::default()
    };
    client.list_batches(&query).await.unwrap();

    assert_eq!(transport.requests()[0].1, json!({ "limit": 2, "reverse": true }));
}

#[tokio::test]
async fn test_list_receipts() {
    let (client, transport) = client();
    transport.set_response("list_receipts", json!({ "data": [{ "id": "x" }] }));

    let ids = vec!["a".repeat(128), "b".repeat(128)];
    let receipts = client.list_receipts(&ids).await.unwrap();
    assert_eq!(receipts["data"][0]["id"], "x");
    assert_eq!(transport.requests()[0].1["ids"], json!(ids));
}

// ==================== Masternode Tests ====================

#[tokio::test]
async fn test_set_bet_payload() {
    let (client, transport) = client();
    let account = Account::from_private_key_hex(KEY).unwrap();

    client.set_bet(&account, Bet::Max).await.unwrap();
    client.set_bet(&account, Bet::Fixed(20)).await.unwrap();

    let requests = transport.requests();
    let first = decode_payload(&decode_transaction(&requests[0].1));
    let second = decode_payload(&decode_transaction(&requests[1].1));
    assert_eq!(first, json!({ "method": "set_bet", "data": { "bet": "MAX" } }));
    assert_eq!(second["data"]["bet"], 20);
}

#[tokio::test]
async fn test_open_and_close_masternode() {
    let (client, transport) = client();
    let account = Account::from_private_key_hex(KEY).unwrap();

    client.open_masternode(&account, 250_000).await.unwrap();
    client.close_masternode(&account).await.unwrap();

    let requests = transport.requests();
    let open = decode_transaction(&requests[0].1);
    assert_eq!(open["header"]["family_name"], family::NODE_ACCOUNT);
    assert_eq!(decode_payload(&open)["method"], "initialize_masternode");
    assert_eq!(decode_payload(&open)["data"]["value"], 250_000);
    assert_eq!(
        decode_payload(&decode_transaction(&requests[1].1))["method"],
        "close_masternode"
    );
}

// ==================== Error Tests ====================

#[tokio::test]
async fn test_rpc_error_passes_through() {
    let (client, transport) = client();
    transport.set_rpc_error("fetch_batch", 404, "Batch not found.");

    match client.fetch_batch(&"a".repeat(128)).await {
        Err(SdkError::Rpc { code, message }) => {
            assert_eq!(code, 404);
            assert_eq!(message, "Batch not found.");
        }
        other => panic!("expected RPC error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_error_passes_through() {
    let (client, transport) = client();
    transport.set_transport_error("get_node_info", "connection refused");

    let err = client.get_node_info().await.unwrap_err();
    assert!(matches!(err, SdkError::Transport(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_unknown_method_is_rpc_error() {
    let (client, _) = client();
    let err = client.get_atomic_swap_public_key().await.unwrap_err();
    assert!(matches!(err, SdkError::Rpc { code: -32601, .. }));
}
