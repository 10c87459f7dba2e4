//! Command dispatch tests against a mock node
//!
//! Commands run in-process through `Commands::run`, with a connector
//! handing out clients over a shared `MockTransport`.

use std::sync::Mutex;

use clap::Parser;
use remme_sdk::{Account, MockTransport, NodeAddress, RemmeClient};
use serde_json::{json, Value};

use remme_cli::{Cli, CliError, Config, Connector, Context, NodeKeySource, Output};

const ADDRESS: &str = "112007d71fa7e120c60fb392a64fd69de891a60c667d9ea9e5d9d9d617263be6c20202";
const NODE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

struct MockConnector {
    transport: MockTransport,
    hosts: Mutex<Vec<String>>,
}

impl MockConnector {
    fn new() -> Self {
        Self {
            transport: MockTransport::new(),
            hosts: Mutex::new(Vec::new()),
        }
    }

    fn hosts(&self) -> Vec<String> {
        self.hosts.lock().unwrap().clone()
    }
}

impl Connector for MockConnector {
    fn connect(&self, address: &NodeAddress) -> RemmeClient {
        self.hosts.lock().unwrap().push(address.host().to_string());
        RemmeClient::with_transport(self.transport.clone())
    }
}

struct StaticKey(Option<&'static str>);

impl NodeKeySource for StaticKey {
    fn node_account(&self) -> Result<Account, CliError> {
        match self.0 {
            Some(key) => Ok(Account::from_private_key_hex(key).unwrap()),
            None => Err(CliError::Precondition(
                "Unable to read the node private key file `validator.priv`.".to_string(),
            )),
        }
    }
}

async fn run_with(
    connector: &MockConnector,
    keys: &StaticKey,
    config: &Config,
    args: &[&str],
) -> Output {
    let cli = Cli::try_parse_from(std::iter::once("remme").chain(args.iter().copied()))
        .expect("arguments parse");
    let ctx = Context {
        config,
        connector,
        node_keys: keys,
    };
    cli.command.run(&ctx).await
}

async fn run(connector: &MockConnector, args: &[&str]) -> Output {
    run_with(connector, &StaticKey(Some(NODE_KEY)), &Config::default(), args).await
}

// ==================== Accounts ====================

#[tokio::test]
async fn test_get_balance() {
    let connector = MockConnector::new();
    connector.transport.set_response("get_balance", json!(13500));

    let output = run(&connector, &["account", "get-balance", "--address", ADDRESS]).await;

    assert_eq!(output.code(), 0);
    assert_eq!(output.body(), &json!({ "result": { "balance": 13500 } }));
    assert_eq!(connector.hosts(), vec!["localhost"]);

    let requests = connector.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "get_balance");
    assert_eq!(requests[0].1["public_key_address"], ADDRESS);
}

#[tokio::test]
async fn test_get_balance_invalid_address() {
    let connector = MockConnector::new();

    let output = run(&connector, &["account", "get-balance", "--address", "short"]).await;

    assert_eq!(output.code(), 1);
    assert_eq!(
        output.body(),
        &json!({ "errors": { "address": ["The following address `short` is invalid."] } })
    );
    assert!(connector.hosts().is_empty());
}

#[tokio::test]
async fn test_get_balance_is_repeatable() {
    let connector = MockConnector::new();
    connector.transport.set_response("get_balance", json!(42));
    let args = ["account", "get-balance", "--address", ADDRESS];

    let first = run(&connector, &args).await.render();
    let second = run(&connector, &args).await.render();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_transfer_tokens() {
    let connector = MockConnector::new();

    let output = run(
        &connector,
        &[
            "account",
            "transfer-tokens",
            "--private-key",
            NODE_KEY,
            "--address-to",
            ADDRESS,
            "--amount",
            "1000",
            "--node-url",
            "node-genesis-testnet.remme.io",
        ],
    )
    .await;

    assert_eq!(output.code(), 0);
    assert_eq!(
        output.body(),
        &json!({ "result": { "batch_identifier": "0".repeat(128) } })
    );
    assert_eq!(connector.hosts(), vec!["node-genesis-testnet.remme.io"]);
    assert_eq!(connector.transport.requests()[0].0, "send_raw_transaction");
}

#[tokio::test]
async fn test_transfer_tokens_collects_every_violation() {
    let connector = MockConnector::new();

    let output = run(
        &connector,
        &[
            "account",
            "transfer-tokens",
            "--private-key",
            "secret",
            "--address-to",
            "nowhere",
            "--amount",
            "-1",
        ],
    )
    .await;

    assert_eq!(output.code(), 1);
    let errors = &output.body()["errors"];
    assert_eq!(errors["private_key"], json!(["The following private key is invalid."]));
    assert_eq!(
        errors["address_to"],
        json!(["The following address `nowhere` is invalid."])
    );
    assert_eq!(errors["amount"], json!(["Amount must be greater than 0."]));
    assert!(!output.render().contains("secret"));
}

// ==================== Node URL ====================

#[tokio::test]
async fn test_node_url_with_protocol() {
    let connector = MockConnector::new();

    let output = run(&connector, &["node", "get-peers", "--node-url", "http://x.com"]).await;

    assert_eq!(output.code(), 1);
    assert_eq!(
        output.body(),
        &json!({
            "errors": {
                "node_url": ["Pass the following node URL `http://x.com` without protocol (http, https, etc.)."]
            }
        })
    );
    assert!(connector.transport.requests().is_empty());
}

#[tokio::test]
async fn test_node_url_from_config() {
    let connector = MockConnector::new();
    let config = Config {
        node_url: Some("159.89.104.9".to_string()),
        ..Default::default()
    };

    let output = run_with(
        &connector,
        &StaticKey(None),
        &config,
        &["node", "get-info"],
    )
    .await;

    assert_eq!(output.code(), 0);
    assert_eq!(connector.hosts(), vec!["159.89.104.9"]);
}

// ==================== Ledger ====================

#[tokio::test]
async fn test_batch_get_list_negative_limit() {
    let connector = MockConnector::new();

    let output = run(&connector, &["batch", "get-list", "--limit", "-5"]).await;

    assert_eq!(output.code(), 1);
    assert_eq!(
        output.body(),
        &json!({ "errors": { "limit": ["Limit must be greater than 0."] } })
    );
}

#[tokio::test]
async fn test_batch_get_list_out_of_range_limit() {
    let connector = MockConnector::new();

    let output = run(
        &connector,
        &["batch", "get-list", "--limit", "99999999999999999999999"],
    )
    .await;

    assert_eq!(output.code(), 1);
    assert_eq!(output.body(), &json!({ "errors": "Invalid limit count." }));
}

#[tokio::test]
async fn test_batch_get_list_ids_only() {
    let connector = MockConnector::new();
    let a = "a".repeat(128);
    let b = "b".repeat(128);
    connector.transport.set_response(
        "list_batches",
        json!({ "data": [{ "header_signature": a }, { "header_signature": b }], "head": "h" }),
    );

    let output = run(
        &connector,
        &["batch", "get-list", "--limit", "2", "--reverse", "--ids-only"],
    )
    .await;

    assert_eq!(output.code(), 0);
    assert_eq!(output.body(), &json!({ "result": [a, b] }));

    let params = &connector.transport.requests()[0].1;
    assert_eq!(params["limit"], 2);
    assert_eq!(params["reverse"], true);
}

#[tokio::test]
async fn test_batch_get_status() {
    let connector = MockConnector::new();
    let id = "f".repeat(128);

    let output = run(&connector, &["batch", "get-status", "--id", &id]).await;

    assert_eq!(output.body(), &json!({ "result": "COMMITTED" }));
}

#[tokio::test]
async fn test_block_not_found_is_verbatim() {
    let connector = MockConnector::new();
    connector
        .transport
        .set_rpc_error("fetch_block", 404, "Block not found.");

    let output = run(&connector, &["block", "get", "--id", &"1".repeat(128)]).await;

    assert_eq!(output.code(), 1);
    assert_eq!(output.body(), &json!({ "errors": "Block not found." }));
}

#[tokio::test]
async fn test_receipt_ids_are_comma_separated() {
    let connector = MockConnector::new();
    connector
        .transport
        .set_response("list_receipts", json!({ "data": [{ "id": 1 }, { "id": 2 }] }));
    let ids = format!("{},{}", "a".repeat(128), "b".repeat(128));

    let output = run(&connector, &["receipt", "get", "--ids", &ids]).await;

    assert_eq!(output.code(), 0);
    assert_eq!(output.body(), &json!({ "result": [{ "id": 1 }, { "id": 2 }] }));
    assert_eq!(
        connector.transport.requests()[0].1["ids"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
}

#[tokio::test]
async fn test_receipt_rejects_empty_ids() {
    let connector = MockConnector::new();
    let hole = format!("{},,{}", "a".repeat(128), "b".repeat(128));

    for raw in ["", ",", " , ", hole.as_str()] {
        let output = run(&connector, &["receipt", "get", "--ids", raw]).await;

        assert_eq!(output.code(), 1);
        assert_eq!(
            output.body(),
            &json!({ "errors": { "ids": ["The following transaction identifier `` is invalid."] } })
        );
    }
    assert!(connector.transport.requests().is_empty());
}

#[tokio::test]
async fn test_get_list_rejects_empty_ids() {
    let connector = MockConnector::new();

    let output = run(&connector, &["batch", "get-list", "--ids", ""]).await;

    assert_eq!(output.code(), 1);
    assert_eq!(
        output.body(),
        &json!({ "errors": { "ids": ["The following batch identifier `` is invalid."] } })
    );
    assert!(connector.transport.requests().is_empty());
}

#[tokio::test]
async fn test_transaction_get_list_family_name() {
    let connector = MockConnector::new();

    let output = run(
        &connector,
        &["transaction", "get-list", "--family-name", "coffee"],
    )
    .await;

    assert_eq!(
        output.body(),
        &json!({ "errors": { "family_name": ["The following family name `coffee` is invalid."] } })
    );
}

// ==================== Node ====================

#[tokio::test]
async fn test_node_get_peers() {
    let connector = MockConnector::new();
    connector
        .transport
        .set_response("fetch_peers", json!({ "data": ["tcp://10.0.0.2:8800"] }));

    let output = run(&connector, &["node", "get-peers"]).await;

    assert_eq!(
        output.body(),
        &json!({ "result": { "peers": ["tcp://10.0.0.2:8800"] } })
    );
}

#[tokio::test]
async fn test_node_unreachable() {
    let connector = MockConnector::new();
    connector.transport.set_transport_error(
        "get_node_config",
        "Please check if your node running at http://localhost:8080.",
    );

    let output = run(&connector, &["node", "get-configs"]).await;

    assert_eq!(output.code(), 1);
    let message = output.body()["errors"].as_str().unwrap_or_default();
    assert!(message.contains("http://localhost:8080"));
}

#[tokio::test]
async fn test_public_key_get_list() {
    let connector = MockConnector::new();
    let key_address = "f".repeat(70);
    connector
        .transport
        .set_response("get_public_keys_list", json!([key_address]));

    let output = run(&connector, &["public-key", "get-list", "--address", ADDRESS]).await;

    assert_eq!(
        output.body(),
        &json!({ "result": { "addresses": [key_address] } })
    );
}

#[tokio::test]
async fn test_atomic_swap_get_public_key() {
    let connector = MockConnector::new();
    let key = format!("02{}", "c".repeat(64));
    connector
        .transport
        .set_response("get_atomic_swap_public_key", json!(key));

    let output = run(&connector, &["atomic-swap", "get-public-key"]).await;

    assert_eq!(output.body(), &json!({ "result": { "public_key": key } }));
}

// ==================== Node operator ====================

#[tokio::test]
async fn test_masternode_set_bet() {
    let connector = MockConnector::new();

    let output = run(&connector, &["masternode", "set-bet", "--bet", "max"]).await;

    assert_eq!(output.code(), 0);
    assert_eq!(
        output.body(),
        &json!({ "result": { "batch_identifier": "0".repeat(128) } })
    );
}

#[tokio::test]
async fn test_masternode_without_node_key() {
    let connector = MockConnector::new();

    let output = run_with(
        &connector,
        &StaticKey(None),
        &Config::default(),
        &["masternode", "open", "--amount", "300000"],
    )
    .await;

    assert_eq!(output.code(), 1);
    assert!(output.body()["errors"]
        .as_str()
        .unwrap_or_default()
        .contains("node private key"));
    assert!(connector.transport.requests().is_empty());
}

#[tokio::test]
async fn test_masternode_validates_before_reading_key() {
    let connector = MockConnector::new();

    let output = run_with(
        &connector,
        &StaticKey(None),
        &Config::default(),
        &["masternode", "set-bet", "--bet", "0"],
    )
    .await;

    let errors: &Value = &output.body()["errors"];
    assert_eq!(
        errors["bet"],
        json!(["The following bet `0` is not supported to be set as masternode betting behavior."])
    );
}

#[tokio::test]
async fn test_unfreeze_tokens() {
    let connector = MockConnector::new();

    let output = run(
        &connector,
        &[
            "node-account",
            "transfer-tokens-from-frozen-to-unfrozen",
            "--amount",
            "10",
        ],
    )
    .await;

    assert_eq!(output.code(), 0);
    assert_eq!(connector.transport.requests()[0].0, "send_raw_transaction");
}
