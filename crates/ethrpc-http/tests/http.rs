//! HttpTransport against a local mock node.

use std::time::Duration;

use ethrpc_core::{Client, ClientError, JsonRpcRequest, RpcTransport, TransportError};
use ethrpc_http::{HttpPoolConfig, HttpTransport};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn rpc_result(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "id": 1, "result": result}))
}

fn transport(uri: &str) -> HttpTransport {
    HttpTransport::new(uri, HttpPoolConfig::default()).unwrap()
}

// ─── Transport ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn posts_json_payload_and_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "method": "eth_blockNumber",
            "params": [],
            "id": 1
        })))
        .respond_with(rpc_result(json!("0x10")))
        .expect(1)
        .mount(&server)
        .await;

    let t = transport(&server.uri());
    let body = t
        .send_request(&JsonRpcRequest::new(1, "eth_blockNumber", vec![]))
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["result"], "0x10");
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = transport(&server.uri())
        .send_request(&JsonRpcRequest::new(1, "eth_gasPrice", vec![]))
        .await
        .unwrap_err();

    match err {
        TransportError::Http { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn uri_credentials_become_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(rpc_result(json!("0x1")))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = server.uri().replacen("http://", "http://alice:secret@", 1);
    let t = transport(&endpoint);
    assert_eq!(t.user(), Some("alice"));
    assert_eq!(t.url(), format!("{}/", server.uri()));

    t.send_request(&JsonRpcRequest::new(1, "eth_chainId", vec![]))
        .await
        .unwrap();
}

#[tokio::test]
async fn connection_refused_is_a_connection_error() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let err = transport(&format!("http://127.0.0.1:{port}"))
        .send_request(&JsonRpcRequest::new(1, "eth_chainId", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Connection(_)), "{err:?}");
}

#[tokio::test]
async fn pool_checkout_times_out_when_all_slots_are_busy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(json!("0x1")).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config = HttpPoolConfig {
        max_connections: 1,
        pool_timeout: Duration::from_millis(50),
        ..Default::default()
    };
    let t = HttpTransport::new(&server.uri(), config).unwrap();
    let req = JsonRpcRequest::new(1, "eth_chainId", vec![]);

    let (slow, starved) = tokio::join!(t.send_request(&req), t.send_request(&req));

    assert!(slow.is_ok());
    assert!(matches!(starved, Err(TransportError::PoolTimeout { ms: 50 })));
}

// ─── Client over HTTP ─────────────────────────────────────────────────────────

#[tokio::test]
async fn client_decodes_chain_id_and_binds_codec() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "method": "eth_chainId",
            "params": [],
            "id": 1
        })))
        .respond_with(rpc_result(json!("0x3d")))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(transport(&server.uri()));
    assert_eq!(client.chain_id().await.unwrap(), 61);
    assert_eq!(client.to_v(0).await.unwrap(), 157);
    assert_eq!(client.to_recovery_id(158).await.unwrap(), 1);
}

#[tokio::test]
async fn client_surfaces_node_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32000, "message": "execution reverted"}
        })))
        .mount(&server)
        .await;

    let client = Client::new(transport(&server.uri()));
    let err = client
        .call::<serde_json::Value>("eth_call", vec![json!({"to": "0x0"}), json!("latest")])
        .await
        .unwrap_err();
    match err {
        ClientError::Transport(TransportError::Rpc(e)) => {
            assert_eq!(e.code, -32000);
            assert_eq!(e.message, "execution reverted");
        }
        other => panic!("expected Rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn client_rejects_unknown_method_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(json!(null)))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::new(transport(&server.uri()));
    let err = client
        .call::<serde_json::Value>("eth_sendBitcoin", vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::UnknownMethod(_)));
}
