mod common;

use common::{client, MockTransport};
use loopring_relay_client::rpc::RpcClient;
use loopring_relay_client::RelayError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// Accept one connection, answer with `body`, hand back the raw request
fn serve_once(body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    });

    (url, handle)
}

/// Read headers plus a `Content-Length` body
fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];

    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);

        if let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&data[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            if data.len() >= end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8(data).unwrap()
}

fn split_request(raw: &str) -> (String, Value) {
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    (head.to_lowercase(), serde_json::from_str(body).unwrap())
}

#[test]
fn test_call_returns_result() {
    let mock = MockTransport::new().with_result("eth_blockNumber", json!("0x10"));
    let result = client(&mock).call("eth_blockNumber", vec![]).unwrap();

    assert_eq!(result, json!("0x10"));
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_error_field_becomes_rpc_error() {
    let mock = MockTransport::new().with_body(
        "eth_call",
        json!({"jsonrpc": "2.0", "error": {"code": -32000, "message": "execution reverted"}}),
    );

    match client(&mock).call("eth_call", vec![]) {
        Err(RelayError::Rpc { code, message }) => {
            assert_eq!(code, Some(-32000));
            assert_eq!(message, "execution reverted");
        }
        other => panic!("expected RPC error, got {:?}", other),
    }
}

#[test]
fn test_each_call_gets_a_fresh_request() {
    let mock = MockTransport::new().with_result("eth_chainId", json!("0x1"));
    let rpc = client(&mock);

    rpc.call("eth_chainId", vec![json!(1)]).unwrap();
    rpc.call("eth_chainId", vec![json!(2)]).unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].params, vec![json!(1)]);
    assert_eq!(requests[1].params, vec![json!(2)]);
    assert_ne!(requests[0].id, requests[1].id);
    assert!(requests.iter().all(|r| r.jsonrpc == "2.0" && r.id.len() == 32));
}

#[test]
fn test_call_as_decodes_result() {
    let mock = MockTransport::new().with_result("net_listening", json!(true));
    let listening: bool = client(&mock).call_as("net_listening", vec![]).unwrap();
    assert!(listening);

    let wrong: Result<u64, _> = client(&mock).call_as("net_listening", vec![]);
    assert!(matches!(wrong, Err(RelayError::InvalidResponse(_))));
}

#[test]
fn test_bare_string_error_is_rpc_error() {
    let mock = MockTransport::new().with_body("eth_getBalance", json!({"error": "rate limited"}));

    match client(&mock).call("eth_getBalance", vec![]) {
        Err(RelayError::Rpc { code, message }) => {
            assert_eq!(code, None);
            assert_eq!(message, "rate limited");
        }
        other => panic!("expected RPC error, got {:?}", other),
    }
}

#[test]
fn test_error_without_message_is_rpc_error() {
    let mock = MockTransport::new().with_body("eth_getBalance", json!({"error": {"code": -32000}}));

    match client(&mock).call("eth_getBalance", vec![]) {
        Err(RelayError::Rpc { code, message }) => {
            assert_eq!(code, Some(-32000));
            assert!(message.contains("-32000"));
        }
        other => panic!("expected RPC error, got {:?}", other),
    }
}

#[test]
fn test_http_transport_wire_format() {
    let (url, server) = serve_once(r#"{"jsonrpc":"2.0","id":"1","result":"0xabc"}"#);

    let hash = RpcClient::connect(url).unwrap().send_signed_tx("0xf86c").unwrap();
    assert_eq!(hash, "0xabc");

    let (head, body) = split_request(&server.join().unwrap());
    assert!(head.starts_with("post / http/1.1\r\n"));
    assert!(head.contains("content-type: application/json"));

    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["method"], "eth_sendRawTransaction");
    assert_eq!(body["params"], json!(["0xf86c"]));
    assert_eq!(body["id"].as_str().map(str::len), Some(32));
}

#[test]
fn test_http_transport_error_body() {
    let (url, server) =
        serve_once(r#"{"jsonrpc":"2.0","id":"1","error":{"code":-32000,"message":"nonce too low"}}"#);

    let err = RpcClient::connect(url).unwrap().send_signed_tx("0xf86c").unwrap_err();
    server.join().unwrap();

    match err {
        RelayError::Rpc { code, message } => {
            assert_eq!(code, Some(-32000));
            assert_eq!(message, "nonce too low");
        }
        other => panic!("expected RPC error, got {:?}", other),
    }
}

#[test]
fn test_http_transport_connection_refused() {
    let err = RpcClient::connect("http://127.0.0.1:1")
        .unwrap()
        .call("eth_blockNumber", vec![])
        .unwrap_err();

    assert!(matches!(err, RelayError::Network(_)));
}
