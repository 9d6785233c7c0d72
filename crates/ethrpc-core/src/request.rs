//! JSON-RPC 2.0 payloads exchanged with a node.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransportError;

/// Protocol version sent in every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id echoed back by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(u64),
    String(String),
    Null,
}

impl std::fmt::Display for RpcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
        }
    }
}

/// A JSON-RPC request: method name, ordered params, id and protocol version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
    pub id: RpcId,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            method: method.into(),
            params,
            id: RpcId::Number(id),
        }
    }
}

/// Error member of a failed JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JSON-RPC error {}: {}", self.code, self.message)
    }
}

/// A JSON-RPC response as returned by the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: RpcId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Parse a raw response body.
    pub fn from_body(body: &str) -> Result<Self, TransportError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The `result` member, or the node's error object. A response with
    /// neither yields `Value::Null`.
    pub fn into_result(self) -> Result<Value, JsonRpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_wire_format() {
        let req = JsonRpcRequest::new(7, "eth_getBalance", vec![json!("0xabc"), json!("latest")]);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getBalance",
                "params": ["0xabc", "latest"],
                "id": 7
            })
        );
    }

    #[test]
    fn parse_success_body() {
        let resp = JsonRpcResponse::from_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x539"}"#).unwrap();
        assert!(resp.is_ok());
        assert_eq!(resp.id, RpcId::Number(1));
        assert_eq!(resp.into_result().unwrap(), json!("0x539"));
    }

    #[test]
    fn parse_error_body() {
        let body = r#"{"jsonrpc":"2.0","id":"a","error":{"code":-32601,"message":"method not found"}}"#;
        let resp = JsonRpcResponse::from_body(body).unwrap();
        assert!(!resp.is_ok());
        assert_eq!(resp.id, RpcId::String("a".into()));
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.code, -32601);
        assert_eq!(err.data, None);
    }

    #[test]
    fn null_result_is_ok() {
        let resp = JsonRpcResponse::from_body(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn garbage_body_is_a_deserialization_error() {
        let err = JsonRpcResponse::from_body("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, TransportError::Deserialization(_)));
    }
}
