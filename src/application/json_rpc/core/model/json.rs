use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::application::json_rpc::core::model::common::RequestId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    pub method: String,
    pub params: Value,
    pub id: Option<RequestId>,
}

impl JsonRequest {
    pub fn new(method: impl Into<String>, params: Value, id: Option<RequestId>) -> Self {
        Self {
            jsonrpc: Some(JsonResponse::VERSION.to_string()),
            method: method.into(),
            params,
            id,
        }
    }
}

/// The error codes reserved by JSON-RPC 2.0. Anything else is
/// implementation defined, e.g. geth's `-32000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonErrorKind {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    Custom(i32),
}

impl JsonErrorKind {
    pub fn code(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::Custom(code) => code,
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            Self::ParseError => "Parse error",
            Self::InvalidRequest => "Invalid request",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid params",
            Self::InternalError => "Internal error",
            Self::Custom(_) => "Server error",
        }
    }
}

impl From<i32> for JsonErrorKind {
    fn from(code: i32) -> Self {
        match code {
            -32700 => Self::ParseError,
            -32600 => Self::InvalidRequest,
            -32601 => Self::MethodNotFound,
            -32602 => Self::InvalidParams,
            -32603 => Self::InternalError,
            code => Self::Custom(code),
        }
    }
}

/// Error object of a JSON-RPC 2.0 response, kept exactly as the node sent
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct JsonError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn kind(&self) -> JsonErrorKind {
        self.code.into()
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

impl From<JsonErrorKind> for JsonError {
    /// The error with the message JSON-RPC 2.0 suggests for `kind`.
    fn from(kind: JsonErrorKind) -> Self {
        Self::new(kind.code(), kind.default_message())
    }
}

/// A JSON-RPC 2.0 response envelope.
///
/// The error variant is tried first when decoding, so a response carrying
/// both an `error` object and a (null) `result` is treated as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonResponse {
    Error {
        #[serde(skip_deserializing)]
        jsonrpc: &'static str,
        id: Option<RequestId>,
        error: JsonError,
    },
    Success {
        #[serde(skip_deserializing)]
        jsonrpc: &'static str,
        id: Option<RequestId>,
        result: Value,
    },
}

impl JsonResponse {
    pub const VERSION: &'static str = "2.0";

    pub fn success(id: Option<RequestId>, result: Value) -> Self {
        JsonResponse::Success {
            jsonrpc: Self::VERSION,
            id,
            result,
        }
    }

    pub fn error(id: Option<RequestId>, error: JsonError) -> Self {
        JsonResponse::Error {
            jsonrpc: Self::VERSION,
            id,
            error,
        }
    }

    pub fn id(&self) -> Option<&RequestId> {
        match self {
            Self::Success { id, .. } | Self::Error { id, .. } => id.as_ref(),
        }
    }

    pub fn into_result(self) -> JsonResult<Value> {
        match self {
            Self::Success { result, .. } => Ok(result),
            Self::Error { error, .. } => Err(error),
        }
    }
}

pub type JsonResult<T> = Result<T, JsonError>;
