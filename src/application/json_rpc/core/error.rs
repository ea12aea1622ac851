use thiserror::Error;

use crate::application::json_rpc::core::model::json::JsonError;

/// Errors from building, sending or decoding a JSON-RPC call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    /// A required argument was absent. Raised before any I/O.
    #[error("invalid argument: `{name}` is required")]
    InvalidArgument { name: &'static str },

    #[error("quantity {0} does not fit into a decimal JSON number")]
    QuantityOverflow(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("parse error: {0}")]
    Parse(String),

    /// An error object reported by the node.
    #[error("node returned error {}: {}", .0.code(), .0)]
    Server(JsonError),
}

impl RpcError {
    pub fn invalid_argument(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }

    /// The JSON-RPC error code, if the node reported one.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Server(error) => Some(error.code()),
            _ => None,
        }
    }
}

impl From<JsonError> for RpcError {
    fn from(error: JsonError) -> Self {
        Self::Server(error)
    }
}

pub type RpcResult<T> = Result<T, RpcError>;

/// Unwraps a required argument or reports it by name.
pub(crate) fn required<T>(name: &'static str, value: Option<T>) -> RpcResult<T> {
    value.ok_or(RpcError::InvalidArgument { name })
}
