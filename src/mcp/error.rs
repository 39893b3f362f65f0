//! MCP Error Taxonomy
//!
//! Every failure a dispatch can produce is converted into one of these typed
//! errors at the dispatcher boundary and serialized as a JSON-RPC error
//! envelope. None of them may crash the process.

use crate::jokes::corpus::CorpusError;
use thiserror::Error;

/// JSON-RPC 2.0 error codes used by the server.
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// Errors produced while handling a single MCP request.
#[derive(Debug, Error)]
pub enum McpError {
    /// The request body was not a valid JSON-RPC envelope.
    #[error("Parse error")]
    Parse,

    /// The envelope named a method the server does not implement.
    #[error("Method not found")]
    MethodNotFound(String),

    /// `tools/call` named a tool that is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// `resources/read` named a URI that is not in the registry.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Tool arguments failed schema validation.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A joke id slipped past validation but fell outside the corpus.
    #[error("joke id {id} is out of range (valid ids 0-{max})")]
    OutOfRange { id: i64, max: usize },

    /// The tool handler itself failed.
    #[error("Tool execution failed: {0}")]
    Handler(String),
}

impl McpError {
    /// Maps the error onto its JSON-RPC error code.
    pub fn code(&self) -> i32 {
        match self {
            McpError::Parse => PARSE_ERROR,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::UnknownTool(_)
            | McpError::UnknownResource(_)
            | McpError::InvalidArguments(_)
            | McpError::OutOfRange { .. } => INVALID_PARAMS,
            McpError::Handler(_) => INTERNAL_ERROR,
        }
    }
}

impl From<CorpusError> for McpError {
    fn from(err: CorpusError) -> Self {
        match err {
            CorpusError::OutOfRange { id, max } => McpError::OutOfRange { id, max },
        }
    }
}
