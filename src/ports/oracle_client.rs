//! Text-generation oracle port definition.

use crate::domain::AppError;

/// One completion request: a system instruction fixing the output contract
/// and a user instruction carrying the document and signals.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
}

/// Port for the external text-generation oracle. The oracle is untrusted;
/// callers parse and verify everything it returns.
pub trait OracleClient {
    /// Request a completion and return the raw response text.
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}

/// Oracle double returning a fixed response, for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct MockOracleClient {
    response: String,
}

impl MockOracleClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into() }
    }
}

impl OracleClient for MockOracleClient {
    fn complete(&self, _request: CompletionRequest) -> Result<String, AppError> {
        Ok(self.response.clone())
    }
}
