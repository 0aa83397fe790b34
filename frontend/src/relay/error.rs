use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RelayError {
    #[error("GEMINI_API_KEY was not set when this bundle was built")]
    MissingApiKey,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("Gemini API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("response did not match the campaign schema: {0}")]
    NonConforming(String),
    #[error("response contained no text")]
    EmptyResponse,
    #[error("stream interrupted: {0}")]
    Stream(String),
    #[error("request was cancelled")]
    Cancelled,
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Malformed(err.to_string())
    }
}

impl From<gloo_net::Error> for RelayError {
    fn from(err: gloo_net::Error) -> Self {
        RelayError::Request(err.to_string())
    }
}
