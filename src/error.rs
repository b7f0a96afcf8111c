use thiserror::Error;

/// Errors surfaced by the codecs and query clients
#[derive(Error, Debug)]
pub enum Error {
    #[error("protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("protobuf encode error: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid REST endpoint {0:?}")]
    InvalidUrl(String),

    #[error("REST query failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("gRPC status: {0}")]
    Status(#[from] tonic::Status),

    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("client not connected, call connect() first")]
    NotConnected,

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid exchange rate string {input:?}: {reason}")]
    InvalidExchangeRate { input: String, reason: String },

    #[error("expected Any of type {expected}, got {actual}")]
    UnexpectedTypeUrl { expected: String, actual: String },

    #[error("unknown message type: {0}")]
    UnknownMessageType(String),
}

impl Error {
    pub fn invalid_exchange_rate<S: Into<String>, R: Into<String>>(input: S, reason: R) -> Self {
        Self::InvalidExchangeRate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
