/// Shared error type used across all NewsFlow crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP: {0}")]
    Http(String),

    #[error("timeout: {0}")]
    Timeout(String),

    /// Missing or malformed inbound request fields. Rejected before any
    /// provider call is made.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Completion provider failure. Aborts the conversation turn.
    #[error("provider {provider}: {message}")]
    Provider { provider: String, message: String },

    /// Malformed JSON after a recognized protocol marker. Aborts the turn.
    #[error("protocol parse: {0}")]
    ProtocolParse(String),

    /// Catalog repository failure.
    #[error("catalog: {0}")]
    Catalog(String),

    /// Failure while persisting a proposed feed or its owner website.
    /// The orchestrator downgrades this to a null feed id.
    #[error("provisioning: {0}")]
    Provision(String),

    /// A completion request failed mid-conversation; carries the cause.
    #[error("chat processing failed: {source}")]
    ChatProcessing {
        #[source]
        source: Box<Error>,
    },

    /// The model kept emitting search requests past the configured budget.
    #[error("search cycle limit reached ({0} cycles)")]
    SearchLimit(usize),

    #[error("config: {0}")]
    Config(String),

    #[error("auth: {0}")]
    Auth(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap an error as a chat-processing failure, preserving the cause.
    pub fn chat_processing(source: Error) -> Self {
        Error::ChatProcessing {
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
