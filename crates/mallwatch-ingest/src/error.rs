use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("payload from {url} is missing expected field \"{field}\"")]
    MissingPayload { url: String, field: &'static str },

    #[error("unknown source \"{0}\" (expected \"aviapark\" or \"riviera\")")]
    UnknownSource(String),
}
