use std::path::PathBuf;

use thiserror::Error;

/// Failure to get shares for a single post. The session reports it and moves
/// on to the next post ID.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("API returned {status}: {body}")]
    Status {
        status: u16,
        body: serde_json::Value,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no saved data at {0}")]
    NotFound(PathBuf),

    #[error("saved data at {path} is unreadable: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
