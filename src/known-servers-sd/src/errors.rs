use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single JSON fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not valid JSON")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SdError {
    #[error("can't fetch {what}")]
    Fetch {
        what: String,
        #[source]
        source: FetchError,
    },

    /// The document was valid JSON but not of the expected shape,
    /// e.g. a server list without `all_servers`.
    #[error("unexpected {what} document")]
    Schema {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("target path {path:?} is not a usable directory: {reason}")]
    OutputDir { path: PathBuf, reason: String },

    #[error("can't render targets for {category}")]
    Render {
        category: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("can't write target file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SdError {
    pub fn fetch(what: impl Into<String>, source: FetchError) -> Self {
        Self::Fetch {
            what: what.into(),
            source,
        }
    }

    pub fn schema(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Schema {
            what: what.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type SdResult<T> = Result<T, SdError>;
