//! Download error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown object URL: {0}")]
    UnknownObjectUrl(String),

    #[error("Host refused {0}")]
    Refused(&'static str),
}
