//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Download error: {0}")]
    Download(#[from] orogen_download::DownloadError),

    #[error("Export error: {0}")]
    Export(#[from] orogen_export::ExportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Host error: {0}")]
    Host(String),
}

impl From<wasm_bindgen::JsValue> for CoreError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        CoreError::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
