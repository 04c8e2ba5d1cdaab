//! Orogen Core
//!
//! Configuration and coordination for turning generated meshes into files
//! the user can keep.

mod config;
mod error;
mod exporter;

pub use config::Config;
pub use error::CoreError;
pub use exporter::ModelExporter;

// Re-export components
pub use orogen_download::{
    trigger, Activation, DirectoryHost, DownloadError, DownloadHost, DownloadRequest,
    FailurePoint, MemoryHost, WebHost, DEFAULT_REVOKE_DELAY_MS,
};
#[cfg(not(target_arch = "wasm32"))]
pub use orogen_download::DialogHost;
pub use orogen_export::{export, ExportError, ExportedFile, Mesh, Output, Vertex};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
