//! Orogen Download Trigger
//!
//! Hands an in-memory byte sequence to the host environment as a file
//! download without navigating away from the page:
//! - temporary object URL for the payload
//! - transient hidden anchor carrying the filename hint
//! - a single programmatic activation
//! - release of both on every exit path
//!
//! Hosts: the browser DOM, a native save dialog, a plain directory and an
//! in-memory recorder.

#[cfg(not(target_arch = "wasm32"))]
mod dialog;
mod directory;
mod error;
mod host;
mod memory;
mod request;
mod trigger;
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use dialog::{DialogHost, PendingSave};
pub use directory::{DirectoryHost, PendingFile};
pub use error::DownloadError;
pub use host::DownloadHost;
pub use memory::{Activation, FailurePoint, MemoryAnchor, MemoryHost};
pub use request::DownloadRequest;
pub use trigger::trigger;
pub use web::{WebHost, DEFAULT_REVOKE_DELAY_MS};

pub type Result<T> = std::result::Result<T, DownloadError>;
