//! Native save dialog host

use parking_lot::Mutex;
use rfd::FileDialog;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::directory::sanitize_file_name;
use crate::error::DownloadError;
use crate::host::DownloadHost;

type Chooser = Box<dyn Fn(&str, Option<&Path>) -> Option<PathBuf>>;

/// Asks the user where to save each download, like a browser configured
/// to always prompt. Cancelling the dialog drops the download.
pub struct DialogHost {
    start_dir: Option<PathBuf>,
    choose: Chooser,
    payloads: Mutex<HashMap<String, Payload>>,
}

struct Payload {
    data: Vec<u8>,
    mime_type: String,
}

#[derive(Debug)]
pub struct PendingSave {
    href: String,
    file_name: String,
}

impl DialogHost {
    pub fn new() -> Self {
        Self::with_chooser(ask_user)
    }

    /// Host that picks the destination with `choose` instead of a system
    /// dialog. `choose` gets the suggested file name and the starting
    /// directory; `None` means the user cancelled.
    pub fn with_chooser<F>(choose: F) -> Self
    where
        F: Fn(&str, Option<&Path>) -> Option<PathBuf> + 'static,
    {
        Self {
            start_dir: None,
            choose: Box::new(choose),
            payloads: Mutex::new(HashMap::new()),
        }
    }

    /// Open the dialog in `dir`.
    pub fn in_directory(mut self, dir: PathBuf) -> Self {
        self.start_dir = Some(dir);
        self
    }
}

impl Default for DialogHost {
    fn default() -> Self {
        Self::new()
    }
}

fn ask_user(file_name: &str, start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new().set_file_name(file_name);
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }
    if let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) {
        dialog = dialog.add_filter(ext, &[ext]);
    }
    dialog.save_file()
}

impl DownloadHost for DialogHost {
    type Anchor = PendingSave;
    type Error = DownloadError;

    fn create_object_url(&self, data: &[u8], mime_type: &str) -> Result<String, DownloadError> {
        let url = format!("dialog:{}", Uuid::new_v4());
        self.payloads.lock().insert(
            url.clone(),
            Payload {
                data: data.to_vec(),
                mime_type: mime_type.to_string(),
            },
        );
        Ok(url)
    }

    fn revoke_object_url(&self, url: &str) -> Result<(), DownloadError> {
        self.payloads
            .lock()
            .remove(url)
            .map(|_| ())
            .ok_or_else(|| DownloadError::UnknownObjectUrl(url.to_string()))
    }

    fn attach_anchor(&self, href: &str, filename: &str) -> Result<PendingSave, DownloadError> {
        Ok(PendingSave {
            href: href.to_string(),
            file_name: sanitize_file_name(filename),
        })
    }

    fn activate(&self, anchor: &PendingSave) -> Result<(), DownloadError> {
        // The dialog blocks; keep the payload map unlocked meanwhile.
        let Some(path) = (self.choose)(&anchor.file_name, self.start_dir.as_deref()) else {
            tracing::info!(file_name = %anchor.file_name, "Save dialog cancelled");
            return Ok(());
        };

        let payloads = self.payloads.lock();
        let payload = payloads
            .get(&anchor.href)
            .ok_or_else(|| DownloadError::UnknownObjectUrl(anchor.href.clone()))?;
        fs::write(&path, &payload.data)?;

        tracing::info!(
            path = %path.display(),
            mime_type = %payload.mime_type,
            bytes = payload.data.len(),
            "Saved download"
        );

        Ok(())
    }

    fn detach_anchor(&self, _anchor: PendingSave) -> Result<(), DownloadError> {
        Ok(())
    }
}
