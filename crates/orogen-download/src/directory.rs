//! Directory-backed host for native builds

use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::DownloadError;
use crate::host::DownloadHost;

/// Saves downloads into a directory, the way a browser drops them into the
/// user's download folder.
///
/// The payload is spilled to a hidden `.part` file which stands in for the
/// object URL; activation moves it to its final name. Existing files are
/// never overwritten.
#[derive(Debug, Clone)]
pub struct DirectoryHost {
    dir: PathBuf,
}

#[derive(Debug)]
pub struct PendingFile {
    spill: PathBuf,
    file_name: String,
}

impl DirectoryHost {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadHost for DirectoryHost {
    type Anchor = PendingFile;
    type Error = DownloadError;

    fn create_object_url(&self, data: &[u8], mime_type: &str) -> Result<String, DownloadError> {
        fs::create_dir_all(&self.dir)?;

        let spill = self.dir.join(format!(".{}.part", Uuid::new_v4()));
        fs::write(&spill, data)?;

        tracing::debug!(
            spill = %spill.display(),
            mime_type = %mime_type,
            bytes = data.len(),
            sha256 = %hex_digest(data),
            "Spilled download payload"
        );

        Ok(spill.to_string_lossy().into_owned())
    }

    fn revoke_object_url(&self, url: &str) -> Result<(), DownloadError> {
        match fs::remove_file(url) {
            Ok(()) => Ok(()),
            // Already moved into place by activation.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn attach_anchor(&self, href: &str, filename: &str) -> Result<PendingFile, DownloadError> {
        Ok(PendingFile {
            spill: PathBuf::from(href),
            file_name: sanitize_file_name(filename),
        })
    }

    fn activate(&self, anchor: &PendingFile) -> Result<(), DownloadError> {
        let destination = claim_destination(&self.dir, &anchor.file_name)?;
        if let Err(e) = fs::rename(&anchor.spill, &destination) {
            let _ = fs::remove_file(&destination);
            return Err(e.into());
        }

        tracing::info!(path = %destination.display(), "Saved download");

        Ok(())
    }

    fn detach_anchor(&self, _anchor: PendingFile) -> Result<(), DownloadError> {
        Ok(())
    }
}

fn hex_digest(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

pub(crate) fn sanitize_file_name(file_name: &str) -> String {
    let name = Path::new(file_name.trim())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("download")
        .trim();

    if name.is_empty() {
        "download".to_string()
    } else {
        name.to_string()
    }
}

/// Reserve the first free path of the form `name`, `name (1)`,
/// `name (2)`, ... keeping the extension last.
///
/// The name is claimed by creating an empty file with `create_new`, so two
/// concurrent saves never end up with the same destination. The caller
/// replaces the placeholder with the real payload.
fn claim_destination(dir: &Path, file_name: &str) -> io::Result<PathBuf> {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    let extension = path.extension().and_then(|e| e.to_str());

    let mut n = 0u32;
    loop {
        let name = match (n, extension) {
            (0, _) => file_name.to_string(),
            (_, Some(ext)) => format!("{} ({}).{}", stem, n, ext),
            (_, None) => format!("{} ({})", stem, n),
        };
        let candidate = dir.join(name);

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(_) => return Ok(candidate),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(e),
        }
    }
}
