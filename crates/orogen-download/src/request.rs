//! Download request

/// A single download: the payload plus the hints the host needs to
/// present it. Borrowed for the duration of one trigger call only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadRequest<'a> {
    pub data: &'a [u8],
    pub filename: &'a str,
    pub mime_type: &'a str,
}

impl<'a> DownloadRequest<'a> {
    pub fn new(data: &'a [u8], filename: &'a str, mime_type: &'a str) -> Self {
        Self {
            data,
            filename,
            mime_type,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
