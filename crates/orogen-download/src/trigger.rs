//! Download trigger

use crate::host::DownloadHost;
use crate::request::DownloadRequest;

/// Offer `request` to the user as a file download.
///
/// Creates a temporary object URL for the payload, attaches a hidden
/// anchor carrying the filename hint and activates it once. The anchor is
/// detached and the object URL released before returning, whether or not
/// a host primitive failed. Host errors are returned unmodified.
///
/// Each call is independent: triggering the same request twice offers two
/// downloads.
pub fn trigger<H: DownloadHost>(host: &H, request: &DownloadRequest<'_>) -> Result<(), H::Error> {
    let url = ObjectUrl::create(host, request.data, request.mime_type)?;
    let anchor = AttachedAnchor::attach(host, url.as_str(), request.filename)?;
    anchor.activate()?;

    tracing::debug!(
        file_name = %request.filename,
        mime_type = %request.mime_type,
        bytes = request.len(),
        "Triggered download"
    );

    Ok(())
}

/// Object URL that is revoked when dropped.
struct ObjectUrl<'h, H: DownloadHost> {
    host: &'h H,
    url: String,
}

impl<'h, H: DownloadHost> ObjectUrl<'h, H> {
    fn create(host: &'h H, data: &[u8], mime_type: &str) -> Result<Self, H::Error> {
        let url = host.create_object_url(data, mime_type)?;
        Ok(Self { host, url })
    }

    fn as_str(&self) -> &str {
        &self.url
    }
}

impl<H: DownloadHost> Drop for ObjectUrl<'_, H> {
    fn drop(&mut self) {
        if let Err(e) = self.host.revoke_object_url(&self.url) {
            tracing::warn!(url = %self.url, error = ?e, "Failed to revoke object URL");
        }
    }
}

/// Anchor that is detached from its attachment point when dropped.
struct AttachedAnchor<'h, H: DownloadHost> {
    host: &'h H,
    anchor: Option<H::Anchor>,
}

impl<'h, H: DownloadHost> AttachedAnchor<'h, H> {
    fn attach(host: &'h H, href: &str, filename: &str) -> Result<Self, H::Error> {
        let anchor = host.attach_anchor(href, filename)?;
        Ok(Self {
            host,
            anchor: Some(anchor),
        })
    }

    fn activate(&self) -> Result<(), H::Error> {
        match &self.anchor {
            Some(anchor) => self.host.activate(anchor),
            None => Ok(()),
        }
    }
}

impl<H: DownloadHost> Drop for AttachedAnchor<'_, H> {
    fn drop(&mut self) {
        if let Some(anchor) = self.anchor.take() {
            if let Err(e) = self.host.detach_anchor(anchor) {
                tracing::warn!(error = ?e, "Failed to detach download anchor");
            }
        }
    }
}
