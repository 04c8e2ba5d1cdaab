//! Host environment capability

use std::fmt::Debug;

/// The primitives a host environment offers for presenting a payload to
/// the user as a file.
///
/// A browser implements these with `Blob`/`URL.createObjectURL` and an
/// `<a download>` element; other hosts provide equivalents. Errors are the
/// host's own and are passed back to the caller untouched.
pub trait DownloadHost {
    /// Handle to an attached download-carrying element.
    type Anchor;
    type Error: Debug;

    /// Create a temporary reference to `data`, tagged with `mime_type`.
    fn create_object_url(&self, data: &[u8], mime_type: &str) -> Result<String, Self::Error>;

    /// Release a reference obtained from [`create_object_url`](Self::create_object_url).
    fn revoke_object_url(&self, url: &str) -> Result<(), Self::Error>;

    /// Attach an invisible element pointing at `href` and suggesting `filename`.
    fn attach_anchor(&self, href: &str, filename: &str) -> Result<Self::Anchor, Self::Error>;

    /// Activate the element once.
    fn activate(&self, anchor: &Self::Anchor) -> Result<(), Self::Error>;

    fn detach_anchor(&self, anchor: Self::Anchor) -> Result<(), Self::Error>;
}
