//! In-memory host

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

use crate::error::DownloadError;
use crate::host::DownloadHost;

/// Stage at which a [`MemoryHost`] refuses to cooperate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    CreateObjectUrl,
    AttachAnchor,
    Activate,
}

impl FailurePoint {
    fn describe(self) -> &'static str {
        match self {
            FailurePoint::CreateObjectUrl => "object URL creation",
            FailurePoint::AttachAnchor => "anchor attachment",
            FailurePoint::Activate => "anchor activation",
        }
    }
}

/// A download the host has presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub href: String,
    pub filename: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug)]
pub struct MemoryAnchor {
    id: u64,
    href: String,
    filename: String,
}

struct StoredBlob {
    data: Vec<u8>,
    mime_type: String,
}

#[derive(Default)]
struct MemoryState {
    next_id: u64,
    objects: HashMap<String, StoredBlob>,
    anchors: HashSet<u64>,
    activations: Vec<Activation>,
}

impl MemoryState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Headless host that records every download instead of presenting it.
#[derive(Default)]
pub struct MemoryHost {
    state: Mutex<MemoryState>,
    fail_at: Option<FailurePoint>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that fails with [`DownloadError::Refused`] at `point`.
    pub fn failing_at(point: FailurePoint) -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            fail_at: Some(point),
        }
    }

    pub fn activations(&self) -> Vec<Activation> {
        self.state.lock().activations.clone()
    }

    pub fn live_object_urls(&self) -> usize {
        self.state.lock().objects.len()
    }

    pub fn attached_anchors(&self) -> usize {
        self.state.lock().anchors.len()
    }

    fn check(&self, point: FailurePoint) -> Result<(), DownloadError> {
        if self.fail_at == Some(point) {
            return Err(DownloadError::Refused(point.describe()));
        }
        Ok(())
    }
}

impl DownloadHost for MemoryHost {
    type Anchor = MemoryAnchor;
    type Error = DownloadError;

    fn create_object_url(&self, data: &[u8], mime_type: &str) -> Result<String, DownloadError> {
        self.check(FailurePoint::CreateObjectUrl)?;

        let mut state = self.state.lock();
        let url = format!("blob:orogen/{}", state.next_id());
        state.objects.insert(
            url.clone(),
            StoredBlob {
                data: data.to_vec(),
                mime_type: mime_type.to_string(),
            },
        );
        Ok(url)
    }

    fn revoke_object_url(&self, url: &str) -> Result<(), DownloadError> {
        self.state
            .lock()
            .objects
            .remove(url)
            .map(|_| ())
            .ok_or_else(|| DownloadError::UnknownObjectUrl(url.to_string()))
    }

    fn attach_anchor(&self, href: &str, filename: &str) -> Result<MemoryAnchor, DownloadError> {
        self.check(FailurePoint::AttachAnchor)?;

        let mut state = self.state.lock();
        let id = state.next_id();
        state.anchors.insert(id);
        Ok(MemoryAnchor {
            id,
            href: href.to_string(),
            filename: filename.to_string(),
        })
    }

    fn activate(&self, anchor: &MemoryAnchor) -> Result<(), DownloadError> {
        self.check(FailurePoint::Activate)?;

        let mut state = self.state.lock();
        let blob = state
            .objects
            .get(&anchor.href)
            .ok_or_else(|| DownloadError::UnknownObjectUrl(anchor.href.clone()))?;
        let activation = Activation {
            href: anchor.href.clone(),
            filename: anchor.filename.clone(),
            mime_type: blob.mime_type.clone(),
            data: blob.data.clone(),
        };
        state.activations.push(activation);
        Ok(())
    }

    fn detach_anchor(&self, anchor: MemoryAnchor) -> Result<(), DownloadError> {
        self.state.lock().anchors.remove(&anchor.id);
        Ok(())
    }
}
