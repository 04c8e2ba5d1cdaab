//! Browser host

use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, Element, HtmlAnchorElement, Url};

use crate::host::DownloadHost;

/// How long object URLs outlive their anchor unless configured otherwise.
pub const DEFAULT_REVOKE_DELAY_MS: u32 = 10_000;

/// Host backed by the browser DOM.
///
/// The document and the element anchors are appended to are injected, so
/// nothing here reaches for ambient globals once constructed.
#[derive(Debug, Clone)]
pub struct WebHost {
    document: Document,
    attach_to: Element,
    revoke_delay_ms: i32,
}

impl WebHost {
    /// Host revoking object URLs [`DEFAULT_REVOKE_DELAY_MS`] after release.
    pub fn new(document: Document, attach_to: Element) -> Self {
        Self {
            document,
            attach_to,
            revoke_delay_ms: 0,
        }
        .with_revoke_delay(DEFAULT_REVOKE_DELAY_MS)
    }

    /// Host for the current page, attaching anchors to `document.body`.
    pub fn from_window() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        Ok(Self::new(document, body.into()))
    }

    /// Keep object URLs alive for `delay_ms` after release so the browser
    /// can finish reading the blob. `0` revokes immediately.
    pub fn with_revoke_delay(mut self, delay_ms: u32) -> Self {
        self.revoke_delay_ms = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        self
    }

    pub fn revoke_delay_ms(&self) -> u32 {
        self.revoke_delay_ms.unsigned_abs()
    }
}

fn blob_for(data: &[u8], mime_type: &str) -> Result<Blob, JsValue> {
    let bytes = Uint8Array::from(data);
    let parts = Array::of1(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

impl DownloadHost for WebHost {
    type Anchor = HtmlAnchorElement;
    type Error = JsValue;

    fn create_object_url(&self, data: &[u8], mime_type: &str) -> Result<String, JsValue> {
        let blob = blob_for(data, mime_type)?;
        Url::create_object_url_with_blob(&blob)
    }

    fn revoke_object_url(&self, url: &str) -> Result<(), JsValue> {
        if self.revoke_delay_ms <= 0 {
            return Url::revoke_object_url(url);
        }

        let window = self
            .document
            .default_view()
            .ok_or_else(|| JsValue::from_str("document has no window"))?;

        let url = url.to_string();
        let callback = Closure::once_into_js(move || {
            if let Err(e) = Url::revoke_object_url(&url) {
                tracing::warn!(url = %url, error = ?e, "Deferred object URL revocation failed");
            }
        });

        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            self.revoke_delay_ms,
        )?;
        Ok(())
    }

    fn attach_anchor(&self, href: &str, filename: &str) -> Result<HtmlAnchorElement, JsValue> {
        let anchor: HtmlAnchorElement = self.document.create_element("a")?.dyn_into()?;
        anchor.set_href(href);
        anchor.set_download(filename);
        anchor.set_hidden(true);

        self.attach_to.append_child(&anchor)?;
        Ok(anchor)
    }

    fn activate(&self, anchor: &HtmlAnchorElement) -> Result<(), JsValue> {
        anchor.click();
        Ok(())
    }

    fn detach_anchor(&self, anchor: HtmlAnchorElement) -> Result<(), JsValue> {
        anchor.remove();
        Ok(())
    }
}
