//! Orogen Web
//!
//! JavaScript-facing surface. Rust owns export and download logic; the
//! page only hands over buffers.

mod error;
mod flat;

use orogen_core::{trigger, Config, DownloadRequest, ModelExporter, WebHost};
use wasm_bindgen::prelude::*;

pub use error::ShellError;
pub use flat::mesh_from_flat;

/// Offer `data` to the user as `filename`, typed `mime_type`.
///
/// The object URL is revoked 10 s after the click.
#[wasm_bindgen]
pub fn download(data: &[u8], filename: &str, mime_type: &str) -> Result<(), JsValue> {
    let host = WebHost::from_window()?;
    trigger(&host, &DownloadRequest::new(data, filename, mime_type))
}

/// Mesh exporter bound to the current page.
#[wasm_bindgen]
pub struct Exporter {
    inner: ModelExporter,
    host: WebHost,
}

#[wasm_bindgen]
impl Exporter {
    /// `config` is an optional JSON object; omitted fields take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<Exporter, JsValue> {
        let config = match config.as_deref() {
            Some(json) => Config::from_json(json).map_err(ShellError::from)?,
            None => Config::default(),
        };
        let host = WebHost::from_window()?.with_revoke_delay(config.revoke_delay_ms);
        let inner = ModelExporter::new(config).map_err(ShellError::from)?;

        Ok(Exporter { inner, host })
    }

    /// Export an indexed mesh given as flat arrays (`positions` xyz,
    /// `colors` rgba) and download the result.
    #[wasm_bindgen(js_name = exportMesh)]
    pub fn export_mesh(
        &self,
        positions: &[f32],
        indices: &[u32],
        colors: &[f32],
    ) -> Result<(), JsValue> {
        let mesh = mesh_from_flat(positions, indices, colors)?;
        let names = self
            .inner
            .save(&self.host, &mesh)
            .map_err(ShellError::from)?;

        tracing::debug!(files = ?names, "Exported mesh from page");
        Ok(())
    }
}
