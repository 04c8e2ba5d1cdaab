//! Orogen Model Export
//!
//! Packs generated triangle meshes into glTF 2.0:
//! - binary `.glb` container
//! - standard `.gltf` document plus external `.bin` buffer
//! - interleaved position/color vertex layout

mod document;
mod error;
mod glb;
mod mesh;
mod output;

pub use error::ExportError;
pub use glb::encode_glb;
pub use mesh::{bounding_coords, Mesh, Vertex};
pub use output::{export, ExportedFile, Output, GLB_MIME_TYPE, GLTF_MIME_TYPE, BIN_MIME_TYPE};

pub type Result<T> = std::result::Result<T, ExportError>;
