//! Export error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Index {index} out of range for {attribute} of length {len}")]
    IndexOutOfRange {
        attribute: &'static str,
        index: u32,
        len: usize,
    },

    #[error("Mesh has no vertices")]
    EmptyMesh,

    #[error("Vertex {0} has a non-finite position")]
    NonFinitePosition(usize),

    #[error("Invalid glTF document: {0}")]
    Invalid(String),

    #[error("Buffer of {0} bytes exceeds the GLB size limit")]
    BufferTooLarge(usize),

    #[error("GLB error: {0}")]
    Glb(#[from] gltf::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
