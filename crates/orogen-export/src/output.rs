//! Export targets

use serde::{Deserialize, Serialize};

use crate::document;
use crate::error::ExportError;
use crate::glb::encode_glb;
use crate::mesh::Mesh;
use crate::Result;

pub const GLB_MIME_TYPE: &str = "model/gltf-binary";
pub const GLTF_MIME_TYPE: &str = "model/gltf+json";
pub const BIN_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    /// Standard glTF: JSON document plus external buffer.
    Standard,
    /// Binary glTF.
    #[default]
    Binary,
}

/// One file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Encode `mesh` as glTF, naming the produced files after `name`.
///
/// [`Output::Binary`] yields `<name>.glb`; [`Output::Standard`] yields
/// `<name>.gltf` referencing `<name>.bin`.
pub fn export(mesh: &Mesh, output: Output, name: &str) -> Result<Vec<ExportedFile>> {
    if mesh.is_empty() {
        return Err(ExportError::EmptyMesh);
    }
    if let Some(index) = mesh
        .vertices()
        .iter()
        .position(|v| v.position.iter().any(|p| !p.is_finite()))
    {
        return Err(ExportError::NonFinitePosition(index));
    }

    let bin = mesh.to_padded_bytes();

    let files = match output {
        Output::Binary => {
            let json = serde_json::to_vec(&document::for_mesh(mesh, None)?)?;
            vec![ExportedFile {
                file_name: format!("{}.glb", name),
                mime_type: GLB_MIME_TYPE,
                bytes: encode_glb(&json, &bin)?,
            }]
        }
        Output::Standard => {
            let bin_name = format!("{}.bin", name);
            let root = document::for_mesh(mesh, Some(bin_name.clone()))?;
            let json = serde_json::to_vec_pretty(&root)?;
            vec![
                ExportedFile {
                    file_name: format!("{}.gltf", name),
                    mime_type: GLTF_MIME_TYPE,
                    bytes: json,
                },
                ExportedFile {
                    file_name: bin_name,
                    mime_type: BIN_MIME_TYPE,
                    bytes: bin,
                },
            ]
        }
    };

    tracing::info!(
        vertices = mesh.len(),
        output = ?output,
        files = files.len(),
        "Exported mesh"
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Vertex;
    use serde_json::Value;

    fn quad() -> Mesh {
        let positions: [[f32; 3]; 4] = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        let colors: [[f32; 4]; 4] = [[0.5, 0.5, 0.5, 1.0]; 4];
        Mesh::from_indexed(&positions, &[0, 1, 2, 0, 2, 3], &colors).unwrap()
    }

    #[test]
    fn test_binary_export() {
        let files = export(&quad(), Output::Binary, "model").unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "model.glb");
        assert_eq!(files[0].mime_type, "model/gltf-binary");

        let glb = &files[0].bytes;
        assert_eq!(&glb[0..4], b"glTF");
        assert_eq!(glb.len() % 4, 0);

        let json_len = u32::from_le_bytes([glb[12], glb[13], glb[14], glb[15]]) as usize;
        let json: Value = serde_json::from_slice(&glb[20..20 + json_len]).unwrap();
        assert!(json["buffers"][0].get("uri").is_none());
        assert_eq!(json["buffers"][0]["byteLength"], 6 * 24);

        let bin_start = 20 + json_len + 8;
        assert_eq!(glb.len() - bin_start, 6 * 24);
    }

    #[test]
    fn test_binary_export_loads() {
        let files = export(&quad(), Output::Binary, "model").unwrap();
        let gltf = gltf::Gltf::from_slice(&files[0].bytes).unwrap();

        let mesh = gltf.meshes().next().unwrap();
        let primitive = mesh.primitives().next().unwrap();
        assert_eq!(primitive.mode(), gltf::mesh::Mode::Triangles);
        assert!(primitive.get(&gltf::Semantic::Positions).is_some());
        assert!(primitive.get(&gltf::Semantic::Colors(0)).is_some());
        assert_eq!(gltf.blob.as_ref().map(|b| b.len()), Some(6 * 24));
    }

    #[test]
    fn test_standard_export_loads() {
        let files = export(&quad(), Output::Standard, "model").unwrap();
        let gltf = gltf::Gltf::from_slice(&files[0].bytes).unwrap();

        let buffer = gltf.buffers().next().unwrap();
        assert!(matches!(buffer.source(), gltf::buffer::Source::Uri("model.bin")));
        assert_eq!(buffer.length(), 6 * 24);
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let mesh = Mesh::new(vec![
            Vertex {
                position: [0.0, 0.0, 0.0],
                color: [1.0; 3],
            },
            Vertex {
                position: [0.0, f32::NAN, 0.0],
                color: [1.0; 3],
            },
        ]);

        let result = export(&mesh, Output::Binary, "model");
        assert!(matches!(result, Err(ExportError::NonFinitePosition(1))));

        let result = export(&mesh, Output::Standard, "model");
        assert!(matches!(result, Err(ExportError::NonFinitePosition(1))));
    }

    #[test]
    fn test_standard_export() {
        let files = export(&quad(), Output::Standard, "terrain").unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["terrain.gltf", "terrain.bin"]);
        assert_eq!(files[0].mime_type, GLTF_MIME_TYPE);
        assert_eq!(files[1].mime_type, BIN_MIME_TYPE);

        let json: Value = serde_json::from_slice(&files[0].bytes).unwrap();
        assert_eq!(json["buffers"][0]["uri"], "terrain.bin");
        assert_eq!(files[1].bytes.len(), 6 * 24);
    }

    #[test]
    fn test_empty_mesh_rejected() {
        let result = export(&Mesh::default(), Output::Binary, "model");
        assert!(matches!(result, Err(ExportError::EmptyMesh)));
    }

    #[test]
    fn test_output_serde() {
        let output: Output = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(output, Output::Standard);
        assert_eq!(serde_json::to_string(&Output::Binary).unwrap(), "\"binary\"");
    }
}
