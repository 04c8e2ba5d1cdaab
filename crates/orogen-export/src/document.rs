//! glTF 2.0 JSON document

use gltf::json;
use gltf::json::validation::{Checked::Valid, USize64, Validate};
use std::collections::BTreeMap;

use crate::error::ExportError;
use crate::mesh::{bounding_coords, Mesh, Vertex};
use crate::Result;

const GENERATOR: &str = concat!("orogen ", env!("CARGO_PKG_VERSION"));

/// Single-node scene drawing `mesh` as a triangle list from one
/// interleaved buffer. `buffer_uri` is `None` when the buffer is embedded
/// as the GLB binary chunk.
///
/// The document is validated before it is returned.
pub(crate) fn for_mesh(mesh: &Mesh, buffer_uri: Option<String>) -> Result<json::Root> {
    let (min, max) = bounding_coords(mesh.vertices());
    let count = USize64::from(mesh.len());

    let buffer = json::Buffer {
        byte_length: USize64::from(mesh.len() * Vertex::SIZE),
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        uri: buffer_uri,
    };
    let buffer_view = json::buffer::View {
        buffer: json::Index::new(0),
        byte_length: buffer.byte_length,
        byte_offset: None,
        byte_stride: Some(json::buffer::Stride(Vertex::SIZE)),
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        target: Some(Valid(json::buffer::Target::ArrayBuffer)),
    };
    let positions = json::Accessor {
        buffer_view: Some(json::Index::new(0)),
        byte_offset: Some(USize64(0)),
        count,
        component_type: Valid(json::accessor::GenericComponentType(
            json::accessor::ComponentType::F32,
        )),
        extensions: Default::default(),
        extras: Default::default(),
        type_: Valid(json::accessor::Type::Vec3),
        min: Some(json::Value::from(Vec::from(min))),
        max: Some(json::Value::from(Vec::from(max))),
        name: None,
        normalized: false,
        sparse: None,
    };
    let colors = json::Accessor {
        buffer_view: Some(json::Index::new(0)),
        byte_offset: Some(USize64::from(3 * std::mem::size_of::<f32>())),
        count,
        component_type: Valid(json::accessor::GenericComponentType(
            json::accessor::ComponentType::F32,
        )),
        extensions: Default::default(),
        extras: Default::default(),
        type_: Valid(json::accessor::Type::Vec3),
        min: None,
        max: None,
        name: None,
        normalized: false,
        sparse: None,
    };

    let mut attributes = BTreeMap::new();
    attributes.insert(Valid(json::mesh::Semantic::Positions), json::Index::new(0));
    attributes.insert(Valid(json::mesh::Semantic::Colors(0)), json::Index::new(1));

    let primitive = json::mesh::Primitive {
        attributes,
        extensions: Default::default(),
        extras: Default::default(),
        indices: None,
        material: None,
        mode: Valid(json::mesh::Mode::Triangles),
        targets: None,
    };

    let node = json::Node {
        camera: None,
        children: None,
        extensions: Default::default(),
        extras: Default::default(),
        matrix: None,
        mesh: Some(json::Index::new(0)),
        name: None,
        rotation: None,
        scale: None,
        translation: None,
        skin: None,
        weights: None,
    };

    let root = json::Root {
        asset: json::Asset {
            generator: Some(GENERATOR.to_string()),
            ..Default::default()
        },
        accessors: vec![positions, colors],
        buffers: vec![buffer],
        buffer_views: vec![buffer_view],
        meshes: vec![json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            primitives: vec![primitive],
            weights: None,
        }],
        nodes: vec![node],
        scene: Some(json::Index::new(0)),
        scenes: vec![json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            nodes: vec![json::Index::new(0)],
        }],
        ..Default::default()
    };

    validate(&root)?;
    Ok(root)
}

fn validate(root: &json::Root) -> Result<()> {
    let mut problems = Vec::new();
    root.validate(root, json::Path::new, &mut |path, error| {
        problems.push(format!("{}: {:?}", path().as_str(), error));
    });

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ExportError::Invalid(problems.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn triangle() -> Mesh {
        let positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
        let colors: [[f32; 4]; 3] = [[1.0; 4]; 3];
        Mesh::from_indexed(&positions, &[0, 1, 2], &colors).unwrap()
    }

    #[test]
    fn test_document_layout() {
        let root = for_mesh(&triangle(), None).unwrap();
        let json: Value = serde_json::to_value(&root).unwrap();

        assert_eq!(json["asset"]["version"], "2.0");
        assert_eq!(json["scene"], 0);
        assert_eq!(json["bufferViews"][0]["byteStride"], 24);
        assert_eq!(json["bufferViews"][0]["byteLength"], 72);
        assert_eq!(json["bufferViews"][0]["target"], 34962);
        assert_eq!(json["buffers"][0]["byteLength"], 72);
        assert!(json["buffers"][0].get("uri").is_none());

        assert_eq!(json["accessors"][0]["count"], 3);
        assert_eq!(json["accessors"][0]["type"], "VEC3");
        assert_eq!(json["accessors"][0]["componentType"], 5126);
        assert_eq!(json["accessors"][0]["max"][1], 2.0);
        assert_eq!(json["accessors"][1]["byteOffset"], 12);
        assert!(json["accessors"][1].get("min").is_none());

        let attributes = &json["meshes"][0]["primitives"][0]["attributes"];
        assert_eq!(attributes["POSITION"], 0);
        assert_eq!(attributes["COLOR_0"], 1);
    }

    #[test]
    fn test_external_buffer_uri() {
        let root = for_mesh(&triangle(), Some("model.bin".to_string())).unwrap();

        assert_eq!(root.buffers[0].uri.as_deref(), Some("model.bin"));
    }

    #[test]
    fn test_non_finite_bounds_fail_validation() {
        let mesh = Mesh::new(vec![Vertex {
            position: [f32::INFINITY, 0.0, 0.0],
            color: [1.0; 3],
        }]);

        let result = for_mesh(&mesh, None);
        assert!(matches!(result, Err(ExportError::Invalid(_))));
    }
}
