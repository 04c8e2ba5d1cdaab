//! Mesh data

use crate::error::ExportError;
use crate::Result;

/// Interleaved vertex: position followed by RGB color, 24 bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const SIZE: usize = 6 * std::mem::size_of::<f32>();

    fn write_le(&self, out: &mut Vec<u8>) {
        for value in self.position.iter().chain(self.color.iter()) {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}

/// Non-indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Expand an indexed mesh into one vertex per index. Color alpha is
    /// dropped.
    pub fn from_indexed(
        positions: &[[f32; 3]],
        indices: &[u32],
        colors: &[[f32; 4]],
    ) -> Result<Self> {
        let vertices = indices
            .iter()
            .map(|&index| -> Result<Vertex> {
                let i = index as usize;
                let position = positions.get(i).ok_or(ExportError::IndexOutOfRange {
                    attribute: "positions",
                    index,
                    len: positions.len(),
                })?;
                let color = colors.get(i).ok_or(ExportError::IndexOutOfRange {
                    attribute: "colors",
                    index,
                    len: colors.len(),
                })?;

                Ok(Vertex {
                    position: *position,
                    color: [color[0], color[1], color[2]],
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex buffer in little-endian layout, padded to a multiple of four.
    pub(crate) fn to_padded_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.vertices.len() * Vertex::SIZE);
        for vertex in &self.vertices {
            vertex.write_le(&mut bytes);
        }
        bytes.resize(align_to_four(bytes.len()), 0);
        bytes
    }
}

/// Bounding box of the vertex positions, used as the accessor min/max.
pub fn bounding_coords(vertices: &[Vertex]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for vertex in vertices {
        for i in 0..3 {
            min[i] = min[i].min(vertex.position[i]);
            max[i] = max[i].max(vertex.position[i]);
        }
    }
    (min, max)
}

pub(crate) fn align_to_four(n: usize) -> usize {
    (n + 3) & !3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indexed() {
        let positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let colors: [[f32; 4]; 3] = [[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.5]];

        let mesh = Mesh::from_indexed(&positions, &[0, 1, 2, 2, 1, 0], &colors).unwrap();

        assert_eq!(mesh.len(), 6);
        assert_eq!(mesh.vertices()[2].position, [0.0, 1.0, 0.0]);
        assert_eq!(mesh.vertices()[2].color, [0.0, 0.0, 1.0]);
        assert_eq!(mesh.vertices()[5], mesh.vertices()[0]);
    }

    #[test]
    fn test_from_indexed_out_of_range() {
        let positions: [[f32; 3]; 1] = [[0.0, 0.0, 0.0]];
        let colors: [[f32; 4]; 1] = [[1.0, 1.0, 1.0, 1.0]];

        let result = Mesh::from_indexed(&positions, &[0, 3], &colors);
        assert!(matches!(
            result,
            Err(ExportError::IndexOutOfRange {
                attribute: "positions",
                index: 3,
                len: 1
            })
        ));
    }

    #[test]
    fn test_from_indexed_missing_color() {
        let positions: [[f32; 3]; 2] = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
        let colors: [[f32; 4]; 1] = [[1.0, 1.0, 1.0, 1.0]];

        let result = Mesh::from_indexed(&positions, &[1], &colors);
        assert!(matches!(
            result,
            Err(ExportError::IndexOutOfRange {
                attribute: "colors",
                ..
            })
        ));
    }

    #[test]
    fn test_bounding_coords() {
        let vertices = [
            Vertex {
                position: [-1.0, 2.0, 0.5],
                color: [0.0; 3],
            },
            Vertex {
                position: [3.0, -4.0, 0.0],
                color: [0.0; 3],
            },
        ];

        let (min, max) = bounding_coords(&vertices);
        assert_eq!(min, [-1.0, -4.0, 0.0]);
        assert_eq!(max, [3.0, 2.0, 0.5]);
    }

    #[test]
    fn test_vertex_layout() {
        let mesh = Mesh::new(vec![Vertex {
            position: [1.0, 2.0, 3.0],
            color: [0.25, 0.5, 0.75],
        }]);

        let bytes = mesh.to_padded_bytes();
        assert_eq!(bytes.len(), Vertex::SIZE);
        assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[20..24], &0.75f32.to_le_bytes());
    }

    #[test]
    fn test_align_to_four() {
        assert_eq!(align_to_four(0), 0);
        assert_eq!(align_to_four(1), 4);
        assert_eq!(align_to_four(4), 4);
        assert_eq!(align_to_four(13), 16);
    }
}
