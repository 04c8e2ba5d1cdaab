//! Flat array conversion

use orogen_core::{CoreError, Mesh};

use crate::error::ShellError;

/// Build a mesh from the flat buffers a page typically holds.
pub fn mesh_from_flat(
    positions: &[f32],
    indices: &[u32],
    colors: &[f32],
) -> Result<Mesh, ShellError> {
    let positions: Vec<[f32; 3]> = chunked(positions, "positions")?;
    let colors: Vec<[f32; 4]> = chunked(colors, "colors")?;

    Mesh::from_indexed(&positions, indices, &colors)
        .map_err(|e| ShellError::Core(CoreError::Export(e)))
}

fn chunked<const N: usize>(
    values: &[f32],
    name: &'static str,
) -> Result<Vec<[f32; N]>, ShellError> {
    if values.len() % N != 0 {
        return Err(ShellError::Stride {
            name,
            len: values.len(),
            stride: N,
        });
    }

    Ok(values
        .chunks_exact(N)
        .map(|chunk| {
            let mut item = [0.0; N];
            item.copy_from_slice(chunk);
            item
        })
        .collect())
}
