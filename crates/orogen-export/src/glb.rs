//! GLB container

use gltf::binary::{Glb, Header};
use std::borrow::Cow;

use crate::error::ExportError;
use crate::mesh::align_to_four;
use crate::Result;

const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// Wrap a glTF JSON document and its binary buffer into a GLB file.
///
/// An empty `bin` omits the binary chunk. The header length counts every
/// byte of the file, padding included.
pub fn encode_glb(json: &[u8], bin: &[u8]) -> Result<Vec<u8>> {
    let mut length = HEADER_LEN + CHUNK_HEADER_LEN + align_to_four(json.len());
    if !bin.is_empty() {
        length += CHUNK_HEADER_LEN + align_to_four(bin.len());
    }
    let length = u32::try_from(length).map_err(|_| ExportError::BufferTooLarge(length))?;

    let glb = Glb {
        header: Header {
            magic: *b"glTF",
            version: 2,
            length,
        },
        json: Cow::Borrowed(json),
        bin: if bin.is_empty() {
            None
        } else {
            Some(Cow::Borrowed(bin))
        },
    };

    Ok(glb.to_vec()?)
}
