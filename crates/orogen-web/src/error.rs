//! Shell error types

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{name} has {len} values, not a multiple of {stride}")]
    Stride {
        name: &'static str,
        len: usize,
        stride: usize,
    },

    #[error(transparent)]
    Core(#[from] orogen_core::CoreError),
}

impl From<ShellError> for JsValue {
    fn from(error: ShellError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
