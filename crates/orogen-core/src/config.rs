//! Export configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use orogen_download::DEFAULT_REVOKE_DELAY_MS;
use orogen_export::Output;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory native builds save into
    pub download_dir: PathBuf,
    /// File stem for exported models
    pub model_name: String,
    /// glTF flavour to export
    pub output: Output,
    /// How long browsers keep an object URL alive after the click
    pub revoke_delay_ms: u32,
}

impl Config {
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            download_dir,
            model_name: "model".to_string(),
            output: Output::Binary,
            revoke_delay_ms: DEFAULT_REVOKE_DELAY_MS,
        }
    }

    /// Parse a JSON configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let name = self.model_name.trim();
        if name.is_empty() {
            return Err(CoreError::Config("model_name must not be empty".to_string()));
        }
        if name.contains(['/', '\\']) {
            return Err(CoreError::Config(format!(
                "model_name must be a bare file stem: {}",
                name
            )));
        }
        Ok(())
    }

    pub fn default_download_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("exports"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::default_download_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn download_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|h| PathBuf::from(h).join("Downloads"))
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Downloads"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DOWNLOAD_DIR")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join("Downloads"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
