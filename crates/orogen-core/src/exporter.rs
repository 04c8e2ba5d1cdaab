//! Model export coordination

use orogen_download::{trigger, DirectoryHost, DownloadHost, DownloadRequest};
use orogen_export::{export, Mesh};

#[cfg(not(target_arch = "wasm32"))]
use orogen_download::DialogHost;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Exports meshes and offers the resulting files through a download host.
#[derive(Debug, Clone)]
pub struct ModelExporter {
    config: Config,
}

impl ModelExporter {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Host saving into the configured download directory.
    pub fn directory_host(&self) -> DirectoryHost {
        DirectoryHost::new(self.config.download_dir.clone())
    }

    /// Host asking the user where to save, starting in the configured
    /// download directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn dialog_host(&self) -> DialogHost {
        DialogHost::new().in_directory(self.config.download_dir.clone())
    }

    /// Export `mesh` and trigger one download per produced file, returning
    /// the offered file names in order.
    pub fn save<H>(&self, host: &H, mesh: &Mesh) -> Result<Vec<String>>
    where
        H: DownloadHost,
        CoreError: From<H::Error>,
    {
        let files = export(mesh, self.config.output, self.config.model_name.trim())?;

        for file in &files {
            trigger(
                host,
                &DownloadRequest::new(&file.bytes, &file.file_name, file.mime_type),
            )?;
        }

        tracing::info!(
            files = files.len(),
            output = ?self.config.output,
            "Offered model download"
        );

        Ok(files.into_iter().map(|f| f.file_name).collect())
    }

    /// Same as [`save`](Self::save) for an indexed mesh with RGBA colors.
    pub fn save_indexed<H>(
        &self,
        host: &H,
        positions: &[[f32; 3]],
        indices: &[u32],
        colors: &[[f32; 4]],
    ) -> Result<Vec<String>>
    where
        H: DownloadHost,
        CoreError: From<H::Error>,
    {
        let mesh = Mesh::from_indexed(positions, indices, colors)?;
        self.save(host, &mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orogen_download::{FailurePoint, MemoryHost};
    use orogen_export::Output;
    use std::path::PathBuf;

    const POSITIONS: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    const COLORS: [[f32; 4]; 3] = [[1.0, 0.0, 0.0, 1.0]; 3];

    fn exporter(output: Output, dir: PathBuf) -> ModelExporter {
        let mut config = Config::new(dir);
        config.output = output;
        ModelExporter::new(config).unwrap()
    }

    #[test]
    fn test_save_binary() {
        let host = MemoryHost::new();
        let exporter = exporter(Output::Binary, PathBuf::from("/unused"));

        let names = exporter
            .save_indexed(&host, &POSITIONS, &[0, 1, 2], &COLORS)
            .unwrap();

        assert_eq!(names, vec!["model.glb"]);
        let activations = host.activations();
        assert_eq!(activations.len(), 1);
        assert_eq!(activations[0].mime_type, "model/gltf-binary");
        assert_eq!(&activations[0].data[0..4], b"glTF");
        assert_eq!(host.live_object_urls(), 0);
    }

    #[test]
    fn test_save_standard() {
        let host = MemoryHost::new();
        let exporter = exporter(Output::Standard, PathBuf::from("/unused"));

        let names = exporter
            .save_indexed(&host, &POSITIONS, &[0, 1, 2], &COLORS)
            .unwrap();

        assert_eq!(names, vec!["model.gltf", "model.bin"]);
        let mime_types: Vec<String> = host
            .activations()
            .into_iter()
            .map(|a| a.mime_type)
            .collect();
        assert_eq!(mime_types, vec!["model/gltf+json", "application/octet-stream"]);
    }

    #[test]
    fn test_save_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = exporter(Output::Binary, dir.path().to_path_buf());
        let host = exporter.directory_host();

        exporter
            .save_indexed(&host, &POSITIONS, &[0, 1, 2], &COLORS)
            .unwrap();
        exporter
            .save_indexed(&host, &POSITIONS, &[2, 1, 0], &COLORS)
            .unwrap();

        assert!(dir.path().join("model.glb").exists());
        assert!(dir.path().join("model (1).glb").exists());
    }

    #[test]
    fn test_host_failure_surfaces() {
        let host = MemoryHost::failing_at(FailurePoint::Activate);
        let exporter = exporter(Output::Binary, PathBuf::from("/unused"));

        let result = exporter.save_indexed(&host, &POSITIONS, &[0, 1, 2], &COLORS);
        assert!(matches!(result, Err(CoreError::Download(_))));
        assert_eq!(host.live_object_urls(), 0);
    }

    #[test]
    fn test_bad_index_surfaces() {
        let host = MemoryHost::new();
        let exporter = exporter(Output::Binary, PathBuf::from("/unused"));

        let result = exporter.save_indexed(&host, &POSITIONS, &[0, 1, 7], &COLORS);
        assert!(matches!(result, Err(CoreError::Export(_))));
        assert!(host.activations().is_empty());
    }
}
