use crate::writer::error::WriteError;
use log::info;
use std::io;
use std::path::Path;

/// Creates `path` and its parents unless it already exists as a directory.
pub async fn ensure_dir_exists(path: &Path) -> Result<(), WriteError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(WriteError::NotADirectory(path.to_path_buf()));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating output directory: {}", path.display());
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|e| WriteError::DirCreation(path.to_path_buf(), e))
        }
        Err(e) => Err(WriteError::DirCreation(path.to_path_buf(), e)),
    }
}
