use crate::types::gust_record::GustRecord;
use crate::utils::ensure_dir_exists;
use crate::writer::error::WriteError;
use crate::writer::table::records_to_dataframe;
use log::info;
use polars::prelude::*;
use std::path::{Component, Path, PathBuf};
use tokio::task;

pub const DEFAULT_FILE_NAME: &str = "noaa_wind_gusts_miami.csv";
const DATA_DIR_NAME: &str = "data";

/// Persists records as CSV under `{base_dir}/data/`.
#[derive(Debug, Clone)]
pub struct GustWriter {
    base_dir: PathBuf,
}

impl Default for GustWriter {
    fn default() -> Self {
        Self::new(".")
    }
}

impl GustWriter {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(DATA_DIR_NAME)
    }

    /// Resolves `{base_dir}/data/{filename}`. `filename` must be a single
    /// plain path component.
    pub fn output_path(&self, filename: &str) -> Result<PathBuf, WriteError> {
        let mut components = Path::new(filename).components();
        let is_plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) && !filename.contains(['/', '\\']);
        if !is_plain {
            return Err(WriteError::InvalidFileName(filename.to_string()));
        }
        Ok(self.output_dir().join(filename))
    }

    /// Writes `records` to `{base_dir}/data/{filename}`, replacing any existing
    /// file, and returns the path written.
    ///
    /// The header row lists every field name in first-seen order. With no
    /// records the file is created empty.
    ///
    /// # Errors
    ///
    /// Any directory or file failure is returned; nothing is retried.
    pub async fn save_to_csv(
        &self,
        records: &[GustRecord],
        filename: &str,
    ) -> Result<PathBuf, WriteError> {
        let path = self.output_path(filename)?;
        ensure_dir_exists(&self.output_dir()).await?;

        let df = records_to_dataframe(records).map_err(WriteError::TableBuild)?;
        Self::write_csv(df, &path).await?;

        info!("Wind gust data saved to: {}", path.display());
        Ok(path)
    }

    async fn write_csv(mut df: DataFrame, path: &Path) -> Result<(), WriteError> {
        let path_buf = path.to_path_buf();
        task::spawn_blocking(move || {
            let mut file = std::fs::File::create(&path_buf)
                .map_err(|e| WriteError::FileCreate(path_buf.clone(), e))?;
            // No fields seen, so no header either: the file stays empty.
            if df.width() == 0 {
                return Ok(());
            }
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .map_err(|e| WriteError::CsvEncode(path_buf, e))?;
            Ok::<(), WriteError>(())
        })
        .await??;
        Ok(())
    }
}
