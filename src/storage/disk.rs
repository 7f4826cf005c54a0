use super::base::{StorageError, VacancyRepository};
use crate::core::config::DEFAULT_OUTPUT_PATH;
use crate::core::VacancyRecord;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Stores vacancies as a pretty-printed JSON array in a single file.
///
/// Writes go to a sibling temp file which is then renamed over the
/// destination, so readers see either the old document or the new one.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    default_path: PathBuf,
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(default_path: P) -> Self {
        Self {
            default_path: default_path.as_ref().to_path_buf(),
        }
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    fn resolve<'a>(&'a self, destination: Option<&'a Path>) -> &'a Path {
        destination.unwrap_or(&self.default_path)
    }

    fn temp_path_for(path: &Path) -> Result<PathBuf, StorageError> {
        let name = path.file_name().and_then(OsStr::to_str).ok_or_else(|| {
            StorageError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "destination has no file name"),
            )
        })?;
        let dir = parent_dir(path);
        Ok(dir.join(format!(".{}.{}.tmp", name, Uuid::now_v7())))
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[async_trait]
impl VacancyRepository for JsonFileRepository {
    async fn save(
        &self,
        records: &[VacancyRecord],
        destination: Option<&Path>,
    ) -> Result<PathBuf, StorageError> {
        let path = self.resolve(destination);
        let json = serde_json::to_vec_pretty(records)?;

        let dir = parent_dir(path);
        fs::create_dir_all(dir)
            .await
            .map_err(|e| StorageError::io(dir, e))?;

        let tmp_path = Self::temp_path_for(path)?;
        debug!("Writing {} bytes to {}", json.len(), tmp_path.display());

        let result = async {
            let mut file = fs::File::create(&tmp_path)
                .await
                .map_err(|e| StorageError::io(&tmp_path, e))?;
            file.write_all(&json)
                .await
                .map_err(|e| StorageError::io(&tmp_path, e))?;
            file.sync_all()
                .await
                .map_err(|e| StorageError::io(&tmp_path, e))?;
            drop(file);
            fs::rename(&tmp_path, path)
                .await
                .map_err(|e| StorageError::io(path, e))
        }
        .await;

        if let Err(err) = result {
            warn!("Saving to {} failed: {}", path.display(), err);
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                debug!("Temp file {} not removed: {}", tmp_path.display(), cleanup);
            }
            return Err(err);
        }

        info!("Saved {} vacancies to {}", records.len(), path.display());
        Ok(path.to_path_buf())
    }

    async fn load(&self, destination: Option<&Path>) -> Result<Vec<VacancyRecord>, StorageError> {
        let path = self.resolve(destination);
        let raw = fs::read(path).await.map_err(|e| StorageError::io(path, e))?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
