use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::VacancyRecord;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Persistence target for one fetch-save cycle.
///
/// `save` replaces whatever the destination held before; there is no append
/// or merge.
#[async_trait]
pub trait VacancyRepository: Send + Sync {
    /// Writes `records` to `destination`, or to the repository default when
    /// `None`. Returns the path that was written.
    async fn save(
        &self,
        records: &[VacancyRecord],
        destination: Option<&Path>,
    ) -> Result<PathBuf, StorageError>;

    async fn load(&self, destination: Option<&Path>) -> Result<Vec<VacancyRecord>, StorageError>;
}
