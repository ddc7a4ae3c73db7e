use crate::error::ErrorKind;
use crate::model::Roster;
use crate::schedule::ScheduleStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Document persisté : employés et planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionState {
    #[serde(default)]
    pub employees: Roster,
    #[serde(default)]
    pub schedule: ScheduleStore,
}

impl SessionState {
    pub fn to_json(&self) -> Result<Vec<u8>, StorageError> {
        serde_json::to_vec_pretty(self).map_err(StorageError::Encode)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, StorageError> {
        serde_json::from_slice(data).map_err(|source| StorageError::Malformed {
            origin: "<memory>".to_string(),
            source,
        })
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("state file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("malformed state data in {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("encoding state: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("i/o on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// `None` pour les erreurs d'écriture, hors du contrat de chargement.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            StorageError::NotFound(_) => Some(ErrorKind::NotFound),
            StorageError::Malformed { .. } => Some(ErrorKind::Malformed),
            StorageError::Encode(_) | StorageError::Io { .. } => None,
        }
    }
}

pub trait Storage {
    /// Charge l'état depuis un support.
    fn load(&self) -> Result<SessionState, StorageError>;
    /// Sauvegarde de manière atomique.
    fn save(&self, state: &SessionState) -> Result<(), StorageError>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn io_err(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<SessionState, StorageError> {
        let data = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(self.path.clone()),
            _ => self.io_err(e),
        })?;
        serde_json::from_slice(&data).map_err(|source| StorageError::Malformed {
            origin: self.path.display().to_string(),
            source,
        })
    }

    fn save(&self, state: &SessionState) -> Result<(), StorageError> {
        let json = state.to_json()?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_err(e))?;
        tmp.write_all(&json).map_err(|e| self.io_err(e))?;
        tmp.flush().map_err(|e| self.io_err(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_err(e.error))?;
        Ok(())
    }
}
