use crate::model::Roster;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Roster enregistré : chaque génération reçoit un identifiant neuf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRoster {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub roster: Roster,
}

impl SavedRoster {
    pub fn new(roster: Roster) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            roster,
        }
    }
}

pub trait Storage {
    /// Charge le dernier roster enregistré.
    fn load(&self) -> anyhow::Result<SavedRoster>;
    /// Sauvegarde de manière atomique.
    fn save(&self, saved: &SavedRoster) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<SavedRoster> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let saved: SavedRoster = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(saved)
    }

    fn save(&self, saved: &SavedRoster) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(saved)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        tracing::debug!(path = %self.path.display(), id = %saved.id, "roster saved");
        Ok(())
    }
}
