use crate::error::{Result, VidsweepError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Canonical absolute path of a video, used as its identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Resolve `path` to its canonical form. Fails if the file does not exist.
    pub fn resolve(path: &Path) -> Result<Self> {
        let canonical = dunce::canonicalize(path)?;
        Ok(Self(canonical.to_string_lossy().into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for VideoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Videos already reviewed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenSet {
    ids: BTreeSet<VideoId>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &VideoId) -> bool {
        self.ids.contains(id)
    }

    /// Returns `false` when `id` was already present.
    pub fn insert(&mut self, id: VideoId) -> bool {
        self.ids.insert(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VideoId> {
        self.ids.iter()
    }
}

impl FromIterator<VideoId> for SeenSet {
    fn from_iter<I: IntoIterator<Item = VideoId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// JSON file holding the seen list as an array of paths.
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Missing or corrupt storage yields an empty set.
    pub fn load(&self) -> SeenSet {
        if !self.path.exists() {
            return SeenSet::new();
        }
        let parsed = std::fs::read_to_string(&self.path)
            .map_err(VidsweepError::from)
            .and_then(|content| {
                serde_json::from_str::<Vec<VideoId>>(&content)
                    .map_err(|e| VidsweepError::SeenList(e.to_string()))
            });
        match parsed {
            Ok(ids) => {
                let seen: SeenSet = ids.into_iter().collect();
                info!("Loaded {} seen videos from {:?}", seen.len(), self.path);
                seen
            }
            Err(e) => {
                warn!("Seen video file corrupted ({}). Resetting.", e);
                SeenSet::new()
            }
        }
    }

    /// Overwrite the stored list with `seen`.
    pub fn persist(&self, seen: &SeenSet) -> Result<()> {
        let ids: Vec<&VideoId> = seen.iter().collect();
        let json = serde_json::to_string_pretty(&ids)
            .map_err(|e| VidsweepError::SeenList(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)?;
        info!("Saved seen video count: {}", seen.len());
        Ok(())
    }
}
