use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub const VIDEO_EXTENSIONS: [&str; 11] = [
    "mp4", "mkv", "avi", "mov", "flv", "wmv", "mpeg", "mpg", "webm", "3gp", "m4v",
];

/// A video file found on disk during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: PathBuf,
    pub extension: String,
}

impl CatalogEntry {
    /// File name shown to the user when asking for a decision.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

pub struct Scanner {
    pub extensions: Vec<String>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            extensions: VIDEO_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn is_video(&self, path: &Path) -> Option<String> {
        let ext = path.extension().and_then(|s| s.to_str())?.to_lowercase();
        if self.extensions.contains(&ext) {
            Some(ext)
        } else {
            None
        }
    }

    /// Walk `root` recursively and collect every video file. Unreadable or
    /// vanished subtrees are skipped.
    pub fn scan(&self, root: &Path) -> Vec<CatalogEntry> {
        debug!("Scanning directory: {:?}", root);
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).into_iter() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(extension) = self.is_video(entry.path()) {
                debug!("Found video file: {:?}", entry.path());
                files.push(CatalogEntry {
                    path: entry.path().to_path_buf(),
                    extension,
                });
            }
        }
        info!("Found {} video files under {:?}", files.len(), root);
        files
    }
}
