use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidsweepError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seen list error: {0}")]
    SeenList(String),

    #[error("No video player selected")]
    NoPlayerSelected,

    #[error("Video player does not exist: {0}")]
    PlayerMissing(PathBuf),

    #[error("No root folder selected")]
    NoRootFolderSelected,

    #[error("Root folder does not exist: {0}")]
    RootFolderMissing(PathBuf),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Playback failed: {0}")]
    Playback(String),

    #[error("Unsupported OS for the default video player")]
    UnsupportedPlatform,

    #[error("Process error: {0}")]
    Process(#[from] subprocess::PopenError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VidsweepError {
    /// Errors raised while resolving the player or root folder. The review
    /// loop is never entered after one of these.
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            VidsweepError::NoPlayerSelected
                | VidsweepError::PlayerMissing(_)
                | VidsweepError::NoRootFolderSelected
                | VidsweepError::RootFolderMissing(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, VidsweepError>;
