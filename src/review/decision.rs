use crate::library::seen::{SeenSet, SeenStore};
use crate::library::selector::Candidate;
use tracing::{error, info, warn};

/// What the user chose for a video that just played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    MarkSeen,
    Delete,
    Skip,
    /// The prompt was dismissed without a choice. Behaves like `Skip`.
    NoAction,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::MarkSeen => write!(f, "Mark as Seen"),
            Decision::Delete => write!(f, "Delete"),
            Decision::Skip => write!(f, "Skip"),
            Decision::NoAction => write!(f, "No action"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    MarkedSeen,
    AlreadySeen,
    Deleted,
    DeleteFailed,
    /// The file disappeared before it could be marked seen.
    Vanished,
    Skipped,
    NoAction,
}

/// Apply `decision` to `candidate`. Nothing here is fatal: persistence and
/// deletion failures are logged and reported through the outcome.
pub fn apply(decision: Decision, candidate: &Candidate, seen: &mut SeenSet, store: &SeenStore) -> Outcome {
    match decision {
        Decision::MarkSeen => {
            if seen.contains(&candidate.id) {
                info!("Video already marked as seen: {}", candidate.id);
                return Outcome::AlreadySeen;
            }
            if !candidate.entry.path.is_file() {
                warn!("Video no longer exists, not marking seen: {:?}", candidate.entry.path);
                return Outcome::Vanished;
            }
            seen.insert(candidate.id.clone());
            if let Err(e) = store.persist(seen) {
                error!("Failed to save seen videos: {}", e);
            }
            Outcome::MarkedSeen
        }
        Decision::Delete => match std::fs::remove_file(&candidate.entry.path) {
            Ok(()) => {
                info!("Deleted: {:?}", candidate.entry.path);
                Outcome::Deleted
            }
            Err(e) => {
                error!("Failed to delete video {:?}: {}", candidate.entry.path, e);
                Outcome::DeleteFailed
            }
        },
        Decision::Skip => {
            info!("Skipped.");
            Outcome::Skipped
        }
        Decision::NoAction => {
            warn!("No valid action selected, skipping.");
            Outcome::NoAction
        }
    }
}
