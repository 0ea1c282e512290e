pub mod config;
pub mod error;
pub mod library;
pub mod media;
pub mod prompt;
pub mod review;
pub mod wizard;

pub use config::{Config, StatePaths};
pub use error::{Result, VidsweepError};
pub use library::seen::{SeenSet, SeenStore, VideoId};
pub use library::selector::{Candidate, Picker, RandomPicker};
pub use media::player::{Launcher, PlayerChoice, ProcessLauncher};
pub use media::scanner::{CatalogEntry, Scanner};
pub use prompt::{Prompter, TerminalPrompter};
pub use review::decision::Decision;
pub use review::session::{ReviewSession, SessionReport};
pub use wizard::SetupWizard;
