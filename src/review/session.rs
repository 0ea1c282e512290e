//! The review loop.
//!
//! Each pass rescans the library, drops what has been seen, picks one
//! candidate at random, plays it, asks what to do with it and applies the
//! answer. The loop ends when nothing unseen is left.

use crate::error::Result;
use crate::library::seen::{SeenSet, SeenStore};
use crate::library::selector::{self, Candidate, Picker};
use crate::media::player::{Launcher, PlayerChoice};
use crate::media::scanner::Scanner;
use crate::prompt::Prompter;
use crate::review::decision::{self, Decision, Outcome};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Selecting,
    Playing(Candidate),
    AwaitingDecision(Candidate),
    Applying(Candidate, Decision),
    Done,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub played: usize,
    pub launch_failures: usize,
    pub marked_seen: usize,
    pub already_seen: usize,
    pub deleted: usize,
    pub delete_failures: usize,
    pub vanished: usize,
    pub skipped: usize,
    pub dismissed: usize,
    pub seen: SeenSet,
}

impl SessionReport {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::MarkedSeen => self.marked_seen += 1,
            Outcome::AlreadySeen => self.already_seen += 1,
            Outcome::Deleted => self.deleted += 1,
            Outcome::DeleteFailed => self.delete_failures += 1,
            Outcome::Vanished => self.vanished += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::NoAction => self.dismissed += 1,
        }
    }
}

pub struct ReviewSession<'a, P, L, K>
where
    P: Prompter + ?Sized,
    L: Launcher + ?Sized,
    K: Picker + ?Sized,
{
    root: PathBuf,
    player: PlayerChoice,
    scanner: Scanner,
    store: &'a SeenStore,
    seen: SeenSet,
    prompter: &'a mut P,
    launcher: &'a mut L,
    picker: &'a mut K,
    report: SessionReport,
}

impl<'a, P, L, K> ReviewSession<'a, P, L, K>
where
    P: Prompter + ?Sized,
    L: Launcher + ?Sized,
    K: Picker + ?Sized,
{
    pub fn new(
        root: PathBuf,
        player: PlayerChoice,
        store: &'a SeenStore,
        seen: SeenSet,
        prompter: &'a mut P,
        launcher: &'a mut L,
        picker: &'a mut K,
    ) -> Self {
        Self {
            root,
            player,
            scanner: Scanner::new(),
            store,
            seen,
            prompter,
            launcher,
            picker,
            report: SessionReport::default(),
        }
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self, state: SessionState) -> Result<SessionState> {
        let next = match state {
            SessionState::Selecting => {
                let catalog = self.scanner.scan(&self.root);
                let candidates = selector::unseen(catalog, &self.seen);
                info!("{} unseen videos remaining", candidates.len());
                match selector::pick(&mut *self.picker, &candidates) {
                    Some(candidate) => SessionState::Playing(candidate.clone()),
                    None => {
                        self.prompter.notify_completion();
                        SessionState::Done
                    }
                }
            }
            SessionState::Playing(candidate) => {
                info!("▶️ Playing: {:?}", candidate.entry.path);
                match self.launcher.launch(&self.player, &candidate.entry.path) {
                    Ok(()) => {
                        self.report.played += 1;
                        SessionState::AwaitingDecision(candidate)
                    }
                    Err(e) => {
                        error!("Failed to launch video {:?}: {}", candidate.entry.path, e);
                        self.report.launch_failures += 1;
                        SessionState::Selecting
                    }
                }
            }
            SessionState::AwaitingDecision(candidate) => {
                let decision = self.prompter.decision(&candidate.entry.display_name())?;
                SessionState::Applying(candidate, decision)
            }
            SessionState::Applying(candidate, decision) => {
                let outcome = decision::apply(decision, &candidate, &mut self.seen, self.store);
                self.report.record(outcome);
                SessionState::Selecting
            }
            SessionState::Done => SessionState::Done,
        };
        Ok(next)
    }

    /// Run until no unseen videos remain. Prompt failures end the run early.
    pub fn run(mut self) -> Result<SessionReport> {
        if !self.store.exists() {
            info!("📝 Creating new seen list at {:?}", self.store.path());
            if let Err(e) = self.store.persist(&self.seen) {
                error!("Failed to create seen list: {}", e);
            }
        }

        let mut state = SessionState::Selecting;
        while state != SessionState::Done {
            state = self.step(state)?;
        }

        self.report.seen = self.seen;
        Ok(self.report)
    }
}
