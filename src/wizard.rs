use crate::config::Config;
use crate::error::{Result, VidsweepError};
use crate::media::player::PlayerChoice;
use crate::prompt::Prompter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolves the player and root folder before a session starts, asking the
/// user whenever the saved config does not settle the question.
pub struct SetupWizard<'a, P: Prompter + ?Sized> {
    config: &'a mut Config,
    config_path: &'a Path,
    prompter: &'a mut P,
}

impl<'a, P: Prompter + ?Sized> SetupWizard<'a, P> {
    pub fn new(config: &'a mut Config, config_path: &'a Path, prompter: &'a mut P) -> Self {
        Self {
            config,
            config_path,
            prompter,
        }
    }

    fn save(&self) {
        if let Err(e) = self.config.save(self.config_path) {
            warn!("Failed to save config: {}", e);
        }
    }

    /// Remember an explicit player choice. A custom player must exist.
    pub fn set_player(&mut self, choice: &PlayerChoice) -> Result<()> {
        match choice {
            PlayerChoice::SystemDefault => {
                self.config.use_default_player = Some(true);
            }
            PlayerChoice::Custom(path) => {
                if !path.exists() {
                    return Err(VidsweepError::PlayerMissing(path.clone()));
                }
                self.config.use_default_player = Some(false);
                self.config.player_path = Some(path.clone());
            }
        }
        self.save();
        Ok(())
    }

    /// Remember an explicit root folder given on the command line.
    pub fn set_root_folder(&mut self, root: &Path) -> Result<PathBuf> {
        if !root.is_dir() {
            return Err(VidsweepError::RootFolderMissing(root.to_path_buf()));
        }
        self.config.root_folder = Some(root.to_path_buf());
        self.save();
        Ok(root.to_path_buf())
    }

    pub fn resolve_player(&mut self) -> Result<PlayerChoice> {
        if self.config.use_default_player == Some(true) {
            return Ok(PlayerChoice::SystemDefault);
        }

        if let Some(path) = self.config.player_path.as_ref().filter(|p| p.exists()) {
            return Ok(PlayerChoice::Custom(path.clone()));
        }

        let use_default = self.prompter.confirm(
            "Use Default Player?",
            "Would you like to use your system's default video player?",
        )?;
        if use_default {
            self.set_player(&PlayerChoice::SystemDefault)?;
            return Ok(PlayerChoice::SystemDefault);
        }

        let player = self
            .prompter
            .open_file("Select Custom Video Player Executable")?
            .ok_or(VidsweepError::NoPlayerSelected)?;

        let choice = PlayerChoice::Custom(player);
        self.set_player(&choice)?;
        info!("Using player: {}", choice);
        Ok(choice)
    }

    pub fn resolve_root_folder(&mut self) -> Result<PathBuf> {
        if let Some(existing) = self.config.root_folder.clone().filter(|p| p.exists()) {
            let reuse = self.prompter.confirm(
                "Use Previous Folder",
                &format!("Use previously selected root folder?\n\n{}", existing.display()),
            )?;
            if reuse {
                return Ok(existing);
            }
        }

        let selected = self
            .prompter
            .select_directory("Select Root Folder Containing Videos")?
            .ok_or(VidsweepError::NoRootFolderSelected)?;

        self.config.root_folder = Some(selected.clone());
        self.save();
        Ok(selected)
    }
}
