use crate::error::{Result, VidsweepError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use subprocess::Exec;
use tracing::{error, info};

/// How videos get opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerChoice {
    SystemDefault,
    Custom(PathBuf),
}

impl std::fmt::Display for PlayerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerChoice::SystemDefault => write!(f, "system default player"),
            PlayerChoice::Custom(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl PlayerCommand {
    fn new(program: impl Into<OsString>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Build the command that opens `video` with `choice` on `platform`.
pub fn player_command(choice: &PlayerChoice, video: &Path, platform: Platform) -> Result<PlayerCommand> {
    let video = video.as_os_str().to_os_string();
    let command = match choice {
        PlayerChoice::Custom(player) => {
            let name = player.to_string_lossy();
            match platform {
                Platform::MacOs if name.ends_with(".app") => PlayerCommand::new(
                    "open",
                    vec!["-a".into(), player.as_os_str().to_os_string(), video],
                ),
                Platform::Linux if name.ends_with(".sh") => PlayerCommand::new(
                    "bash",
                    vec![player.as_os_str().to_os_string(), video],
                ),
                _ => PlayerCommand::new(player.as_os_str(), vec![video]),
            }
        }
        PlayerChoice::SystemDefault => match platform {
            Platform::MacOs => PlayerCommand::new("open", vec![video]),
            Platform::Linux => PlayerCommand::new("xdg-open", vec![video]),
            Platform::Windows => PlayerCommand::new(
                "cmd",
                vec!["/c".into(), "start".into(), "".into(), video],
            ),
            Platform::Other => return Err(VidsweepError::UnsupportedPlatform),
        },
    };
    Ok(command)
}

/// Opens a video and blocks until the launched process returns.
pub trait Launcher {
    fn launch(&mut self, choice: &PlayerChoice, video: &Path) -> Result<()>;
}

pub struct ProcessLauncher {
    platform: Platform,
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher {
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
        }
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&mut self, choice: &PlayerChoice, video: &Path) -> Result<()> {
        let command = player_command(choice, video, self.platform)?;
        info!(
            "Command: {} {}",
            command.program.to_string_lossy(),
            command
                .args
                .iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = Exec::cmd(&command.program)
            .args(command.args.as_slice())
            .join()?;
        if status.success() {
            Ok(())
        } else {
            error!("Player exited with status: {:?}", status);
            Err(VidsweepError::Playback(format!(
                "{} exited with {:?}",
                command.program.to_string_lossy(),
                status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(command: &PlayerCommand) -> Vec<String> {
        command
            .args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_default_player_per_platform() {
        let video = Path::new("/videos/a.mp4");

        let mac = player_command(&PlayerChoice::SystemDefault, video, Platform::MacOs).unwrap();
        assert_eq!(mac.program, "open");
        assert_eq!(args(&mac), vec!["/videos/a.mp4"]);

        let linux = player_command(&PlayerChoice::SystemDefault, video, Platform::Linux).unwrap();
        assert_eq!(linux.program, "xdg-open");
        assert_eq!(args(&linux), vec!["/videos/a.mp4"]);

        let windows = player_command(&PlayerChoice::SystemDefault, video, Platform::Windows).unwrap();
        assert_eq!(windows.program, "cmd");
        assert_eq!(args(&windows), vec!["/c", "start", "", "/videos/a.mp4"]);
    }

    #[test]
    fn test_default_player_unsupported_platform() {
        let result = player_command(&PlayerChoice::SystemDefault, Path::new("a.mp4"), Platform::Other);
        assert!(matches!(result, Err(VidsweepError::UnsupportedPlatform)));
    }

    #[test]
    fn test_custom_app_bundle_on_macos() {
        let choice = PlayerChoice::Custom(PathBuf::from("/Applications/VLC.app"));
        let command = player_command(&choice, Path::new("/v/a.mkv"), Platform::MacOs).unwrap();
        assert_eq!(command.program, "open");
        assert_eq!(args(&command), vec!["-a", "/Applications/VLC.app", "/v/a.mkv"]);

        // Only macOS treats .app specially.
        let command = player_command(&choice, Path::new("/v/a.mkv"), Platform::Linux).unwrap();
        assert_eq!(command.program, "/Applications/VLC.app");
        assert_eq!(args(&command), vec!["/v/a.mkv"]);
    }

    #[test]
    fn test_custom_shell_script_on_linux() {
        let choice = PlayerChoice::Custom(PathBuf::from("/home/me/play.sh"));
        let command = player_command(&choice, Path::new("/v/a.mkv"), Platform::Linux).unwrap();
        assert_eq!(command.program, "bash");
        assert_eq!(args(&command), vec!["/home/me/play.sh", "/v/a.mkv"]);

        let command = player_command(&choice, Path::new("/v/a.mkv"), Platform::MacOs).unwrap();
        assert_eq!(command.program, "/home/me/play.sh");
    }

    #[test]
    fn test_custom_executable() {
        let choice = PlayerChoice::Custom(PathBuf::from("/usr/bin/mpv"));
        for platform in [Platform::MacOs, Platform::Linux, Platform::Windows, Platform::Other] {
            let command = player_command(&choice, Path::new("/v/a.avi"), platform).unwrap();
            assert_eq!(command.program, "/usr/bin/mpv");
            assert_eq!(args(&command), vec!["/v/a.avi"]);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_reports_failing_player() {
        let mut launcher = ProcessLauncher::new();
        let choice = PlayerChoice::Custom(PathBuf::from("false"));
        assert!(launcher.launch(&choice, Path::new("a.mp4")).is_err());

        let choice = PlayerChoice::Custom(PathBuf::from("true"));
        assert!(launcher.launch(&choice, Path::new("a.mp4")).is_ok());
    }

    #[test]
    fn test_launch_missing_player() {
        let mut launcher = ProcessLauncher::new();
        let choice = PlayerChoice::Custom(PathBuf::from("/definitely/not/a/player"));
        assert!(launcher.launch(&choice, Path::new("a.mp4")).is_err());
    }
}
