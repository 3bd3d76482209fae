//! Playing a single clip.

use std::future::Future;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::AudioError;

pub const DEFAULT_PLAYER: &str = "mpg123";
pub const DEFAULT_PLAYER_ARGS: &[&str] = &["-q"];

/// Plays one clip and completes when the clip has finished. Dropping the
/// returned future must stop playback.
pub trait ClipPlayer: Send + Sync {
    fn play(&self, clip: &Path) -> impl Future<Output = Result<(), AudioError>> + Send;
}

/// Runs an external command-line player, one process per clip.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandPlayer {
    fn default() -> Self {
        Self::new(
            DEFAULT_PLAYER,
            DEFAULT_PLAYER_ARGS.iter().map(|a| a.to_string()).collect(),
        )
    }
}

impl ClipPlayer for CommandPlayer {
    fn play(&self, clip: &Path) -> impl Future<Output = Result<(), AudioError>> + Send {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(clip)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        let program = self.program.clone();
        let clip = clip.to_path_buf();

        async move {
            tracing::trace!("{} {}", program, clip.display());
            let status = command.status().await.map_err(|source| AudioError::Spawn {
                program: program.clone(),
                source,
            })?;
            if status.success() {
                Ok(())
            } else {
                Err(AudioError::PlayerFailed {
                    program,
                    clip,
                    code: status.code(),
                })
            }
        }
    }
}
