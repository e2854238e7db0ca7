//! Sound feedback
//!
//! Fire-and-forget playback of short cues from the `sounds/` folder. A
//! missing output device or sound file is logged and otherwise ignored.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use thiserror::Error;

/// Played when the slider confirms.
pub const CONFIRM_SOUND: &str = "chimeup";
/// Played when Home's Restart is tapped.
pub const RESTART_SOUND: &str = "chimedown";

const SOUND_EXTENSION: &str = "mp3";

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("no audio output device")]
    NoDevice,
    #[error("could not open {path}: {source}")]
    Open { path: PathBuf, source: std::io::Error },
    #[error("decode error: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("audio error: {0}")]
    Play(#[from] rodio::PlayError),
}

pub struct AudioPlayer {
    // The stream has to outlive every sink created from its handle
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    sounds_dir: PathBuf,
    enabled: bool,
}

impl AudioPlayer {
    pub fn new(sounds_dir: Option<PathBuf>, enabled: bool) -> Self {
        let (stream, handle) = if enabled {
            match OutputStream::try_default() {
                Ok((stream, handle)) => (Some(stream), Some(handle)),
                Err(e) => {
                    log::warn!("sound disabled: {e}");
                    (None, None)
                }
            }
        } else {
            (None, None)
        };
        Self {
            _stream: stream,
            handle,
            sounds_dir: sounds_dir.unwrap_or_else(default_sounds_dir),
            enabled,
        }
    }

    pub fn sound_path(&self, name: &str) -> PathBuf {
        sound_path(&self.sounds_dir, name)
    }

    /// Play `name` in the background; failures are only logged.
    pub fn play(&self, name: &str) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.try_play(name) {
            log::warn!("could not play the sound file {name:?}: {e}");
        }
    }

    fn try_play(&self, name: &str) -> Result<(), AudioError> {
        let handle = self.handle.as_ref().ok_or(AudioError::NoDevice)?;
        let path = self.sound_path(name);
        let file = File::open(&path).map_err(|source| AudioError::Open { path, source })?;
        let source = Decoder::new(BufReader::new(file))?;
        let sink = Sink::try_new(handle)?;
        sink.append(source);
        sink.detach();
        Ok(())
    }
}

fn sound_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name).with_extension(SOUND_EXTENSION)
}

/// `sounds/` next to the executable, or in the working directory.
fn default_sounds_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("sounds")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("sounds"))
}
