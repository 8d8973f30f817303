//! # Audio Cues
//!
//! Fire-and-forget playback of the three game sounds. Every failure here is
//! logged and swallowed: a missing file, an undecodable file or a machine
//! without an output device only means silence, never a changed game.
//!
//! ```text
//! Effect::PlayCue(cue) ──► dyn SoundPlayer ──┬── RodioPlayer (speakers)
//!                                            └── Silent      (--mute, no device)
//! ```

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use log::{debug, info, warn};
use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::core::action::Cue;
use crate::core::config::SoundPaths;

/// Anything that can turn a cue into sound.
pub trait SoundPlayer {
    fn play(&self, cue: Cue);
}

/// Plays nothing. Used when muted or when no output device exists.
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&self, cue: Cue) {
        debug!("Muted cue {:?}", cue);
    }
}

#[derive(Debug)]
pub enum AudioError {
    Stream(rodio::StreamError),
    Io(std::io::Error),
    Decode(rodio::decoder::DecoderError),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Stream(e) => write!(f, "audio output unavailable: {e}"),
            AudioError::Io(e) => write!(f, "sound file unreadable: {e}"),
            AudioError::Decode(e) => write!(f, "sound file undecodable: {e}"),
        }
    }
}

impl std::error::Error for AudioError {}

/// A decoded sound kept in memory so each play is a cheap clone.
pub type Clip = Buffered<Decoder<Cursor<Vec<u8>>>>;

pub fn load_clip(path: &Path) -> Result<Clip, AudioError> {
    let bytes = fs::read(path).map_err(AudioError::Io)?;
    let decoder = Decoder::new(Cursor::new(bytes)).map_err(AudioError::Decode)?;
    Ok(decoder.buffered())
}

/// The loaded clips. Each one is independently optional.
#[derive(Default)]
pub struct CueBank {
    move_cue: Option<Clip>,
    win_cue: Option<Clip>,
    lose_cue: Option<Clip>,
}

impl CueBank {
    pub fn load(paths: &SoundPaths) -> Self {
        Self {
            move_cue: load_optional(Cue::Move, &paths.move_cue),
            win_cue: load_optional(Cue::Win, &paths.win_cue),
            lose_cue: load_optional(Cue::Lose, &paths.lose_cue),
        }
    }

    pub fn get(&self, cue: Cue) -> Option<&Clip> {
        match cue {
            Cue::Move => self.move_cue.as_ref(),
            Cue::Win => self.win_cue.as_ref(),
            Cue::Lose => self.lose_cue.as_ref(),
        }
    }

    pub fn loaded(&self) -> usize {
        [Cue::Move, Cue::Win, Cue::Lose]
            .into_iter()
            .filter(|cue| self.get(*cue).is_some())
            .count()
    }
}

fn load_optional(cue: Cue, path: &Path) -> Option<Clip> {
    match load_clip(path) {
        Ok(clip) => {
            debug!("Loaded {:?} cue from {}", cue, path.display());
            Some(clip)
        }
        Err(e) => {
            info!("No {:?} cue ({}): {}", cue, path.display(), e);
            None
        }
    }
}

pub struct RodioPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bank: CueBank,
}

impl RodioPlayer {
    pub fn open(bank: CueBank) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default().map_err(AudioError::Stream)?;
        Ok(Self {
            _stream: stream,
            handle,
            bank,
        })
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&self, cue: Cue) {
        let Some(clip) = self.bank.get(cue) else {
            return;
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(clip.clone());
                sink.detach();
            }
            Err(e) => debug!("Dropped {:?} cue: {}", cue, e),
        }
    }
}

/// Builds the player for this session, falling back to silence.
pub fn build_player(muted: bool, paths: &SoundPaths) -> Box<dyn SoundPlayer> {
    if muted {
        info!("Audio muted");
        return Box::new(Silent);
    }
    let bank = CueBank::load(paths);
    if bank.loaded() == 0 {
        info!("No sound files found, playing silently");
        return Box::new(Silent);
    }
    match RodioPlayer::open(bank) {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!("{}", e);
            Box::new(Silent)
        }
    }
}
