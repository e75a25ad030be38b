use std::path::Path;

use crate::assets::{EXPLOSION_SOUND, SHOT_SOUND};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Shot,
    Explosion,
}

/// Sound effects. Every failure here is logged and swallowed: a game
/// without sound still plays.
pub struct Sounds {
    backend: Option<backend::Output>,
    shot: Option<backend::Clip>,
    explosion: Option<backend::Clip>,
}

impl Sounds {
    pub fn silent() -> Self {
        Self { backend: None, shot: None, explosion: None }
    }

    pub fn load(dir: &Path) -> Self {
        let backend = match backend::Output::open() {
            Ok(output) => output,
            Err(e) => {
                log::warn!("Audio disabled: {}", e);
                return Self::silent();
            }
        };
        let shot = Self::load_clip(dir, SHOT_SOUND);
        let explosion = Self::load_clip(dir, EXPLOSION_SOUND);
        Self { backend: Some(backend), shot, explosion }
    }

    fn load_clip(dir: &Path, name: &str) -> Option<backend::Clip> {
        let path = dir.join(name);
        match backend::Clip::load(&path) {
            Ok(clip) => Some(clip),
            Err(e) => {
                log::warn!("Could not load sound {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn play(&self, cue: Cue) {
        let clip = match cue {
            Cue::Shot => &self.shot,
            Cue::Explosion => &self.explosion,
        };
        if let (Some(output), Some(clip)) = (&self.backend, clip) {
            if let Err(e) = output.play(clip) {
                log::warn!("Failed to play {:?}: {}", cue, e);
            }
        }
    }

    #[cfg(test)]
    pub fn is_silent(&self) -> bool {
        self.backend.is_none() || (self.shot.is_none() && self.explosion.is_none())
    }
}

#[cfg(feature = "audio")]
mod backend {
    use std::io::Cursor;
    use std::path::Path;

    use rodio::mixer::Mixer;
    use rodio::{Decoder, OutputStream, Sink};

    pub struct Output {
        _stream: OutputStream,
        mixer: Mixer,
    }

    impl Output {
        pub fn open() -> Result<Self, String> {
            let stream = rodio::OutputStreamBuilder::open_default_stream()
                .map_err(|e| format!("failed to open audio stream: {}", e))?;
            let mixer = stream.mixer().clone();
            Ok(Self { _stream: stream, mixer })
        }

        pub fn play(&self, clip: &Clip) -> Result<(), String> {
            let source = Decoder::new(Cursor::new(clip.bytes.clone()))
                .map_err(|e| format!("failed to decode: {}", e))?;
            let sink = Sink::connect_new(&self.mixer);
            sink.append(source);
            sink.detach();
            Ok(())
        }
    }

    /// Encoded file contents, decoded again on every play.
    pub struct Clip {
        bytes: Vec<u8>,
    }

    impl Clip {
        pub fn load(path: &Path) -> Result<Self, String> {
            let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
            // Decode once up front so a broken file is caught at startup.
            Decoder::new(Cursor::new(bytes.clone())).map_err(|e| e.to_string())?;
            Ok(Self { bytes })
        }
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    use std::path::Path;

    pub struct Output;

    impl Output {
        pub fn open() -> Result<Self, String> {
            Ok(Output)
        }

        pub fn play(&self, _clip: &Clip) -> Result<(), String> {
            Ok(())
        }
    }

    pub struct Clip;

    impl Clip {
        pub fn load(path: &Path) -> Result<Self, String> {
            if path.exists() {
                log::debug!("Built without the audio feature, {} will not play", path.display());
                Ok(Clip)
            } else {
                Err("file does not exist".to_string())
            }
        }
    }
}
