use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SHIP_IMAGE: &str = "ship.txt";
pub const ALIEN_IMAGE: &str = "alien.txt";
pub const SHOT_SOUND: &str = "shot.wav";
pub const EXPLOSION_SOUND: &str = "explosion.wav";

#[derive(Debug)]
pub enum AssetError {
    Missing(PathBuf),
    Io(PathBuf, io::Error),
    Malformed { path: PathBuf, reason: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Missing(path) => write!(f, "asset file {} does not exist", path.display()),
            AssetError::Io(path, err) => write!(f, "failed to read {}: {}", path.display(), err),
            AssetError::Malformed { path, reason } => {
                write!(f, "{} is not a valid sprite: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

/// A monochrome image: a grid of opaque/transparent cells, each cell
/// `scale` logical pixels square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    mask: Vec<Vec<bool>>,
    cols: usize,
    scale: i32,
}

impl Sprite {
    pub fn load(path: &Path, scale: i32) -> Result<Self, AssetError> {
        if !path.exists() {
            return Err(AssetError::Missing(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|e| AssetError::Io(path.to_path_buf(), e))?;
        Self::from_art(&text, scale).map_err(|reason| AssetError::Malformed {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parses text art: `#` is opaque, `.` and space are transparent.
    /// Blank lines are skipped and short rows are padded.
    pub fn from_art(text: &str, scale: i32) -> Result<Self, String> {
        if scale <= 0 {
            return Err(format!("scale must be positive, got {}", scale));
        }
        let mut mask = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                match ch {
                    '#' => row.push(true),
                    '.' | ' ' => row.push(false),
                    other => {
                        return Err(format!("unexpected {:?} on line {}", other, line_no + 1));
                    }
                }
            }
            mask.push(row);
        }
        let cols = mask.iter().map(Vec::len).max().unwrap_or(0);
        if cols == 0 || !mask.iter().flatten().any(|&cell| cell) {
            return Err("image has no opaque cells".to_string());
        }
        for row in &mut mask {
            row.resize(cols, false);
        }
        Ok(Self { mask, cols, scale })
    }

    pub fn width(&self) -> i32 {
        self.cols as i32 * self.scale
    }

    pub fn height(&self) -> i32 {
        self.mask.len() as i32 * self.scale
    }

    /// Whether the logical pixel at (`dx`, `dy`), relative to the top-left
    /// corner, is opaque.
    pub fn is_opaque(&self, dx: i32, dy: i32) -> bool {
        if dx < 0 || dy < 0 {
            return false;
        }
        let col = (dx / self.scale) as usize;
        let row = (dy / self.scale) as usize;
        self.mask
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }
}

/// The two images the game cannot run without.
#[derive(Clone, Debug)]
pub struct Images {
    pub ship: Sprite,
    pub alien: Sprite,
}

impl Images {
    pub fn load(dir: &Path, scale: i32) -> Result<Self, AssetError> {
        let ship = Sprite::load(&dir.join(SHIP_IMAGE), scale)?;
        let alien = Sprite::load(&dir.join(ALIEN_IMAGE), scale)?;
        log::info!(
            "Loaded sprites: ship {}x{}, alien {}x{}",
            ship.width(),
            ship.height(),
            alien.width(),
            alien.height()
        );
        Ok(Self { ship, alien })
    }
}
