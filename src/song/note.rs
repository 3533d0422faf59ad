//! Notes, layers and instruments
//!
//! Plain value records. A note is identified by its `(tick, layer)` pair;
//! layer and instrument ids are their positions in the song.

use serde::{Deserialize, Serialize};

/// A single note block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub tick: u32,
    pub layer: u32,
    pub instrument: u8,
    pub key: u8,
}

impl Note {
    pub fn new(tick: u32, layer: u32, instrument: u8, key: u8) -> Self {
        Note {
            tick,
            layer,
            instrument,
            key,
        }
    }

    /// Position of this note in the tick x layer grid
    pub fn position(&self) -> (u32, u32) {
        (self.tick, self.layer)
    }
}

/// A named track that notes are placed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub id: usize,
    pub name: String,
    /// 0-100
    pub volume: u8,
    /// 0-200, centered at 100
    pub panning: u8,
}

impl Layer {
    pub const DEFAULT_VOLUME: u8 = 100;
    pub const CENTER_PANNING: u8 = 100;

    pub fn new(id: usize, name: impl Into<String>, volume: u8, panning: u8) -> Self {
        Layer {
            id,
            name: name.into(),
            volume,
            panning,
        }
    }
}

impl Default for Layer {
    fn default() -> Self {
        Layer::new(0, "", Self::DEFAULT_VOLUME, Self::CENTER_PANNING)
    }
}

/// A custom sound source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: usize,
    pub name: String,
    /// Sound file, relative to the sounds folder
    pub file: String,
    pub pitch: u8,
    /// Whether placing a block plays the sound
    pub press_key: bool,
}

impl Instrument {
    pub fn new(
        id: usize,
        name: impl Into<String>,
        file: impl Into<String>,
        pitch: u8,
        press_key: bool,
    ) -> Self {
        Instrument {
            id,
            name: name.into(),
            file: file.into(),
            pitch,
            press_key,
        }
    }
}
