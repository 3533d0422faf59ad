//! Song Document
//!
//! The in-memory form of a song file: one header, a flat collection of
//! notes, and ordered layer and instrument lists.

pub mod chord;
pub mod header;
pub mod note;

pub use chord::{Chord, Chords};
pub use header::Header;
pub use note::{Instrument, Layer, Note};

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A complete song
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub header: Header,
    /// Unordered; [`Song::chords`] gives playback order
    pub notes: Vec<Note>,
    pub layers: Vec<Layer>,
    pub instruments: Vec<Instrument>,
}

impl Default for Song {
    fn default() -> Self {
        Song::new(Header::default())
    }
}

impl Song {
    /// Create an empty song with a single default layer
    pub fn new(header: Header) -> Self {
        Song {
            header,
            notes: Vec::new(),
            layers: vec![Layer::default()],
            instruments: Vec::new(),
        }
    }

    /// Assemble a song from already decoded parts
    pub fn from_parts(
        header: Header,
        notes: Vec<Note>,
        layers: Vec<Layer>,
        instruments: Vec<Instrument>,
    ) -> Self {
        Song {
            header,
            notes,
            layers,
            instruments,
        }
    }

    /// Iterate over the notes grouped into chords, in playback order
    pub fn chords(&self) -> Chords {
        Chords::new(&self.notes)
    }

    /// Tick of the last note, 0 for an empty song
    pub fn last_tick(&self) -> u32 {
        self.notes.iter().map(|note| note.tick).max().unwrap_or(0)
    }

    /// Copy of the header with `song_length` and `song_layers` recomputed
    ///
    /// A last tick past `u16::MAX` is written as `u16::MAX` with a warning.
    pub fn normalized_header(&self) -> Header {
        let last_tick = self.last_tick();
        let song_length = u16::try_from(last_tick).unwrap_or_else(|_| {
            warn!(
                "Last note tick {} does not fit the song length field, storing {}",
                last_tick,
                u16::MAX
            );
            u16::MAX
        });

        Header {
            song_length,
            song_layers: u16::try_from(self.layers.len()).unwrap_or(u16::MAX),
            ..self.header.clone()
        }
    }

    /// Recompute the derived header fields in place
    pub fn update_header(&mut self) {
        self.header = self.normalized_header();
    }

    /// Normalize the header and write the song to `path`
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.update_header();
        crate::io::save_file(self, path)
    }
}

impl<'a> IntoIterator for &'a Song {
    type Item = Chord;
    type IntoIter = Chords;

    fn into_iter(self) -> Chords {
        self.chords()
    }
}
