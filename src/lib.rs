//! nbs - Note Block Studio song files
//!
//! Reads and writes `.nbs` songs: a header of song metadata, a sparse grid
//! of notes indexed by tick and layer, the layer list, and the custom
//! instrument palette.
//!
//! ```
//! use nbs::{decode, encode_to_vec, Header, Note, Song};
//!
//! let mut song = Song::new(Header {
//!     song_name: "Scale".to_string(),
//!     ..Header::default()
//! });
//! song.notes = (0..8).map(|i| Note::new(i * 2, 0, 0, 33 + i as u8)).collect();
//!
//! let bytes = encode_to_vec(&song).unwrap();
//! let decoded = decode(bytes.as_slice()).unwrap();
//! assert_eq!(decoded.header.song_length, 14);
//! assert_eq!(decoded.chords().count(), 8);
//! ```

pub mod cli;
pub mod codec;
pub mod error;
pub mod io;
pub mod song;

pub use codec::{decode, encode, encode_to_vec, NbsReader, NbsWriter};
pub use error::{NbsError, Result};
pub use io::{read_file, save_file};
pub use song::{Chord, Chords, Header, Instrument, Layer, Note, Song};
