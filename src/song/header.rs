//! Song Header
//!
//! Metadata block stored at the start of every song file.

use serde::{Deserialize, Serialize};

use crate::error::{NbsError, Result};

/// Slack added away from zero before truncating a scaled tempo, larger than
/// the error of `raw / 100.0 * 100.0` anywhere in the 16-bit range
const TEMPO_EPSILON: f64 = 1e-6;

/// Song metadata
///
/// Build a header with overrides through struct update syntax:
///
/// ```
/// use nbs::Header;
///
/// let header = Header {
///     song_name: "Canon".to_string(),
///     tempo: 5.0,
///     ..Header::default()
/// };
/// assert_eq!(header.version, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Save format version
    pub version: u8,
    /// Number of built-in instruments the song was created with
    pub default_instruments: u8,
    /// Tick of the last note. Recomputed before every encode.
    pub song_length: u16,
    /// Number of layers. Recomputed before every encode.
    pub song_layers: u16,
    pub song_name: String,
    pub song_author: String,
    pub original_author: String,
    pub description: String,
    /// Ticks per second. Stored on disk as a 16-bit integer times 100.
    pub tempo: f64,
    pub auto_save: bool,
    /// Minutes between auto saves
    pub auto_save_duration: u8,
    pub time_signature: u8,
    pub minutes_spent: i32,
    pub left_clicks: i32,
    pub right_clicks: i32,
    pub blocks_added: i32,
    pub blocks_removed: i32,
    /// Name of the file the song was imported from, if any
    pub song_origin: String,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            version: 3,
            default_instruments: 16,
            song_length: 0,
            song_layers: 0,
            song_name: String::new(),
            song_author: String::new(),
            original_author: String::new(),
            description: String::new(),
            tempo: 10.0,
            auto_save: false,
            auto_save_duration: 10,
            time_signature: 4,
            minutes_spent: 0,
            left_clicks: 0,
            right_clicks: 0,
            blocks_added: 0,
            blocks_removed: 0,
            song_origin: String::new(),
        }
    }
}

impl Header {
    /// Tempo in the on-disk fixed point form (ticks per second times 100, truncated)
    ///
    /// Any tempo produced by [`Header::tempo_from_raw`] maps back to the same
    /// raw value. Fails with [`NbsError::TempoOutOfRange`] for NaN, infinities
    /// and values whose scaled form falls outside `i16`.
    pub fn raw_tempo(&self) -> Result<i16> {
        let scaled = self.tempo * 100.0;
        let raw = (scaled + TEMPO_EPSILON.copysign(scaled)).trunc();

        if raw >= f64::from(i16::MIN) && raw <= f64::from(i16::MAX) {
            Ok(raw as i16)
        } else {
            Err(NbsError::TempoOutOfRange { tempo: self.tempo })
        }
    }

    /// Convert an on-disk tempo value back to ticks per second
    pub fn tempo_from_raw(raw: i16) -> f64 {
        f64::from(raw) / 100.0
    }
}
