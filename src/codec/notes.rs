//! Note grid section
//!
//! Notes are stored as a sparse tick x layer grid using two nested jump
//! sequences. Each jump is a 16-bit step forward from the previous index,
//! starting from -1; a jump of 0 closes the sequence.
//!
//! ```text
//! tick jump                    (0 closes the grid)
//!     layer jump               (0 closes the chord)
//!         instrument i8
//!         key        i8
//! ```

use std::io::{Read, Write};

use log::debug;

use super::primitive::{read_u16, read_u8, write_u16, write_u8};
use crate::error::{NbsError, Result};
use crate::song::{Chords, Note};

const JUMP_START: i64 = -1;
const END_OF_SEQUENCE: u16 = 0;

/// Decoding cursor over one jump sequence
#[derive(Debug, Clone)]
pub struct JumpReader {
    value: i64,
}

impl Default for JumpReader {
    fn default() -> Self {
        JumpReader { value: JUMP_START }
    }
}

impl JumpReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the next jump and return the index it lands on, or `None` at the
    /// end of the sequence
    pub fn next_index<R: Read>(&mut self, reader: &mut R) -> Result<Option<u32>> {
        let jump = read_u16(reader)?;
        if jump == END_OF_SEQUENCE {
            return Ok(None);
        }

        self.value += i64::from(jump);
        u32::try_from(self.value)
            .map(Some)
            .map_err(|_| NbsError::IndexOverflow)
    }
}

/// Encoding counterpart of [`JumpReader`]
#[derive(Debug, Clone)]
pub struct JumpWriter {
    previous: i64,
}

impl Default for JumpWriter {
    fn default() -> Self {
        JumpWriter {
            previous: JUMP_START,
        }
    }
}

impl JumpWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the jump from the previous index to `index`
    ///
    /// The step must be in `1..=65535`; a zero step would read back as the
    /// end of the sequence.
    pub fn write_index<W: Write>(&mut self, writer: &mut W, index: u32) -> Result<()> {
        let jump = i64::from(index) - self.previous;
        let jump = u16::try_from(jump)
            .ok()
            .filter(|jump| *jump != END_OF_SEQUENCE)
            .ok_or(NbsError::JumpOverflow {
                from: self.previous,
                to: index,
            })?;

        write_u16(writer, jump)?;
        self.previous = i64::from(index);
        Ok(())
    }

    pub fn finish<W: Write>(self, writer: &mut W) -> Result<()> {
        write_u16(writer, END_OF_SEQUENCE)
    }
}

/// Read the whole note grid, in tick then layer order
pub fn read_notes<R: Read>(reader: &mut R) -> Result<Vec<Note>> {
    let mut notes = Vec::new();

    let mut ticks = JumpReader::new();
    while let Some(tick) = ticks.next_index(reader)? {
        let mut layers = JumpReader::new();
        while let Some(layer) = layers.next_index(reader)? {
            let instrument = read_u8(reader)?;
            let key = read_u8(reader)?;
            notes.push(Note::new(tick, layer, instrument, key));
        }
    }

    debug!("Read {} notes", notes.len());
    Ok(notes)
}

/// Write the note grid
///
/// Fails with [`NbsError::DuplicateNote`] before writing a second note at an
/// occupied `(tick, layer)` position.
pub fn write_notes<W: Write>(writer: &mut W, notes: &[Note]) -> Result<()> {
    let mut ticks = JumpWriter::new();

    for chord in Chords::new(notes) {
        ticks.write_index(writer, chord.tick)?;

        let mut layers = JumpWriter::new();
        let mut previous_layer = None;
        for note in &chord.notes {
            if previous_layer == Some(note.layer) {
                return Err(NbsError::DuplicateNote {
                    tick: note.tick,
                    layer: note.layer,
                });
            }
            previous_layer = Some(note.layer);

            layers.write_index(writer, note.layer)?;
            write_u8(writer, note.instrument)?;
            write_u8(writer, note.key)?;
        }
        layers.finish(writer)?;
    }
    ticks.finish(writer)?;

    debug!("Wrote {} notes", notes.len());
    Ok(())
}
