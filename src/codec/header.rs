//! Header section
//!
//! Layout after the leading 16-bit legacy marker (always 0 in supported
//! files):
//!
//! ```text
//! version            i8      tempo              i16 (x100)
//! default_instr.     i8      auto_save          i8  (== 1)
//! song_length        i16     auto_save_duration i8
//! song_layers        i16     time_signature     i8
//! song_name          str     minutes_spent      i32
//! song_author        str     left_clicks        i32
//! original_author    str     right_clicks       i32
//! description        str     blocks_added       i32
//!                            blocks_removed     i32
//!                            song_origin        str
//! ```

use std::io::{Read, Write};

use log::debug;

use super::primitive::*;
use crate::error::{NbsError, Result};
use crate::song::Header;

/// Read the header. Fails without reading further if the legacy marker is set.
pub fn read_header<R: Read>(reader: &mut R) -> Result<Header> {
    let marker = read_i16(reader)?;
    if marker != 0 {
        return Err(NbsError::DeprecatedFormat { marker });
    }

    let header = Header {
        version: read_u8(reader)?,
        default_instruments: read_u8(reader)?,
        song_length: read_u16(reader)?,
        song_layers: read_u16(reader)?,
        song_name: read_string(reader)?,
        song_author: read_string(reader)?,
        original_author: read_string(reader)?,
        description: read_string(reader)?,
        tempo: Header::tempo_from_raw(read_i16(reader)?),
        auto_save: read_bool(reader)?,
        auto_save_duration: read_u8(reader)?,
        time_signature: read_u8(reader)?,
        minutes_spent: read_i32(reader)?,
        left_clicks: read_i32(reader)?,
        right_clicks: read_i32(reader)?,
        blocks_added: read_i32(reader)?,
        blocks_removed: read_i32(reader)?,
        song_origin: read_string(reader)?,
    };

    debug!(
        "Read header: version {}, {} layers, length {}",
        header.version, header.song_layers, header.song_length
    );
    Ok(header)
}

/// Write the header exactly as given. Callers normalize it first.
pub fn write_header<W: Write>(writer: &mut W, header: &Header) -> Result<()> {
    write_i16(writer, 0)?;
    write_u8(writer, header.version)?;
    write_u8(writer, header.default_instruments)?;
    write_u16(writer, header.song_length)?;
    write_u16(writer, header.song_layers)?;
    write_string(writer, &header.song_name)?;
    write_string(writer, &header.song_author)?;
    write_string(writer, &header.original_author)?;
    write_string(writer, &header.description)?;

    write_i16(writer, header.raw_tempo()?)?;
    write_bool(writer, header.auto_save)?;
    write_u8(writer, header.auto_save_duration)?;
    write_u8(writer, header.time_signature)?;

    write_i32(writer, header.minutes_spent)?;
    write_i32(writer, header.left_clicks)?;
    write_i32(writer, header.right_clicks)?;
    write_i32(writer, header.blocks_added)?;
    write_i32(writer, header.blocks_removed)?;
    write_string(writer, &header.song_origin)?;
    Ok(())
}
