//! Primitive values
//!
//! Little-endian signed integers and length-prefixed strings. Reading past
//! the end of the stream surfaces as [`NbsError::UnexpectedEndOfData`]; any
//! other stream error is passed through unchanged.

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{NbsError, Result};

pub fn read_i8<R: Read>(reader: &mut R) -> Result<i8> {
    Ok(reader.read_i8()?)
}

pub fn read_i16<R: Read>(reader: &mut R) -> Result<i16> {
    Ok(reader.read_i16::<LittleEndian>()?)
}

pub fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    Ok(reader.read_i32::<LittleEndian>()?)
}

/// Read a byte field whose domain is 0-255
pub fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    Ok(read_i8(reader)? as u8)
}

/// Read a 16-bit field whose domain is non-negative
pub fn read_u16<R: Read>(reader: &mut R) -> Result<u16> {
    Ok(read_i16(reader)? as u16)
}

pub fn read_bool<R: Read>(reader: &mut R) -> Result<bool> {
    Ok(read_i8(reader)? == 1)
}

/// Read a 32-bit length prefix followed by that many bytes of UTF-8
pub fn read_string<R: Read>(reader: &mut R) -> Result<String> {
    let len = u64::from(read_i32(reader)? as u32);

    // bounded by the stream, not by the (untrusted) prefix
    let mut bytes = Vec::new();
    reader.by_ref().take(len).read_to_end(&mut bytes)?;
    if (bytes.len() as u64) < len {
        return Err(NbsError::UnexpectedEndOfData);
    }

    Ok(String::from_utf8(bytes)?)
}

pub fn write_i8<W: Write>(writer: &mut W, value: i8) -> Result<()> {
    Ok(writer.write_i8(value)?)
}

pub fn write_i16<W: Write>(writer: &mut W, value: i16) -> Result<()> {
    Ok(writer.write_i16::<LittleEndian>(value)?)
}

pub fn write_i32<W: Write>(writer: &mut W, value: i32) -> Result<()> {
    Ok(writer.write_i32::<LittleEndian>(value)?)
}

pub fn write_u8<W: Write>(writer: &mut W, value: u8) -> Result<()> {
    write_i8(writer, value as i8)
}

pub fn write_u16<W: Write>(writer: &mut W, value: u16) -> Result<()> {
    write_i16(writer, value as i16)
}

pub fn write_bool<W: Write>(writer: &mut W, value: bool) -> Result<()> {
    write_i8(writer, i8::from(value))
}

pub fn write_string<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    let len = u32::try_from(value.len()).map_err(|_| {
        NbsError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "string longer than 4 GiB",
        ))
    })?;
    write_i32(writer, len as i32)?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}
