//! Layer and instrument sections
//!
//! The layer count comes from the header; the instrument count is stored
//! inline as a single byte.

use std::io::{Read, Write};

use log::debug;

use super::primitive::*;
use crate::error::{NbsError, Result};
use crate::song::{Instrument, Layer};

/// Read `count` layer records, numbering them from 0
pub fn read_layers<R: Read>(reader: &mut R, count: u16) -> Result<Vec<Layer>> {
    let layers = (0..usize::from(count))
        .map(|id| -> Result<Layer> {
            Ok(Layer {
                id,
                name: read_string(reader)?,
                volume: read_u8(reader)?,
                panning: read_u8(reader)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Read {} layers", layers.len());
    Ok(layers)
}

/// Write layer records in order. The count lives in the header.
pub fn write_layers<W: Write>(writer: &mut W, layers: &[Layer]) -> Result<()> {
    if layers.len() > usize::from(u16::MAX) {
        return Err(NbsError::TooManyLayers {
            count: layers.len(),
        });
    }

    for layer in layers {
        write_string(writer, &layer.name)?;
        write_u8(writer, layer.volume)?;
        write_u8(writer, layer.panning)?;
    }
    Ok(())
}

/// Read the instrument count and that many instrument records
pub fn read_instruments<R: Read>(reader: &mut R) -> Result<Vec<Instrument>> {
    let count = read_u8(reader)?;

    let instruments = (0..usize::from(count))
        .map(|id| -> Result<Instrument> {
            Ok(Instrument {
                id,
                name: read_string(reader)?,
                file: read_string(reader)?,
                pitch: read_u8(reader)?,
                press_key: read_bool(reader)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Read {} custom instruments", instruments.len());
    Ok(instruments)
}

pub fn write_instruments<W: Write>(writer: &mut W, instruments: &[Instrument]) -> Result<()> {
    let count = u8::try_from(instruments.len()).map_err(|_| NbsError::TooManyInstruments {
        count: instruments.len(),
    })?;

    write_u8(writer, count)?;
    for instrument in instruments {
        write_string(writer, &instrument.name)?;
        write_string(writer, &instrument.file)?;
        write_u8(writer, instrument.pitch)?;
        write_bool(writer, instrument.press_key)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_layers_get_positional_ids() {
        let layers = vec![
            Layer::new(7, "Melody", 100, 100),
            Layer::new(3, "Bass", 60, 200),
        ];
        let mut buf: Vec<u8> = Vec::new();
        write_layers(&mut buf, &layers).unwrap();

        let decoded = read_layers(&mut Cursor::new(buf), 2).unwrap();
        assert_eq!(decoded[0], Layer::new(0, "Melody", 100, 100));
        assert_eq!(decoded[1], Layer::new(1, "Bass", 60, 200));
    }

    #[test]
    fn test_layer_count_from_caller() {
        let mut buf: Vec<u8> = Vec::new();
        write_layers(&mut buf, &[Layer::default(), Layer::default()]).unwrap();

        let decoded = read_layers(&mut Cursor::new(buf), 1).unwrap();
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn test_instruments_layout() {
        let instruments = vec![Instrument::new(0, "Bell", "bell.ogg", 45, true)];
        let mut buf: Vec<u8> = Vec::new();
        write_instruments(&mut buf, &instruments).unwrap();

        assert_eq!(buf[0], 1);
        assert_eq!(buf.last(), Some(&1));

        let decoded = read_instruments(&mut Cursor::new(buf)).unwrap();
        assert_eq!(decoded, instruments);
    }

    #[test]
    fn test_no_instruments() {
        let mut buf: Vec<u8> = Vec::new();
        write_instruments(&mut buf, &[]).unwrap();
        assert_eq!(buf, vec![0]);
        assert!(read_instruments(&mut Cursor::new(buf)).unwrap().is_empty());
    }

    #[test]
    fn test_too_many_instruments() {
        let instruments: Vec<Instrument> = (0..256)
            .map(|id| Instrument::new(id, "", "", 45, false))
            .collect();
        let err = write_instruments(&mut Vec::<u8>::new(), &instruments).unwrap_err();
        assert!(matches!(err, NbsError::TooManyInstruments { count: 256 }));
    }

    #[test]
    fn test_truncated_layer() {
        let mut buf: Vec<u8> = Vec::new();
        write_layers(&mut buf, &[Layer::default()]).unwrap();
        buf.pop();

        let err = read_layers(&mut Cursor::new(buf), 1).unwrap_err();
        assert!(matches!(err, NbsError::UnexpectedEndOfData));
    }
}
