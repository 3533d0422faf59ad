//! Binary Codec
//!
//! Reads and writes the `.nbs` song format. A file is four sections in a
//! fixed order:
//! - Header (song metadata)
//! - Note grid (delta-encoded tick x layer matrix)
//! - Layers (count taken from the header)
//! - Custom instruments (count stored inline)
//!
//! All integers are little-endian and signed; strings carry a 32-bit length
//! prefix and no terminator. The codec never opens or closes files itself,
//! see [`crate::io`] for that.

pub mod header;
pub mod layers;
pub mod notes;
pub mod primitive;

use std::io::{Read, Write};

use log::{debug, warn};

use crate::error::Result;
use crate::song::Song;

/// Reader for the binary song format
pub struct NbsReader<R: Read> {
    reader: R,
}

impl<R: Read> NbsReader<R> {
    /// Create a new song reader. `reader` should be buffered.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read a complete song from the input
    pub fn read_song(&mut self) -> Result<Song> {
        let header = header::read_header(&mut self.reader)?;
        let notes = notes::read_notes(&mut self.reader)?;
        let layers = layers::read_layers(&mut self.reader, header.song_layers)?;
        let instruments = layers::read_instruments(&mut self.reader)?;

        let song = Song::from_parts(header, notes, layers, instruments);

        let last_tick = song.last_tick();
        if u32::from(song.header.song_length) != last_tick {
            warn!(
                "Header song length {} does not match last note tick {}",
                song.header.song_length, last_tick
            );
        }
        debug!(
            "Decoded song '{}': {} notes, {} layers, {} instruments",
            song.header.song_name,
            song.notes.len(),
            song.layers.len(),
            song.instruments.len()
        );

        Ok(song)
    }

    /// Consume the reader, returning the underlying stream
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Writer for the binary song format
pub struct NbsWriter<W: Write> {
    writer: W,
}

impl<W: Write> NbsWriter<W> {
    /// Create a new song writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a complete song to the output
    ///
    /// `song_length` and `song_layers` are recomputed from the notes and
    /// layers; the values stored on `song.header` are ignored.
    pub fn write_song(&mut self, song: &Song) -> Result<()> {
        let header = song.normalized_header();

        header::write_header(&mut self.writer, &header)?;
        notes::write_notes(&mut self.writer, &song.notes)?;
        layers::write_layers(&mut self.writer, &song.layers)?;
        layers::write_instruments(&mut self.writer, &song.instruments)?;
        self.writer.flush()?;

        debug!(
            "Encoded song '{}': {} notes, {} layers, {} instruments",
            header.song_name,
            song.notes.len(),
            song.layers.len(),
            song.instruments.len()
        );
        Ok(())
    }

    /// Consume the writer, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Decode a whole song from a byte source
pub fn decode<R: Read>(reader: R) -> Result<Song> {
    NbsReader::new(reader).read_song()
}

/// Encode a song to a byte sink
pub fn encode<W: Write>(song: &Song, writer: W) -> Result<()> {
    NbsWriter::new(writer).write_song(song)
}

/// Encode a song into a new byte vector
pub fn encode_to_vec(song: &Song) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode(song, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NbsError;
    use crate::song::{Header, Instrument, Layer, Note};
    use std::io::{self, Cursor};

    fn sample_song() -> Song {
        let mut song = Song::new(Header {
            song_name: "Test Song".to_string(),
            song_author: "Tester".to_string(),
            tempo: 7.5,
            ..Header::default()
        });
        song.layers = vec![
            Layer::new(0, "Lead", 100, 100),
            Layer::new(1, "Bass", 75, 60),
            Layer::new(2, "Drums", 50, 140),
        ];
        song.notes = vec![
            Note::new(0, 0, 0, 45),
            Note::new(0, 2, 3, 33),
            Note::new(4, 1, 1, 40),
            Note::new(8, 0, 0, 47),
            Note::new(8, 1, 1, 40),
        ];
        song.instruments = vec![Instrument::new(0, "Cowbell", "cowbell.ogg", 45, false)];
        song
    }

    #[test]
    fn test_round_trip() {
        let song = sample_song();
        let bytes = encode_to_vec(&song).unwrap();
        let decoded = decode(Cursor::new(bytes)).unwrap();

        assert_eq!(decoded.header, song.normalized_header());
        assert_eq!(decoded.notes, song.notes);
        assert_eq!(decoded.layers, song.layers);
        assert_eq!(decoded.instruments, song.instruments);
    }

    #[test]
    fn test_stale_song_length_is_replaced() {
        let mut song = sample_song();
        song.header.song_length = 1234;
        song.header.song_layers = 1;

        let decoded = decode(Cursor::new(encode_to_vec(&song).unwrap())).unwrap();
        assert_eq!(decoded.header.song_length, 8);
        assert_eq!(decoded.header.song_layers, 3);
        assert_eq!(decoded.layers.len(), 3);
    }

    #[test]
    fn test_encode_does_not_touch_song() {
        let mut song = sample_song();
        song.header.song_length = 1234;
        encode_to_vec(&song).unwrap();
        assert_eq!(song.header.song_length, 1234);
    }

    #[test]
    fn test_every_truncation_fails() {
        let bytes = encode_to_vec(&sample_song()).unwrap();

        for len in 0..bytes.len() {
            let result = decode(Cursor::new(&bytes[..len]));
            assert!(
                matches!(result, Err(NbsError::UnexpectedEndOfData)),
                "prefix of length {} decoded as {:?}",
                len,
                result
            );
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_is_propagated() {
        let err = encode(&sample_song(), FailingSink).unwrap_err();
        match err {
            NbsError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("Expected Io error, got: {:?}", other),
        }
    }
}
