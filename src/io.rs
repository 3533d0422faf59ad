//! Song file I/O
//!
//! Path-based wrappers around the stream codec. Files are opened, read or
//! written in one buffered pass, and closed before returning.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;

use crate::codec::{NbsReader, NbsWriter};
use crate::error::{NbsError, Result};
use crate::song::Song;

/// Read a song file
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `DeprecatedFormat` - If the file predates the supported save format
/// * `UnexpectedEndOfData` - If the file is truncated
pub fn read_file(path: &Path) -> Result<Song> {
    if !path.exists() {
        return Err(NbsError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path)?;
    let song = NbsReader::new(BufReader::new(file)).read_song()?;

    info!(
        "Loaded {} ({} notes, {} layers)",
        path.display(),
        song.notes.len(),
        song.layers.len()
    );
    Ok(song)
}

/// Write a song file, replacing any existing file at `path`
///
/// The header written has `song_length` and `song_layers` recomputed;
/// `song` itself is left unchanged. Use [`Song::save`] to also update the
/// in-memory header.
pub fn save_file(song: &Song, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    NbsWriter::new(BufWriter::new(file)).write_song(song)?;

    info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::{Header, Note};
    use tempfile::tempdir;

    #[test]
    fn test_save_and_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song.nbs");

        let mut song = Song::new(Header {
            song_name: "Saved".to_string(),
            ..Header::default()
        });
        song.notes.push(Note::new(3, 0, 0, 45));

        save_file(&song, &path).unwrap();
        let loaded = read_file(&path).unwrap();

        assert_eq!(loaded.header.song_name, "Saved");
        assert_eq!(loaded.header.song_length, 3);
        assert_eq!(loaded.notes, song.notes);
    }

    #[test]
    fn test_song_save_updates_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("updated.nbs");

        let mut song = Song::default();
        song.notes.push(Note::new(17, 0, 2, 50));
        song.save(&path).unwrap();

        assert_eq!(song.header.song_length, 17);
        assert_eq!(song.header.song_layers, 1);
        assert_eq!(read_file(&path).unwrap(), song);
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = read_file(Path::new("/nonexistent/path/song.nbs"));

        match result.unwrap_err() {
            NbsError::FileNotFound { path } => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("Expected FileNotFound error, got: {:?}", other),
        }
    }
}
