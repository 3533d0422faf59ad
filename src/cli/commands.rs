//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::io::{read_file, save_file};
use crate::song::{Header, Song};

/// Print the header and section counts of a song.
pub fn info(path: &Path) -> Result<()> {
    let song = read_file(path)?;
    let header = &song.header;

    println!("Song: {}", display_or_dash(&header.song_name));
    println!("Author: {}", display_or_dash(&header.song_author));
    println!("Original author: {}", display_or_dash(&header.original_author));
    println!("Tempo: {:.2} ticks/s", header.tempo);
    println!("Time signature: {}/4", header.time_signature);
    println!("Length: {} ticks", header.song_length);
    println!("{:-<60}", "");
    println!(
        "Notes: {} | Layers: {} | Custom instruments: {}",
        song.notes.len(),
        song.layers.len(),
        song.instruments.len()
    );

    Ok(())
}

/// Print a song as pretty JSON.
pub fn dump(path: &Path) -> Result<()> {
    let song = read_file(path)?;

    let json = serde_json::to_string_pretty(&song)?;
    println!("{}", json);

    Ok(())
}

/// List chords in playback order.
pub fn chords(path: &Path) -> Result<()> {
    let song = read_file(path)?;

    for chord in &song {
        let notes: Vec<String> = chord
            .notes
            .iter()
            .map(|note| format!("L{}:i{}k{}", note.layer, note.instrument, note.key))
            .collect();
        println!("{:>6}  {}", chord.tick, notes.join(" "));
    }

    Ok(())
}

/// Decode a song and write it back with a recomputed header.
pub fn normalize(input: &Path, output: &Path) -> Result<()> {
    info!("Normalizing {} -> {}", input.display(), output.display());

    let mut song = read_file(input)?;
    let stale = (song.header.song_length, song.header.song_layers);
    song.save(output)?;

    if stale != (song.header.song_length, song.header.song_layers) {
        println!(
            "Header updated: length {} -> {}, layers {} -> {}",
            stale.0, song.header.song_length, stale.1, song.header.song_layers
        );
    }
    println!("Song written: {}", output.display());

    Ok(())
}

/// Create an empty song.
pub fn new_song(path: &Path, name: &str, author: &str, tempo: f64) -> Result<()> {
    info!("Creating new song at: {}", path.display());

    let song = Song::new(Header {
        song_name: name.to_string(),
        song_author: author.to_string(),
        tempo,
        ..Header::default()
    });
    save_file(&song, path)?;

    println!("Song created: {}", path.display());

    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_then_normalize() {
        let dir = tempdir().unwrap();
        let created = dir.path().join("new.nbs");
        let normalized = dir.path().join("normalized.nbs");

        new_song(&created, "Fresh", "Me", 5.0).unwrap();
        normalize(&created, &normalized).unwrap();

        let song = read_file(&normalized).unwrap();
        assert_eq!(song.header.song_name, "Fresh");
        assert_eq!(song.header.song_layers, 1);
    }

    #[test]
    fn test_display_or_dash() {
        assert_eq!(display_or_dash(""), "-");
        assert_eq!(display_or_dash("x"), "x");
    }
}
