//! Chord grouping
//!
//! Visits a song's notes in playback order: one [`Chord`] per tick that has
//! notes, ticks ascending, each chord's notes sorted by layer.

use serde::Serialize;

use super::note::Note;

/// All notes that share a tick, ordered by layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    pub tick: u32,
    pub notes: Vec<Note>,
}

impl Chord {
    /// Layers occupied by this chord, ascending
    pub fn layers(&self) -> impl Iterator<Item = u32> + '_ {
        self.notes.iter().map(|note| note.layer)
    }
}

/// Iterator over the chords of a note collection
///
/// Created by [`Song::chords`](crate::Song::chords).
#[derive(Debug, Clone)]
pub struct Chords {
    sorted: std::vec::IntoIter<Note>,
    pending: Option<Note>,
}

impl Chords {
    pub fn new(notes: &[Note]) -> Self {
        let mut sorted = notes.to_vec();
        // stable, so duplicate positions keep their insertion order
        sorted.sort_by_key(Note::position);

        let mut sorted = sorted.into_iter();
        let pending = sorted.next();
        Chords { sorted, pending }
    }
}

impl Iterator for Chords {
    type Item = Chord;

    fn next(&mut self) -> Option<Chord> {
        let first = self.pending.take()?;
        let mut notes = vec![first];

        for note in self.sorted.by_ref() {
            if note.tick == first.tick {
                notes.push(note);
            } else {
                self.pending = Some(note);
                break;
            }
        }

        Some(Chord {
            tick: first.tick,
            notes,
        })
    }
}

impl std::iter::FusedIterator for Chords {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_notes_yield_no_chords() {
        assert_eq!(Chords::new(&[]).count(), 0);
    }

    #[test]
    fn test_groups_by_tick_then_layer() {
        let notes = [
            Note::new(5, 1, 0, 40),
            Note::new(5, 0, 1, 41),
            Note::new(2, 3, 2, 42),
        ];

        let chords: Vec<Chord> = Chords::new(&notes).collect();
        assert_eq!(chords.len(), 2);

        assert_eq!(chords[0].tick, 2);
        assert_eq!(chords[0].layers().collect::<Vec<_>>(), vec![3]);

        assert_eq!(chords[1].tick, 5);
        assert_eq!(chords[1].layers().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(chords[1].notes[0].key, 41);
    }

    #[test]
    fn test_single_note() {
        let chords: Vec<Chord> = Chords::new(&[Note::new(0, 0, 0, 0)]).collect();
        assert_eq!(
            chords,
            vec![Chord {
                tick: 0,
                notes: vec![Note::new(0, 0, 0, 0)],
            }]
        );
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut chords = Chords::new(&[Note::new(1, 1, 0, 0)]);
        assert!(chords.next().is_some());
        assert!(chords.next().is_none());
        assert!(chords.next().is_none());
    }
}
