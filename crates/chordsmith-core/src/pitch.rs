//! Pitch classes, chord templates, and voicings

use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, Result};

/// Pitch-class display names, index 0 = C
pub const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Display name for a pitch-class index (taken mod 12)
pub fn pitch_name(pitch_class: u8) -> &'static str {
    PITCH_CLASSES[pitch_class as usize % 12]
}

/// Seventh-chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    Maj7,
    Min7,
    Dominant7,
    MinMaj7,
    Dim7,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 5] = [
        Self::Maj7,
        Self::Min7,
        Self::Dominant7,
        Self::MinMaj7,
        Self::Dim7,
    ];

    /// Semitone offsets from the root, in template order
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Maj7 => &[0, 4, 7, 11],
            Self::Min7 => &[0, 3, 7, 10],
            Self::Dominant7 => &[0, 4, 7, 10],
            Self::MinMaj7 => &[0, 3, 7, 11],
            Self::Dim7 => &[0, 3, 6, 9],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Maj7 => "maj7",
            Self::Min7 => "min7",
            Self::Dominant7 => "7",
            Self::MinMaj7 => "minMaj7",
            Self::Dim7 => "dim7",
        }
    }
}

/// Concrete note numbers realizing a chord template at a root.
///
/// Construction validates every note against the MIDI range, so a
/// `Voicing` can always be encoded without clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voicing {
    root: u8,
    notes: Vec<u8>,
}

impl Voicing {
    /// Realize `quality` with its root at `root`
    pub fn chord(root: i32, quality: ChordQuality) -> Result<Self> {
        Self::from_intervals(root, quality.intervals())
    }

    /// Realize an arbitrary interval template at `root`
    pub fn from_intervals(root: i32, intervals: &[u8]) -> Result<Self> {
        let notes = intervals
            .iter()
            .map(|&offset| {
                let note = root + offset as i32;
                u8::try_from(note)
                    .ok()
                    .filter(|n| *n <= 127)
                    .ok_or(EncodeError::NoteOutOfRange(note))
            })
            .collect::<Result<Vec<u8>>>()?;
        let root = u8::try_from(root)
            .ok()
            .filter(|n| *n <= 127)
            .ok_or(EncodeError::NoteOutOfRange(root))?;
        Ok(Self { root, notes })
    }

    /// A single pitch as a one-voice voicing
    pub fn single(note: i32) -> Result<Self> {
        Self::from_intervals(note, &[0])
    }

    pub fn root(&self) -> u8 {
        self.root
    }

    pub fn notes(&self) -> &[u8] {
        &self.notes
    }
}

/// Pitch-class pattern of a voicing, rendered as a `_`-joined string.
///
/// Entries are `(root_pc + offset) mod 12` in template order, not
/// sorted. The mapping is deliberately not injective: distinct
/// (root, template) pairs can produce the same key, and callers using
/// it as a filename overwrite earlier output silently.
pub fn canonical_key(root_pc: u8, intervals: &[u8]) -> String {
    intervals
        .iter()
        .map(|&offset| ((root_pc as u32 + offset as u32) % 12).to_string())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_voicing() {
        // C maj7 at C3
        let v = Voicing::chord(48, ChordQuality::Maj7).unwrap();
        assert_eq!(v.notes(), &[48, 52, 55, 59]);
        assert_eq!(v.root(), 48);
    }

    #[test]
    fn test_voicing_rejects_out_of_range() {
        assert_eq!(
            Voicing::chord(120, ChordQuality::Maj7),
            Err(EncodeError::NoteOutOfRange(131))
        );
        assert_eq!(Voicing::single(-1), Err(EncodeError::NoteOutOfRange(-1)));
        assert!(Voicing::single(127).is_ok());
    }

    #[test]
    fn test_canonical_key_examples() {
        assert_eq!(canonical_key(0, ChordQuality::Maj7.intervals()), "0_4_7_11");
        assert_eq!(canonical_key(4, ChordQuality::Min7.intervals()), "4_7_11_2");
    }

    #[test]
    fn test_canonical_key_is_deterministic_and_ordered() {
        // Template order is preserved, not sorted
        assert_eq!(canonical_key(11, &[0, 4, 7, 11]), "11_3_6_10");
        assert_eq!(
            canonical_key(11, &[0, 4, 7, 11]),
            canonical_key(11, &[0, 4, 7, 11])
        );
    }

    #[test]
    fn test_canonical_key_collision() {
        // E min7 and a G-rooted rotation map to the same key; outputs
        // named this way overwrite each other (last write wins).
        assert_eq!(canonical_key(4, &[0, 3, 7, 10]), "4_7_11_2");
        assert_eq!(canonical_key(7, &[9, 0, 4, 7]), "4_7_11_2");
    }

    #[test]
    fn test_pitch_names() {
        assert_eq!(pitch_name(0), "C");
        assert_eq!(pitch_name(11), "B");
        assert_eq!(pitch_name(12), "C");
    }
}
