//! Asset classes and their per-class rendering constants

use serde::{Deserialize, Serialize};

/// GM drum-map keys for the percussion set (channel 9)
pub const KICK: u8 = 36; // C1
pub const SNARE: u8 = 38; // D1
pub const HIHAT: u8 = 44; // G#1 (pedal hi-hat)
pub const RIDE: u8 = 51; // D#2

/// Percussion instruments rendered as one hit each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrumPiece {
    Ride,
    Snare,
    Hihat,
    Kick,
}

impl DrumPiece {
    pub const ALL: [DrumPiece; 4] = [Self::Ride, Self::Snare, Self::Hihat, Self::Kick];

    pub fn key(&self) -> u8 {
        match self {
            Self::Ride => RIDE,
            Self::Snare => SNARE,
            Self::Hihat => HIHAT,
            Self::Kick => KICK,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ride => "ride",
            Self::Snare => "snare",
            Self::Hihat => "hihat",
            Self::Kick => "kick",
        }
    }
}

/// How a class's parameter grid is enumerated and named
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// 12 roots x 5 qualities, filenames from the canonical key
    Chords,
    /// Chromatic run of N pitches from the base pitch, filenames from
    /// the sequential index
    NoteRun(u8),
    /// Fixed percussion set, filenames from the piece name
    Percussion,
}

/// One library of single-hit assets sharing a timbre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    GuitarChords,
    PianoChords,
    BassNotes,
    SaxNotes,
    DrumHits,
}

impl AssetClass {
    pub const ALL: [AssetClass; 5] = [
        Self::GuitarChords,
        Self::PianoChords,
        Self::BassNotes,
        Self::SaxNotes,
        Self::DrumHits,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GuitarChords => "guitar",
            Self::PianoChords => "piano",
            Self::BassNotes => "bass",
            Self::SaxNotes => "sax",
            Self::DrumHits => "drums",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn kind(&self) -> AssetKind {
        match self {
            Self::GuitarChords | Self::PianoChords => AssetKind::Chords,
            Self::BassNotes => AssetKind::NoteRun(12),
            Self::SaxNotes => AssetKind::NoteRun(24),
            Self::DrumHits => AssetKind::Percussion,
        }
    }

    /// Program number selecting the timbre; percussion picks its
    /// instrument by key instead
    pub fn program(&self) -> Option<u8> {
        match self {
            Self::GuitarChords => Some(27), // Electric Guitar (clean)
            Self::PianoChords => Some(0),   // Acoustic Grand Piano
            Self::BassNotes => Some(50),    // bass patch slot in the dedicated soundfont
            Self::SaxNotes => Some(65),     // Alto Sax
            Self::DrumHits => None,
        }
    }

    /// Lowest note of the class's grid, one octave apart per timbre
    pub fn base_pitch(&self) -> u8 {
        match self {
            Self::GuitarChords => 48, // C3
            Self::PianoChords => 60,  // C4
            Self::BassNotes => 36,    // C2
            Self::SaxNotes => 48,     // C3
            Self::DrumHits => 0,
        }
    }

    /// Hold duration in ticks at division 96
    pub fn hold_ticks(&self) -> u32 {
        match self {
            Self::SaxNotes => 192,
            _ => 96,
        }
    }

    pub fn velocity(&self) -> u8 {
        match self {
            Self::SaxNotes => 127,
            _ => 100,
        }
    }

    /// Renderer gain for this class's soundfont
    pub fn gain(&self) -> f32 {
        match self {
            Self::GuitarChords | Self::PianoChords => 3.0,
            _ => 2.0,
        }
    }

    pub fn default_output_dir(&self) -> &'static str {
        match self {
            Self::GuitarChords => "output_chords_guitar",
            Self::PianoChords => "output_chords_piano",
            Self::BassNotes => "output_bass_notes",
            Self::SaxNotes => "output_saxophone_notes",
            Self::DrumHits => "output_swing_drums",
        }
    }

    pub fn default_soundfont(&self) -> &'static str {
        match self {
            Self::GuitarChords => "Electric_guitar.SF2",
            Self::PianoChords => "Piano.sf2",
            Self::BassNotes => "Bass Guitars.sf2",
            Self::SaxNotes => "Saxophone.sf2",
            Self::DrumHits => "Drum.sf2",
        }
    }
}
