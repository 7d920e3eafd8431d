//! chordsmith-core: Domain types and byte encoding for sequence assets

pub mod asset;
mod error;
pub mod event;
pub mod pitch;
pub mod sequence;
pub mod smf;
pub mod vlq;

pub use asset::{AssetClass, AssetKind, DrumPiece};
pub use error::{EncodeError, Result};
pub use event::{EventKind, TrackEvent, MELODIC_CHANNEL, PERCUSSION_CHANNEL};
pub use pitch::{canonical_key, pitch_name, ChordQuality, Voicing, PITCH_CLASSES};
pub use sequence::{melodic_hit, percussion_hit};
pub use smf::SequenceFile;
