//! Error types for chordsmith encoding

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Note number {0} outside MIDI range 0-127")]
    NoteOutOfRange(i32),
    #[error("{field} value {value} outside data-byte range 0-127")]
    DataByteOutOfRange { field: &'static str, value: u8 },
    #[error("Channel {0} outside range 0-15")]
    ChannelOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
