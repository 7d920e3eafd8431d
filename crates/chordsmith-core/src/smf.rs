//! Single-track sequence-file assembly

use crate::error::Result;
use crate::event::TrackEvent;

/// Ticks per quarter note written into every header
pub const DIVISION: u16 = 96;

const HEADER_TAG: &[u8; 4] = b"MThd";
const TRACK_TAG: &[u8; 4] = b"MTrk";

/// A complete single-track sequence file ready for serialization
#[derive(Debug, Clone)]
pub struct SequenceFile {
    events: Vec<TrackEvent>,
}

impl SequenceFile {
    pub fn new(events: Vec<TrackEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Serialize to bytes: `MThd` header (length 6, format 0, one
    /// track, division 96) followed by one `MTrk` chunk whose length
    /// field equals the exact byte count of the event stream.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut track = Vec::new();
        for event in &self.events {
            event.encode_into(&mut track)?;
        }

        let mut out = Vec::with_capacity(14 + 8 + track.len());
        out.extend_from_slice(HEADER_TAG);
        out.extend_from_slice(&6u32.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes()); // format 0
        out.extend_from_slice(&1u16.to_be_bytes()); // one track
        out.extend_from_slice(&DIVISION.to_be_bytes());

        out.extend_from_slice(TRACK_TAG);
        out.extend_from_slice(&(track.len() as u32).to_be_bytes());
        out.extend_from_slice(&track);
        Ok(out)
    }
}
