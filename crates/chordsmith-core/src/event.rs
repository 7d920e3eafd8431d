//! Timed track events and their wire encoding

use crate::error::{EncodeError, Result};
use crate::vlq;

/// Channel used for all melodic assets
pub const MELODIC_CHANNEL: u8 = 0;
/// Reserved channel whose note numbers address percussion instruments
pub const PERCUSSION_CHANNEL: u8 = 9;

/// Event payload. Data bytes are validated at encode time, never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ProgramChange { program: u8 },
    ControlChange { controller: u8, value: u8 },
    NoteOn { key: u8, velocity: u8 },
    NoteOff { key: u8 },
    EndOfTrack,
}

/// One event with its delta time (ticks since the previous event)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackEvent {
    pub delta: u32,
    pub channel: u8,
    pub kind: EventKind,
}

impl TrackEvent {
    pub fn new(delta: u32, channel: u8, kind: EventKind) -> Self {
        Self { delta, channel, kind }
    }

    /// Serialize as `VLQ(delta) ++ status ++ data`.
    ///
    /// Every event is self-contained; there is no running-status
    /// elision.
    pub fn encode_into(&self, buf: &mut Vec<u8>) -> Result<()> {
        if self.channel > 0x0F {
            return Err(EncodeError::ChannelOutOfRange(self.channel));
        }
        vlq::encode_into(buf, self.delta);
        match self.kind {
            EventKind::ProgramChange { program } => {
                buf.push(0xC0 | self.channel);
                buf.push(data_byte("program", program)?);
            }
            EventKind::ControlChange { controller, value } => {
                buf.push(0xB0 | self.channel);
                buf.push(data_byte("controller", controller)?);
                buf.push(data_byte("controller value", value)?);
            }
            EventKind::NoteOn { key, velocity } => {
                buf.push(0x90 | self.channel);
                buf.push(data_byte("note number", key)?);
                buf.push(data_byte("velocity", velocity)?);
            }
            EventKind::NoteOff { key } => {
                buf.push(0x80 | self.channel);
                buf.push(data_byte("note number", key)?);
                buf.push(0x00);
            }
            EventKind::EndOfTrack => {
                buf.extend_from_slice(&[0xFF, 0x2F, 0x00]);
            }
        }
        Ok(())
    }
}

fn data_byte(field: &'static str, value: u8) -> Result<u8> {
    if value > 127 {
        return Err(EncodeError::DataByteOutOfRange { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(event: TrackEvent) -> Vec<u8> {
        let mut buf = Vec::new();
        event.encode_into(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_event_encodings() {
        let pc = TrackEvent::new(0, 0, EventKind::ProgramChange { program: 27 });
        assert_eq!(bytes(pc), [0x00, 0xC0, 0x1B]);

        let on = TrackEvent::new(0, 0, EventKind::NoteOn { key: 48, velocity: 100 });
        assert_eq!(bytes(on), [0x00, 0x90, 0x30, 0x64]);

        let off = TrackEvent::new(96, 0, EventKind::NoteOff { key: 48 });
        assert_eq!(bytes(off), [0x60, 0x80, 0x30, 0x00]);

        let eot = TrackEvent::new(0, 0, EventKind::EndOfTrack);
        assert_eq!(bytes(eot), [0x00, 0xFF, 0x2F, 0x00]);
    }

    #[test]
    fn test_percussion_channel_status() {
        let vol = TrackEvent::new(
            0,
            PERCUSSION_CHANNEL,
            EventKind::ControlChange { controller: 7, value: 100 },
        );
        assert_eq!(bytes(vol), [0x00, 0xB9, 0x07, 0x64]);

        let on = TrackEvent::new(0, PERCUSSION_CHANNEL, EventKind::NoteOn { key: 36, velocity: 100 });
        assert_eq!(bytes(on), [0x00, 0x99, 0x24, 0x64]);
    }

    #[test]
    fn test_long_delta_uses_vlq() {
        let off = TrackEvent::new(192, 0, EventKind::NoteOff { key: 60 });
        assert_eq!(bytes(off), [0x81, 0x40, 0x80, 0x3C, 0x00]);
    }

    #[test]
    fn test_data_byte_validation() {
        let mut buf = Vec::new();
        let bad = TrackEvent::new(0, 0, EventKind::NoteOn { key: 200, velocity: 100 });
        assert_eq!(
            bad.encode_into(&mut buf),
            Err(EncodeError::DataByteOutOfRange { field: "note number", value: 200 })
        );

        let bad_channel = TrackEvent::new(0, 16, EventKind::EndOfTrack);
        assert_eq!(
            bad_channel.encode_into(&mut buf),
            Err(EncodeError::ChannelOutOfRange(16))
        );
    }
}
