//! Event-list construction for single-hit assets

use crate::event::{EventKind, TrackEvent, MELODIC_CHANNEL, PERCUSSION_CHANNEL};
use crate::pitch::Voicing;

/// Events for one melodic hit: program selection, simultaneous note
/// starts, a hold of `hold_ticks`, simultaneous note stops, end
/// marker.
///
/// Only the first NoteOff carries the hold delta; the rest follow at
/// delta 0 so all voices release together.
pub fn melodic_hit(voicing: &Voicing, program: u8, hold_ticks: u32, velocity: u8) -> Vec<TrackEvent> {
    let ch = MELODIC_CHANNEL;
    let mut events = Vec::with_capacity(voicing.notes().len() * 2 + 2);
    events.push(TrackEvent::new(0, ch, EventKind::ProgramChange { program }));
    for &key in voicing.notes() {
        events.push(TrackEvent::new(0, ch, EventKind::NoteOn { key, velocity }));
    }
    for (i, &key) in voicing.notes().iter().enumerate() {
        let delta = if i == 0 { hold_ticks } else { 0 };
        events.push(TrackEvent::new(delta, ch, EventKind::NoteOff { key }));
    }
    events.push(TrackEvent::new(0, ch, EventKind::EndOfTrack));
    events
}

/// Events for one percussion hit on channel 9: channel volume, a
/// single NoteOn/NoteOff pair, end marker. No program selection; the
/// key chooses the instrument.
pub fn percussion_hit(key: u8, hold_ticks: u32, velocity: u8) -> Vec<TrackEvent> {
    let ch = PERCUSSION_CHANNEL;
    vec![
        TrackEvent::new(0, ch, EventKind::ControlChange { controller: 7, value: 100 }),
        TrackEvent::new(0, ch, EventKind::NoteOn { key, velocity }),
        TrackEvent::new(hold_ticks, ch, EventKind::NoteOff { key }),
        TrackEvent::new(0, ch, EventKind::EndOfTrack),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::ChordQuality;

    #[test]
    fn test_melodic_hit_shape() {
        let v = Voicing::chord(48, ChordQuality::Maj7).unwrap();
        let events = melodic_hit(&v, 27, 96, 100);
        assert_eq!(events.len(), 10);

        assert_eq!(events[0].kind, EventKind::ProgramChange { program: 27 });
        for e in &events[1..5] {
            assert_eq!(e.delta, 0);
            assert!(matches!(e.kind, EventKind::NoteOn { velocity: 100, .. }));
        }
        // Hold carried once, remaining releases simultaneous
        assert_eq!(events[5].delta, 96);
        assert!(matches!(events[5].kind, EventKind::NoteOff { key: 48 }));
        for e in &events[6..9] {
            assert_eq!(e.delta, 0);
            assert!(matches!(e.kind, EventKind::NoteOff { .. }));
        }
        assert_eq!(events[9].kind, EventKind::EndOfTrack);
    }

    #[test]
    fn test_hold_is_a_parameter() {
        let v = Voicing::single(60).unwrap();
        let events = melodic_hit(&v, 65, 192, 127);
        assert_eq!(events[2].delta, 192);
    }

    #[test]
    fn test_percussion_hit_shape() {
        let events = percussion_hit(36, 96, 100);
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e.channel == PERCUSSION_CHANNEL));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e.kind, EventKind::ProgramChange { .. }))
        );
        assert_eq!(
            events[0].kind,
            EventKind::ControlChange { controller: 7, value: 100 }
        );
        assert_eq!(events[1].kind, EventKind::NoteOn { key: 36, velocity: 100 });
        assert_eq!(events[2].kind, EventKind::NoteOff { key: 36 });
        assert_eq!(events[2].delta, 96);
    }
}
