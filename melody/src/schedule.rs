//! Melody scheduling.
//!
//! Turns a [`Melody`] into two views derived from the same value:
//!
//! - a local timeline of [`ScheduledTone`]s for audio preview, and
//! - a [`WireNote`] encoding for the remote buzzer.
//!
//! Both are pure computations. Nothing here sleeps or touches a clock; the
//! audio backend realizes the schedule against its own time origin.
//!
//! # Wire duration convention
//!
//! `duration_ms = beats * SECONDS_PER_BEAT * 1000 * scale_factor`.
//!
//! With the default scale factor of 1.0 this is plain milliseconds at the
//! fixed tempo, i.e. 400 ms per beat, so a sixteenth note (0.25 beat) is sent
//! as 100. A scale factor of 400 turns the same sixteenth into 40000.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Melody, MelodyEvent, ScheduledTone, WireNote, beats_to_seconds};

/// Scale factor that sends real milliseconds to the device.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

/// Lazy timeline over a melody.
///
/// Tones are back-to-back: each starts exactly where the previous one
/// stopped and the first starts at the origin.
#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    events: std::slice::Iter<'a, MelodyEvent>,
    cursor: f64,
}

impl Schedule<'_> {
    /// Current cursor: the start offset of the next tone.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Offset at which the last tone stops, without consuming the schedule.
    pub fn end(&self) -> f64 {
        self.clone().last().map_or(self.cursor, |tone| tone.stop)
    }
}

impl Iterator for Schedule<'_> {
    type Item = ScheduledTone;

    fn next(&mut self) -> Option<ScheduledTone> {
        let event = self.events.next()?;
        let start = self.cursor;
        let stop = start + beats_to_seconds(event.beats);
        self.cursor = stop;

        Some(ScheduledTone {
            frequency: event.pitch.frequency(),
            start,
            stop,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.events.size_hint()
    }
}

impl ExactSizeIterator for Schedule<'_> {}

/// Schedules a melody starting at `origin` seconds.
pub fn schedule_local(melody: &Melody, origin: f64) -> Schedule<'_> {
    debug!(
        events = melody.len(),
        origin,
        duration = melody.duration(),
        "scheduling melody"
    );
    Schedule {
        events: melody.events().iter(),
        cursor: origin,
    }
}

/// Validates raw events and schedules them.
///
/// Any invalid event fails the whole call; no partial timeline is returned.
pub fn schedule_events(events: &[MelodyEvent], origin: f64) -> Result<Vec<ScheduledTone>> {
    let melody = Melody::from_slice(events)?;
    Ok(schedule_local(&melody, origin).collect())
}

fn check_scale_factor(scale_factor: f64) -> Result<()> {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(Error::InvalidScaleFactor(scale_factor));
    }
    Ok(())
}

/// Encodes a melody for the remote device.
pub fn to_wire_encoding(melody: &Melody, scale_factor: f64) -> Result<Vec<WireNote>> {
    check_scale_factor(scale_factor)?;

    let notes = melody
        .iter()
        .map(|event| WireNote {
            code: event.pitch.code(),
            duration_ms: beats_to_seconds(event.beats) * 1000.0 * scale_factor,
        })
        .collect::<Vec<_>>();

    debug!(notes = notes.len(), scale_factor, "encoded melody for device");
    Ok(notes)
}

/// Local timeline and device encoding derived together from one melody.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackPlan {
    pub tones: Vec<ScheduledTone>,
    pub wire: Vec<WireNote>,
}

impl PlaybackPlan {
    /// Offset at which the local timeline ends.
    pub fn end(&self) -> Option<f64> {
        self.tones.last().map(|t| t.stop)
    }
}

/// Builds both views of a melody.
pub fn plan(melody: &Melody, origin: f64, scale_factor: f64) -> Result<PlaybackPlan> {
    let wire = to_wire_encoding(melody, scale_factor)?;
    let tones = schedule_local(melody, origin).collect();
    Ok(PlaybackPlan { tones, wire })
}
