//! Core types for melody representation.

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::pitch::{NO_TONE, Pitch};

/// Fixed playback tempo. Callers wanting another tempo pre-scale beat counts.
pub const BEATS_PER_MINUTE: f64 = 150.0;

/// Duration of one beat in seconds (60 / 150).
pub const SECONDS_PER_BEAT: f64 = 60.0 / BEATS_PER_MINUTE;

/// Converts a beat count to seconds at the fixed tempo.
pub fn beats_to_seconds(beats: f64) -> f64 {
    beats * SECONDS_PER_BEAT
}

/// A single melody step: a pitch held for a number of beats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Pitch, f64)", into = "(Pitch, f64)")]
pub struct MelodyEvent {
    /// Pitch to sound (or silence)
    pub pitch: Pitch,
    /// Duration in beats (quarter note = 1)
    pub beats: f64,
}

impl MelodyEvent {
    /// Creates a new melody event.
    pub const fn new(pitch: Pitch, beats: f64) -> Self {
        Self { pitch, beats }
    }

    /// Duration of this event in seconds.
    pub fn seconds(&self) -> f64 {
        beats_to_seconds(self.beats)
    }

    fn validate(&self, index: usize) -> Result<()> {
        if !self.beats.is_finite() || self.beats <= 0.0 {
            return Err(Error::InvalidDuration {
                index,
                beats: self.beats,
            });
        }
        self.pitch.validate()
    }
}

impl From<(Pitch, f64)> for MelodyEvent {
    fn from((pitch, beats): (Pitch, f64)) -> Self {
        Self { pitch, beats }
    }
}

impl From<MelodyEvent> for (Pitch, f64) {
    fn from(event: MelodyEvent) -> Self {
        (event.pitch, event.beats)
    }
}

/// Shorthand constructor for MelodyEvent.
pub const fn n(pitch: Pitch, beats: f64) -> MelodyEvent {
    MelodyEvent::new(pitch, beats)
}

/// An immutable, validated sequence of melody events in playback order.
///
/// Every event has a finite, positive beat count and a defined pitch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MelodyEvent>", into = "Vec<MelodyEvent>")]
pub struct Melody {
    events: Vec<MelodyEvent>,
}

impl Melody {
    /// Creates a melody, rejecting it whole if any event is invalid.
    pub fn new(events: Vec<MelodyEvent>) -> Result<Self> {
        for (index, event) in events.iter().enumerate() {
            event.validate(index)?;
        }
        Ok(Self { events })
    }

    /// Creates a melody by copying events from a slice.
    pub fn from_slice(events: &[MelodyEvent]) -> Result<Self> {
        Self::new(events.to_vec())
    }

    /// Returns the empty melody.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the events in playback order.
    pub fn events(&self) -> &[MelodyEvent] {
        &self.events
    }

    /// Iterates the events in playback order.
    pub fn iter(&self) -> std::slice::Iter<'_, MelodyEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of beats.
    pub fn total_beats(&self) -> f64 {
        self.events.iter().map(|e| e.beats).sum()
    }

    /// Total playback duration in seconds.
    pub fn duration(&self) -> f64 {
        beats_to_seconds(self.total_beats())
    }
}

impl TryFrom<Vec<MelodyEvent>> for Melody {
    type Error = Error;

    fn try_from(events: Vec<MelodyEvent>) -> Result<Self> {
        Melody::new(events)
    }
}

impl From<Melody> for Vec<MelodyEvent> {
    fn from(melody: Melody) -> Self {
        melody.events
    }
}

impl<'a> IntoIterator for &'a Melody {
    type Item = &'a MelodyEvent;
    type IntoIter = std::slice::Iter<'a, MelodyEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// A tone placed on the playback timeline. Offsets are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduledTone {
    /// Frequency in Hz (0 for silence)
    pub frequency: f64,
    /// Start offset
    pub start: f64,
    /// Stop offset
    pub stop: f64,
}

impl ScheduledTone {
    /// Length of the tone in seconds.
    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }

    /// Returns true if nothing should sound for this tone.
    pub fn is_silent(&self) -> bool {
        self.frequency == NO_TONE
    }
}

/// A (pitch code, duration) pair for the remote device.
///
/// Serializes as `[code, duration_ms]` with the duration rounded to whole
/// milliseconds, which is the shape the device's play endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(u8, f64)")]
pub struct WireNote {
    /// Pitch wire code
    pub code: u8,
    /// Duration in milliseconds, scaled
    pub duration_ms: f64,
}

impl WireNote {
    pub const fn new(code: u8, duration_ms: f64) -> Self {
        Self { code, duration_ms }
    }

    /// Decodes the pitch this note refers to.
    pub fn pitch(&self) -> Result<Pitch> {
        Pitch::from_code(self.code)
    }
}

impl From<(u8, f64)> for WireNote {
    fn from((code, duration_ms): (u8, f64)) -> Self {
        Self { code, duration_ms }
    }
}

impl Serialize for WireNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.code)?;
        tuple.serialize_element(&(self.duration_ms.round() as u64))?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::*;

    #[test]
    fn test_tempo_constants() {
        assert_eq!(SECONDS_PER_BEAT, 0.4);
        assert!((beats_to_seconds(0.25) - 0.1).abs() < 1e-12);
        assert!((beats_to_seconds(2.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_n_shorthand() {
        let event = n(A4, QUARTER);
        assert_eq!(event.pitch, A4);
        assert_eq!(event.beats, 1.0);
        assert!((event.seconds() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_melody_new() {
        let melody = Melody::new(vec![n(C4, QUARTER), n(REST, EIGHTH), n(G4, HALF)]).unwrap();
        assert_eq!(melody.len(), 3);
        assert_eq!(melody.total_beats(), 3.5);
        assert!((melody.duration() - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_melody_empty() {
        let melody = Melody::new(vec![]).unwrap();
        assert!(melody.is_empty());
        assert_eq!(melody, Melody::empty());
        assert_eq!(melody.duration(), 0.0);
    }

    #[test]
    fn test_melody_rejects_invalid_duration() {
        for beats in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Melody::new(vec![n(C4, QUARTER), n(D4, beats)]).unwrap_err();
            match err {
                Error::InvalidDuration { index, .. } => assert_eq!(index, 1),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_melody_rejects_unknown_pitch() {
        let b8 = Pitch::note(crate::pitch::PitchClass::B, 8);
        let err = Melody::new(vec![n(C4, QUARTER), n(b8, QUARTER)]).unwrap_err();
        assert!(matches!(err, Error::UnknownPitch(_)));
    }

    #[test]
    fn test_melody_serde() {
        let melody: Melody = serde_json::from_str(r#"[["A5", 0.25], ["rest", 0.5], [181, 1]]"#).unwrap();
        assert_eq!(melody.events(), &[n(A5, SIXTEENTH), n(REST, EIGHTH), n(AS5, QUARTER)]);

        let json = serde_json::to_string(&melody).unwrap();
        assert_eq!(json, r#"[["A5",0.25],["rest",0.5],["A#5",1.0]]"#);

        assert!(serde_json::from_str::<Melody>(r#"[["A5", 0]]"#).is_err());
        assert!(serde_json::from_str::<Melody>(r#"[["A5", -1]]"#).is_err());
    }

    #[test]
    fn test_melody_yaml() {
        let yaml = "- [C#4, 0.5]\n- [Eb4, 1.5]\n- [rest, 1]\n";
        let melody: Melody = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(melody.events(), &[n(CS4, EIGHTH), n(DS4, DOT_QUARTER), n(REST, QUARTER)]);
    }

    #[test]
    fn test_scheduled_tone() {
        let tone = ScheduledTone { frequency: 440.0, start: 0.1, stop: 0.5 };
        assert!((tone.duration() - 0.4).abs() < 1e-12);
        assert!(!tone.is_silent());

        let rest = ScheduledTone { frequency: 0.0, start: 0.5, stop: 0.9 };
        assert!(rest.is_silent());
    }

    #[test]
    fn test_wire_note_serializes_as_pair() {
        let note = WireNote::new(A5.code(), 100.0);
        assert_eq!(serde_json::to_string(&note).unwrap(), "[165,100]");

        let rounded = WireNote::new(0, 33.4);
        assert_eq!(serde_json::to_string(&rounded).unwrap(), "[0,33]");

        let decoded: WireNote = serde_json::from_str("[181,100]").unwrap();
        assert_eq!(decoded.pitch().unwrap(), AS5);
    }
}
