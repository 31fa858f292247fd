//! Melody scheduling for the Kroneum buzzer.
//!
//! This crate provides:
//!
//! - `pitch`: the pitch vocabulary, frequency table and single-byte wire codes
//! - `notes`: named pitches (`A4`, `CS5`, ...) and beat values
//! - `types`: melodies, scheduled tones and wire notes
//! - `schedule`: the local timeline and the device encoding of a melody
//! - `catalog`: melodies built into the device firmware
//! - `pcm`: square-wave preview rendering
//!
//! # Example
//!
//! ```rust
//! use kroneum_melody::notes::*;
//! use kroneum_melody::{Melody, n, schedule_local, to_wire_encoding};
//!
//! let melody = Melody::new(vec![n(A5, SIXTEENTH), n(AS5, SIXTEENTH), n(B5, SIXTEENTH)])?;
//!
//! // Local preview timeline, starting at t = 0
//! let tones: Vec<_> = schedule_local(&melody, 0.0).collect();
//! assert_eq!(tones[1].frequency, 932.33);
//!
//! // Payload for the device, in milliseconds
//! let wire = to_wire_encoding(&melody, 1.0)?;
//! assert_eq!(serde_json::to_string(&wire)?, "[[165,100],[181,100],[197,100]]");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod error;
pub mod notes;
pub mod pcm;
pub mod pitch;
pub mod schedule;
pub mod types;

pub use catalog::{ALL_PRESETS, Preset};
pub use error::{Error, Result};
pub use pitch::{Pitch, PitchClass, frequency_of};
pub use schedule::{
    DEFAULT_SCALE_FACTOR, PlaybackPlan, Schedule, plan, schedule_events, schedule_local,
    to_wire_encoding,
};
pub use types::{
    BEATS_PER_MINUTE, Melody, MelodyEvent, SECONDS_PER_BEAT, ScheduledTone, WireNote, n,
};
