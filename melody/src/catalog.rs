//! Built-in melodies the buzzer ships with.
//!
//! Durations follow the device firmware, where a short tone lasts 100 ms and a
//! long one 200 ms. At 150 BPM those are a sixteenth and an eighth note.

use crate::error::Result;
use crate::notes::*;
use crate::types::{Melody, MelodyEvent, n};

/// All built-in presets.
pub static ALL_PRESETS: &[&Preset] = &[
    &PRESET_BEEP,
    &PRESET_SETUP,
    &PRESET_RESET,
    &PRESET_DIAGNOSTICS,
    &PRESET_ALARM,
];

/// A named, built-in melody.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Unique identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    events: &'static [MelodyEvent],
}

impl Preset {
    pub const fn new(id: &'static str, name: &'static str, events: &'static [MelodyEvent]) -> Self {
        Self { id, name, events }
    }

    /// Raw events of this preset.
    pub fn events(&self) -> &'static [MelodyEvent] {
        self.events
    }

    /// Validated melody for this preset.
    pub fn melody(&self) -> Result<Melody> {
        Melody::from_slice(self.events)
    }

    /// Returns a preset by its ID.
    pub fn by_id(id: &str) -> Option<&'static Preset> {
        ALL_PRESETS.iter().find(|p| p.id == id).copied()
    }

    /// Returns all preset IDs.
    pub fn ids() -> Vec<&'static str> {
        ALL_PRESETS.iter().map(|p| p.id).collect()
    }
}

/// Single short beep, e.g. when an alarm is set.
pub static PRESET_BEEP: Preset = Preset::new("beep", "Beep", &[n(G5, SIXTEENTH)]);

/// Played when the device enters setup mode.
pub static PRESET_SETUP: Preset =
    Preset::new("setup", "Setup", &[n(DS5, SIXTEENTH), n(DS5, SIXTEENTH)]);

const CHROMATIC_A5_A6: [MelodyEvent; 13] = [
    n(A5, SIXTEENTH),
    n(AS5, SIXTEENTH),
    n(B5, SIXTEENTH),
    n(C6, SIXTEENTH),
    n(CS6, SIXTEENTH),
    n(D6, SIXTEENTH),
    n(DS6, SIXTEENTH),
    n(E6, SIXTEENTH),
    n(F6, SIXTEENTH),
    n(FS6, SIXTEENTH),
    n(G6, SIXTEENTH),
    n(GS6, SIXTEENTH),
    n(A6, SIXTEENTH),
];

/// Played when the alarm is reset.
pub static PRESET_RESET: Preset = Preset::new("reset", "Reset", &CHROMATIC_A5_A6);

/// Console "play melody" check, previewed locally and sent to the device.
pub static PRESET_DIAGNOSTICS: Preset =
    Preset::new("diagnostics", "Diagnostics", &CHROMATIC_A5_A6);

/// Played when the alarm fires.
pub static PRESET_ALARM: Preset = Preset::new(
    "alarm",
    "Alarm",
    &[
        n(B7, SIXTEENTH), n(GS7, SIXTEENTH), n(DS7, EIGHTH),
        n(GS7, SIXTEENTH), n(DS7, SIXTEENTH), n(FS7, EIGHTH),
        n(DS7, SIXTEENTH), n(FS7, SIXTEENTH), n(DS7, EIGHTH),
        n(REST, EIGHTH),
        n(DS7, EIGHTH), n(FS7, SIXTEENTH), n(DS7, SIXTEENTH),
        n(F7, SIXTEENTH), n(DS7, SIXTEENTH), n(F7, SIXTEENTH),
        n(DS7, SIXTEENTH), n(D7, SIXTEENTH), n(F7, SIXTEENTH),
        n(CS7, SIXTEENTH), n(F7, SIXTEENTH), n(FS7, EIGHTH),
        n(DS7, EIGHTH),
        n(REST, EIGHTH),
    ],
);
