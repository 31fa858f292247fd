//! Pitch vocabulary shared by local playback and the device.
//!
//! A [`Pitch`] is either [`Pitch::Silence`] or a note made of a semitone
//! ([`PitchClass`]) and an octave. The 97 sounding pitches run from C0 to C8.
//!
//! Every pitch has a single-byte wire code: the high nibble holds
//! `semitone + 1`, the low nibble holds the octave, and silence is `0x00`.
//! For example A4 is `0xa4` and C#5 is `0x25`.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Number of sounding pitches (C0 through C8).
pub const PITCH_COUNT: usize = 97;

/// Wire code reserved for silence.
pub const SILENCE_CODE: u8 = 0x00;

/// Frequency returned for silence and undefined pitches.
pub const NO_TONE: f64 = 0.0;

/// Equal-tempered frequencies (A4 = 440 Hz), indexed by `octave * 12 + semitone`.
const FREQUENCIES: [f64; PITCH_COUNT] = [
    // Octave 0
    16.35, 17.32, 18.35, 19.45, 20.60, 21.83, 23.12, 24.50, 25.96, 27.50, 29.14, 30.87,
    // Octave 1
    32.70, 34.65, 36.71, 38.89, 41.20, 43.65, 46.25, 49.00, 51.91, 55.00, 58.27, 61.74,
    // Octave 2
    65.41, 69.30, 73.42, 77.78, 82.41, 87.31, 92.50, 98.00, 103.83, 110.00, 116.54, 123.47,
    // Octave 3
    130.81, 138.59, 146.83, 155.56, 164.81, 174.61, 185.00, 196.00, 207.65, 220.00, 233.08,
    246.94,
    // Octave 4
    261.63, 277.18, 293.66, 311.13, 329.63, 349.23, 369.99, 392.00, 415.30, 440.00, 466.16,
    493.88,
    // Octave 5
    523.25, 554.37, 587.33, 622.25, 659.26, 698.46, 739.99, 783.99, 830.61, 880.00, 932.33,
    987.77,
    // Octave 6
    1046.50, 1108.73, 1174.66, 1244.51, 1318.51, 1396.91, 1479.98, 1567.98, 1661.22, 1760.00,
    1864.66, 1975.53,
    // Octave 7
    2093.00, 2217.46, 2349.32, 2489.02, 2637.02, 2793.83, 2959.96, 3135.96, 3322.44, 3520.00,
    3729.31, 3951.07,
    // Octave 8
    4186.01,
];

/// Table index of A4, the tuning reference.
const A4_INDEX: i32 = 57;

/// Pitch classes (sharps only; flats are parsed onto their enharmonic sharp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in ascending order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitone number (C=0, C#=1, ..., B=11).
    pub const fn semitone(self) -> u8 {
        self as u8
    }

    /// Returns the pitch class for a semitone number.
    pub fn from_semitone(semitone: u8) -> Option<Self> {
        Self::ALL.get(semitone as usize).copied()
    }

    /// Canonical name, e.g. `C#`.
    pub const fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

/// A discrete musical pitch or silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pitch {
    /// No tone. Advances time without sounding.
    Silence,
    /// A sounding note.
    Note { class: PitchClass, octave: u8 },
}

impl Pitch {
    /// Creates a note pitch. Validity is checked by [`Pitch::is_defined`].
    pub const fn note(class: PitchClass, octave: u8) -> Self {
        Pitch::Note { class, octave }
    }

    /// Returns true for silence.
    pub fn is_silence(&self) -> bool {
        matches!(self, Pitch::Silence)
    }

    /// Returns true for silence and for the 97 pitches C0..=C8.
    pub fn is_defined(&self) -> bool {
        match self {
            Pitch::Silence => true,
            Pitch::Note { .. } => self.table_index().is_some(),
        }
    }

    /// Rejects pitches outside the defined range.
    pub fn validate(&self) -> Result<()> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(Error::UnknownPitch(self.to_string()))
        }
    }

    fn table_index(&self) -> Option<usize> {
        match *self {
            Pitch::Silence => None,
            Pitch::Note { class, octave } => {
                let index = octave as usize * 12 + class.semitone() as usize;
                (index < PITCH_COUNT).then_some(index)
            }
        }
    }

    /// Frequency in Hz from the equal-tempered table.
    ///
    /// Never fails: silence and undefined pitches yield [`NO_TONE`] so a
    /// silent beat can be scheduled the same way as a sounding one.
    pub fn frequency(&self) -> f64 {
        self.table_index().map_or(NO_TONE, |i| FREQUENCIES[i])
    }

    /// Unrounded equal-tempered frequency, `440 * 2^((n - 57) / 12)`.
    pub fn equal_tempered_frequency(&self) -> f64 {
        match self.table_index() {
            Some(i) => 440.0 * 2f64.powf((i as i32 - A4_INDEX) as f64 / 12.0),
            None => NO_TONE,
        }
    }

    /// Single-byte wire code.
    ///
    /// Undefined pitches encode as [`SILENCE_CODE`], matching their
    /// [`NO_TONE`] frequency, so no pitch can take another pitch's code.
    pub fn code(&self) -> u8 {
        match *self {
            Pitch::Note { class, octave } if self.is_defined() => {
                ((class.semitone() + 1) << 4) | octave
            }
            _ => SILENCE_CODE,
        }
    }

    /// Decodes a wire code.
    pub fn from_code(code: u8) -> Result<Self> {
        if code == SILENCE_CODE {
            return Ok(Pitch::Silence);
        }

        let class = (code >> 4)
            .checked_sub(1)
            .and_then(PitchClass::from_semitone)
            .ok_or_else(|| Error::unknown_code(code))?;
        let pitch = Pitch::note(class, code & 0x0f);
        if !pitch.is_defined() {
            return Err(Error::unknown_code(code));
        }
        Ok(pitch)
    }

    /// Iterates the 97 sounding pitches from C0 to C8.
    pub fn all() -> impl Iterator<Item = Pitch> {
        (0..PITCH_COUNT).map(|i| Pitch::note(PitchClass::ALL[i % 12], (i / 12) as u8))
    }
}

impl TryFrom<u8> for Pitch {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Pitch::from_code(code)
    }
}

impl From<Pitch> for u8 {
    fn from(pitch: Pitch) -> u8 {
        pitch.code()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pitch::Silence => write!(f, "rest"),
            Pitch::Note { class, octave } => write!(f, "{}{}", class.name(), octave),
        }
    }
}

impl FromStr for Pitch {
    type Err = Error;

    /// Parses `C4`, `C#4`, `CSharp4`, `Db4` or `rest`/`silence`/`-`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let unknown = || Error::UnknownPitch(s.to_string());

        if matches!(s.to_ascii_lowercase().as_str(), "rest" | "silence" | "-") {
            return Ok(Pitch::Silence);
        }

        let digits_at = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(unknown)?;
        let (name, octave) = s.split_at(digits_at);
        let octave: i32 = octave.parse().map_err(|_| unknown())?;

        let mut chars = name.chars();
        let base: i32 = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(unknown()),
        };
        let accidental: i32 = match chars.as_str().to_ascii_lowercase().as_str() {
            "" => 0,
            "#" | "s" | "sharp" => 1,
            "b" | "flat" => -1,
            _ => return Err(unknown()),
        };

        // Cb and B# cross the octave boundary.
        let absolute = octave * 12 + base + accidental;
        if absolute < 0 {
            return Err(unknown());
        }
        let class = PitchClass::from_semitone((absolute % 12) as u8).ok_or_else(unknown)?;
        let octave = u8::try_from(absolute / 12).map_err(|_| unknown())?;

        let pitch = Pitch::note(class, octave);
        if !pitch.is_defined() {
            return Err(unknown());
        }
        Ok(pitch)
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pitch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PitchVisitor;

        impl Visitor<'_> for PitchVisitor {
            type Value = Pitch;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a pitch name such as \"A#4\" or a wire code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Pitch, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Pitch, E> {
                let code = u8::try_from(v)
                    .map_err(|_| E::custom(Error::UnknownPitch(v.to_string())))?;
                Pitch::from_code(code).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Pitch, E> {
                let code = u8::try_from(v)
                    .map_err(|_| E::custom(Error::UnknownPitch(v.to_string())))?;
                Pitch::from_code(code).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PitchVisitor)
    }
}

/// Frequency lookup for any pitch; silence and undefined pitches yield 0 Hz.
pub fn frequency_of(pitch: Pitch) -> f64 {
    pitch.frequency()
}
