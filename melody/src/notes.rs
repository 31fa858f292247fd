//! Named pitches and note values.
//!
//! Sharps use an `S` suffix on the letter (`CS4` is C#4). Note values are in
//! beats, where a quarter note is one beat.

use super::pitch::{Pitch, PitchClass};

// Octave 0
pub const C0: Pitch = Pitch::note(PitchClass::C, 0);
pub const CS0: Pitch = Pitch::note(PitchClass::CSharp, 0);
pub const D0: Pitch = Pitch::note(PitchClass::D, 0);
pub const DS0: Pitch = Pitch::note(PitchClass::DSharp, 0);
pub const E0: Pitch = Pitch::note(PitchClass::E, 0);
pub const F0: Pitch = Pitch::note(PitchClass::F, 0);
pub const FS0: Pitch = Pitch::note(PitchClass::FSharp, 0);
pub const G0: Pitch = Pitch::note(PitchClass::G, 0);
pub const GS0: Pitch = Pitch::note(PitchClass::GSharp, 0);
pub const A0: Pitch = Pitch::note(PitchClass::A, 0);
pub const AS0: Pitch = Pitch::note(PitchClass::ASharp, 0);
pub const B0: Pitch = Pitch::note(PitchClass::B, 0);

// Octave 1
pub const C1: Pitch = Pitch::note(PitchClass::C, 1);
pub const CS1: Pitch = Pitch::note(PitchClass::CSharp, 1);
pub const D1: Pitch = Pitch::note(PitchClass::D, 1);
pub const DS1: Pitch = Pitch::note(PitchClass::DSharp, 1);
pub const E1: Pitch = Pitch::note(PitchClass::E, 1);
pub const F1: Pitch = Pitch::note(PitchClass::F, 1);
pub const FS1: Pitch = Pitch::note(PitchClass::FSharp, 1);
pub const G1: Pitch = Pitch::note(PitchClass::G, 1);
pub const GS1: Pitch = Pitch::note(PitchClass::GSharp, 1);
pub const A1: Pitch = Pitch::note(PitchClass::A, 1);
pub const AS1: Pitch = Pitch::note(PitchClass::ASharp, 1);
pub const B1: Pitch = Pitch::note(PitchClass::B, 1);

// Octave 2
pub const C2: Pitch = Pitch::note(PitchClass::C, 2);
pub const CS2: Pitch = Pitch::note(PitchClass::CSharp, 2);
pub const D2: Pitch = Pitch::note(PitchClass::D, 2);
pub const DS2: Pitch = Pitch::note(PitchClass::DSharp, 2);
pub const E2: Pitch = Pitch::note(PitchClass::E, 2);
pub const F2: Pitch = Pitch::note(PitchClass::F, 2);
pub const FS2: Pitch = Pitch::note(PitchClass::FSharp, 2);
pub const G2: Pitch = Pitch::note(PitchClass::G, 2);
pub const GS2: Pitch = Pitch::note(PitchClass::GSharp, 2);
pub const A2: Pitch = Pitch::note(PitchClass::A, 2);
pub const AS2: Pitch = Pitch::note(PitchClass::ASharp, 2);
pub const B2: Pitch = Pitch::note(PitchClass::B, 2);

// Octave 3
pub const C3: Pitch = Pitch::note(PitchClass::C, 3);
pub const CS3: Pitch = Pitch::note(PitchClass::CSharp, 3);
pub const D3: Pitch = Pitch::note(PitchClass::D, 3);
pub const DS3: Pitch = Pitch::note(PitchClass::DSharp, 3);
pub const E3: Pitch = Pitch::note(PitchClass::E, 3);
pub const F3: Pitch = Pitch::note(PitchClass::F, 3);
pub const FS3: Pitch = Pitch::note(PitchClass::FSharp, 3);
pub const G3: Pitch = Pitch::note(PitchClass::G, 3);
pub const GS3: Pitch = Pitch::note(PitchClass::GSharp, 3);
pub const A3: Pitch = Pitch::note(PitchClass::A, 3);
pub const AS3: Pitch = Pitch::note(PitchClass::ASharp, 3);
pub const B3: Pitch = Pitch::note(PitchClass::B, 3);

// Octave 4
pub const C4: Pitch = Pitch::note(PitchClass::C, 4);
pub const CS4: Pitch = Pitch::note(PitchClass::CSharp, 4);
pub const D4: Pitch = Pitch::note(PitchClass::D, 4);
pub const DS4: Pitch = Pitch::note(PitchClass::DSharp, 4);
pub const E4: Pitch = Pitch::note(PitchClass::E, 4);
pub const F4: Pitch = Pitch::note(PitchClass::F, 4);
pub const FS4: Pitch = Pitch::note(PitchClass::FSharp, 4);
pub const G4: Pitch = Pitch::note(PitchClass::G, 4);
pub const GS4: Pitch = Pitch::note(PitchClass::GSharp, 4);
pub const A4: Pitch = Pitch::note(PitchClass::A, 4);
pub const AS4: Pitch = Pitch::note(PitchClass::ASharp, 4);
pub const B4: Pitch = Pitch::note(PitchClass::B, 4);

// Octave 5
pub const C5: Pitch = Pitch::note(PitchClass::C, 5);
pub const CS5: Pitch = Pitch::note(PitchClass::CSharp, 5);
pub const D5: Pitch = Pitch::note(PitchClass::D, 5);
pub const DS5: Pitch = Pitch::note(PitchClass::DSharp, 5);
pub const E5: Pitch = Pitch::note(PitchClass::E, 5);
pub const F5: Pitch = Pitch::note(PitchClass::F, 5);
pub const FS5: Pitch = Pitch::note(PitchClass::FSharp, 5);
pub const G5: Pitch = Pitch::note(PitchClass::G, 5);
pub const GS5: Pitch = Pitch::note(PitchClass::GSharp, 5);
pub const A5: Pitch = Pitch::note(PitchClass::A, 5);
pub const AS5: Pitch = Pitch::note(PitchClass::ASharp, 5);
pub const B5: Pitch = Pitch::note(PitchClass::B, 5);

// Octave 6
pub const C6: Pitch = Pitch::note(PitchClass::C, 6);
pub const CS6: Pitch = Pitch::note(PitchClass::CSharp, 6);
pub const D6: Pitch = Pitch::note(PitchClass::D, 6);
pub const DS6: Pitch = Pitch::note(PitchClass::DSharp, 6);
pub const E6: Pitch = Pitch::note(PitchClass::E, 6);
pub const F6: Pitch = Pitch::note(PitchClass::F, 6);
pub const FS6: Pitch = Pitch::note(PitchClass::FSharp, 6);
pub const G6: Pitch = Pitch::note(PitchClass::G, 6);
pub const GS6: Pitch = Pitch::note(PitchClass::GSharp, 6);
pub const A6: Pitch = Pitch::note(PitchClass::A, 6);
pub const AS6: Pitch = Pitch::note(PitchClass::ASharp, 6);
pub const B6: Pitch = Pitch::note(PitchClass::B, 6);

// Octave 7
pub const C7: Pitch = Pitch::note(PitchClass::C, 7);
pub const CS7: Pitch = Pitch::note(PitchClass::CSharp, 7);
pub const D7: Pitch = Pitch::note(PitchClass::D, 7);
pub const DS7: Pitch = Pitch::note(PitchClass::DSharp, 7);
pub const E7: Pitch = Pitch::note(PitchClass::E, 7);
pub const F7: Pitch = Pitch::note(PitchClass::F, 7);
pub const FS7: Pitch = Pitch::note(PitchClass::FSharp, 7);
pub const G7: Pitch = Pitch::note(PitchClass::G, 7);
pub const GS7: Pitch = Pitch::note(PitchClass::GSharp, 7);
pub const A7: Pitch = Pitch::note(PitchClass::A, 7);
pub const AS7: Pitch = Pitch::note(PitchClass::ASharp, 7);
pub const B7: Pitch = Pitch::note(PitchClass::B, 7);

// Octave 8
pub const C8: Pitch = Pitch::note(PitchClass::C, 8);

// Rest (silence)
pub const REST: Pitch = Pitch::Silence;

// Note value constants (in beats, quarter note = 1)
pub const WHOLE: f64 = 4.0;
pub const HALF: f64 = 2.0;
pub const QUARTER: f64 = 1.0;
pub const EIGHTH: f64 = 0.5;
pub const SIXTEENTH: f64 = 0.25;
pub const DOT_WHOLE: f64 = 6.0;
pub const DOT_HALF: f64 = 3.0;
pub const DOT_QUARTER: f64 = 1.5;
pub const DOT_EIGHTH: f64 = 0.75;
pub const TRIPLET8: f64 = 1.0 / 3.0;
