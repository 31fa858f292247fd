//! Timeline and encoding properties checked over every built-in preset.

use kroneum_melody::notes::*;
use kroneum_melody::{
    ALL_PRESETS, Error, Melody, Pitch, SECONDS_PER_BEAT, frequency_of, n, schedule_events,
    schedule_local, to_wire_encoding,
};

const EPS: f64 = 1e-9;

fn sample_melodies() -> Vec<Melody> {
    let mut melodies: Vec<Melody> = ALL_PRESETS.iter().map(|p| p.melody().unwrap()).collect();
    melodies.push(
        Melody::new(vec![
            n(C4, QUARTER),
            n(REST, TRIPLET8),
            n(E4, TRIPLET8),
            n(G4, DOT_HALF),
            n(C8, WHOLE),
            n(C0, SIXTEENTH),
        ])
        .unwrap(),
    );
    melodies
}

#[test]
fn total_tone_time_matches_beats() {
    for melody in sample_melodies() {
        let played: f64 = schedule_local(&melody, 0.0).map(|t| t.duration()).sum();
        let expected = melody.total_beats() * SECONDS_PER_BEAT;
        assert!((played - expected).abs() < 1e-6, "{played} != {expected}");
    }
}

#[test]
fn tones_are_contiguous_from_origin() {
    for origin in [0.0, 0.25, 1234.5] {
        for melody in sample_melodies() {
            let tones: Vec<_> = schedule_local(&melody, origin).collect();
            assert_eq!(tones.len(), melody.len());
            assert_eq!(tones[0].start, origin);
            for pair in tones.windows(2) {
                assert_eq!(pair[1].start, pair[0].stop);
                assert!(pair[0].stop > pair[0].start);
            }
        }
    }
}

#[test]
fn tone_frequencies_follow_pitch_table() {
    for melody in sample_melodies() {
        for (tone, event) in schedule_local(&melody, 0.0).zip(melody.iter()) {
            assert_eq!(tone.frequency, frequency_of(event.pitch));
            assert_eq!(tone.is_silent(), event.pitch == Pitch::Silence);
        }
    }
}

#[test]
fn wire_durations_match_local_durations() {
    for scale in [0.001, 1.0, 2.5, 400.0] {
        for melody in sample_melodies() {
            let wire = to_wire_encoding(&melody, scale).unwrap();
            let tones: Vec<_> = schedule_local(&melody, 0.0).collect();
            assert_eq!(wire.len(), tones.len());

            for ((note, tone), event) in wire.iter().zip(&tones).zip(melody.iter()) {
                assert!((note.duration_ms / (1000.0 * scale) - tone.duration()).abs() < EPS);
                assert_eq!(note.pitch().unwrap(), event.pitch);
            }
        }
    }
}

#[test]
fn every_pitch_is_within_a_hundredth_of_a_hertz() {
    let mut count = 0;
    for pitch in Pitch::all() {
        assert!(pitch.frequency() > 0.0);
        assert!((pitch.frequency() - pitch.equal_tempered_frequency()).abs() <= 0.01);
        count += 1;
    }
    assert_eq!(count, 97);
    assert_eq!(frequency_of(A4), 440.0);
    assert_eq!(frequency_of(C0), 16.35);
    assert_eq!(frequency_of(C8), 4186.01);
    assert_eq!(frequency_of(REST), 0.0);
}

#[test]
fn invalid_beats_produce_no_output() {
    for beats in [0.0, -1.0] {
        let events = [n(A5, SIXTEENTH), n(B5, beats), n(C6, SIXTEENTH)];
        match schedule_events(&events, 0.0) {
            Err(Error::InvalidDuration { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidDuration, got {other:?}"),
        }
    }
}

#[test]
fn empty_melody_is_a_no_op() {
    let melody = Melody::empty();
    let schedule = schedule_local(&melody, 5.0);
    assert_eq!(schedule.end(), 5.0);
    assert_eq!(schedule.count(), 0);
    assert!(to_wire_encoding(&melody, 400.0).unwrap().is_empty());
}
