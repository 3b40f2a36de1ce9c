//! Time-to-phase mapping integration tests
//!
//! Checks the documented phase windows, boundary behaviour and the slider's
//! wall-clock derivation across the whole day.

use proptest::prelude::*;

use time_cycle::core::{map_time, ClockTime, Phase, PhaseProgress, SliderPosition};

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_documented_examples() {
    let cases = [
        ((5, 0), Phase::Dawn, 0.0),
        ((7, 59), Phase::Dawn, 179.0 / 180.0),
        ((8, 0), Phase::Morning, 0.0),
        ((11, 0), Phase::Noon, 0.0),
        ((14, 0), Phase::Afternoon, 0.0),
        ((17, 59), Phase::Afternoon, 239.0 / 240.0),
        ((18, 0), Phase::Evening, 0.0),
        ((21, 0), Phase::Night, 0.0),
        ((23, 59), Phase::Night, 179.0 / 480.0),
        ((0, 0), Phase::Night, 180.0 / 480.0),
        ((4, 59), Phase::Night, 479.0 / 480.0),
    ];

    for ((hour, minute), phase, progress) in cases {
        let (mapped, value) = map_time(hour, minute);
        assert_eq!(mapped, phase, "{hour}:{minute:02}");
        assert_close(value, progress);
    }
}

#[test]
fn test_phase_windows_cover_the_day() {
    let mut minutes_per_phase = [0u32; 6];
    for hour in 0..24 {
        for minute in 0..60 {
            let mapped = PhaseProgress::at(hour, minute);
            let index = Phase::ALL
                .iter()
                .position(|phase| *phase == mapped.phase)
                .unwrap();
            minutes_per_phase[index] += 1;
        }
    }

    for (phase, minutes) in Phase::ALL.iter().zip(minutes_per_phase) {
        assert_eq!(minutes, phase.window_minutes(), "{phase}");
    }
}

#[test]
fn test_progress_monotonic_within_each_phase() {
    let mut previous: Option<PhaseProgress> = None;
    // Walk a full day starting at dawn so night is contiguous
    for step in 0..24 * 60 {
        let minute_of_day = (5 * 60 + step) % (24 * 60);
        let current = PhaseProgress::at(minute_of_day / 60, minute_of_day % 60);
        if let Some(last) = previous {
            if last.phase == current.phase {
                assert!(current.progress > last.progress);
            } else {
                assert_eq!(current.progress, 0.0);
                assert!(last.progress > 0.99);
            }
        }
        previous = Some(current);
    }
}

#[test]
fn test_right_track_edge_wraps_to_midnight() {
    let slider = SliderPosition::from_fraction(1.0);
    assert_eq!(slider.value(), 24.0);
    assert_eq!(slider.clock_time(), ClockTime::new(0, 0));
    assert_eq!(slider.hour_index(), 24);
    assert_eq!(slider.clock_time().phase_progress().phase, Phase::Night);
}

proptest! {
    #[test]
    fn prop_progress_in_unit_interval(hour in 0u32..24, minute in 0u32..60) {
        let (_, progress) = map_time(hour, minute);
        prop_assert!((0.0..=1.0).contains(&progress));
    }

    #[test]
    fn prop_out_of_range_input_is_clamped(hour in 24u32..1000, minute in 60u32..1000) {
        prop_assert_eq!(PhaseProgress::at(hour, minute), PhaseProgress::at(23, 59));
    }

    #[test]
    fn prop_slider_time_matches_position(fraction in 0.0f32..1.0) {
        let slider = SliderPosition::from_fraction(fraction);
        let clock = slider.clock_time();
        let hours = f64::from(clock.hour()) + f64::from(clock.minute()) / 60.0;

        prop_assert!(clock.hour() < 24 && clock.minute() < 60);
        // Minutes are floored, never rounded up
        prop_assert!(hours <= slider.value() + 1e-3);
        prop_assert!(slider.value() - hours < 1.0 / 60.0 + 1e-3);
    }

    #[test]
    fn prop_clock_round_trips_through_slider(hour in 0u32..24, minute in 0u32..60) {
        let time = ClockTime::new(hour, minute);
        prop_assert_eq!(SliderPosition::from_clock(time).clock_time(), time);
    }
}
