// Cardiac waveform and simulated heart-rate readout.

use visuals_core::constants::{BPM_DEFAULT, BPM_MAX, BPM_MIN, CARDIAC_CYCLE_SEC};
use visuals_core::{cardiac_pulse, parse_bpm_label, BpmDrift};

const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn pulse_stays_in_unit_range() {
    for i in 0..10_000 {
        let t = i as f64 * 0.00137;
        let p = cardiac_pulse(t);
        assert!((0.0..=1.0).contains(&p), "pulse {} at t={}", p, t);
    }
}

#[test]
fn lub_peaks_mid_window() {
    assert!(approx(cardiac_pulse(0.1), 1.0));
    assert!(approx(cardiac_pulse(0.0), 0.0));
    assert!(approx(cardiac_pulse(0.05), (std::f32::consts::PI / 4.0).sin()));
}

#[test]
fn dub_is_softer_and_later() {
    assert!(approx(cardiac_pulse(0.4), 0.7));
    assert!(cardiac_pulse(0.35) > 0.0);
    assert!(cardiac_pulse(0.35) < 0.7);
}

#[test]
fn window_boundaries_are_silent() {
    // 0.2 closes the lub; 0.3 and 0.5 are excluded from the dub.
    for t in [0.2, 0.25, 0.3, 0.5, 0.75, 1.0, 1.49] {
        assert_eq!(cardiac_pulse(t), 0.0, "t={}", t);
    }
}

#[test]
fn waveform_is_continuous_at_window_edges() {
    // Just inside each window the beat has almost faded out.
    for t in [0.2 - 1e-6, 0.3 + 1e-6, 0.5 - 1e-6] {
        let p = cardiac_pulse(t);
        assert!(p < 1e-4, "pulse {} at t={}", p, t);
    }
    assert!(cardiac_pulse(1e-6) < 1e-4);
}

#[test]
fn waveform_repeats_every_cycle() {
    for t in [0.05, 0.1, 0.17, 0.33, 0.4, 0.45, 0.9] {
        let a = cardiac_pulse(t);
        let b = cardiac_pulse(t + CARDIAC_CYCLE_SEC * 3.0);
        assert!((a - b).abs() < 1e-4, "t={} a={} b={}", t, a, b);
    }
}

#[test]
fn negative_time_wraps_into_cycle() {
    assert!(approx(cardiac_pulse(0.1 - CARDIAC_CYCLE_SEC), 1.0));
}

#[test]
fn bpm_never_leaves_range() {
    let mut drift = BpmDrift::new(BPM_DEFAULT, 7);
    for _ in 0..50_000 {
        if let Some(bpm) = drift.step() {
            assert!((BPM_MIN..=BPM_MAX).contains(&bpm));
        }
        assert!((BPM_MIN..=BPM_MAX).contains(&drift.bpm()));
    }
}

#[test]
fn bpm_changes_by_at_most_one() {
    let mut drift = BpmDrift::new(BPM_DEFAULT, 99);
    let mut last = drift.bpm();
    for _ in 0..20_000 {
        drift.step();
        assert!(drift.bpm().abs_diff(last) <= 1);
        last = drift.bpm();
    }
}

#[test]
fn bpm_updates_are_rare() {
    let mut drift = BpmDrift::new(BPM_DEFAULT, 3);
    let updates = (0..10_000).filter(|_| drift.step().is_some()).count();
    // 2% chance per frame
    assert!(updates > 100 && updates < 350, "updates={}", updates);
}

#[test]
fn bpm_label_parsing() {
    assert_eq!(parse_bpm_label(" 80 "), 80);
    assert_eq!(parse_bpm_label("--"), BPM_DEFAULT);
    assert_eq!(parse_bpm_label(""), BPM_DEFAULT);
    assert_eq!(parse_bpm_label("80 BPM"), 80);
    assert_eq!(parse_bpm_label("72.5"), 72);
    assert_eq!(parse_bpm_label("\n 66bpm"), 66);
    assert_eq!(parse_bpm_label("BPM 80"), BPM_DEFAULT);
    assert_eq!(BpmDrift::from_label("68", 1).bpm(), 68);
}
