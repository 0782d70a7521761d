use visuals_core::constants::MAX_FRAME_CATCH_UP;
use visuals_core::{FrameClock, RotationMode};

#[test]
fn first_tick_starts_at_zero() {
    let mut clock = FrameClock::new(RotationMode::PerFrame);
    let tick = clock.tick(1234.5);
    assert_eq!(tick.time, 0.0);
    assert_eq!(tick.dt, 0.0);
    assert_eq!(tick.frame, 0);
}

#[test]
fn time_tracks_wall_clock() {
    let mut clock = FrameClock::new(RotationMode::PerFrame);
    clock.tick(10.0);
    let tick = clock.tick(10.25);
    assert!((tick.time - 0.25).abs() < 1e-12);
    assert!((tick.dt - 0.25).abs() < 1e-12);
    assert_eq!(tick.frame, 1);
}

#[test]
fn time_is_strictly_increasing_even_if_clock_stalls_or_steps_back() {
    let mut clock = FrameClock::new(RotationMode::PerFrame);
    let mut last = clock.tick(5.0).time;
    for now in [5.1, 5.1, 4.0, 5.05, 6.0, 6.0] {
        let tick = clock.tick(now);
        assert!(tick.time > last, "{} after {}", tick.time, last);
        assert!(tick.dt > 0.0);
        last = tick.time;
    }
}

#[test]
fn per_frame_spin_ignores_dt() {
    let mut clock = FrameClock::new(RotationMode::PerFrame);
    clock.tick(0.0);
    let tick = clock.tick(2.0);
    assert_eq!(tick.spin(0.003), 0.003);
}

#[test]
fn time_scaled_spin_is_proportional_and_capped() {
    let mut clock = FrameClock::new(RotationMode::TimeScaled);
    assert_eq!(clock.tick(0.0).spin(0.01), 0.0);
    let half_rate = clock.tick(1.0 / 30.0);
    assert!((half_rate.spin(0.01) - 0.02).abs() < 1e-6);
    let stalled = clock.tick(10.0);
    assert!((stalled.spin(0.01) - 0.01 * MAX_FRAME_CATCH_UP).abs() < 1e-6);
}
