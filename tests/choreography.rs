// End-to-end runs through the public API with a hand-driven clock.

use hero_motion::{
    Choreography, Clock, EngineError, ManualClock, MotionConfig, PhaseWindow, Playback, Progress,
    Timeline, Timestamp,
};

fn sixteen_second_run(clock: &ManualClock) -> Playback<&ManualClock> {
    let config = MotionConfig::from_json(r#"{"duration_secs":16}"#).unwrap();
    Playback::new(&config, clock).unwrap()
}

#[test]
fn timeline_saturates_on_overrun() {
    let mut timeline = Timeline::new(16.0).unwrap();
    assert_eq!(timeline.tick(Timestamp::from_secs_f64(0.0)).value(), 0.0);
    assert_eq!(timeline.tick(Timestamp::from_secs_f64(16.0)).value(), 1.0);
    assert_eq!(timeline.tick(Timestamp::from_secs_f64(32.0)).value(), 1.0);
}

#[test]
fn zero_and_negative_durations_never_produce_progress() {
    for bad in [0.0, -5.0] {
        assert_eq!(Timeline::new(bad).unwrap_err(), EngineError::InvalidDuration(bad));
    }
    let err = MotionConfig::from_json(r#"{"duration_secs":-2}"#).unwrap_err();
    assert_eq!(err, EngineError::InvalidDuration(-2.0));
}

#[test]
fn frame_sequence_at_sixty_fps_is_monotonic() {
    let clock = ManualClock::new(Timestamp::from_millis_f64(1234.5));
    let mut playback = sixteen_second_run(&clock);

    let mut prev = playback.frame();
    for _ in 0..(60 * 18) {
        clock.advance_secs(1.0 / 60.0);
        let next = playback.frame();
        assert!(next.progress >= prev.progress);
        assert!(next.crossfade.interior_opacity >= prev.crossfade.interior_opacity);
        for (a, b) in prev.items.iter().zip(&next.items) {
            assert!(b.offset_y >= a.offset_y);
        }
        prev = next;
    }
    assert_eq!(prev.progress, Progress::END);
    assert!(playback.is_complete());
}

#[test]
fn replaying_the_same_timestamps_is_reproducible() {
    let times = [0.0, 0.4, 3.3, 8.8, 9.0, 12.25, 15.9, 16.0, 22.0];
    let record = || {
        let clock = ManualClock::default();
        let mut playback = sixteen_second_run(&clock);
        times
            .iter()
            .map(|&t| {
                clock.set(Timestamp::from_secs_f64(t));
                playback.frame()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(record(), record());
}

#[test]
fn door_window_boundaries_through_resolver() {
    let choreo = Choreography::default();

    let closed = choreo.resolve(Progress::new(0.55));
    assert_eq!(closed.crossfade.exterior_opacity, 1.0);
    assert_eq!(closed.crossfade.interior_opacity, 0.0);
    assert_eq!(closed.doors.left.rotation_y, 0.0);

    let open = choreo.resolve(Progress::new(0.75));
    assert_eq!(open.crossfade.exterior_opacity, 0.0);
    assert_eq!(open.crossfade.interior_opacity, 1.0);

    let mid = choreo.resolve(Progress::new(0.65));
    assert_eq!(
        mid.crossfade.exterior_opacity,
        1.0 - mid.crossfade.interior_opacity
    );
}

#[test]
fn custom_product_window_saturates_at_cap() {
    let config = MotionConfig::from_json(
        r#"{"products":[{"title":"Phone","window":[0.76,0.90],"rise_height":1.2}]}"#,
    )
    .unwrap();
    let choreo = Choreography::new(&config);
    assert_eq!(choreo.resolve(Progress::new(0.76)).items[0].offset_y, 0.0);
    assert!((choreo.resolve(Progress::new(0.90)).items[0].offset_y - 1.2).abs() < 1e-6);
    assert!((choreo.resolve(Progress::END).items[0].offset_y - 1.2).abs() < 1e-6);
}

#[test]
fn overlapping_windows_resolve_independently() {
    let config = MotionConfig::from_json(
        r#"{"products":[
            {"title":"A","window":[0.8,0.9],"rise_height":1.0},
            {"title":"B","window":[0.85,0.95],"rise_height":2.0}
        ]}"#,
    )
    .unwrap();
    let choreo = Choreography::new(&config);
    let params = choreo.resolve(Progress::new(0.9));
    assert_eq!(params.items[0].offset_y, 1.0);
    assert!(params.items[1].offset_y > 0.0 && params.items[1].offset_y < 2.0);
}

#[test]
fn step_window_jumps_at_its_start() {
    let step = PhaseWindow::new(0.5, 0.5).unwrap();
    assert_eq!(step.raw_local(0.49), 0.0);
    assert_eq!(step.raw_local(0.5), 1.0);
}

#[test]
fn restart_uses_current_clock_reading() {
    let clock = ManualClock::default();
    let mut playback = sixteen_second_run(&clock);
    playback.frame();
    clock.advance_secs(20.0);
    assert_eq!(playback.frame().progress, Progress::END);

    playback.restart();
    assert_eq!(playback.frame().progress, Progress::START);
    assert_eq!(playback.timeline().origin(), Some(clock.now()));
}
