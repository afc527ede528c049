use std::time::{Duration, Instant};

use simplelog::{Config, LevelFilter, TestLogger};
use unfold_dom::{Animator, Easing, Element, FrameStatus, Tree, Tween};

const NAME: &str = "expand";

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn target() -> unfold_dom::NodeId {
    Tree::new().insert(Element::box_())
}

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_boundaries() {
    // All easing functions should map 0->0 and 1->1
    for easing in Easing::ALL {
        assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at 0", easing);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in Easing::ALL {
        let mut prev = 0.0;
        for i in 1..=20 {
            let t = i as f64 / 20.0;
            let val = easing.apply(t);
            assert!(val >= prev - 1e-12, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

#[test]
fn test_easing_clamps_input() {
    assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(2.0), 1.0);
}

#[test]
fn test_ease_out_is_fast_at_start() {
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert!(Easing::CubicOut.apply(0.5) > 0.5);
}

// =============================================================================
// Animator Tests
// =============================================================================

#[test]
fn test_tick_emits_running_then_finished() {
    let t0 = Instant::now();
    let node = target();
    let mut animator = Animator::new();
    let id = animator.commit(node, NAME, Tween::new(0.0, 100.0, ms(100), Easing::Linear), t0);

    let frames = animator.tick(t0 + ms(50));
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].id, id);
    assert_eq!(frames[0].status, FrameStatus::Running);
    assert!((frames[0].value - 50.0).abs() < 1e-6);

    let frames = animator.tick(t0 + ms(100));
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].status, FrameStatus::Finished);
    assert_eq!(frames[0].value, 100.0);
    assert!(!animator.is_running(node, NAME));
    assert!(!animator.has_active());
}

#[test]
fn test_frames_respect_frame_interval() {
    let t0 = Instant::now();
    let node = target();
    let mut animator = Animator::new();
    animator.commit(
        node,
        NAME,
        Tween::new(0.0, 1.0, ms(1000), Easing::Linear).frame_interval(ms(16)),
        t0,
    );

    assert_eq!(animator.tick(t0 + ms(10)).len(), 1);
    assert!(animator.tick(t0 + ms(20)).is_empty());
    assert_eq!(animator.tick(t0 + ms(26)).len(), 1);
}

#[test]
fn test_abort_reports_interrupted_on_next_tick() {
    init_logging();
    let t0 = Instant::now();
    let node = target();
    let mut animator = Animator::new();
    let id = animator.commit(node, NAME, Tween::new(0.0, 100.0, ms(100), Easing::Linear), t0);

    assert!(animator.abort(node, NAME, t0 + ms(25)));
    assert!(!animator.abort(node, NAME, t0 + ms(25)));
    assert!(!animator.is_running(node, NAME));

    let frames = animator.tick(t0 + ms(30));
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].id, id);
    assert_eq!(frames[0].status, FrameStatus::Interrupted);
    assert!((frames[0].value - 25.0).abs() < 1e-6);
    assert!(animator.tick(t0 + ms(200)).is_empty());
}

#[test]
fn test_commit_replaces_running_tween() {
    init_logging();
    let t0 = Instant::now();
    let node = target();
    let mut animator = Animator::new();
    let first = animator.commit(node, NAME, Tween::new(0.0, 100.0, ms(100), Easing::Linear), t0);
    let second = animator.commit(node, NAME, Tween::new(40.0, 0.0, ms(40), Easing::Linear), t0 + ms(40));
    assert_ne!(first, second);

    let frames = animator.tick(t0 + ms(80));
    let statuses: Vec<_> = frames.iter().map(|f| (f.id, f.status)).collect();
    assert_eq!(
        statuses,
        vec![(first, FrameStatus::Interrupted), (second, FrameStatus::Finished)]
    );
}

#[test]
fn test_zero_duration_finishes_on_first_tick() {
    let t0 = Instant::now();
    let node = target();
    let mut animator = Animator::new();
    animator.commit(node, NAME, Tween::new(5.0, 9.0, Duration::ZERO, Easing::Linear), t0);

    let frames = animator.tick(t0);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].status, FrameStatus::Finished);
    assert_eq!(frames[0].value, 9.0);
}

#[test]
fn test_reduced_motion_completes_instantly() {
    let t0 = Instant::now();
    let node = target();
    let mut animator = Animator::new();
    animator.set_reduced_motion(true);
    animator.commit(node, NAME, Tween::new(0.0, 100.0, ms(500), Easing::EaseInOut), t0);

    let frames = animator.tick(t0);
    assert_eq!(frames[0].status, FrameStatus::Finished);
    assert_eq!(frames[0].value, 100.0);
}

#[test]
fn test_next_deadline_tracks_frame_interval() {
    let t0 = Instant::now();
    let node = target();
    let mut animator = Animator::new();
    assert!(animator.next_deadline().is_none());

    animator.commit(node, NAME, Tween::new(0.0, 1.0, ms(100), Easing::Linear), t0);
    assert_eq!(animator.next_deadline(), Some(t0));

    animator.tick(t0);
    assert_eq!(animator.next_deadline(), Some(t0 + ms(16)));
}
