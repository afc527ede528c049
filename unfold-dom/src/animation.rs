//! Tween scheduling.
//!
//! The [`Animator`] holds at most one tween per `(target, name)` pair. Hosts
//! call [`Animator::tick`] from their frame loop and route the returned
//! [`AnimationFrame`]s to whoever committed the tween. Committing over a
//! running tween, or aborting one, makes it report a final
//! [`FrameStatus::Interrupted`] frame on the next tick instead of finishing.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::transitions::Easing;
use crate::tree::NodeId;

/// Default interval between frames (roughly 60 fps).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Identifies one committed tween. Never reused by an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

/// Interpolation of a single value over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub easing: Easing,
    pub frame_interval: Duration,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }

    pub fn frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Value after `elapsed` time.
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Intermediate value; more frames follow.
    Running,
    /// Last frame of a tween that ran to completion. Carries the end value.
    Finished,
    /// The tween was aborted. Carries the last value it reached.
    Interrupted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub id: AnimationId,
    pub target: NodeId,
    pub name: &'static str,
    pub value: f64,
    pub status: FrameStatus,
}

impl AnimationFrame {
    pub fn is_terminal(&self) -> bool {
        !matches!(self.status, FrameStatus::Running)
    }
}

#[derive(Debug, Clone)]
struct ActiveTween {
    id: AnimationId,
    tween: Tween,
    start: Instant,
    last_frame: Option<Instant>,
}

impl ActiveTween {
    fn current_value(&self, now: Instant) -> f64 {
        self.tween.value_at(now.saturating_duration_since(self.start))
    }
}

/// Schedules tweens and produces frames on demand.
#[derive(Debug, Default)]
pub struct Animator {
    active: BTreeMap<(NodeId, &'static str), ActiveTween>,
    /// Interrupted frames waiting for the next tick.
    interrupted: Vec<AnimationFrame>,
    next_id: u64,
    /// Reduced motion flag - when true, tweens complete on the next tick.
    reduced_motion: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true if any tween is running or an interrupted frame is pending.
    pub fn has_active(&self) -> bool {
        !self.active.is_empty() || !self.interrupted.is_empty()
    }

    pub fn is_running(&self, target: NodeId, name: &'static str) -> bool {
        self.active.contains_key(&(target, name))
    }

    /// Start `tween` on `(target, name)`, aborting whatever was running there.
    pub fn commit(
        &mut self,
        target: NodeId,
        name: &'static str,
        tween: Tween,
        now: Instant,
    ) -> AnimationId {
        self.abort(target, name, now);

        let id = AnimationId(self.next_id);
        self.next_id += 1;

        let tween = if self.reduced_motion {
            Tween {
                duration: Duration::ZERO,
                ..tween
            }
        } else {
            tween
        };

        log::debug!(
            "[animation] commit {:?} on {}/{}: {} -> {} over {:?}",
            id,
            target,
            name,
            tween.from,
            tween.to,
            tween.duration
        );

        self.active.insert(
            (target, name),
            ActiveTween {
                id,
                tween,
                start: now,
                last_frame: None,
            },
        );
        id
    }

    /// Abort the tween on `(target, name)`. Returns whether one was running.
    pub fn abort(&mut self, target: NodeId, name: &'static str, now: Instant) -> bool {
        let Some(active) = self.active.remove(&(target, name)) else {
            return false;
        };
        log::debug!("[animation] abort {:?} on {}/{}", active.id, target, name);
        self.interrupted.push(AnimationFrame {
            id: active.id,
            target,
            name,
            value: active.current_value(now),
            status: FrameStatus::Interrupted,
        });
        true
    }

    /// Abort every tween on `target`.
    pub fn abort_all(&mut self, target: NodeId, now: Instant) {
        let names: Vec<_> = self
            .active
            .keys()
            .filter(|(id, _)| *id == target)
            .map(|(_, name)| *name)
            .collect();
        for name in names {
            self.abort(target, name, now);
        }
    }

    /// Advance every tween to `now`.
    ///
    /// Pending interrupted frames come first. A running tween yields at most
    /// one frame per frame interval; a tween whose duration has elapsed yields
    /// its end value as a `Finished` frame and is pruned.
    pub fn tick(&mut self, now: Instant) -> Vec<AnimationFrame> {
        let mut frames = std::mem::take(&mut self.interrupted);

        let mut finished = Vec::new();
        for (&(target, name), active) in self.active.iter_mut() {
            let elapsed = now.saturating_duration_since(active.start);
            if elapsed >= active.tween.duration {
                frames.push(AnimationFrame {
                    id: active.id,
                    target,
                    name,
                    value: active.tween.to,
                    status: FrameStatus::Finished,
                });
                finished.push((target, name));
                continue;
            }

            let due = active.last_frame.is_none_or(|last| {
                now.saturating_duration_since(last) >= active.tween.frame_interval
            });
            if due {
                active.last_frame = Some(now);
                frames.push(AnimationFrame {
                    id: active.id,
                    target,
                    name,
                    value: active.tween.value_at(elapsed),
                    status: FrameStatus::Running,
                });
            }
        }

        for key in finished {
            self.active.remove(&key);
        }

        frames
    }

    /// Earliest instant at which [`tick`](Self::tick) has something to report.
    pub fn next_deadline(&self) -> Option<Instant> {
        if let Some(first) = self.interrupted.first() {
            log::trace!("[animation] interrupted frame pending for {}", first.target);
            return Some(Instant::now());
        }
        self.active
            .values()
            .map(|active| {
                let end = active.start + active.tween.duration;
                let next = active
                    .last_frame
                    .map_or(active.start, |last| last + active.tween.frame_interval);
                next.min(end)
            })
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_interpolates_linearly() {
        let tween = Tween::new(0.0, 100.0, Duration::from_millis(200), Easing::Linear);
        assert_eq!(tween.value_at(Duration::from_millis(50)), 25.0);
        assert_eq!(tween.value_at(Duration::from_millis(500)), 100.0);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let tween = Tween::new(10.0, 20.0, Duration::ZERO, Easing::EaseIn);
        assert_eq!(tween.value_at(Duration::ZERO), 20.0);
    }
}
