//! Expand/collapse transitions of the content holder's size override.

use std::time::Duration;

use unfold_dom::{AnimationFrame, Easing, FrameStatus, Tween};

use crate::context::Context;
use crate::direction::ExpandState;

use super::{EXPAND_ANIMATION, Expander};

/// Parameters of a resolved transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub start: f64,
    pub end: f64,
    pub duration: Duration,
    pub easing: Easing,
    /// False when the size was applied without animating.
    pub animated: bool,
}

impl Expander {
    /// Work out start and end sizes for the current `is_expanded` and hand
    /// them to [`invoke_animation`](Self::invoke_animation).
    pub(crate) fn on_is_expanded_changed(&mut self, cx: &mut Context<'_>, ignore_animation: bool) {
        let expanded = self.is_expanded();
        let Some(holder) = self
            .holder
            .filter(|holder| expanded || cx.tree.is_visible(*holder))
        else {
            // A dropped holder may have taken a running transition with it.
            if self.animation.is_none() && self.state().is_transitioning() {
                self.set_state(cx, ExpandState::resting(expanded));
            }
            return;
        };
        let visible = cx.tree.is_visible(holder);

        let was_running = cx.animator.abort(holder, EXPAND_ANIMATION, cx.now);
        self.animation = None;

        let mut start = if visible {
            self.content_extent(cx.tree).max(0.0)
        } else {
            0.0
        };
        if expanded {
            cx.tree.set_visible(holder, true);
        }

        let request = self.content_size_request(cx.tree);
        let mut end = request.or(self.last_visible_size).unwrap_or(0.0);

        if expanded {
            if end <= 0.0 {
                self.set_content_size_override(cx.tree, None);
                end = self.measured_content_extent(cx.tree);
                self.set_content_size_override(cx.tree, Some(0.0));
            }
        } else {
            let remembered = if was_running {
                self.last_visible_size
            } else {
                None
            };
            let visible_size = request
                .or(remembered)
                .unwrap_or_else(|| self.content_extent(cx.tree));
            self.last_visible_size = Some(visible_size);
            start = visible_size;
            end = 0.0;
        }

        log::debug!(
            "[{}] resolve {} {} -> {} (ignore_animation={})",
            self.id,
            if expanded { "expand" } else { "collapse" },
            start,
            end,
            ignore_animation
        );
        self.invoke_animation(cx, start, end, ignore_animation);
    }

    /// Apply the transition from `start` to `end`, either immediately or by
    /// committing a tween to the animator.
    fn invoke_animation(&mut self, cx: &mut Context<'_>, start: f64, end: f64, ignore_animation: bool) {
        let Some(holder) = self.holder else {
            return;
        };
        let expanding = self.is_expanded();
        self.set_state(cx, ExpandState::starting(expanding));

        if ignore_animation || self.own_extent(cx.tree).is_none() {
            self.set_content_size_override(cx.tree, Some(end));
            cx.tree.set_visible(holder, expanding);
            self.last_transition = Some(Transition {
                start,
                end,
                duration: Duration::ZERO,
                easing: Easing::Linear,
                animated: false,
            });
            self.set_state(cx, ExpandState::resting(expanding));
            return;
        }

        let transition = self.config.transition(expanding);
        let mut duration = transition.duration;
        if let Some(last) = self.last_visible_size.filter(|last| *last > 0.0) {
            let scaled = (duration.as_millis() as f64 * (end - start).abs() / last).trunc();
            duration = Duration::from_millis((scaled as u64).max(1));
        }

        self.last_transition = Some(Transition {
            start,
            end,
            duration,
            easing: transition.easing,
            animated: true,
        });

        let tween = Tween::new(start, end, duration, transition.easing)
            .frame_interval(self.config.frame_interval_duration());
        self.animation = Some(cx.animator.commit(holder, EXPAND_ANIMATION, tween, cx.now));
    }

    /// Apply a frame from the animator. Returns whether it belonged to the
    /// running transition.
    pub fn on_animation_frame(&mut self, cx: &mut Context<'_>, frame: &AnimationFrame) -> bool {
        if self.animation != Some(frame.id) || self.holder != Some(frame.target) {
            return false;
        }

        match frame.status {
            FrameStatus::Running => {
                log::trace!("[{}] frame {}", self.id, frame.value);
                self.set_content_size_override(cx.tree, Some(frame.value));
            }
            FrameStatus::Finished => {
                self.set_content_size_override(cx.tree, Some(frame.value));
                self.animation = None;
                let expanded = self.is_expanded();
                if !expanded {
                    cx.tree.set_visible(frame.target, false);
                }
                self.settling = true;
                log::debug!("[{}] transition finished at {}", self.id, frame.value);
                self.set_state(cx, ExpandState::resting(expanded));
            }
            // The interrupting call already took over.
            FrameStatus::Interrupted => {}
        }
        true
    }

    /// React to a new arranged size. A change across the axis re-resolves
    /// the content size without animating.
    ///
    /// Sizes produced by this expander's own transition (every layout while
    /// it runs, and the first one after it finishes) are recorded but not
    /// treated as a resize.
    pub fn size_allocated(&mut self, cx: &mut Context<'_>) -> bool {
        let Some(bounds) = cx.tree.bounds(self.root) else {
            return false;
        };
        let size = bounds.size();
        let cross = self.axis().cross();
        let changed = self
            .previous_size
            .is_none_or(|previous| (size.extent(cross) - previous.extent(cross)).abs() >= f64::EPSILON);
        self.previous_size = Some(size);

        let settling = std::mem::take(&mut self.settling);
        if self.state().is_transitioning() || settling {
            if changed {
                log::trace!("[{}] cross extent {} follows own transition", self.id, size.extent(cross));
            }
            return false;
        }

        if changed {
            log::debug!("[{}] cross extent now {}", self.id, size.extent(cross));
            self.last_visible_size = None;
            self.on_is_expanded_changed(cx, true);
        }
        changed
    }
}
