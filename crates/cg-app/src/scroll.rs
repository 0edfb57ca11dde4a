//! Programmatic smooth scrolling
//!
//! Click navigation asks for an animated scroll; the shell polls
//! [`SmoothScroll::offset_at`] once per frame, so the animation never
//! blocks anything and the activation that preceded it is already visible.

use cg_core::ScrollBehavior;

const SCROLL_DURATION_SECS: f64 = 0.4;

#[derive(Debug, Clone, Copy)]
struct Animation {
    start: f32,
    target: f32,
    started_at: f64,
}

/// Animates the vertical scroll offset towards a click target
#[derive(Debug, Default)]
pub struct SmoothScroll {
    animation: Option<Animation>,
}

impl SmoothScroll {
    /// Start moving from `current` towards `target`
    pub fn begin(&mut self, current: f32, target: f32, now: f64, behavior: ScrollBehavior) {
        let start = match behavior {
            ScrollBehavior::Smooth => current,
            ScrollBehavior::Instant => target,
        };
        self.animation = Some(Animation {
            start,
            target,
            started_at: now,
        });
    }

    /// Offset to apply this frame, or `None` once the animation settled
    pub fn offset_at(&mut self, now: f64) -> Option<f32> {
        let anim = self.animation?;
        let t = ((now - anim.started_at) / SCROLL_DURATION_SECS).clamp(0.0, 1.0) as f32;
        if t >= 1.0 {
            self.animation = None;
            return Some(anim.target);
        }
        Some(anim.start + (anim.target - anim.start) * ease_out_cubic(t))
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Ease-out: front-loaded motion
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_animation_reaches_target_and_settles() {
        let mut scroll = SmoothScroll::default();
        scroll.begin(100.0, 2320.0, 0.0, ScrollBehavior::Smooth);

        assert_eq!(scroll.offset_at(0.0), Some(100.0));

        let midway = scroll.offset_at(0.2).expect("still animating");
        assert!(midway > 100.0 && midway < 2320.0);

        assert_eq!(scroll.offset_at(0.5), Some(2320.0));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset_at(0.6), None);
    }

    #[test]
    fn test_offsets_are_monotonic_towards_target() {
        let mut scroll = SmoothScroll::default();
        scroll.begin(0.0, 1000.0, 0.0, ScrollBehavior::Smooth);

        let mut last = -1.0;
        for step in 0..=10 {
            let now = step as f64 * 0.05;
            let offset = scroll.offset_at(now).unwrap_or(1000.0);
            assert!(offset >= last);
            last = offset;
        }
    }

    #[test]
    fn test_instant_behavior_jumps() {
        let mut scroll = SmoothScroll::default();
        scroll.begin(100.0, 900.0, 0.0, ScrollBehavior::Instant);
        assert_eq!(scroll.offset_at(0.0), Some(900.0));
    }
}
