//! Camera position tweening
//!
//! The host animation library is treated as a black box elsewhere; for the
//! core we keep a minimal deterministic tween driven by caller-supplied
//! frame deltas, so camera motion is reproducible in tests.

use sentiglobe_core::Point3f;
use serde::{Deserialize, Serialize};

/// Ease-in/ease-out cubic curve on [0, 1].
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// An in-flight interpolation of the camera position.
///
/// Advanced once per frame with the frame delta; never reads a clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraTween {
    from: Point3f,
    to: Point3f,
    duration: f32,
    elapsed: f32,
}

impl CameraTween {
    pub fn new(from: Point3f, to: Point3f, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn advance(&mut self, dt: f32) -> Point3f {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.position()
    }

    /// Current eased position.
    pub fn position(&self) -> Point3f {
        let t = ease_in_out_cubic(self.elapsed / self.duration);
        Point3f::from(self.from.coords.lerp(&self.to.coords, t))
    }

    pub fn target(&self) -> Point3f {
        self.to
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn easing_hits_its_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_relative_eq!(ease_in_out_cubic(0.5), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn tween_starts_at_from_and_ends_at_to() {
        let from = Point3f::new(0.0, 0.0, 15.0);
        let to = Point3f::new(11.0, 0.0, 0.0);
        let mut tween = CameraTween::new(from, to, 1.2);

        assert_relative_eq!((tween.position() - from).norm(), 0.0, epsilon = 1e-6);
        tween.advance(2.0);
        assert!(tween.finished());
        assert_relative_eq!((tween.position() - to).norm(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn advance_clamps_at_the_duration() {
        let mut tween = CameraTween::new(Point3f::origin(), Point3f::new(1.0, 0.0, 0.0), 1.0);
        for _ in 0..10 {
            tween.advance(0.3);
        }
        assert!(tween.finished());
        assert_relative_eq!(tween.position().x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn midpoint_of_symmetric_ease_is_the_midpoint() {
        let from = Point3f::new(0.0, 0.0, 10.0);
        let to = Point3f::new(0.0, 0.0, 20.0);
        let mut tween = CameraTween::new(from, to, 2.0);
        let mid = tween.advance(1.0);
        assert_relative_eq!(mid.z, 15.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_duration_is_tolerated() {
        let mut tween = CameraTween::new(Point3f::origin(), Point3f::new(2.0, 0.0, 0.0), 0.0);
        let p = tween.advance(0.016);
        assert!(tween.finished());
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-6);
    }
}
