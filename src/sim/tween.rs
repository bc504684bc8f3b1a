//! Time-boxed interpolation tasks
//!
//! Each animated property owns at most one task; starting a new one
//! replaces the old, so rapid commands cannot stack or race.

use glam::Vec3;

/// Easing curves used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Fast start, soft landing - lane glides
    QuadOut,
    /// Soft at both ends - camera moves
    QuadInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] to eased progress
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::QuadOut => t * (2.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

/// A scalar glide from `from` to `to` over `duration` seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds and return the current value
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Current value; lands exactly on `to` when finished
    pub fn value(&self) -> f32 {
        if self.finished() {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Vec3 variant, used for the camera move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween3 {
    from: Vec3,
    to: Vec3,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween3 {
    pub fn new(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds and return the current value
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Current value; lands exactly on `to` when finished
    pub fn value(&self) -> Vec3 {
        if self.finished() {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.from.lerp(self.to, t)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_out_endpoints() {
        assert_eq!(Easing::QuadOut.apply(0.0), 0.0);
        assert_eq!(Easing::QuadOut.apply(1.0), 1.0);
        // Out-of-range inputs clamp
        assert_eq!(Easing::QuadOut.apply(1.5), 1.0);
        assert_eq!(Easing::QuadOut.apply(-0.5), 0.0);
    }

    #[test]
    fn test_quad_out_is_front_loaded() {
        // Ease-out covers more than half the distance by the midpoint
        assert!(Easing::QuadOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_quad_in_out_symmetry() {
        assert_eq!(Easing::QuadInOut.apply(0.0), 0.0);
        assert_eq!(Easing::QuadInOut.apply(1.0), 1.0);
        let quarter = Easing::QuadInOut.apply(0.25);
        let three_quarter = Easing::QuadInOut.apply(0.75);
        assert!((quarter + three_quarter - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tween_lands_exactly_on_target() {
        let mut tween = Tween::new(0.1, 3.0, 0.2, Easing::QuadOut);
        tween.advance(0.1);
        assert!(!tween.finished());
        let end = tween.advance(0.1);
        assert!(tween.finished());
        assert_eq!(end, 3.0);
    }

    #[test]
    fn test_tween_clamps_past_duration() {
        let mut tween = Tween::new(0.0, 3.0, 0.2, Easing::QuadOut);
        let value = tween.advance(10.0);
        assert_eq!(value, 3.0);
        assert!(tween.finished());
        // Further advances stay pinned
        assert_eq!(tween.advance(1.0), 3.0);
    }

    #[test]
    fn test_tween_monotonic_toward_target() {
        let mut tween = Tween::new(-3.0, 0.0, 0.2, Easing::QuadOut);
        let mut last = tween.value();
        for _ in 0..20 {
            let v = tween.advance(0.016);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_tween3_endpoints() {
        let from = Vec3::new(3.0, 6.0, 10.0);
        let to = Vec3::new(0.0, 6.0, 10.0);
        let mut tween = Tween3::new(from, to, 1.0, Easing::QuadInOut);
        assert_eq!(tween.value(), from);
        tween.advance(0.5);
        assert!(!tween.finished());
        assert_eq!(tween.advance(0.5), to);
        assert!(tween.finished());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween::new(1.0, 2.0, 0.0, Easing::QuadOut);
        assert!(tween.finished());
        assert_eq!(tween.value(), 2.0);
    }
}
