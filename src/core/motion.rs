use glam::Vec3;
use std::f32::consts::PI;

/// Easing curves used by the entrance and the text reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    #[allow(dead_code)]
    Linear,
    /// Half-cosine: slow start, slow finish.
    InOutSine,
    OutQuad,
}

impl Ease {
    /// Map linear progress to eased progress. Input is clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::OutQuad => t * (2.0 - t),
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// B(t) = (1−t)²·P0 + 2(1−t)t·P1 + t²·P2
#[inline]
pub fn quadratic_bezier(points: &[Vec3; 3], t: f32) -> Vec3 {
    let u = 1.0 - t;
    points[0] * (u * u) + points[1] * (2.0 * u * t) + points[2] * (t * t)
}
