//! Dial geometry in view-box units (y grows downward, angles clockwise).
//!
//! These helpers avoid platform APIs so both the renderer and the pointer
//! handlers share one definition of where each wedge sits.

use crate::constants::{
    CENTER, INNER_RING_INNER_RADIUS, INNER_RING_OUTER_RADIUS, LABEL_BASELINE_OFFSET,
    OUTER_RING_INNER_RADIUS, OUTER_RING_OUTER_RADIUS, STEP_RADIANS, TOP_ANGLE_DEGREES,
};
use crate::pitch::{normalize, PitchClass};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ring {
    /// Fixed ring, written pitch.
    Outer,
    /// Rotating wheel.
    Inner,
}

impl Ring {
    pub const ALL: [Ring; 2] = [Ring::Outer, Ring::Inner];

    pub fn radii(self) -> (f32, f32) {
        match self {
            Ring::Outer => (OUTER_RING_OUTER_RADIUS, OUTER_RING_INNER_RADIUS),
            Ring::Inner => (INNER_RING_OUTER_RADIUS, INNER_RING_INNER_RADIUS),
        }
    }

    pub fn contains_radius(self, r: f32) -> bool {
        let (outer, inner) = self.radii();
        r >= inner && r <= outer
    }
}

#[inline]
pub fn center() -> Vec2 {
    Vec2::new(CENTER[0], CENTER[1])
}

#[inline]
pub fn polar_to_cartesian(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

/// One annular wedge of a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub ring: Ring,
    pub pitch_class: PitchClass,
    pub start_angle: f32,
    pub end_angle: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
}

impl Wedge {
    /// Pitch class 0 is centered at 12 o'clock and spans −105°..−75°.
    pub fn new(ring: Ring, pitch_class: PitchClass) -> Self {
        let start_angle =
            TOP_ANGLE_DEGREES.to_radians() - STEP_RADIANS / 2.0 + pitch_class.value() as f32 * STEP_RADIANS;
        let (outer_radius, inner_radius) = ring.radii();
        Self {
            ring,
            pitch_class,
            start_angle,
            end_angle: start_angle + STEP_RADIANS,
            outer_radius,
            inner_radius,
        }
    }

    pub fn mid_angle(&self) -> f32 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Corners in path order: outer start, outer end, inner end, inner start.
    pub fn corners(&self) -> [Vec2; 4] {
        let c = center();
        [
            polar_to_cartesian(c, self.outer_radius, self.start_angle),
            polar_to_cartesian(c, self.outer_radius, self.end_angle),
            polar_to_cartesian(c, self.inner_radius, self.end_angle),
            polar_to_cartesian(c, self.inner_radius, self.start_angle),
        ]
    }

    /// Label baseline position and rotation (radians) so that the label's
    /// "up" points away from the center.
    pub fn label_anchor(&self) -> (Vec2, f32) {
        let mid = self.mid_angle();
        let r = (self.outer_radius + self.inner_radius) / 2.0;
        let pos = polar_to_cartesian(center(), r, mid) + Vec2::new(0.0, LABEL_BASELINE_OFFSET);
        (pos, mid + FRAC_PI_2)
    }
}

/// All twelve wedges of a ring in pitch-class order.
pub fn ring_wedges(ring: Ring) -> impl Iterator<Item = Wedge> {
    PitchClass::all().map(move |pc| Wedge::new(ring, pc))
}

/// Pointer angle about the dial center, as `atan2(dy, dx)` in (−π, π].
#[inline]
pub fn pointer_angle(point: Vec2) -> f32 {
    let d = point - center();
    d.y.atan2(d.x)
}

/// Pitch class whose wedge covers `angle` (radians) on an unrotated ring.
pub fn pitch_class_at_angle(angle: f32) -> PitchClass {
    let from_top = angle - TOP_ANGLE_DEGREES.to_radians();
    normalize((from_top / STEP_RADIANS).round() as i32)
}

/// Ring and pitch class under `point`, given the inner wheel's current
/// on-screen rotation in degrees. `None` outside both rings.
pub fn hit_test(point: Vec2, wheel_degrees: f32) -> Option<(Ring, PitchClass)> {
    let r = (point - center()).length();
    let angle = pointer_angle(point);
    if Ring::Outer.contains_radius(r) {
        Some((Ring::Outer, pitch_class_at_angle(angle)))
    } else if Ring::Inner.contains_radius(r) {
        Some((Ring::Inner, pitch_class_at_angle(angle - wheel_degrees.to_radians())))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_wedge_is_centered_at_top() {
        let w = Wedge::new(Ring::Outer, PitchClass::C);
        assert!((w.start_angle.to_degrees() + 105.0).abs() < 1e-3);
        assert!((w.end_angle.to_degrees() + 75.0).abs() < 1e-3);
        assert!((w.mid_angle().to_degrees() + 90.0).abs() < 1e-3);
    }

    #[test]
    fn label_of_top_wedge_is_upright() {
        let (_, rot) = Wedge::new(Ring::Inner, PitchClass::C).label_anchor();
        assert!(rot.abs() < 1e-5);
    }
}
