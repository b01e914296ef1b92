use crate::constants::STEP_RADIANS;
use crate::dial::PitchDial;
use crate::pitch::PitchClass;

/// Drag-to-rotate state for the inner wheel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        /// Pointer angle in radians (`atan2`) at pointer-down.
        start_angle: f32,
        start_rotation: PitchClass,
    },
}

/// Round to the nearest integer, exact halves toward +∞ (−1.5 → −1).
#[inline]
fn round_half_up(x: f32) -> i32 {
    (x + 0.5).floor() as i32
}

/// Whole steps covered by an angular delta, rounded to the nearest step.
///
/// `delta` is the plain difference of two `atan2` results, so it lies in
/// (−2π, 2π). A wrap across ±π shows up as a delta off by exactly one turn,
/// i.e. twelve steps, which disappears once the result is normalized. Half
/// steps round up in both directions, so a tie snaps the same way whether or
/// not the drag crossed the seam.
#[inline]
pub fn snapped_steps(delta: f32) -> i32 {
    round_half_up(delta / STEP_RADIANS)
}

impl DragGesture {
    pub fn begin(&mut self, angle: f32, rotation: PitchClass) {
        *self = DragGesture::Dragging {
            start_angle: angle,
            start_rotation: rotation,
        };
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }

    /// Unnormalized rotation step the wheel should snap to for `angle`.
    /// `sign` is the dial's rotation convention sign.
    pub fn target_step(&self, angle: f32, sign: i32) -> Option<i32> {
        match *self {
            DragGesture::Idle => None,
            DragGesture::Dragging {
                start_angle,
                start_rotation,
            } => Some(start_rotation.value() + sign * snapped_steps(angle - start_angle)),
        }
    }

    /// Pointer-move: snap the dial's rotation. Returns true if it changed.
    pub fn drag_to(&self, angle: f32, dial: &mut PitchDial) -> bool {
        let sign = dial.config().convention.sign();
        match self.target_step(angle, sign) {
            Some(step) => dial.set_rotation(step),
            None => false,
        }
    }

    /// Pointer-up, cancel or lost capture. Returns whether a drag was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = DragGesture::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapping_rounds_to_nearest_step() {
        assert_eq!(snapped_steps(14f32.to_radians()), 0);
        assert_eq!(snapped_steps(16f32.to_radians()), 1);
        assert_eq!(snapped_steps(-44f32.to_radians()), -1);
        assert_eq!(snapped_steps(-46f32.to_radians()), -2);
    }

    #[test]
    fn half_steps_round_up() {
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(-1.51), -2);
        // Crossing the seam adds exactly twelve steps; the tie must not flip.
        assert_eq!(round_half_up(-1.5 + 12.0) - 12, round_half_up(-1.5));
    }

    #[test]
    fn idle_has_no_target() {
        assert_eq!(DragGesture::Idle.target_step(1.0, 1), None);
    }
}
