// Host-side tests for the drag-to-rotate gesture.

use dial_core::*;

fn deg(d: f32) -> f32 {
    d.to_radians()
}

fn drag(dial: &mut PitchDial, from_deg: f32, to_deg: f32) {
    let mut g = DragGesture::default();
    g.begin(deg(from_deg), dial.rotation());
    g.drag_to(deg(to_deg), dial);
    g.end();
}

#[test]
fn sixty_five_degrees_snaps_to_two_steps_forward() {
    let mut dial = PitchDial::new(DialConfig::transposer());
    drag(&mut dial, 10.0, 75.0);
    assert_eq!(dial.rotation().value(), 11);
}

#[test]
fn sixty_five_degrees_snaps_to_two_steps_compensating() {
    let mut dial = PitchDial::new(DialConfig::shapes());
    drag(&mut dial, 10.0, 75.0);
    assert_eq!(dial.rotation().value(), 7);
}

#[test]
fn moves_are_measured_from_drag_start() {
    let mut dial = PitchDial::new(DialConfig::transposer());
    let mut g = DragGesture::default();
    g.begin(deg(0.0), dial.rotation());
    for a in [10.0, 20.0, 40.0, 50.0, 95.0] {
        g.drag_to(deg(a), &mut dial);
    }
    // 95° from start: three steps, not an accumulation of each move.
    assert_eq!(dial.rotation().value(), 0);
    // Coming back to the start angle restores the start rotation.
    g.drag_to(deg(0.0), &mut dial);
    assert_eq!(dial.rotation().value(), 9);
}

#[test]
fn crossing_the_atan2_seam_has_no_double_jump() {
    // 170° -> -170° is a 20° clockwise move, but the raw difference is -340°.
    let mut dial = PitchDial::new(DialConfig::transposer());
    drag(&mut dial, 170.0, -170.0);
    assert_eq!(dial.rotation().value(), 10);

    let mut dial = PitchDial::new(DialConfig::transposer());
    drag(&mut dial, -170.0, 170.0);
    assert_eq!(dial.rotation().value(), 8);
}

#[test]
fn sweeping_across_the_seam_moves_one_step_at_a_time() {
    let mut dial = PitchDial::new(DialConfig::transposer());
    let mut g = DragGesture::default();
    g.begin(deg(120.0), dial.rotation());
    let mut last = dial.rotation().value();
    let mut a = 120.0_f32;
    while a < 300.0 {
        a += 5.0;
        // Report the pointer the way atan2 would, in (-180, 180].
        let wrapped = if a > 180.0 { a - 360.0 } else { a };
        g.drag_to(deg(wrapped), &mut dial);
        let now = dial.rotation().value();
        let jump = (now - last).rem_euclid(12);
        assert!(jump == 0 || jump == 1, "jumped {jump} steps at {a}°");
        last = now;
    }
    // 180° total is six steps from 9.
    assert_eq!(dial.rotation().value(), 3);
}

#[test]
fn release_keeps_last_snapped_rotation() {
    let mut dial = PitchDial::new(DialConfig::transposer());
    let mut g = DragGesture::default();
    g.begin(deg(0.0), dial.rotation());
    g.drag_to(deg(-31.0), &mut dial);
    assert!(g.end());
    assert!(!g.is_dragging());
    assert_eq!(dial.rotation().value(), 8);

    // Moves after release do nothing.
    assert!(!g.drag_to(deg(120.0), &mut dial));
    assert_eq!(dial.rotation().value(), 8);
    assert!(!g.end());
}

#[test]
fn small_jitter_does_not_rotate() {
    let mut dial = PitchDial::new(DialConfig::transposer());
    let mut g = DragGesture::default();
    g.begin(deg(45.0), dial.rotation());
    assert!(!g.drag_to(deg(58.0), &mut dial));
    assert!(!g.drag_to(deg(32.0), &mut dial));
    assert_eq!(dial.rotation().value(), 9);
}
