// Host-side tests for dial geometry, hit testing and the render command list.

use dial_core::layout::{pitch_class_at_angle, polar_to_cartesian, ring_wedges};
use dial_core::*;
use glam::Vec2;

fn center() -> Vec2 {
    Vec2::new(CENTER[0], CENTER[1])
}

fn point_at(radius: f32, angle_deg: f32) -> Vec2 {
    polar_to_cartesian(center(), radius, angle_deg.to_radians())
}

#[test]
fn wedges_tile_the_full_circle() {
    let wedges: Vec<Wedge> = ring_wedges(Ring::Outer).collect();
    assert_eq!(wedges.len(), 12);
    for pair in wedges.windows(2) {
        assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-5);
    }
    let span = wedges[11].end_angle - wedges[0].start_angle;
    assert!((span - std::f32::consts::TAU).abs() < 1e-4);
}

#[test]
fn wedge_corners_sit_on_ring_radii() {
    let w = Wedge::new(Ring::Inner, normalize(4));
    let [a, b, c, d] = w.corners();
    for (p, r) in [
        (a, INNER_RING_OUTER_RADIUS),
        (b, INNER_RING_OUTER_RADIUS),
        (c, INNER_RING_INNER_RADIUS),
        (d, INNER_RING_INNER_RADIUS),
    ] {
        assert!(((p - center()).length() - r).abs() < 1e-3);
    }
}

#[test]
fn pointer_angle_matches_screen_directions() {
    // y grows downward, so "below the center" is +90°.
    assert!((pointer_angle(center() + Vec2::new(10.0, 0.0))).abs() < 1e-6);
    assert!((pointer_angle(center() + Vec2::new(0.0, 10.0)).to_degrees() - 90.0).abs() < 1e-4);
    assert!((pointer_angle(center() + Vec2::new(0.0, -10.0)).to_degrees() + 90.0).abs() < 1e-4);
}

#[test]
fn angle_to_pitch_class_uses_wedge_centers() {
    assert_eq!(pitch_class_at_angle((-90.0f32).to_radians()), PitchClass::C);
    assert_eq!(pitch_class_at_angle((-80.0f32).to_radians()), PitchClass::C);
    assert_eq!(pitch_class_at_angle((-70.0f32).to_radians()).value(), 1);
    assert_eq!(pitch_class_at_angle(0.0).value(), 3);
    assert_eq!(pitch_class_at_angle((-100.0f32).to_radians()), PitchClass::C);
    assert_eq!(pitch_class_at_angle((-110.0f32).to_radians()).value(), 11);
    assert_eq!(pitch_class_at_angle((179.0f32).to_radians()).value(), 9);
}

#[test]
fn hit_test_picks_ring_by_radius() {
    assert_eq!(hit_test(point_at(230.0, -90.0), 0.0), Some((Ring::Outer, PitchClass::C)));
    assert_eq!(hit_test(point_at(130.0, -90.0), 0.0), Some((Ring::Inner, PitchClass::C)));
    assert_eq!(hit_test(point_at(185.0, -90.0), 0.0), None);
    assert_eq!(hit_test(point_at(40.0, -90.0), 0.0), None);
    assert_eq!(hit_test(point_at(295.0, -90.0), 0.0), None);
}

#[test]
fn hit_test_accounts_for_wheel_rotation() {
    // Wheel turned by +90°: the wedge at the top is the one drawn at -180°.
    let (ring, pc) = hit_test(point_at(130.0, -90.0), 90.0).unwrap();
    assert_eq!(ring, Ring::Inner);
    assert_eq!(pc.value(), 9);
    // The fixed ring does not care.
    assert_eq!(hit_test(point_at(230.0, -90.0), 90.0), Some((Ring::Outer, PitchClass::C)));
}

#[test]
fn scene_draws_both_rings_then_rotates_the_wheel() {
    let dial = PitchDial::new(DialConfig::transposer());
    let cmds = scene_commands(&dial);
    let wedges = cmds
        .iter()
        .filter(|c| matches!(c, RenderCommand::DrawWedge { .. }))
        .count();
    assert_eq!(wedges, 24);
    assert_eq!(
        cmds[24],
        RenderCommand::ApplyRotation {
            ring: Ring::Inner,
            degrees: 270.0
        }
    );
}

#[test]
fn accidental_wedges_have_no_label() {
    let dial = PitchDial::default();
    for cmd in scene_commands(&dial) {
        if let RenderCommand::DrawWedge {
            pitch_class,
            is_accidental,
            label,
            ..
        } = cmd
        {
            assert_eq!(is_accidental, label.is_none(), "{pitch_class}");
            if let Some(l) = label {
                assert!(!l.contains('/'));
            }
        }
    }
}

#[test]
fn transposer_scene_marks_only_the_reference() {
    let mut dial = PitchDial::new(DialConfig::transposer());
    dial.select_reference(normalize(5));
    let cmds = scene_commands(&dial);
    assert!(!cmds
        .iter()
        .any(|c| matches!(c, RenderCommand::SetHighlighted { .. })));
    let pressed: Vec<i32> = cmds
        .iter()
        .filter_map(|c| match c {
            RenderCommand::SetPressedStyle {
                pitch_class,
                selected: true,
                ..
            } => Some(pitch_class.value()),
            _ => None,
        })
        .collect();
    assert_eq!(pressed, vec![5]);
}

#[test]
fn shapes_scene_highlights_chord_tones_on_the_fixed_ring() {
    let mut dial = PitchDial::new(DialConfig::shapes());
    dial.toggle_chord("dominant7").unwrap();
    let cmds = scene_commands(&dial);
    let lit: Vec<i32> = cmds
        .iter()
        .filter_map(|c| match c {
            RenderCommand::SetHighlighted {
                ring: Ring::Outer,
                pitch_class,
                highlighted: true,
            } => Some(pitch_class.value()),
            _ => None,
        })
        .collect();
    assert_eq!(lit, vec![0, 4, 7, 10]);
    assert!(cmds.contains(&RenderCommand::ApplyRotation {
        ring: Ring::Inner,
        degrees: -270.0
    }));
    assert!(!cmds
        .iter()
        .any(|c| matches!(c, RenderCommand::SetPressedStyle { .. })));
}
