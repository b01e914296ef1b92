//! Render contract: the dial's state as a flat list of drawing commands.
//!
//! A renderer replays the list in order. Wedges are drawn unrotated; a later
//! `ApplyRotation` applies to every wedge of its ring.

use crate::dial::PitchDial;
use crate::layout::{ring_wedges, Ring};
use crate::pitch::PitchClass;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderCommand {
    DrawWedge {
        ring: Ring,
        pitch_class: PitchClass,
        outer_radius: f32,
        inner_radius: f32,
        is_accidental: bool,
        /// Accidentals carry no label.
        label: Option<&'static str>,
    },
    ApplyRotation {
        ring: Ring,
        degrees: f32,
    },
    SetHighlighted {
        ring: Ring,
        pitch_class: PitchClass,
        highlighted: bool,
    },
    SetPressedStyle {
        ring: Ring,
        pitch_class: PitchClass,
        selected: bool,
    },
}

/// Ring that carries the scale/chord highlight. Shapes stay fixed relative
/// to the top of the dial while the wheel turns underneath.
pub const HIGHLIGHT_RING: Ring = Ring::Outer;
/// Ring whose wedges can be selected as the reference note.
pub const REFERENCE_RING: Ring = Ring::Outer;

fn draw_ring(ring: Ring, out: &mut Vec<RenderCommand>) {
    for wedge in ring_wedges(ring) {
        let is_accidental = wedge.pitch_class.is_accidental();
        out.push(RenderCommand::DrawWedge {
            ring,
            pitch_class: wedge.pitch_class,
            outer_radius: wedge.outer_radius,
            inner_radius: wedge.inner_radius,
            is_accidental,
            label: (!is_accidental).then(|| wedge.pitch_class.short_name()),
        });
    }
}

/// Full command list for the dial's current state.
pub fn scene_commands(dial: &PitchDial) -> Vec<RenderCommand> {
    let mut out = Vec::with_capacity(64);
    for ring in Ring::ALL {
        draw_ring(ring, &mut out);
    }
    out.push(RenderCommand::ApplyRotation {
        ring: Ring::Inner,
        degrees: dial.wheel_degrees(),
    });

    let config = dial.config();
    if config.interval_overlay {
        let highlight = dial.highlight_set();
        out.extend(PitchClass::all().map(|pc| RenderCommand::SetHighlighted {
            ring: HIGHLIGHT_RING,
            pitch_class: pc,
            highlighted: highlight.contains(pc),
        }));
    }
    if config.reference_selection {
        let reference = dial.reference();
        out.extend(PitchClass::all().map(|pc| RenderCommand::SetPressedStyle {
            ring: REFERENCE_RING,
            pitch_class: pc,
            selected: reference == Some(pc),
        }));
    }
    out
}
