//! Canvas 2D renderer for the dial's render command list.
//!
//! Commands describe retained state (wedges, then rotations and styles that
//! apply to them), while the canvas is immediate mode, so the list is folded
//! into a `SceneFrame` first and painted in one pass.

use crate::constants::*;
use crate::input;
use dial_core::layout::Wedge;
use dial_core::{PitchClass, RenderCommand, Ring, CENTER, PITCH_CLASS_COUNT};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

const WEDGES_PER_RING: usize = PITCH_CLASS_COUNT as usize;

#[derive(Clone, Copy, Debug, Default)]
struct WedgeStyle {
    drawn: bool,
    is_accidental: bool,
    label: Option<&'static str>,
    highlighted: bool,
    selected: bool,
}

#[derive(Clone, Debug, Default)]
struct RingFrame {
    rotation_degrees: f32,
    wedges: [WedgeStyle; WEDGES_PER_RING],
}

#[derive(Clone, Debug, Default)]
pub struct SceneFrame {
    outer: RingFrame,
    inner: RingFrame,
}

impl SceneFrame {
    fn ring_mut(&mut self, ring: Ring) -> &mut RingFrame {
        match ring {
            Ring::Outer => &mut self.outer,
            Ring::Inner => &mut self.inner,
        }
    }

    fn wedge_mut(&mut self, ring: Ring, pc: PitchClass) -> &mut WedgeStyle {
        &mut self.ring_mut(ring).wedges[pc.index()]
    }

    pub fn from_commands(commands: &[RenderCommand]) -> Self {
        let mut frame = SceneFrame::default();
        for cmd in commands {
            match *cmd {
                RenderCommand::DrawWedge {
                    ring,
                    pitch_class,
                    is_accidental,
                    label,
                    ..
                } => {
                    let w = frame.wedge_mut(ring, pitch_class);
                    w.drawn = true;
                    w.is_accidental = is_accidental;
                    w.label = label;
                }
                RenderCommand::ApplyRotation { ring, degrees } => {
                    frame.ring_mut(ring).rotation_degrees = degrees;
                }
                RenderCommand::SetHighlighted {
                    ring,
                    pitch_class,
                    highlighted,
                } => frame.wedge_mut(ring, pitch_class).highlighted = highlighted,
                RenderCommand::SetPressedStyle {
                    ring,
                    pitch_class,
                    selected,
                } => frame.wedge_mut(ring, pitch_class).selected = selected,
            }
        }
        frame
    }
}

fn fill_for(ring: Ring, style: &WedgeStyle) -> &'static str {
    match (style.highlighted, style.is_accidental, ring) {
        (true, false, _) => HIGHLIGHT_NATURAL_FILL,
        (true, true, _) => HIGHLIGHT_ACCIDENTAL_FILL,
        (false, false, Ring::Outer) => NATURAL_FILL,
        (false, true, Ring::Outer) => ACCIDENTAL_FILL,
        (false, false, Ring::Inner) => INNER_NATURAL_FILL,
        (false, true, Ring::Inner) => INNER_ACCIDENTAL_FILL,
    }
}

pub struct DialRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl DialRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    pub fn draw(&self, commands: &[RenderCommand]) {
        let frame = SceneFrame::from_commands(commands);
        if let Err(e) = self.paint(&frame) {
            log::error!("[render] {:?}", e);
        }
    }

    fn paint(&self, frame: &SceneFrame) -> Result<(), wasm_bindgen::JsValue> {
        let ctx = &self.ctx;
        let size = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);

        let (scale, offset) = input::view_fit(size);
        let scale = scale as f64;
        ctx.set_transform(scale, 0.0, 0.0, scale, offset.x as f64, offset.y as f64)?;
        ctx.set_text_align("center");

        self.paint_ring(Ring::Outer, &frame.outer)?;
        self.paint_ring(Ring::Inner, &frame.inner)?;
        Ok(())
    }

    fn paint_ring(&self, ring: Ring, rf: &RingFrame) -> Result<(), wasm_bindgen::JsValue> {
        let ctx = &self.ctx;
        let (cx, cy) = (CENTER[0] as f64, CENTER[1] as f64);
        ctx.save();
        if rf.rotation_degrees != 0.0 {
            ctx.translate(cx, cy)?;
            ctx.rotate(rf.rotation_degrees.to_radians() as f64)?;
            ctx.translate(-cx, -cy)?;
        }
        ctx.set_font(match ring {
            Ring::Outer => LABEL_FONT,
            Ring::Inner => INNER_LABEL_FONT,
        });

        for pc in PitchClass::all() {
            let style = &rf.wedges[pc.index()];
            if !style.drawn {
                continue;
            }
            let wedge = Wedge::new(ring, pc);
            let [outer_start, _, inner_end, _] = wedge.corners();
            ctx.begin_path();
            ctx.move_to(outer_start.x as f64, outer_start.y as f64);
            ctx.arc(
                cx,
                cy,
                wedge.outer_radius as f64,
                wedge.start_angle as f64,
                wedge.end_angle as f64,
            )?;
            ctx.line_to(inner_end.x as f64, inner_end.y as f64);
            ctx.arc_with_anticlockwise(
                cx,
                cy,
                wedge.inner_radius as f64,
                wedge.end_angle as f64,
                wedge.start_angle as f64,
                true,
            )?;
            ctx.close_path();
            ctx.set_fill_style_str(fill_for(ring, style));
            ctx.fill();
            ctx.set_stroke_style_str(WEDGE_STROKE);
            ctx.set_line_width(WEDGE_STROKE_WIDTH);
            ctx.stroke();
            if style.selected {
                ctx.set_stroke_style_str(SELECTED_STROKE);
                ctx.set_line_width(SELECTED_STROKE_WIDTH);
                ctx.stroke();
            }

            if let Some(label) = style.label {
                let (pos, rot) = wedge.label_anchor();
                ctx.save();
                ctx.translate(pos.x as f64, pos.y as f64)?;
                ctx.rotate(rot as f64)?;
                ctx.set_fill_style_str(LABEL_COLOR);
                ctx.fill_text(label, 0.0, 0.0)?;
                ctx.restore();
            }
        }
        ctx.restore();
        Ok(())
    }
}
