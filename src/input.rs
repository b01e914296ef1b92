use dial_core::VIEW_SIZE;
use glam::Vec2;
use web_sys as web;

/// Scale and offset that fit the square view box centered inside a
/// `size` surface: `surface = view * scale + offset`.
#[inline]
pub fn view_fit(size: Vec2) -> (f32, Vec2) {
    let side = size.x.min(size.y).max(1.0);
    let scale = side / VIEW_SIZE;
    let offset = (size - Vec2::splat(VIEW_SIZE * scale)) * 0.5;
    (scale, offset)
}

/// Inverse of [`view_fit`] for a point in surface coordinates.
#[inline]
pub fn surface_to_view(point: Vec2, size: Vec2) -> Vec2 {
    let (scale, offset) = view_fit(size);
    (point - offset) / scale
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_view_pos(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    surface_to_view(css, Vec2::new(rect.width() as f32, rect.height() as f32))
}
