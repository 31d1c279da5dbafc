use glam::Vec2;
use web_sys as web;

/// Viewport position to NDC in `[-1, 1]`, `y` up. A degenerate viewport
/// maps everything to the centre.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = 1.0 - (client_y / height) * 2.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Whether a viewport position lies inside the page.
#[inline]
pub fn inside_viewport(p: Vec2, width: f32, height: f32) -> bool {
    p.x >= 0.0 && p.y >= 0.0 && p.x <= width && p.y <= height
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
