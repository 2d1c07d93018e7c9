//! Shape generation in window pixel space

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Map a window pixel (origin top-left, y down) to NDC (origin center, y up)
pub fn pixel_to_ndc(p: Vec2, viewport: (u32, u32)) -> Vec2 {
    let (w, h) = viewport;
    let w = w.max(1) as f32;
    let h = h.max(1) as f32;
    Vec2::new(p.x / w * 2.0 - 1.0, 1.0 - p.y / h * 2.0)
}

/// Two triangles covering `rect`
pub fn filled_rect(rect: &Rect, viewport: (u32, u32), color: [f32; 4]) -> [Vertex; 6] {
    let min = pixel_to_ndc(rect.pos.as_vec2(), viewport);
    let max = pixel_to_ndc(rect.far().as_vec2(), viewport);

    let tl = Vertex::new(min.x, min.y, color);
    let tr = Vertex::new(max.x, min.y, color);
    let bl = Vertex::new(min.x, max.y, color);
    let br = Vertex::new(max.x, max.y, color);

    [tl, bl, br, tl, br, tr]
}
