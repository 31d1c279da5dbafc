use super::{CanvasBackdrop, Painter, Rgba};
use glam::Vec2;

pub const GRID_SIZE: f32 = 60.0;
const PAN_SPEED: Vec2 = Vec2::new(8.0, 5.0); // px/s, diagonal drift
pub const SPOTLIGHT_RADIUS: f32 = 350.0;
const DOT_RADIUS_FRAC: f32 = 0.6;
const LINE_GRAY: u8 = 51;
const DOT_GRAY: u8 = 80;

/// Alpha of a grid line `dist` px from the pointer; `None` outside the spotlight.
pub fn line_alpha(dist: f32, radius: f32) -> Option<f32> {
    if dist > radius || radius <= 0.0 {
        return None;
    }
    Some(0.4 * (1.0 - dist / radius).powi(2))
}

/// Alpha of an intersection dot; dots only appear in the inner part of the
/// spotlight.
pub fn dot_alpha(dist: f32, radius: f32) -> Option<f32> {
    let r = radius * DOT_RADIUS_FRAC;
    if dist > r || r <= 0.0 {
        return None;
    }
    Some(0.5 * (1.0 - dist / r).powi(2))
}

/// A slowly panning grid, visible only in a spotlight around the pointer.
#[derive(Clone, Debug)]
pub struct CalibrationGrid {
    width: f32,
    height: f32,
    offset: Vec2,
    pointer: Option<Vec2>,
}

impl CalibrationGrid {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset: Vec2::ZERO,
            pointer: None,
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Pan, keeping the offset inside one cell.
    pub fn advance(&mut self, dt: f32) {
        self.offset = (self.offset + PAN_SPEED * dt.max(0.0)) % GRID_SIZE;
    }
}

impl CanvasBackdrop for CalibrationGrid {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    fn frame(&mut self, dt: f32, painter: &mut dyn Painter) {
        self.advance(dt);
        painter.clear();
        let Some(m) = self.pointer else {
            return;
        };

        let reach = SPOTLIGHT_RADIUS + GRID_SIZE;
        let min = Vec2::new((m.x - reach).max(0.0), (m.y - reach).max(0.0));
        let max = Vec2::new((m.x + reach).min(self.width), (m.y + reach).min(self.height));
        let o = self.offset;
        let start_col = ((min.x - o.x) / GRID_SIZE).floor() as i32;
        let end_col = ((max.x - o.x) / GRID_SIZE).ceil() as i32;
        let start_row = ((min.y - o.y) / GRID_SIZE).floor() as i32;
        let end_row = ((max.y - o.y) / GRID_SIZE).ceil() as i32;

        for col in start_col..=end_col {
            let x = col as f32 * GRID_SIZE + o.x;
            if x < min.x || x > max.x {
                continue;
            }
            if let Some(a) = line_alpha((x - m.x).abs(), SPOTLIGHT_RADIUS) {
                painter.stroke_polyline(
                    &[Vec2::new(x, min.y), Vec2::new(x, max.y)],
                    Rgba::gray(LINE_GRAY, a),
                    0.5,
                );
            }
        }
        for row in start_row..=end_row {
            let y = row as f32 * GRID_SIZE + o.y;
            if y < min.y || y > max.y {
                continue;
            }
            if let Some(a) = line_alpha((y - m.y).abs(), SPOTLIGHT_RADIUS) {
                painter.stroke_polyline(
                    &[Vec2::new(min.x, y), Vec2::new(max.x, y)],
                    Rgba::gray(LINE_GRAY, a),
                    0.5,
                );
            }
        }
        for col in start_col..=end_col {
            for row in start_row..=end_row {
                let p = Vec2::new(col as f32 * GRID_SIZE, row as f32 * GRID_SIZE) + o;
                if let Some(a) = dot_alpha(p.distance(m), SPOTLIGHT_RADIUS) {
                    painter.fill_circle(p, 1.5, Rgba::gray(DOT_GRAY, a));
                }
            }
        }
    }
}
