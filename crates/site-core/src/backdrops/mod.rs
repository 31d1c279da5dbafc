//! Lightweight background scenes for the non-3D modes.
//!
//! Canvas scenes are simulations that paint through [`Painter`]; the web crate
//! implements it over `CanvasRenderingContext2d`. DOM scenes (orbs, sweep,
//! photo) only compute positions and styles for a few absolutely positioned
//! elements.

mod ambient;
mod calibration;
mod datastream;
mod orthogonal;
mod photo;
mod sweep;
mod telemetry;

pub use ambient::{AmbientOrbs, Orb, OrbKeyframes, AMBIENT_ORBS};
pub use calibration::{dot_alpha, line_alpha, CalibrationGrid};
pub use datastream::{DataStream, GlyphDraw, SYSTEM_STRINGS};
pub use orthogonal::{particle_count, Heading, OrthogonalFlow, Particle, BRAND_COLORS};
pub use photo::{PhotoBackdrop, PHOTO};
pub use sweep::{SubsonicSweep, SweepBand, SWEEP_BANDS};
pub use telemetry::{Telemetry, TelemetryLine};

use glam::Vec2;

/// Page background, `#0A0A0A`.
pub const BACKGROUND: Rgba = Rgba::new(10, 10, 10, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(v: u8, a: f32) -> Self {
        Self::new(v, v, v, a)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// 2D drawing surface in CSS pixels.
pub trait Painter {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_text(&mut self, text: &str, at: Vec2, px: f32, color: Rgba);
    /// Fill `rect` (`x, y, w, h`) with a radial gradient around `center`.
    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[(f32, Rgba)], rect: [f32; 4]);
}

/// One canvas scene.
pub trait CanvasBackdrop {
    /// Viewport size in CSS pixels.
    fn resize(&mut self, width: f32, height: f32);
    /// Pointer in CSS pixels, `None` once it leaves the page.
    fn set_pointer(&mut self, _pointer: Option<Vec2>) {}
    /// Advance by `dt` seconds and paint one frame.
    fn frame(&mut self, dt: f32, painter: &mut dyn Painter);
}

/// Symmetric cubic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
