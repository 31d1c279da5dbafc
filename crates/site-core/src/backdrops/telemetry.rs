use super::{CanvasBackdrop, Painter, Rgba, BACKGROUND};
use glam::Vec2;

const H_LINES: u32 = 40;
const V_LINES: i32 = 40;
const PERSPECTIVE_POWER: f32 = 2.2;
const HORIZON_FRAC: f32 = 0.15;
const SAMPLE_STEP_PX: f32 = 3.0;
const LINE_GRAY: u8 = 110;

/// One horizontal line sampled across the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetryLine {
    pub points: Vec<Vec2>,
    pub color: Rgba,
    pub width: f32,
}

/// Perspective terrain-scan grid: wavy horizontals bunched toward the
/// horizon, verticals fanning out from a vanishing point.
#[derive(Clone, Debug)]
pub struct Telemetry {
    width: f32,
    height: f32,
    time: f32,
    scratch: Vec<Vec2>,
}

impl Telemetry {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            time: 0.0,
            scratch: Vec::new(),
        }
    }

    #[inline]
    pub fn horizon_y(&self) -> f32 {
        self.height * HORIZON_FRAC
    }

    /// Sample line `i` (1-based) into `out` and return its stroke.
    fn sample_line(&self, i: u32, t: f32, out: &mut Vec<Vec2>) -> (Rgba, f32) {
        let ratio = i as f32 / H_LINES as f32;
        let horizon = self.horizon_y();
        let y = horizon + ratio.powf(PERSPECTIVE_POWER) * (self.height * 1.1 - horizon);
        let wave = (ratio * 5.0 + t * 0.6).sin() * 15.0 * ratio;

        out.clear();
        let mut x = 0.0;
        while x <= self.width {
            let xr = if self.width > 0.0 { x / self.width } else { 0.0 };
            let local = wave
                + (xr * 8.0 + t * 0.4).sin() * 6.0 * ratio
                + (xr * 3.0 + t * 0.25).cos() * 4.0 * ratio;
            out.push(Vec2::new(x, y + local));
            x += SAMPLE_STEP_PX;
        }
        (
            Rgba::gray(LINE_GRAY, 0.08 + ratio * 0.5),
            0.3 + ratio * 1.8,
        )
    }

    /// All horizontal lines at time `t`, nearest last.
    pub fn horizontal_lines(&self, t: f32) -> Vec<TelemetryLine> {
        (1..=H_LINES)
            .map(|i| {
                let mut points = Vec::new();
                let (color, width) = self.sample_line(i, t, &mut points);
                TelemetryLine {
                    points,
                    color,
                    width,
                }
            })
            .collect()
    }

    /// Verticals as `(bottom_x, color, width)`; all start at the vanishing point.
    pub fn vertical_lines(&self) -> impl Iterator<Item = (f32, Rgba, f32)> + '_ {
        let vanish = self.width * 0.5;
        let half = V_LINES / 2;
        (-half..=half).map(move |i| {
            let spread = i as f32 / half as f32;
            let fade = 1.0 - spread.abs() * 0.4;
            (
                vanish + spread * self.width * 1.5,
                Rgba::gray(LINE_GRAY, 0.35 * fade),
                0.3 + (1.0 - spread.abs()),
            )
        })
    }
}

impl CanvasBackdrop for Telemetry {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn frame(&mut self, dt: f32, painter: &mut dyn Painter) {
        self.time += dt.max(0.0);
        let t = self.time;
        painter.fill_rect(0.0, 0.0, self.width, self.height, BACKGROUND);

        let mut buf = std::mem::take(&mut self.scratch);
        for i in 1..=H_LINES {
            let (color, width) = self.sample_line(i, t, &mut buf);
            painter.stroke_polyline(&buf, color, width);
        }
        self.scratch = buf;

        let horizon = self.horizon_y();
        let vanish = Vec2::new(self.width * 0.5, horizon);
        for (bottom_x, color, width) in self.vertical_lines() {
            painter.stroke_polyline(&[vanish, Vec2::new(bottom_x, self.height + 50.0)], color, width);
        }

        painter.fill_radial(
            vanish,
            self.width * 0.5,
            &[
                (0.0, Rgba::gray(130, 0.1)),
                (0.5, Rgba::gray(100, 0.04)),
                (1.0, Rgba::gray(100, 0.0)),
            ],
            [0.0, horizon - 60.0, self.width, 120.0],
        );
    }
}
