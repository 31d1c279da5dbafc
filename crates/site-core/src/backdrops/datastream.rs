use super::{CanvasBackdrop, Painter, Rgba, BACKGROUND};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

const FONT_PX: f32 = 14.0;
const HEX: &str = "0123456789ABCDEF";
const SYSTEM_CHANCE: f64 = 0.005;
const RESET_CHANCE: f64 = 0.02;
const TRAIL_FADE: Rgba = Rgba::new(10, 10, 10, 0.06);
const GLYPH_COLOR: Rgba = Rgba::gray(135, 0.12);
const SYSTEM_COLOR: Rgba = Rgba::gray(135, 0.2);

pub const SYSTEM_STRINGS: [&str; 10] = [
    "SYS.01",
    "SYS.02",
    "SYS.03",
    "VERIFY",
    "AWAITING...",
    "PROCESS",
    "SIGNAL",
    "TRIAGE",
    "0x00FF",
    "NULL",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphDraw {
    pub text: &'static str,
    pub at: Vec2,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug)]
struct Column {
    /// Head position in rows; negative until it enters the screen.
    drop: f32,
    speed: f32,
}

/// Hex rain. Each column advances once per painted frame and respawns at the
/// top at random once its head has left the bottom edge.
#[derive(Debug)]
pub struct DataStream {
    width: f32,
    height: f32,
    columns: Vec<Column>,
    rng: StdRng,
    primed: bool,
    scratch: Vec<GlyphDraw>,
}

impl DataStream {
    pub fn new(width: f32, height: f32, rng: StdRng) -> Self {
        let mut s = Self {
            width,
            height,
            columns: Vec::new(),
            rng,
            primed: false,
            scratch: Vec::new(),
        };
        s.fit_columns();
        s
    }

    fn fit_columns(&mut self) {
        let n = (self.width / FONT_PX).floor().max(0.0) as usize;
        while self.columns.len() < n {
            let col = Column {
                drop: self.rng.gen_range(-100.0..=0.0),
                speed: self.rng.gen_range(0.3..1.0),
            };
            self.columns.push(col);
        }
        self.columns.truncate(n);
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Advance every column once, writing what to draw this frame into `out`.
    pub fn step(&mut self, out: &mut Vec<GlyphDraw>) {
        out.clear();
        for (i, col) in self.columns.iter_mut().enumerate() {
            let (text, color) = if self.rng.gen_bool(SYSTEM_CHANCE) {
                let s = SYSTEM_STRINGS.choose(&mut self.rng).copied().unwrap_or("NULL");
                (s, SYSTEM_COLOR)
            } else {
                let k = self.rng.gen_range(0..HEX.len());
                (&HEX[k..k + 1], GLYPH_COLOR)
            };
            let at = Vec2::new(i as f32 * FONT_PX, col.drop * FONT_PX);
            out.push(GlyphDraw { text, at, color });

            col.drop += col.speed;
            if at.y > self.height && self.rng.gen_bool(RESET_CHANCE) {
                col.drop = 0.0;
            }
        }
    }
}

impl CanvasBackdrop for DataStream {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.fit_columns();
        self.primed = false;
    }

    fn frame(&mut self, _dt: f32, painter: &mut dyn Painter) {
        if !self.primed {
            painter.fill_rect(0.0, 0.0, self.width, self.height, BACKGROUND);
            self.primed = true;
        }
        painter.fill_rect(0.0, 0.0, self.width, self.height, TRAIL_FADE);
        let mut draws = std::mem::take(&mut self.scratch);
        self.step(&mut draws);
        for g in &draws {
            painter.fill_text(g.text, g.at, FONT_PX, g.color);
        }
        self.scratch = draws;
    }
}
