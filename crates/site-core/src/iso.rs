//! Isometric line illustrations for the project cards.
//!
//! Geometry is computed once from literal layout constants. What changes at
//! runtime is only the active [`Variant`], which selects a stroke style per
//! path and a vertical shift per layer.

use glam::Vec2;
use smallvec::SmallVec;
use std::fmt::Write;

pub const COS30: f32 = 0.866_025_4;
pub const SIN30: f32 = 0.5;

// ---------------- Colors ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const COPPER: Rgb = Rgb(0xD9, 0x77, 0x36);
    pub const GRAY: Rgb = Rgb(0x87, 0x87, 0x87);
    pub const GRID: Rgb = Rgb(0x33, 0x33, 0x33);

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Rgb> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return None;
        }
        let c = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();
        Some(Rgb(c(0)?, c(2)?, c(4)?))
    }

    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

// ---------------- Path data ----------------

/// An SVG path `d` string. Coordinates are written with one decimal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathData(String);

impl PathData {
    pub fn new() -> Self {
        Self(String::new())
    }

    fn cmd(mut self, c: char, p: Vec2) -> Self {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        _ = write!(self.0, "{}{:.1} {:.1}", c, p.x, p.y);
        self
    }

    pub fn move_to(self, p: Vec2) -> Self {
        self.cmd('M', p)
    }

    pub fn line_to(self, p: Vec2) -> Self {
        self.cmd('L', p)
    }

    pub fn quad_to(mut self, ctrl: Vec2, p: Vec2) -> Self {
        _ = write!(self.0, " Q{:.1} {:.1} {:.1} {:.1}", ctrl.x, ctrl.y, p.x, p.y);
        self
    }

    /// Half-circle arc of radius `r` to `p` (large-arc, sweep).
    pub fn arc_to(mut self, r: f32, p: Vec2) -> Self {
        _ = write!(self.0, " A{} {} 0 1 1 {:.1} {:.1}", r, r, p.x, p.y);
        self
    }

    pub fn close(mut self) -> Self {
        self.0.push_str(" Z");
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join several subpaths into one `d` attribute.
    pub fn join(parts: impl IntoIterator<Item = PathData>) -> PathData {
        let mut out = String::new();
        for p in parts {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&p.0);
        }
        PathData(out)
    }
}

impl std::fmt::Display for PathData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------- Projection ----------------

/// Fixed 30° projection from the iso plane to screen space around `(cx, cy)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsoProjection {
    pub cx: f32,
    pub cy: f32,
}

impl IsoProjection {
    pub const fn new(cx: f32, cy: f32) -> Self {
        Self { cx, cy }
    }

    #[inline]
    pub fn project(&self, ix: f32, iy: f32) -> Vec2 {
        Vec2::new(
            self.cx + ix * COS30 - iy * COS30,
            self.cy + ix * SIN30 + iy * SIN30,
        )
    }

    /// Inverse of [`project`](Self::project).
    pub fn unproject(&self, screen: Vec2) -> (f32, f32) {
        let a = (screen.x - self.cx) / COS30;
        let b = (screen.y - self.cy) / SIN30;
        ((a + b) * 0.5, (b - a) * 0.5)
    }

    /// Top face: the iso rectangle `(ox, oy, w, h)` as a closed parallelogram.
    pub fn top_face(&self, ox: f32, oy: f32, w: f32, h: f32) -> PathData {
        PathData::new()
            .move_to(self.project(ox, oy))
            .line_to(self.project(ox + w, oy))
            .line_to(self.project(ox + w, oy + h))
            .line_to(self.project(ox, oy + h))
            .close()
    }

    /// Right side face: the `x = ox + w` edge extruded down by `depth`.
    pub fn right_face(&self, ox: f32, oy: f32, w: f32, h: f32, depth: f32) -> PathData {
        let tr = self.project(ox + w, oy);
        let br = self.project(ox + w, oy + h);
        let down = Vec2::new(0.0, depth);
        PathData::new()
            .move_to(tr)
            .line_to(tr + down)
            .line_to(br + down)
            .line_to(br)
            .close()
    }

    /// Left side face: the `y = oy + h` edge extruded down by `depth`.
    pub fn left_face(&self, ox: f32, oy: f32, w: f32, h: f32, depth: f32) -> PathData {
        let br = self.project(ox + w, oy + h);
        let bl = self.project(ox, oy + h);
        let down = Vec2::new(0.0, depth);
        PathData::new()
            .move_to(bl)
            .line_to(bl + down)
            .line_to(br + down)
            .line_to(br)
            .close()
    }

    /// Segment along the iso X axis.
    pub fn line_x(&self, ox: f32, oy: f32, length: f32) -> PathData {
        PathData::new()
            .move_to(self.project(ox, oy))
            .line_to(self.project(ox + length, oy))
    }

    /// Segment along the iso Y axis.
    pub fn line_y(&self, ox: f32, oy: f32, length: f32) -> PathData {
        PathData::new()
            .move_to(self.project(ox, oy))
            .line_to(self.project(ox, oy + length))
    }

    /// Open polyline through iso points.
    pub fn polyline(&self, points: &[(f32, f32)]) -> PathData {
        let mut it = points.iter();
        let Some(&(x0, y0)) = it.next() else {
            return PathData::new();
        };
        let mut d = PathData::new().move_to(self.project(x0, y0));
        for &(x, y) in it {
            d = d.line_to(self.project(x, y));
        }
        d
    }
}

/// Screen-space diamond of half-size `r` centred at `c`.
pub fn diamond(c: Vec2, r: f32) -> PathData {
    PathData::new()
        .move_to(c - Vec2::new(r, 0.0))
        .line_to(c - Vec2::new(0.0, r))
        .line_to(c + Vec2::new(r, 0.0))
        .line_to(c + Vec2::new(0.0, r))
        .close()
}

/// Screen-space circle from two half arcs.
pub fn circle(c: Vec2, r: f32) -> PathData {
    let left = c - Vec2::new(r, 0.0);
    let right = c + Vec2::new(r, 0.0);
    PathData::new().move_to(left).arc_to(r, right).arc_to(r, left)
}

/// Screen-space segment.
pub fn segment(a: Vec2, b: Vec2) -> PathData {
    PathData::new().move_to(a).line_to(b)
}

// ---------------- Variants ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Hidden,
    Rest,
    Hover,
}

/// What the presentation layer animates toward for one path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub opacity: f32,
    /// Fraction of the path drawn, `0..=1`.
    pub draw_progress: f32,
}

impl StrokeStyle {
    pub const fn new(color: Rgb, opacity: f32, draw_progress: f32) -> Self {
        Self {
            color,
            opacity,
            draw_progress,
        }
    }

    pub fn lerp(&self, other: &StrokeStyle, t: f32) -> StrokeStyle {
        let t = t.clamp(0.0, 1.0);
        StrokeStyle {
            color: self.color.lerp(other.color, t),
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            draw_progress: self.draw_progress + (other.draw_progress - self.draw_progress) * t,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantSet {
    pub hidden: StrokeStyle,
    pub rest: StrokeStyle,
    pub hover: StrokeStyle,
}

impl VariantSet {
    pub fn resolve(&self, variant: Variant) -> StrokeStyle {
        match variant {
            Variant::Hidden => self.hidden,
            Variant::Rest => self.rest,
            Variant::Hover => self.hover,
        }
    }

    /// Visible at rest in gray, full accent on hover.
    pub fn header(accent: Rgb) -> Self {
        Self {
            hidden: StrokeStyle::new(Rgb::GRAY, 0.0, 0.0),
            rest: StrokeStyle::new(Rgb::GRAY, 0.6, 1.0),
            hover: StrokeStyle::new(accent, 1.0, 1.0),
        }
    }

    /// Drawn but transparent at rest, revealed on hover.
    pub fn chassis(accent: Rgb) -> Self {
        Self {
            hidden: StrokeStyle::new(Rgb::GRAY, 0.0, 0.0),
            rest: StrokeStyle::new(Rgb::GRAY, 0.0, 1.0),
            hover: StrokeStyle::new(accent, 0.8, 1.0),
        }
    }

    /// Only drawn on hover.
    pub fn reveal(accent: Rgb) -> Self {
        Self {
            hidden: StrokeStyle::new(Rgb::GRAY, 0.0, 0.0),
            rest: StrokeStyle::new(Rgb::GRAY, 0.0, 0.0),
            hover: StrokeStyle::new(accent, 1.0, 1.0),
        }
    }

    pub fn detail(accent: Rgb) -> Self {
        Self {
            hover: StrokeStyle::new(accent, 0.7, 1.0),
            ..Self::chassis(accent)
        }
    }

    /// Like [`reveal`](Self::reveal) but at 70% opacity when shown.
    pub fn reveal_faint(accent: Rgb) -> Self {
        Self {
            hover: StrokeStyle::new(accent, 0.7, 1.0),
            ..Self::reveal(accent)
        }
    }

    /// Drawn in gray at rest; on hover it turns to the accent while fading out
    /// so whatever replaces it can take over.
    pub fn fade_out(accent: Rgb) -> Self {
        Self {
            hidden: StrokeStyle::new(Rgb::GRAY, 0.0, 0.0),
            rest: StrokeStyle::new(Rgb::GRAY, 0.6, 1.0),
            hover: StrokeStyle::new(accent, 0.0, 1.0),
        }
    }

    /// Card stack art: half-opaque gray at rest.
    pub fn stack(accent: Rgb) -> Self {
        Self {
            hidden: StrokeStyle::new(Rgb::GRAY, 0.0, 0.0),
            rest: StrokeStyle::new(Rgb::GRAY, 0.5, 1.0),
            hover: StrokeStyle::new(accent, 1.0, 1.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct IsoPath {
    pub d: PathData,
    pub stroke_width: f32,
    pub variants: VariantSet,
    /// Stagger before this path starts drawing, seconds.
    pub delay: f32,
}

/// A named group of paths that moves as one.
#[derive(Clone, Debug)]
pub struct IsoLayer {
    pub name: &'static str,
    pub paths: SmallVec<[IsoPath; 8]>,
    /// Vertical translation at rest.
    pub y_offset: f32,
    /// Vertical translation while hovered.
    pub hover_y: f32,
}

impl IsoLayer {
    pub fn new(name: &'static str, y_offset: f32, hover_y: f32) -> Self {
        Self {
            name,
            paths: SmallVec::new(),
            y_offset,
            hover_y,
        }
    }

    pub fn push(&mut self, d: PathData, stroke_width: f32, variants: VariantSet, delay: f32) {
        self.paths.push(IsoPath {
            d,
            stroke_width,
            variants,
            delay,
        });
    }

    pub fn translate_y(&self, variant: Variant) -> f32 {
        match variant {
            Variant::Hover => self.hover_y,
            Variant::Hidden | Variant::Rest => self.y_offset,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Illustration {
    pub label: String,
    pub view_box: [f32; 4],
    /// Static background lines, never animated.
    pub grid: Vec<PathData>,
    pub layers: Vec<IsoLayer>,
}

impl Illustration {
    pub fn path_count(&self) -> usize {
        self.layers.iter().map(|l| l.paths.len()).sum()
    }
}

// ---------------- TradeOS wireframe ----------------

const WIRE_CENTER: IsoProjection = IsoProjection::new(400.0, 280.0);
const WIRE_W: f32 = 140.0; // widget width
const WIRE_PILL_H: f32 = 28.0; // collapsed height
const WIRE_CARD_H: f32 = 120.0; // expanded height
const WIRE_DEPTH: f32 = 10.0; // card extrusion
const WIRE_PILL_DEPTH: f32 = 6.0;
const WIRE_OX: f32 = -WIRE_W / 2.0;
const WIRE_OY: f32 = -WIRE_PILL_H / 2.0;

/// The TradeOS "market wisdom" widget: a pill header that lifts on hover over
/// a card chassis whose quote lines draw in.
pub fn tradeos_wireframe(accent: Rgb) -> Illustration {
    let iso = WIRE_CENTER;

    let grid = cad_grid();

    // Layer 1: chassis
    let mut chassis = IsoLayer::new("chassis", 0.0, 15.0);
    let c = VariantSet::chassis(accent);
    chassis.push(iso.top_face(WIRE_OX, WIRE_OY, WIRE_W, WIRE_CARD_H), 1.0, c, 0.0);
    chassis.push(
        iso.right_face(WIRE_OX, WIRE_OY, WIRE_W, WIRE_CARD_H, WIRE_DEPTH),
        0.8,
        c,
        0.0,
    );
    chassis.push(
        iso.left_face(WIRE_OX, WIRE_OY, WIRE_W, WIRE_CARD_H, WIRE_DEPTH),
        0.8,
        c,
        0.0,
    );
    let detail = VariantSet::detail(accent);
    chassis.push(
        iso.line_x(WIRE_OX + 8.0, WIRE_CARD_H / 2.0 + 18.0, WIRE_W - 16.0),
        0.6,
        detail,
        0.3,
    );
    let pag = iso.project(0.0, WIRE_CARD_H / 2.0 + 28.0);
    for dx in [-13.0, -1.0, 11.0] {
        chassis.push(diamond(pag + Vec2::new(dx, 0.0), 3.0), 0.6, detail, 0.3);
    }
    chassis.push(
        segment(pag + Vec2::new(22.0, -2.0), pag + Vec2::new(30.0, -2.0)),
        0.6,
        detail,
        0.3,
    );
    chassis.push(
        segment(pag + Vec2::new(33.0, 3.0), pag + Vec2::new(30.0, -3.0)),
        0.6,
        detail,
        0.3,
    );
    chassis.push(
        segment(pag + Vec2::new(36.0, -2.0), pag + Vec2::new(44.0, -2.0)),
        0.6,
        detail,
        0.3,
    );

    // Layer 2: quote lines
    let mut quotes = IsoLayer::new("quotes", 0.0, 0.0);
    for (i, (oy, len)) in [(22.0, 105.0), (34.0, 100.0), (46.0, 75.0), (58.0, 95.0), (70.0, 55.0)]
        .into_iter()
        .enumerate()
    {
        quotes.push(
            iso.line_x(-55.0, oy, len),
            2.0,
            VariantSet::reveal(accent),
            0.15 + i as f32 * 0.08,
        );
    }

    // Layer 3: header pill
    let mut header = IsoLayer::new("header", 0.0, -20.0);
    let h = VariantSet::header(accent);
    header.push(iso.top_face(WIRE_OX, WIRE_OY, WIRE_W, WIRE_PILL_H), 1.2, h, 0.0);
    header.push(
        iso.right_face(WIRE_OX, WIRE_OY, WIRE_W, WIRE_PILL_H, WIRE_PILL_DEPTH),
        0.6,
        h,
        0.3,
    );
    header.push(
        iso.left_face(WIRE_OX, WIRE_OY, WIRE_W, WIRE_PILL_H, WIRE_PILL_DEPTH),
        0.6,
        h,
        0.35,
    );
    let brain = iso.project(-50.0, 0.0);
    let br = 10.0;
    let icon = [
        circle(brain, br),
        segment(brain - Vec2::new(0.0, br - 2.0), brain + Vec2::new(0.0, br - 2.0)),
        PathData::new()
            .move_to(brain - Vec2::new(0.0, 5.0))
            .quad_to(brain - Vec2::new(5.0, 0.0), brain + Vec2::new(0.0, 5.0)),
        PathData::new()
            .move_to(brain - Vec2::new(0.0, 5.0))
            .quad_to(brain + Vec2::new(5.0, 0.0), brain + Vec2::new(0.0, 5.0)),
    ];
    for (i, d) in icon.into_iter().enumerate() {
        header.push(d, 0.8, h, 0.4 + i as f32 * 0.05);
    }
    header.push(iso.line_x(-32.0, -4.0, 55.0), 2.0, h, 0.55);
    header.push(iso.line_x(-32.0, 4.0, 40.0), 2.0, h, 0.6);
    header.push(iso.polyline(&[(48.0, -4.0), (52.0, 4.0), (56.0, -4.0)]), 1.0, h, 0.65);

    // Dimension annotations ride with the header.
    let tl = iso.project(WIRE_OX, WIRE_OY);
    let tr = iso.project(WIRE_OX + WIRE_W, WIRE_OY);
    for d in [
        segment(tl - Vec2::new(0.0, 30.0), tr - Vec2::new(0.0, 30.0)),
        segment(tl - Vec2::new(0.0, 34.0), tl - Vec2::new(0.0, 26.0)),
        segment(tr - Vec2::new(0.0, 34.0), tr - Vec2::new(0.0, 26.0)),
        segment(tl - Vec2::new(0.0, 26.0), tl - Vec2::new(0.0, 8.0)),
        segment(tr - Vec2::new(0.0, 26.0), tr - Vec2::new(0.0, 8.0)),
    ] {
        header.push(d, 0.4, VariantSet::detail(accent), 0.3);
    }

    Illustration {
        label: "TradeOS Market Wisdom wireframe illustration".to_string(),
        view_box: [185.0, 155.0, 350.0, 270.0],
        grid,
        layers: vec![chassis, quotes, header],
    }
}

/// Drafting grid behind the detail wireframes: 9 horizontal and 9 vertical lines.
fn cad_grid() -> Vec<PathData> {
    let mut grid = Vec::with_capacity(18);
    for y in (80..=480).step_by(50) {
        grid.push(segment(Vec2::new(60.0, y as f32), Vec2::new(740.0, y as f32)));
    }
    for x in (100..=700).step_by(75) {
        grid.push(segment(Vec2::new(x as f32, 40.0), Vec2::new(x as f32, 520.0)));
    }
    grid
}

// ---------------- Grova wireframe ----------------

const GROVA_CENTER: IsoProjection = IsoProjection::new(380.0, 300.0);
// Collapsed "contact us" pill, anchored below centre.
const GROVA_PILL_W: f32 = 85.0;
const GROVA_PILL_H: f32 = 20.0;
const GROVA_PILL_OX: f32 = -GROVA_PILL_W / 2.0;
const GROVA_PILL_OY: f32 = 30.0;
// Triage modal that opens above and to the left of the pill.
const GROVA_MODAL_W: f32 = 120.0;
const GROVA_MODAL_H: f32 = 88.0;
const GROVA_MODAL_OX: f32 = -GROVA_MODAL_W / 2.0 - 8.0;
const GROVA_MODAL_OY: f32 = -45.0;
const GROVA_CAT_W: f32 = 44.0;
const GROVA_CAT_H: f32 = 13.0;
const GROVA_CAT_LABEL_W: f32 = 24.0;
const GROVA_LIFT: f32 = 18.0;

/// The Grova feedback widget: a pill button that sinks on hover while the
/// triage modal and its category pills rise out of it.
pub fn grova_wireframe(accent: Rgb) -> Illustration {
    let iso = GROVA_CENTER;
    let (mox, moy) = (GROVA_MODAL_OX, GROVA_MODAL_OY);

    // Layer 1: modal chassis
    let mut modal = IsoLayer::new("modal", 0.0, -GROVA_LIFT);
    let c = VariantSet::chassis(accent);
    modal.push(iso.top_face(mox, moy, GROVA_MODAL_W, GROVA_MODAL_H), 1.0, c, 0.0);
    modal.push(iso.right_face(mox, moy, GROVA_MODAL_W, GROVA_MODAL_H, 10.0), 0.8, c, 0.0);
    modal.push(iso.left_face(mox, moy, GROVA_MODAL_W, GROVA_MODAL_H, 10.0), 0.8, c, 0.0);
    for (i, (oy, len)) in [(12.0, 80.0), (22.0, 50.0)].into_iter().enumerate() {
        modal.push(
            iso.line_x(mox + 12.0, moy + oy, len),
            1.8,
            VariantSet::reveal(accent),
            0.08 + i as f32 * 0.08,
        );
    }
    modal.push(
        iso.line_x(mox + 8.0, moy + 30.0, GROVA_MODAL_W - 16.0),
        0.6,
        VariantSet::detail(accent),
        0.3,
    );

    // Layer 2: category pills, two rows of two and a centred fifth
    let mut categories = IsoLayer::new("categories", 0.0, -GROVA_LIFT);
    let gx = mox + 14.0;
    let gy = moy + 38.0;
    let step_x = GROVA_CAT_W + 6.0;
    let step_y = GROVA_CAT_H + 5.0;
    let cells = [
        (gx, gy),
        (gx + step_x, gy),
        (gx, gy + step_y),
        (gx + step_x, gy + step_y),
        (gx + step_x / 2.0, gy + 2.0 * step_y),
    ];
    for (i, &(ox, oy)) in cells.iter().enumerate() {
        categories.push(
            iso.top_face(ox, oy, GROVA_CAT_W, GROVA_CAT_H),
            1.2,
            VariantSet::reveal(accent),
            0.12 + i as f32 * 0.07,
        );
    }
    for (i, &(ox, oy)) in cells.iter().enumerate() {
        categories.push(
            iso.line_x(
                ox + (GROVA_CAT_W - GROVA_CAT_LABEL_W) / 2.0,
                oy + GROVA_CAT_H / 2.0,
                GROVA_CAT_LABEL_W,
            ),
            1.5,
            VariantSet::reveal_faint(accent),
            0.25 + i as f32 * 0.06,
        );
    }

    // Layer 3: the trigger pill
    let mut trigger = IsoLayer::new("trigger", 0.0, GROVA_LIFT);
    let h = VariantSet::header(accent);
    let (pox, poy) = (GROVA_PILL_OX, GROVA_PILL_OY);
    trigger.push(iso.top_face(pox, poy, GROVA_PILL_W, GROVA_PILL_H), 1.2, h, 0.0);
    trigger.push(iso.right_face(pox, poy, GROVA_PILL_W, GROVA_PILL_H, 6.0), 0.6, h, 0.3);
    trigger.push(iso.left_face(pox, poy, GROVA_PILL_W, GROVA_PILL_H, 6.0), 0.6, h, 0.35);
    // chat bubble with its tail pointing down-left
    trigger.push(iso.top_face(pox + 8.0, poy + 5.0, 12.0, 7.0), 0.8, h, 0.4);
    trigger.push(
        iso.polyline(&[(pox + 8.0, poy + 11.0), (pox + 5.0, poy + 14.0), (pox + 10.0, poy + 12.0)]),
        0.8,
        h,
        0.45,
    );
    trigger.push(iso.line_x(pox + 28.0, poy + 6.0, 40.0), 2.0, h, 0.55);
    trigger.push(iso.line_x(pox + 28.0, poy + 14.0, 28.0), 2.0, h, 0.6);

    Illustration {
        label: "Grova feedback widget wireframe illustration".to_string(),
        view_box: [248.0, 203.0, 230.0, 188.0],
        grid: cad_grid(),
        layers: vec![modal, categories, trigger],
    }
}

// ---------------- ZERO wireframe ----------------

const ZERO_LIFT: f32 = 20.0;
/// Countdown shown on the hovered game screen, in seconds (9:41).
pub const ZERO_TIMER_SECONDS: u32 = 581;
const ZERO_TIMER_OY: f32 = -25.0;
const ZERO_DIGIT_X: [f32; 3] = [-13.0, -1.5, 6.5];
const SEGMENT_W: f32 = 6.0;
const SEGMENT_HALF: f32 = 5.0;

/// Lit segments `a..g` of a seven-segment digit, clockwise from the top with
/// `g` across the middle. Anything above 9 lights nothing.
pub fn seven_segment_mask(digit: u8) -> [bool; 7] {
    let lit: &[u8] = match digit {
        0 => b"abcdef",
        1 => b"bc",
        2 => b"abdeg",
        3 => b"abcdg",
        4 => b"bcfg",
        5 => b"acdfg",
        6 => b"acdefg",
        7 => b"abc",
        8 => b"abcdefg",
        9 => b"abcdfg",
        _ => b"",
    };
    let mut mask = [false; 7];
    for &c in lit {
        mask[(c - b'a') as usize] = true;
    }
    mask
}

/// `m:ss` split into the three digits the timer shows.
pub fn countdown_digits(seconds: u32) -> [u8; 3] {
    let mins = (seconds / 60).min(9) as u8;
    let secs = seconds % 60;
    [mins, (secs / 10) as u8, (secs % 10) as u8]
}

/// Iso-space paths for the lit segments of `digit` with its top-left at `(ox, oy)`.
pub fn seven_segment(iso: &IsoProjection, digit: u8, ox: f32, oy: f32) -> SmallVec<[PathData; 7]> {
    let (w, hh) = (SEGMENT_W, SEGMENT_HALF);
    let segments = [
        iso.line_x(ox, oy, w),
        iso.line_y(ox + w, oy, hh),
        iso.line_y(ox + w, oy + hh, hh),
        iso.line_x(ox, oy + 2.0 * hh, w),
        iso.line_y(ox, oy + hh, hh),
        iso.line_y(ox, oy, hh),
        iso.line_x(ox, oy + hh, w),
    ];
    seven_segment_mask(digit)
        .into_iter()
        .zip(segments)
        .filter_map(|(lit, d)| lit.then_some(d))
        .collect()
}

/// ZERO: a handheld console at rest that fades away on hover while the
/// mission screen it runs draws in over it. All three layers lift together.
pub fn zero_wireframe(accent: Rgb) -> Illustration {
    let iso = WIRE_CENTER;
    let device = |delay: f32| (VariantSet::fade_out(accent), 0.2 + delay);
    let screen = |delay: f32| (VariantSet::reveal(accent), 0.3 + delay);

    // Layer 1: device depth and speaker; screen depth, objective and start button
    let mut base = IsoLayer::new("base", 0.0, -ZERO_LIFT);
    let add = |layer: &mut IsoLayer, d: PathData, width: f32, (v, delay): (VariantSet, f32)| {
        layer.push(d, width, v, delay)
    };
    add(&mut base, iso.right_face(-40.0, -60.0, 80.0, 120.0, 8.0), 0.8, device(0.4));
    add(&mut base, iso.left_face(-40.0, -60.0, 80.0, 120.0, 8.0), 0.8, device(0.45));
    for (i, (ox, oy, len)) in [(12.0, 42.0, 18.0), (14.0, 47.0, 16.0), (16.0, 52.0, 14.0)]
        .into_iter()
        .enumerate()
    {
        add(&mut base, iso.line_x(ox, oy, len), 0.8, device(0.5 + i as f32 * 0.05));
    }
    add(&mut base, iso.right_face(-45.0, -65.0, 90.0, 130.0, 8.0), 0.8, screen(0.0));
    add(&mut base, iso.left_face(-45.0, -65.0, 90.0, 130.0, 8.0), 0.8, screen(0.02));
    add(&mut base, iso.top_face(-38.0, 48.0, 76.0, 14.0), 0.8, screen(0.15));
    add(&mut base, iso.line_x(-20.0, 55.0, 40.0), 1.5, screen(0.18));
    add(&mut base, iso.top_face(-38.0, 16.0, 76.0, 18.0), 0.8, screen(0.2));
    add(&mut base, iso.line_x(-34.0, 21.0, 22.0), 1.5, screen(0.22));
    add(&mut base, iso.line_x(-34.0, 29.0, 42.0), 1.0, screen(0.24));

    // Layer 2: d-pad, A/B and label; timer, photo prompt and its buttons
    let mut controls = IsoLayer::new("controls", 0.0, -ZERO_LIFT);
    add(&mut controls, iso.top_face(-27.0, 12.0, 18.0, 6.0), 0.8, device(0.2));
    add(&mut controls, iso.top_face(-21.0, 6.0, 6.0, 18.0), 0.8, device(0.22));
    add(&mut controls, iso.top_face(8.0, 8.0, 10.0, 10.0), 0.8, device(0.25));
    add(&mut controls, iso.top_face(22.0, 16.0, 10.0, 10.0), 0.8, device(0.28));
    add(&mut controls, iso.line_x(-15.0, -2.0, 30.0), 1.5, device(0.3));
    add(&mut controls, iso.top_face(-38.0, -30.0, 76.0, 20.0), 0.8, screen(0.2));
    let digits = countdown_digits(ZERO_TIMER_SECONDS);
    for (&digit, &ox) in digits.iter().zip(&ZERO_DIGIT_X) {
        for d in seven_segment(&iso, digit, ox, ZERO_TIMER_OY) {
            controls.push(d, 1.5, VariantSet::reveal(accent), 0.55);
        }
    }
    for dy in [2.5, 6.5] {
        controls.push(
            iso.top_face(-5.0, ZERO_TIMER_OY + dy, 1.2, 1.2),
            0.5,
            VariantSet::reveal(accent),
            0.55,
        );
    }
    add(&mut controls, iso.top_face(-38.0, -4.0, 76.0, 14.0), 0.8, screen(0.26));
    add(&mut controls, iso.line_x(-34.0, 0.0, 28.0), 1.0, screen(0.28));
    add(&mut controls, iso.line_x(-34.0, 5.0, 26.0), 1.0, screen(0.29));
    add(&mut controls, iso.top_face(14.0, -1.0, 10.0, 10.0), 0.8, screen(0.3));
    add(&mut controls, iso.top_face(26.0, -1.0, 10.0, 10.0), 0.8, screen(0.32));

    // Layer 3: device body and screen; game frame, top bar and mission title
    let mut top = IsoLayer::new("top", 0.0, -ZERO_LIFT);
    add(&mut top, iso.top_face(-40.0, -60.0, 80.0, 120.0), 1.2, (VariantSet::fade_out(accent), 0.0));
    add(&mut top, iso.top_face(-28.0, -48.0, 56.0, 38.0), 1.0, device(0.1));
    add(&mut top, iso.line_x(-22.0, -35.0, 44.0), 0.6, device(0.15));
    add(&mut top, iso.line_x(-22.0, -22.0, 44.0), 0.6, device(0.18));
    add(&mut top, iso.top_face(-45.0, -65.0, 90.0, 130.0), 1.2, screen(0.0));
    add(&mut top, iso.line_x(-38.0, -60.0, 16.0), 2.0, screen(0.04));
    add(&mut top, iso.line_x(-38.0, -56.0, 28.0), 1.0, screen(0.06));
    add(&mut top, iso.line_x(8.0, -60.0, 12.0), 1.5, screen(0.05));
    add(&mut top, iso.line_x(8.0, -56.0, 18.0), 1.0, screen(0.07));
    for (i, ox) in [28.0, 33.0, 38.0].into_iter().enumerate() {
        add(&mut top, iso.top_face(ox, -62.0, 4.0, 4.0), 0.6, screen(0.08 + i as f32 * 0.01));
    }
    add(&mut top, iso.line_x(-38.0, -50.0, 76.0), 0.6, screen(0.11));
    add(&mut top, iso.line_x(-38.0, -45.0, 18.0), 1.5, screen(0.12));
    add(&mut top, iso.line_x(26.0, -45.0, 12.0), 1.0, screen(0.13));
    add(&mut top, iso.line_x(-38.0, -38.0, 50.0), 2.0, screen(0.14));

    Illustration {
        label: "ZERO tactical game wireframe illustration".to_string(),
        view_box: [250.0, 180.0, 300.0, 200.0],
        grid: cad_grid(),
        layers: vec![base, controls, top],
    }
}

// ---------------- Exploded card stacks ----------------

/// Decoration drawn on one stack level's top face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Glyph {
    Plain,
    /// Vertical pins along the near edges.
    Pins(u8),
    /// Lines parallel to the iso X axis.
    Rails(u8),
    /// Small diamonds in a row.
    Cells(u8),
    /// Antenna with an arrowhead rising from the centre.
    Beacon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackLevel {
    /// Side length of the square top face in iso units.
    pub size: f32,
    /// Extrusion of the side faces.
    pub depth: f32,
    pub glyph: Glyph,
}

#[derive(Clone, Debug)]
pub struct StackSpec {
    pub label: String,
    pub accent: Rgb,
    pub levels: Vec<StackLevel>,
    /// Rest spacing between levels; hover multiplies it by [`EXPLODE_FACTOR`].
    pub spacing: f32,
}

pub const EXPLODE_FACTOR: f32 = 1.6;
const STACK_CENTER: IsoProjection = IsoProjection::new(150.0, 200.0);

/// Layer shift for an exploded stack.
#[inline]
pub fn exploded_offset(y_offset: f32, active: bool) -> f32 {
    if active {
        y_offset * EXPLODE_FACTOR
    } else {
        y_offset
    }
}

fn glyph_paths(iso: &IsoProjection, level: &StackLevel) -> SmallVec<[PathData; 6]> {
    let half = level.size / 2.0;
    let mut out = SmallVec::new();
    match level.glyph {
        Glyph::Plain => {}
        Glyph::Pins(n) => {
            let n = n.max(1);
            let step = level.size / (n as f32 + 1.0);
            for i in 1..=n {
                let p = iso.project(-half + step * i as f32, half * 0.4);
                out.push(segment(p, p - Vec2::new(0.0, 10.0)));
            }
        }
        Glyph::Rails(n) => {
            let n = n.max(1);
            let step = level.size / (n as f32 + 1.0);
            for i in 1..=n {
                out.push(iso.line_x(-half * 0.6, -half + step * i as f32, level.size * 0.6));
            }
        }
        Glyph::Cells(n) => {
            let n = n.max(1);
            let step = level.size / (n as f32 + 1.0);
            for i in 1..=n {
                out.push(diamond(iso.project(-half + step * i as f32, 0.0), 10.0));
            }
        }
        Glyph::Beacon => {
            let top = iso.project(0.0, 0.0) - Vec2::new(0.0, 18.0);
            out.push(segment(iso.project(0.0, 0.0), top));
            out.push(
                PathData::new()
                    .move_to(top + Vec2::new(-10.0, 5.0))
                    .line_to(top)
                    .line_to(top + Vec2::new(10.0, 5.0)),
            );
        }
    }
    out
}

/// Build an exploded stack: one layer per level, square faces shrinking
/// upward, every layer drawn around the same centre and lifted by its offset.
pub fn layer_stack(spec: &StackSpec) -> Illustration {
    let iso = STACK_CENTER;
    let variants = VariantSet::stack(spec.accent);
    let layers = spec
        .levels
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let y = -(i as f32) * spec.spacing;
            let mut layer = IsoLayer::new("level", y, exploded_offset(y, true));
            let o = -level.size / 2.0;
            let delay = i as f32 * 0.15;
            layer.push(iso.top_face(o, o, level.size, level.size), 1.0, variants, delay);
            layer.push(
                iso.left_face(o, o, level.size, level.size, level.depth),
                1.0,
                variants,
                delay + 0.05,
            );
            layer.push(
                iso.right_face(o, o, level.size, level.size, level.depth),
                1.0,
                variants,
                delay + 0.1,
            );
            for (j, d) in glyph_paths(&iso, level).into_iter().enumerate() {
                layer.push(d, 1.0, variants, delay + 0.15 + j as f32 * 0.05);
            }
            layer
        })
        .collect();

    Illustration {
        label: spec.label.clone(),
        view_box: [0.0, 0.0, 300.0, 300.0],
        grid: Vec::new(),
        layers,
    }
}

fn level(size: f32, glyph: Glyph) -> StackLevel {
    StackLevel {
        size,
        depth: 8.0,
        glyph,
    }
}

/// Card art for a project, keyed by slug. Unknown slugs get the TradeOS stack.
pub fn project_stack(slug: &str, accent: Rgb) -> Illustration {
    let (label, levels) = match slug {
        "grova" => (
            "Grova feedback triage layers",
            vec![
                level(120.0, Glyph::Rails(4)),
                level(100.0, Glyph::Cells(3)),
                level(80.0, Glyph::Pins(4)),
                level(60.0, Glyph::Beacon),
            ],
        ),
        "zero" => (
            "ZERO mission engine layers",
            vec![
                level(120.0, Glyph::Cells(4)),
                level(96.0, Glyph::Rails(2)),
                level(72.0, Glyph::Beacon),
            ],
        ),
        _ => (
            "TradeOS verification layers",
            vec![
                level(120.0, Glyph::Plain),
                level(104.0, Glyph::Pins(6)),
                level(88.0, Glyph::Rails(2)),
                level(64.0, Glyph::Beacon),
            ],
        ),
    };
    layer_stack(&StackSpec {
        label: label.to_string(),
        accent,
        levels,
        spacing: 30.0,
    })
}
