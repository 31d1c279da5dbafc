// Host-side tests for the 2D background scenes, driven through a recording painter.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::backdrops::{
    dot_alpha, line_alpha, particle_count, AmbientOrbs, CalibrationGrid, CanvasBackdrop,
    DataStream, GlyphDraw, Heading, OrthogonalFlow, Painter, Rgba, SubsonicSweep, Telemetry,
    AMBIENT_ORBS, SWEEP_BANDS,
};

#[derive(Default)]
struct Recorder {
    clears: usize,
    rects: usize,
    lines: usize,
    circles: usize,
    texts: Vec<String>,
    radials: usize,
}

impl Painter for Recorder {
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _c: Rgba) {
        self.rects += 1;
    }
    fn stroke_polyline(&mut self, _points: &[Vec2], _c: Rgba, _width: f32) {
        self.lines += 1;
    }
    fn fill_circle(&mut self, _center: Vec2, _r: f32, _c: Rgba) {
        self.circles += 1;
    }
    fn fill_text(&mut self, text: &str, _at: Vec2, _px: f32, _c: Rgba) {
        self.texts.push(text.to_string());
    }
    fn fill_radial(&mut self, _c: Vec2, _r: f32, _stops: &[(f32, Rgba)], _rect: [f32; 4]) {
        self.radials += 1;
    }
}

#[test]
fn rgba_css() {
    assert_eq!(Rgba::new(10, 20, 30, 0.5).css(), "rgba(10, 20, 30, 0.5)");
    assert_eq!(Rgba::gray(51, 1.0).with_alpha(0.25), Rgba::new(51, 51, 51, 0.25));
}

#[test]
fn particle_budget() {
    assert_eq!(particle_count(800.0, 600.0), 60);
    assert_eq!(particle_count(4000.0, 4000.0), 120);
    assert_eq!(particle_count(0.0, 600.0), 0);
}

#[test]
fn headings_turn_at_right_angles() {
    for h in [Heading::Right, Heading::Down, Heading::Left, Heading::Up] {
        assert_eq!(h.vector().dot(h.clockwise().vector()), 0.0);
        assert_eq!(h.clockwise().counter_clockwise(), h);
    }
}

#[test]
fn orthogonal_particles_stay_on_axis_and_wrap() {
    let mut flow = OrthogonalFlow::new(400.0, 300.0, StdRng::seed_from_u64(1));
    assert_eq!(flow.particles().len(), 15);
    for _ in 0..2000 {
        flow.step(1.0);
        for p in flow.particles() {
            assert!(p.pos.x >= -10.0 - 32.0 * 0.05 && p.pos.x <= 410.0 + 32.0 * 0.05);
            assert!(p.pos.y >= -10.0 - 32.0 * 0.05 && p.pos.y <= 310.0 + 32.0 * 0.05);
            assert!((0.0..=1.0).contains(&p.pulse_fade));
        }
    }
}

#[test]
fn orthogonal_step_clamps_dt() {
    let mut a = OrthogonalFlow::new(400.0, 300.0, StdRng::seed_from_u64(9));
    let start: Vec<Vec2> = a.particles().iter().map(|p| p.pos).collect();
    a.step(-5.0);
    let after: Vec<Vec2> = a.particles().iter().map(|p| p.pos).collect();
    assert_eq!(start, after);
}

#[test]
fn spotlight_falloff() {
    assert_eq!(line_alpha(0.0, 350.0), Some(0.4));
    assert_eq!(line_alpha(350.0, 350.0), Some(0.0));
    assert_eq!(line_alpha(351.0, 350.0), None);
    assert_eq!(dot_alpha(0.0, 350.0), Some(0.5));
    assert_eq!(dot_alpha(300.0, 350.0), None);
}

#[test]
fn calibration_draws_nothing_without_pointer() {
    let mut grid = CalibrationGrid::new(1280.0, 720.0);
    let mut rec = Recorder::default();
    grid.frame(0.016, &mut rec);
    assert_eq!(rec.clears, 1);
    assert_eq!(rec.lines + rec.circles, 0);

    grid.set_pointer(Some(Vec2::new(640.0, 360.0)));
    let mut rec = Recorder::default();
    grid.frame(0.016, &mut rec);
    assert!(rec.lines > 0);
    assert!(rec.circles > 0);
}

#[test]
fn calibration_offset_wraps_within_a_cell() {
    let mut grid = CalibrationGrid::new(100.0, 100.0);
    for _ in 0..100 {
        grid.advance(1.0);
        let o = grid.offset();
        assert!(o.x >= 0.0 && o.x < 60.0 && o.y >= 0.0 && o.y < 60.0);
    }
}

#[test]
fn datastream_fills_columns() {
    let mut ds = DataStream::new(140.0, 200.0, StdRng::seed_from_u64(2));
    assert_eq!(ds.column_count(), 10);
    let mut out: Vec<GlyphDraw> = Vec::new();
    ds.step(&mut out);
    assert_eq!(out.len(), 10);
    ds.resize(280.0, 200.0);
    assert_eq!(ds.column_count(), 20);
}

#[test]
fn datastream_primes_background_once() {
    let mut ds = DataStream::new(70.0, 100.0, StdRng::seed_from_u64(4));
    let mut rec = Recorder::default();
    ds.frame(0.016, &mut rec);
    assert_eq!(rec.rects, 2);
    assert_eq!(rec.texts.len(), 5);
    ds.frame(0.016, &mut rec);
    assert_eq!(rec.rects, 3);
}

#[test]
fn telemetry_line_counts() {
    let t = Telemetry::new(300.0, 200.0);
    let lines = t.horizontal_lines(1.0);
    assert_eq!(lines.len(), 40);
    assert_eq!(lines[0].points.len(), 101);
    assert_eq!(t.vertical_lines().count(), 41);
    assert!((t.horizon_y() - 30.0).abs() < 1e-4);
    // nearer lines are wider
    assert!(lines[39].width > lines[0].width);
}

#[test]
fn sweep_bands_pass_then_rest() {
    let b = SWEEP_BANDS[0];
    assert_eq!(b.top(0.0), b.from);
    assert!((b.top(9.0) - (b.from + b.to) / 2.0).abs() < 1e-3);
    assert_eq!(b.top(b.duration + 1.0), b.to);
    // second band waits for its delay
    assert_eq!(SWEEP_BANDS[1].top(5.0), SWEEP_BANDS[1].from);
    let mut s = SubsonicSweep::new();
    s.advance(9.0);
    assert_eq!(s.tops()[1], SWEEP_BANDS[1].from);
}

#[test]
fn orbs_start_and_loop_at_first_keyframe() {
    for orb in AMBIENT_ORBS {
        let start = orb.position(0.0);
        assert_eq!(start, Vec2::new(orb.path.x[0], orb.path.y[0]));
        let looped = orb.position(orb.duration);
        assert!((looped - start).length() < 1e-3);
    }
    let mut orbs = AmbientOrbs::new();
    orbs.advance(6.0);
    // a quarter of the first orb's loop lands on its second keyframe
    let p = orbs.positions()[0];
    assert!((p - Vec2::new(25.0, 35.0)).length() < 1e-3);
}
