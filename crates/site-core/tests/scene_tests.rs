// Host-side tests for the frame-stepped 3D scene state.

use glam::Vec2;
use site_core::scene::{step, OceanUniforms, PostUniforms, SolidUniforms, MAX_FRAME_DT};
use site_core::{FrameInput, SceneConfig, SceneState};

fn input(dt: f32, x: f32, y: f32) -> FrameInput {
    FrameInput {
        dt,
        pointer: Vec2::new(x, y),
    }
}

#[test]
fn uniform_layouts_are_16_byte_aligned() {
    assert_eq!(std::mem::size_of::<SolidUniforms>(), 176);
    assert_eq!(std::mem::size_of::<OceanUniforms>(), 224);
    assert_eq!(std::mem::size_of::<PostUniforms>(), 16);
}

#[test]
fn build_creates_every_zone() {
    let config = SceneConfig::default();
    let state = SceneState::build(&config);
    assert_eq!(state.terrain().len(), config.zones.len());
    assert_eq!(state.clock(), 0.0);
    assert_eq!(state.frame(), 0);
    assert!(state.ocean().mesh().vertex_count() > 0);
    assert!(state.sun().vertex_count() > 0);
}

#[test]
fn advance_is_deterministic() {
    let config = SceneConfig::default();
    let mut a = SceneState::build(&config);
    let mut b = SceneState::build(&config);
    for i in 0..30 {
        let f = input(1.0 / 60.0, (i as f32 * 0.1).sin(), 0.3);
        a.advance(&f);
        b = step(b, &f);
    }
    assert_eq!(a.clock().to_bits(), b.clock().to_bits());
    assert_eq!(a.frame(), 30);
    assert_eq!(a.ocean().mesh().positions, b.ocean().mesh().positions);
    assert_eq!(a.rig().position(), b.rig().position());
}

#[test]
fn dt_is_clamped() {
    let mut s = SceneState::build(&SceneConfig::default());
    s.advance(&input(-1.0, 0.0, 0.0));
    assert_eq!(s.clock(), 0.0);
    s.advance(&input(f32::NAN, 0.0, 0.0));
    assert_eq!(s.clock(), 0.0);
    s.advance(&input(10.0, 0.0, 0.0));
    assert_eq!(s.clock(), MAX_FRAME_DT);
    assert_eq!(s.frame(), 3);
}

#[test]
fn terrain_is_not_rebuilt_per_frame() {
    let mut s = SceneState::build(&SceneConfig::default());
    let before: Vec<_> = s.terrain().iter().map(|t| t.mesh.positions.clone()).collect();
    for _ in 0..10 {
        s.advance(&input(0.016, 0.5, -0.5));
    }
    for (t, b) in s.terrain().iter().zip(&before) {
        assert_eq!(&t.mesh.positions, b);
    }
}

#[test]
fn ocean_moves_with_clock() {
    let mut s = SceneState::build(&SceneConfig::default());
    let before = s.ocean().mesh().positions.clone();
    s.advance(&input(0.1, 0.0, 0.0));
    assert_ne!(s.ocean().mesh().positions, before);
    assert!(s.ocean_mut().take_dirty());
}

#[test]
fn pointer_moves_camera() {
    let mut s = SceneState::build(&SceneConfig::default());
    let start = s.rig().position();
    s.advance(&input(0.016, 1.0, 0.0));
    assert!(s.rig().position().x > start.x);
    assert_eq!(s.rig().position().z, start.z);
}

#[test]
fn ocean_uniforms_pack_ramp_range() {
    let s = SceneState::build(&SceneConfig::default());
    let u = s.ocean_uniforms(16.0 / 9.0);
    let amp = s.ocean().params().max_amplitude();
    assert_eq!(u.ramp_low[3], -amp);
    assert_eq!(u.ramp_mid[3], amp);
    assert_eq!(s.terrain_uniforms(1.5).len(), s.terrain().len());
    let sun = s.sun_uniforms(1.5);
    assert_eq!(sun.color[3], 1.0);
}
