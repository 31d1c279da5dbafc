// Host-side tests for the water ramp and specular term.

use glam::Vec3;
use site_core::shading::{
    color_ramp, normalized_elevation, shade_water, specular, RampStops, SpecularParams,
};

fn stops() -> RampStops {
    RampStops {
        low: Vec3::new(0.0, 0.0, 0.0),
        mid: Vec3::new(0.5, 0.5, 0.5),
        high: Vec3::new(1.0, 1.0, 1.0),
    }
}

#[test]
fn normalization_clamps_and_guards_zero_span() {
    assert_eq!(normalized_elevation(-1.0, -1.0, 1.0), 0.0);
    assert_eq!(normalized_elevation(1.0, -1.0, 1.0), 1.0);
    assert_eq!(normalized_elevation(0.0, -1.0, 1.0), 0.5);
    assert_eq!(normalized_elevation(5.0, -1.0, 1.0), 1.0);
    assert_eq!(normalized_elevation(0.3, 0.3, 0.3), 0.0);
}

#[test]
fn ramp_hits_each_stop() {
    let s = stops();
    let lo = color_ramp(-1.0, -1.0, 1.0, &s, 0.2);
    let mid = color_ramp(0.0, -1.0, 1.0, &s, 0.2);
    let hi = color_ramp(1.0, -1.0, 1.0, &s, 0.2);
    assert!(lo.truncate().abs_diff_eq(s.low, 1e-6));
    assert!(mid.truncate().abs_diff_eq(s.mid, 1e-6));
    assert!(hi.truncate().abs_diff_eq(s.high, 1e-6));
}

#[test]
fn ramp_alpha_grows_with_elevation() {
    let s = stops();
    let a0 = color_ramp(-1.0, -1.0, 1.0, &s, 0.2).w;
    let a1 = color_ramp(1.0, -1.0, 1.0, &s, 0.2).w;
    assert!((a0 - 0.2).abs() < 1e-6);
    assert!(a1 > a0);
}

#[test]
fn specular_peaks_on_mirror_direction() {
    let sun = Vec3::new(-10.0, 10.0, 0.0);
    let mirror = Vec3::new(10.0, 10.0, 0.0);
    let s = specular(sun, mirror, Vec3::ZERO, 32.0);
    assert!((s - 1.0).abs() < 1e-4, "{s}");
    let away = specular(sun, Vec3::new(-10.0, 10.0, 0.0), Vec3::ZERO, 32.0);
    assert!(away < 1e-4);
}

#[test]
fn specular_is_sharper_with_higher_shininess() {
    let sun = Vec3::new(-10.0, 10.0, 0.0);
    let near_mirror = Vec3::new(10.0, 8.0, 1.0);
    let soft = specular(sun, near_mirror, Vec3::ZERO, 4.0);
    let hard = specular(sun, near_mirror, Vec3::ZERO, 64.0);
    assert!(soft > hard);
}

#[test]
fn shade_water_adds_accent_in_highlight() {
    let s = stops();
    let mut spec = SpecularParams::new(Vec3::new(-10.0, 10.0, 0.0));
    spec.accent = Vec3::new(1.0, 0.5, 0.0);
    let lit = shade_water(0.0, -1.0, 1.0, &s, 0.2, &spec, Vec3::new(10.0, 10.0, 0.0), Vec3::ZERO);
    let base = color_ramp(0.0, -1.0, 1.0, &s, 0.2);
    assert!(lit.x > base.x);
    assert!(lit.w > base.w);
    assert!((lit.z - base.z).abs() < 1e-6);
}
