//! Elevation color ramp and the water specular term.
//!
//! `shaders/ocean.wgsl` evaluates the same maths per fragment; these are the
//! reference implementations and the source of the packed uniforms.

use crate::constants::{
    OCEAN_ALPHA_RAMP, OCEAN_SPEC_ALPHA, RAMP_HIGH, RAMP_LOW, RAMP_MID, SPECULAR_INTENSITY,
    SPECULAR_SHININESS, SUN_COLOR,
};
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RampStops {
    pub low: Vec3,
    pub mid: Vec3,
    pub high: Vec3,
}

impl Default for RampStops {
    fn default() -> Self {
        Self {
            low: Vec3::splat(RAMP_LOW),
            mid: Vec3::splat(RAMP_MID),
            high: Vec3::splat(RAMP_HIGH),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecularParams {
    pub sun_position: Vec3,
    pub accent: Vec3,
    pub shininess: f32,
    pub intensity: f32,
}

impl SpecularParams {
    pub fn new(sun_position: Vec3) -> Self {
        Self {
            sun_position,
            accent: Vec3::from_array(SUN_COLOR),
            shininess: SPECULAR_SHININESS,
            intensity: SPECULAR_INTENSITY,
        }
    }
}

/// Map `elevation` into `[0, 1]` over `[min, max]`.
#[inline]
pub fn normalized_elevation(elevation: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((elevation - min) / span).clamp(0.0, 1.0)
}

/// Three-stop ramp: low→mid over the first half, mid→high over the second.
/// Alpha grows with elevation on top of `base_opacity`.
pub fn color_ramp(elevation: f32, min: f32, max: f32, stops: &RampStops, base_opacity: f32) -> Vec4 {
    let t = normalized_elevation(elevation, min, max);
    let rgb = if t < 0.5 {
        stops.low.lerp(stops.mid, t / 0.5)
    } else {
        stops.mid.lerp(stops.high, (t - 0.5) / 0.5)
    };
    rgb.extend(base_opacity + t * OCEAN_ALPHA_RAMP)
}

#[inline]
fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Phong term for a flat water surface with normal `+Y`.
pub fn specular(sun_position: Vec3, camera_position: Vec3, world_position: Vec3, shininess: f32) -> f32 {
    let l = (sun_position - world_position).normalize_or_zero();
    let v = (camera_position - world_position).normalize_or_zero();
    let r = reflect(-l, Vec3::Y);
    r.dot(v).max(0.0).powf(shininess)
}

/// Full water color at one surface point.
pub fn shade_water(
    elevation: f32,
    min: f32,
    max: f32,
    stops: &RampStops,
    base_opacity: f32,
    spec: &SpecularParams,
    camera_position: Vec3,
    world_position: Vec3,
) -> Vec4 {
    let base = color_ramp(elevation, min, max, stops, base_opacity);
    let s = specular(spec.sun_position, camera_position, world_position, spec.shininess);
    let rgb = base.truncate() + spec.accent * s * spec.intensity;
    rgb.extend(base.w + s * OCEAN_SPEC_ALPHA)
}
