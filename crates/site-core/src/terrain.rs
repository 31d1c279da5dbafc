//! Noise-displaced terrain zones for the Point Dume background.
//!
//! Each zone is one mesh built exactly once per mount. Elevation is a spatial
//! envelope scaled by fbm noise, plus a fine undulation, faded to zero at the
//! zone boundary so neighbouring zones meet without seams.

use crate::constants::{EDGE_FADE_MARGIN, TERRAIN_COLOR, TERRAIN_OPACITY};
use crate::mesh::{Mesh, Topology};
use crate::noise::FbmParams;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainZone {
    Cliff,
    Beach,
    Hills,
    /// Sea stack off the point; sphere topology, displaced radially.
    Headland,
}

impl TerrainZone {
    pub const ALL: [TerrainZone; 4] = [
        TerrainZone::Cliff,
        TerrainZone::Beach,
        TerrainZone::Hills,
        TerrainZone::Headland,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TerrainZone::Cliff => "cliff",
            TerrainZone::Beach => "beach",
            TerrainZone::Hills => "hills",
            TerrainZone::Headland => "headland",
        }
    }

    /// Spatial mask in `[0, ~1]`. `u` runs left to right, `far` runs from the
    /// near edge (0) to the far edge (1).
    pub fn envelope(self, u: f32, far: f32) -> f32 {
        match self {
            TerrainZone::Cliff => (1.0 - u * 2.5).max(0.0) * (far - 0.2).max(0.0),
            TerrainZone::Hills => ((far - 0.5).max(0.0) * 2.0).powf(1.5),
            TerrainZone::Beach => 0.15 + 0.35 * far,
            TerrainZone::Headland => 1.0,
        }
    }
}

/// Cubic Hermite step between `edge0` and `edge1`, clamped to `[0, 1]`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 == edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Boundary fade for a grid vertex at `uv`. Exactly zero on every edge.
#[inline]
pub fn grid_edge_fade(uv: Vec2, margin: f32) -> f32 {
    smoothstep(0.0, margin, uv.x)
        * smoothstep(0.0, margin, 1.0 - uv.x)
        * smoothstep(0.0, margin, uv.y)
        * smoothstep(0.0, margin, 1.0 - uv.y)
}

/// Boundary fade for a sphere vertex: zero on the bottom pole ring so the
/// stack sits flush on the water.
#[inline]
pub fn sphere_edge_fade(uv: Vec2, margin: f32) -> f32 {
    smoothstep(0.0, margin, 1.0 - uv.y)
}

#[derive(Clone, Debug)]
pub struct TerrainZoneConfig {
    pub zone: TerrainZone,
    pub shape: Topology,
    /// Large-scale relief: `envelope * (ridge_base + ridge_scale * ridge)`.
    pub ridge: FbmParams,
    pub ridge_base: f32,
    pub ridge_scale: f32,
    /// Small undulation added everywhere before the boundary fade.
    pub detail: FbmParams,
    pub detail_scale: f32,
    pub fade_margin: f32,
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
    pub color: [f32; 3],
    pub opacity: f32,
}

impl TerrainZoneConfig {
    pub fn for_zone(zone: TerrainZone) -> Self {
        let flat = Vec3::new(-FRAC_PI_2, 0.0, 0.0);
        let base = Self {
            zone,
            shape: Topology::Grid {
                width: 24.0,
                height: 20.0,
                cols: 96,
                rows: 80,
            },
            ridge: FbmParams {
                octaves: 5,
                lacunarity: 2.0,
                gain: 0.55,
                frequency: 0.15,
                offset: Vec2::ZERO,
            },
            ridge_base: 2.5,
            ridge_scale: 2.0,
            detail: FbmParams {
                octaves: 1,
                frequency: 0.1,
                ..FbmParams::default()
            },
            detail_scale: 0.08,
            fade_margin: EDGE_FADE_MARGIN,
            position: Vec3::new(-14.0, -2.5, -10.0),
            rotation: flat,
            color: TERRAIN_COLOR,
            opacity: TERRAIN_OPACITY,
        };
        match zone {
            TerrainZone::Cliff => base,
            TerrainZone::Beach => Self {
                shape: Topology::Grid {
                    width: 30.0,
                    height: 8.0,
                    cols: 60,
                    rows: 16,
                },
                ridge: FbmParams {
                    octaves: 3,
                    gain: 0.5,
                    frequency: 0.2,
                    offset: Vec2::new(11.0, 5.0),
                    ..base.ridge
                },
                ridge_base: 0.2,
                ridge_scale: 0.1,
                fade_margin: 0.15,
                position: Vec3::new(-2.0, -2.55, 2.0),
                rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.22),
                opacity: 0.2,
                ..base
            },
            TerrainZone::Hills => Self {
                shape: Topology::Grid {
                    width: 80.0,
                    height: 20.0,
                    cols: 128,
                    rows: 32,
                },
                ridge: FbmParams {
                    octaves: 4,
                    gain: 0.5,
                    frequency: 0.08,
                    offset: Vec2::new(7.0, 3.0),
                    ..base.ridge
                },
                ridge_base: 1.2,
                ridge_scale: 1.5,
                position: Vec3::new(0.0, -2.5, -24.0),
                opacity: 0.18,
                ..base
            },
            TerrainZone::Headland => Self {
                shape: Topology::Sphere {
                    radius: 2.2,
                    width_segments: 32,
                    height_segments: 24,
                },
                ridge: FbmParams {
                    octaves: 4,
                    gain: 0.5,
                    frequency: 0.6,
                    offset: Vec2::new(-3.0, 17.0),
                    ..base.ridge
                },
                ridge_base: 0.0,
                ridge_scale: 0.6,
                detail_scale: 0.0,
                fade_margin: 0.35,
                position: Vec3::new(-19.0, -3.2, -7.0),
                rotation: Vec3::ZERO,
                ..base
            },
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_rotation_translation(q, self.position)
    }

    /// Elevation for one vertex of this zone. `local` is the undisplaced
    /// vertex position, `uv` its topology coordinate.
    pub fn elevation(&self, local: Vec3, uv: Vec2) -> f32 {
        match self.shape {
            Topology::Grid { .. } => {
                let far = 1.0 - uv.y;
                let relief = self.zone.envelope(uv.x, far)
                    * (self.ridge_base + self.ridge_scale * self.ridge.sample(local.x, local.y));
                let detail = self.detail_scale * self.detail.sample(local.x, local.y);
                (relief + detail) * grid_edge_fade(uv, self.fade_margin)
            }
            Topology::Sphere { .. } => {
                // Sample on a plane slanted through the sphere so the poles,
                // which repeat one position per column, get a single value.
                let sx = local.x + local.y * 0.5;
                let sy = local.z - local.y * 0.5;
                let relief = self.zone.envelope(uv.x, 1.0 - uv.y)
                    * (self.ridge_base + self.ridge_scale * self.ridge.sample(sx, sy));
                let detail = self.detail_scale * self.detail.sample(sx, sy);
                (relief + detail) * sphere_edge_fade(uv, self.fade_margin)
            }
        }
    }
}

/// A built, immutable terrain zone ready for upload.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    pub zone: TerrainZone,
    pub mesh: Mesh,
    pub model: Mat4,
    pub color: [f32; 3],
    pub opacity: f32,
    pub min_elevation: f32,
    pub max_elevation: f32,
}

pub fn build_zone(config: &TerrainZoneConfig) -> TerrainMesh {
    let mut mesh = match config.shape {
        Topology::Grid {
            width,
            height,
            cols,
            rows,
        } => Mesh::plane(width, height, cols, rows),
        Topology::Sphere {
            radius,
            width_segments,
            height_segments,
        } => Mesh::sphere(radius, width_segments, height_segments),
    };

    let mut lo = f32::MAX;
    let mut hi = f32::MIN;
    for (p, uv) in mesh.positions.iter_mut().zip(&mesh.uvs) {
        let e = config.elevation(*p, *uv);
        lo = lo.min(e);
        hi = hi.max(e);
        match config.shape {
            Topology::Grid { .. } => p.z = e,
            Topology::Sphere { .. } => {
                let dir = p.try_normalize().unwrap_or(Vec3::Y);
                *p += dir * e;
            }
        }
    }
    mesh.compute_vertex_normals();

    log::debug!(
        "[terrain] {} built: {} vertices, elevation {:.2}..{:.2}",
        config.zone.name(),
        mesh.vertex_count(),
        lo,
        hi
    );

    TerrainMesh {
        zone: config.zone,
        mesh,
        model: config.model_matrix(),
        color: config.color,
        opacity: config.opacity,
        min_elevation: lo,
        max_elevation: hi,
    }
}

pub fn build_landscape(configs: &[TerrainZoneConfig]) -> Vec<TerrainMesh> {
    configs.iter().map(build_zone).collect()
}

pub fn default_zones() -> Vec<TerrainZoneConfig> {
    TerrainZone::ALL
        .iter()
        .map(|z| TerrainZoneConfig::for_zone(*z))
        .collect()
}
