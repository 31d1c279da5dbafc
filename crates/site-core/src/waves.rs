//! Animated ocean surface: compound sine displacement applied on the CPU
//! every frame into one reused position buffer.

use crate::mesh::Mesh;
use glam::{Vec2, Vec3};

/// One sine component: `amplitude * sin(dot(direction, xy) * frequency + clock * speed)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveTerm {
    pub direction: Vec2,
    pub frequency: f32,
    pub speed: f32,
    pub amplitude: f32,
}

impl WaveTerm {
    #[inline]
    pub fn height(&self, xy: Vec2, clock: f32) -> f32 {
        self.amplitude * (self.direction.dot(xy) * self.frequency + clock * self.speed).sin()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    /// Long diagonal swell.
    pub swell: WaveTerm,
    /// Smaller swell crossing the main one.
    pub cross: WaveTerm,
    /// High-frequency, low-amplitude chop.
    pub chop: WaveTerm,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            swell: WaveTerm {
                direction: Vec2::new(0.8, 0.6),
                frequency: 0.2,
                speed: 0.3,
                amplitude: 0.5,
            },
            cross: WaveTerm {
                direction: Vec2::new(-0.6, 0.8),
                frequency: 0.1,
                speed: 0.25,
                amplitude: 0.3,
            },
            chop: WaveTerm {
                direction: Vec2::new(0.8, 0.6),
                frequency: 1.4,
                speed: 0.9,
                amplitude: 0.05,
            },
        }
    }
}

impl WaveParams {
    /// Largest possible displacement magnitude.
    pub fn max_amplitude(&self) -> f32 {
        self.swell.amplitude.abs() + self.cross.amplitude.abs() + self.chop.amplitude.abs()
    }
}

#[inline]
pub fn wave_height(params: &WaveParams, x: f32, y: f32, clock: f32) -> f32 {
    let xy = Vec2::new(x, y);
    params.swell.height(xy, clock) + params.cross.height(xy, clock) + params.chop.height(xy, clock)
}

pub struct WaveSurface {
    params: WaveParams,
    rest: Vec<Vec3>,
    mesh: Mesh,
    min_elevation: f32,
    max_elevation: f32,
    dirty: bool,
}

impl WaveSurface {
    pub fn new(mesh: Mesh, params: WaveParams) -> Self {
        let rest = mesh.positions.clone();
        let (lo, hi) = mesh.bounds_z();
        Self {
            params,
            rest,
            mesh,
            min_elevation: lo,
            max_elevation: hi,
            dirty: true,
        }
    }

    /// Rewrite every vertex Z for `clock`. Normals are not recomputed; the
    /// shader lights the water against a fixed up vector.
    pub fn update(&mut self, clock: f32) {
        let mut lo = f32::MAX;
        let mut hi = f32::MIN;
        for (p, r) in self.mesh.positions.iter_mut().zip(&self.rest) {
            p.z = r.z + wave_height(&self.params, r.x, r.y, clock);
            lo = lo.min(p.z);
            hi = hi.max(p.z);
        }
        self.min_elevation = lo;
        self.max_elevation = hi;
        self.dirty = true;
    }

    /// Returns whether the buffer changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[inline]
    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    #[inline]
    pub fn elevation_range(&self) -> (f32, f32) {
        (self.min_elevation, self.max_elevation)
    }
}
