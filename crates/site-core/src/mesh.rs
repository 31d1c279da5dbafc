//! Indexed triangle meshes with grid or sphere topology.
//!
//! Topology is fixed at construction; only vertex positions (and the normals
//! derived from them) change afterwards.

use fnv::FnvHashSet;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Topology {
    /// XY plane centred at the origin. Row 0 sits at `+height / 2`.
    Grid {
        width: f32,
        height: f32,
        cols: u32,
        rows: u32,
    },
    /// UV sphere. Row 0 is the north pole (`+Y`).
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

/// GPU-facing vertex layout shared by the terrain, ocean and sun pipelines.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    topology: Topology,
}

impl Mesh {
    pub fn plane(width: f32, height: f32, cols: u32, rows: u32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let seg_w = width / cols as f32;
        let seg_h = height / rows as f32;
        let stride = cols + 1;
        let count = (stride * (rows + 1)) as usize;

        let mut positions = Vec::with_capacity(count);
        let mut uvs = Vec::with_capacity(count);
        for iy in 0..=rows {
            let y = height * 0.5 - iy as f32 * seg_h;
            for ix in 0..=cols {
                let x = ix as f32 * seg_w - width * 0.5;
                positions.push(Vec3::new(x, y, 0.0));
                uvs.push(Vec2::new(ix as f32 / cols as f32, iy as f32 / rows as f32));
            }
        }

        let mut indices = Vec::with_capacity((cols * rows * 6) as usize);
        for iy in 0..rows {
            for ix in 0..cols {
                let a = ix + stride * iy;
                let b = ix + stride * (iy + 1);
                let c = ix + 1 + stride * (iy + 1);
                let d = ix + 1 + stride * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        let mut mesh = Self {
            normals: vec![Vec3::Z; positions.len()],
            positions,
            uvs,
            indices,
            topology: Topology::Grid {
                width,
                height,
                cols,
                rows,
            },
        };
        mesh.compute_vertex_normals();
        mesh
    }

    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let ws = width_segments.max(3);
        let hs = height_segments.max(2);
        let stride = ws + 1;
        let count = (stride * (hs + 1)) as usize;

        let mut positions = Vec::with_capacity(count);
        let mut uvs = Vec::with_capacity(count);
        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            let (sin_t, cos_t) = (v * std::f32::consts::PI).sin_cos();
            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                let (sin_p, cos_p) = (u * std::f32::consts::TAU).sin_cos();
                positions.push(Vec3::new(
                    -radius * cos_p * sin_t,
                    radius * cos_t,
                    radius * sin_p * sin_t,
                ));
                uvs.push(Vec2::new(u, v));
            }
        }

        let mut indices = Vec::new();
        for iy in 0..hs {
            for ix in 0..ws {
                let a = iy * stride + ix + 1;
                let b = iy * stride + ix;
                let c = (iy + 1) * stride + ix;
                let d = (iy + 1) * stride + ix + 1;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != hs - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        let mut mesh = Self {
            normals: vec![Vec3::Y; positions.len()],
            positions,
            uvs,
            indices,
            topology: Topology::Sphere {
                radius,
                width_segments: ws,
                height_segments: hs,
            },
        };
        mesh.compute_vertex_normals();
        mesh
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Area-weighted vertex normals. Vertices with no usable faces keep the
    /// topology's rest normal.
    pub fn compute_vertex_normals(&mut self) {
        for n in &mut self.normals {
            *n = Vec3::ZERO;
        }
        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let a = self.positions[ia];
            let b = self.positions[ib];
            let c = self.positions[ic];
            let face = (c - b).cross(a - b);
            self.normals[ia] += face;
            self.normals[ib] += face;
            self.normals[ic] += face;
        }
        let fallback = match self.topology {
            Topology::Grid { .. } => Vec3::Z,
            Topology::Sphere { .. } => Vec3::Y,
        };
        for n in &mut self.normals {
            *n = n.try_normalize().unwrap_or(fallback);
        }
    }

    /// Unique undirected triangle edges, flattened as `[a0, b0, a1, b1, ..]`.
    pub fn line_indices(&self) -> Vec<u32> {
        let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
        let mut lines = Vec::with_capacity(self.indices.len());
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                if seen.insert(key) {
                    lines.push(key.0);
                    lines.push(key.1);
                }
            }
        }
        lines
    }

    /// Min and max Z across all vertices.
    pub fn bounds_z(&self) -> (f32, f32) {
        self.positions
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.z), hi.max(p.z)))
    }

    /// Refill `out` with interleaved vertices. Reuses `out`'s allocation once it
    /// is large enough.
    pub fn vertices_into(&self, out: &mut Vec<MeshVertex>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.normals)
                .map(|(p, n)| MeshVertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                }),
        );
    }
}
