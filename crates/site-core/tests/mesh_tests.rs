// Host-side tests for mesh primitives.

use site_core::{Mesh, Topology};

#[test]
fn plane_counts_and_extent() {
    let m = Mesh::plane(4.0, 2.0, 4, 2);
    assert_eq!(m.vertex_count(), 5 * 3);
    assert_eq!(m.indices.len(), 4 * 2 * 6);
    assert_eq!(m.positions[0], glam::Vec3::new(-2.0, 1.0, 0.0));
    assert_eq!(*m.positions.last().unwrap(), glam::Vec3::new(2.0, -1.0, 0.0));
    assert!(matches!(m.topology(), Topology::Grid { cols: 4, rows: 2, .. }));
}

#[test]
fn plane_uvs_cover_unit_square() {
    let m = Mesh::plane(10.0, 10.0, 8, 8);
    assert_eq!(m.uvs[0], glam::Vec2::ZERO);
    assert_eq!(*m.uvs.last().unwrap(), glam::Vec2::ONE);
    assert!(m.uvs.iter().all(|uv| (0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y)));
}

#[test]
fn zero_segments_are_clamped() {
    let m = Mesh::plane(1.0, 1.0, 0, 0);
    assert_eq!(m.vertex_count(), 4);
}

#[test]
fn flat_plane_normals_point_up_z() {
    let m = Mesh::plane(3.0, 3.0, 3, 3);
    for n in &m.normals {
        assert!((n.z - 1.0).abs() < 1e-5, "{n:?}");
    }
}

#[test]
fn line_indices_are_unique_edges() {
    let m = Mesh::plane(1.0, 1.0, 2, 2);
    let lines = m.line_indices();
    assert_eq!(lines.len() % 2, 0);
    let mut edges: Vec<(u32, u32)> = lines.chunks_exact(2).map(|e| (e[0], e[1])).collect();
    let n = edges.len();
    edges.sort_unstable();
    edges.dedup();
    assert_eq!(edges.len(), n);
    // 2x2 grid: 12 axis edges + 4 diagonals
    assert_eq!(n, 16);
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let m = Mesh::sphere(2.5, 12, 8);
    assert_eq!(m.vertex_count(), 13 * 9);
    for p in &m.positions {
        assert!((p.length() - 2.5).abs() < 1e-4);
    }
}

#[test]
fn vertices_into_reuses_buffer() {
    let m = Mesh::plane(1.0, 1.0, 3, 3);
    let mut out = Vec::new();
    m.vertices_into(&mut out);
    assert_eq!(out.len(), m.vertex_count());
    let cap = out.capacity();
    m.vertices_into(&mut out);
    assert_eq!(out.capacity(), cap);
    assert_eq!(out[0].position, m.positions[0].to_array());
}

#[test]
fn bounds_z_of_flat_plane() {
    let m = Mesh::plane(1.0, 1.0, 2, 2);
    assert_eq!(m.bounds_z(), (0.0, 0.0));
}
