// Host-side tests for terrain zone construction.

use glam::Vec2;
use site_core::terrain::{build_zone, grid_edge_fade, smoothstep, sphere_edge_fade};
use site_core::{TerrainZone, TerrainZoneConfig, Topology};

fn on_grid_edge(uv: Vec2) -> bool {
    uv.x == 0.0 || uv.x == 1.0 || uv.y == 0.0 || uv.y == 1.0
}

#[test]
fn smoothstep_edges() {
    assert_eq!(smoothstep(0.0, 1.0, -0.5), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    // degenerate range acts as a hard step
    assert_eq!(smoothstep(0.3, 0.3, 0.2), 0.0);
    assert_eq!(smoothstep(0.3, 0.3, 0.4), 1.0);
}

#[test]
fn grid_fade_is_zero_on_every_edge_and_one_inside() {
    let m = 0.1;
    for t in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(grid_edge_fade(Vec2::new(0.0, t), m), 0.0);
        assert_eq!(grid_edge_fade(Vec2::new(1.0, t), m), 0.0);
        assert_eq!(grid_edge_fade(Vec2::new(t, 0.0), m), 0.0);
        assert_eq!(grid_edge_fade(Vec2::new(t, 1.0), m), 0.0);
    }
    assert_eq!(grid_edge_fade(Vec2::splat(0.5), m), 1.0);
}

#[test]
fn sphere_fade_only_pins_the_bottom() {
    assert_eq!(sphere_edge_fade(Vec2::new(0.3, 1.0), 0.35), 0.0);
    assert_eq!(sphere_edge_fade(Vec2::new(0.3, 0.0), 0.35), 1.0);
}

#[test]
fn envelopes() {
    // cliff: max(0, 1 - 2.5u) * max(0, far - 0.2)
    assert!((TerrainZone::Cliff.envelope(0.0, 1.0) - 0.8).abs() < 1e-6);
    assert!((TerrainZone::Cliff.envelope(0.2, 0.6) - 0.2).abs() < 1e-6);
    assert_eq!(TerrainZone::Cliff.envelope(0.5, 1.0), 0.0);
    assert_eq!(TerrainZone::Cliff.envelope(1.0, 1.0), 0.0);
    assert_eq!(TerrainZone::Cliff.envelope(0.0, 0.2), 0.0);
    assert_eq!(TerrainZone::Hills.envelope(0.5, 0.4), 0.0);
    assert!((TerrainZone::Hills.envelope(0.5, 1.0) - 1.0).abs() < 1e-6);
    assert!((TerrainZone::Beach.envelope(0.2, 0.0) - 0.15).abs() < 1e-6);
    assert_eq!(TerrainZone::Headland.envelope(0.7, 0.2), 1.0);
}

#[test]
fn grid_zone_boundary_is_flat() {
    for zone in [TerrainZone::Cliff, TerrainZone::Beach, TerrainZone::Hills] {
        let built = build_zone(&TerrainZoneConfig::for_zone(zone));
        let mut edge = 0;
        for (p, uv) in built.mesh.positions.iter().zip(&built.mesh.uvs) {
            if on_grid_edge(*uv) {
                assert_eq!(p.z, 0.0, "{} at {uv:?}", zone.name());
                edge += 1;
            }
        }
        assert!(edge > 0);
    }
}

#[test]
fn boundary_stays_flat_for_any_noise_offset() {
    for k in 0..6 {
        let mut cfg = TerrainZoneConfig::for_zone(TerrainZone::Cliff);
        cfg.ridge.offset = Vec2::new(k as f32 * 13.7, k as f32 * -5.3);
        cfg.detail.offset = Vec2::new(k as f32 * 2.1, 9.0);
        let built = build_zone(&cfg);
        for (p, uv) in built.mesh.positions.iter().zip(&built.mesh.uvs) {
            if on_grid_edge(*uv) {
                assert_eq!(p.z, 0.0);
            }
        }
    }
}

#[test]
fn cliff_has_relief() {
    let built = build_zone(&TerrainZoneConfig::for_zone(TerrainZone::Cliff));
    assert!(built.max_elevation > 0.5, "{}", built.max_elevation);
    assert!(built.min_elevation <= 0.0);
}

#[test]
fn headland_sits_on_its_bottom_ring() {
    let cfg = TerrainZoneConfig::for_zone(TerrainZone::Headland);
    let Topology::Sphere { radius, .. } = cfg.shape else {
        panic!("headland should be a sphere");
    };
    let built = build_zone(&cfg);
    for (p, uv) in built.mesh.positions.iter().zip(&built.mesh.uvs) {
        if uv.y == 1.0 {
            assert!((p.length() - radius).abs() < 1e-4);
        }
    }
}

#[test]
fn build_is_deterministic() {
    let cfg = TerrainZoneConfig::for_zone(TerrainZone::Hills);
    let a = build_zone(&cfg);
    let b = build_zone(&cfg);
    assert_eq!(a.mesh.positions, b.mesh.positions);
    assert_eq!(a.min_elevation.to_bits(), b.min_elevation.to_bits());
}

#[test]
fn default_landscape_has_every_zone_once() {
    let zones = site_core::terrain::default_zones();
    assert_eq!(zones.len(), TerrainZone::ALL.len());
    for (cfg, zone) in zones.iter().zip(TerrainZone::ALL) {
        assert_eq!(cfg.zone, zone);
    }
}
