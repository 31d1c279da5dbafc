// Host-side tests for the noise field.

use noise::NoiseFn;
use site_core::constants::NOISE_SEED;
use site_core::noise::fbm_amplitude;
use site_core::{fbm, perlin2, FbmParams};

fn sample_points() -> impl Iterator<Item = (f32, f32)> {
    (0..20).flat_map(|i| (0..20).map(move |j| (i as f32 * 0.37 + 0.13, j as f32 * 0.29 + 0.41)))
}

#[test]
fn perlin_is_zero_on_lattice() {
    for x in -4..=4 {
        for y in -4..=4 {
            assert_eq!(perlin2(x as f32, y as f32), 0.0, "({x}, {y})");
        }
    }
}

#[test]
fn perlin_reads_the_seeded_gradient_table() {
    let reference = noise::Perlin::new(NOISE_SEED);
    for (x, y) in sample_points() {
        let want = (reference.get([x as f64, y as f64]) as f32).clamp(-1.0, 1.0);
        assert_eq!(perlin2(x, y).to_bits(), want.to_bits(), "({x}, {y})");
    }
}

#[test]
fn perlin_is_deterministic() {
    for (x, y) in sample_points() {
        assert_eq!(perlin2(x, y).to_bits(), perlin2(x, y).to_bits());
    }
}

#[test]
fn perlin_stays_in_unit_range() {
    for (x, y) in sample_points() {
        let n = perlin2(x * 3.1 - 17.0, y * 2.3 + 40.0);
        assert!((-1.0..=1.0).contains(&n), "{n}");
    }
}

#[test]
fn perlin_is_not_constant() {
    let distinct = sample_points()
        .map(|(x, y)| perlin2(x, y))
        .filter(|n| n.abs() > 0.05)
        .count();
    assert!(distinct > 50);
}

#[test]
fn fbm_with_zero_gain_is_plain_perlin() {
    for (x, y) in sample_points() {
        assert_eq!(fbm(x, y, 5, 2.0, 0.0), perlin2(x, y));
    }
}

#[test]
fn fbm_single_octave_ignores_gain() {
    for (x, y) in sample_points() {
        assert_eq!(fbm(x, y, 1, 2.0, 0.9), perlin2(x, y));
    }
}

#[test]
fn fbm_sums_octaves_without_renormalising() {
    for (x, y) in sample_points() {
        let want = perlin2(x, y) + 0.5 * perlin2(x * 2.0, y * 2.0);
        assert!((fbm(x, y, 2, 2.0, 0.5) - want).abs() < 1e-6, "({x}, {y})");
    }
}

#[test]
fn fbm_is_bounded_by_amplitude_sum() {
    let bound = fbm_amplitude(4, 0.5);
    assert!((bound - 1.875).abs() < 1e-6);
    for (x, y) in sample_points() {
        assert!(fbm(x, y, 4, 2.0, 0.5).abs() <= bound + 1e-5);
    }
}

#[test]
fn amplitude_sum_grows_with_gain() {
    let mut last = fbm_amplitude(5, 0.0);
    assert_eq!(last, 1.0);
    for g in [0.2, 0.4, 0.6, 0.8] {
        let a = fbm_amplitude(5, g);
        assert!(a > last, "gain {g}");
        last = a;
    }
}

#[test]
fn fbm_energy_drops_with_lower_gain() {
    let rms = |gain: f32| {
        let (sum, n) = sample_points()
            .map(|(x, y)| fbm(x, y, 4, 2.0, gain))
            .fold((0.0f32, 0usize), |(s, n), v| (s + v * v, n + 1));
        (sum / n as f32).sqrt()
    };
    assert!(rms(0.8) > rms(0.5));
    assert!(rms(0.5) > rms(0.1));
}

#[test]
fn params_offset_shifts_domain() {
    let base = FbmParams::default();
    let shifted = base.with_offset(glam::Vec2::new(10.0, 0.0));
    // frequency 0.1: sampling x + 100 without offset equals sampling x with +10 offset
    let a = shifted.sample(3.3, 4.4);
    let b = base.sample(3.3 + 100.0, 4.4);
    assert!((a - b).abs() < 1e-4);
}
