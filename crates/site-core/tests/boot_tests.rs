// Host-side tests for the hero boot timeline and text scramble.

use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::boot::{
    generate_grid_lines, interval, wipe_progress, GRID_ASSEMBLED_OPACITY, GRID_MAX_DELAY_S,
    TARGET_TEXT,
};
use site_core::{BootGate, BootPhase, BootSequence, TextScramble};

const ANIMATED: BootGate = BootGate {
    enabled: true,
    reduced_motion: false,
};

#[test]
fn gate_requires_enabled_and_full_motion() {
    assert!(ANIMATED.animate());
    for gate in [
        BootGate { enabled: false, reduced_motion: false },
        BootGate { enabled: true, reduced_motion: true },
        BootGate { enabled: false, reduced_motion: true },
    ] {
        let seq = BootSequence::new(gate);
        assert!(seq.is_complete());
        assert!(seq.pending_timers().is_empty());
    }
}

#[test]
fn glitch_only_advances_to_scanner() {
    for fired in [BootPhase::Assembly, BootPhase::Complete, BootPhase::Glitch] {
        let mut seq = BootSequence::new(ANIMATED);
        assert!(!seq.on_timer(fired));
        assert_eq!(seq.phase(), BootPhase::Glitch);
    }
    let mut seq = BootSequence::new(ANIMATED);
    assert!(seq.on_timer(BootPhase::Scanner));
    assert_eq!(seq.phase(), BootPhase::Scanner);
}

#[test]
fn full_timeline_in_order() {
    let mut seq = BootSequence::new(ANIMATED);
    let timers = seq.pending_timers();
    assert_eq!(
        timers,
        vec![
            (1500, BootPhase::Scanner),
            (2500, BootPhase::Assembly),
            (3500, BootPhase::Complete),
        ]
    );
    for (_, phase) in timers {
        assert!(seq.on_timer(phase));
    }
    assert!(seq.is_complete());
}

#[test]
fn complete_is_terminal() {
    let mut seq = BootSequence::new(ANIMATED);
    seq.force_complete();
    for fired in [
        BootPhase::Glitch,
        BootPhase::Scanner,
        BootPhase::Assembly,
        BootPhase::Complete,
    ] {
        assert!(!seq.on_timer(fired));
        assert_eq!(seq.phase(), BootPhase::Complete);
    }
    assert_eq!(BootPhase::Complete.next(), None);
}

#[test]
fn phase_predicates() {
    assert!(BootPhase::Glitch.is_glitching());
    assert!(!BootPhase::Scanner.is_assembling());
    assert!(BootPhase::Assembly.is_assembling());
    assert!(BootPhase::Complete.is_assembling());
    assert!(BootPhase::Scanner.scanner_active());
    assert!(!BootPhase::Complete.scanner_active());
    assert_eq!(interval(BootPhase::Glitch), Some(80));
    assert_eq!(interval(BootPhase::Assembly), Some(50));
    assert_eq!(interval(BootPhase::Complete), None);
}

#[test]
fn scramble_resolves_after_one_tick_per_character() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = TextScramble::new(TARGET_TEXT);
    let n = s.reveal_ticks();
    assert_eq!(n, 28);
    s.set_phase(BootPhase::Assembly);
    for i in 1..=n {
        let more = s.tick(&mut rng);
        assert_eq!(more, i < n);
    }
    assert_eq!(s.display(), TARGET_TEXT);
    assert!(s.is_complete());
    assert!(!s.tick(&mut rng));
}

#[test]
fn partial_reveal_keeps_prefix_and_whitespace() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut s = TextScramble::new("ab cd\nef");
    s.set_phase(BootPhase::Scanner);
    for _ in 0..3 {
        assert!(s.tick(&mut rng));
    }
    let shown: Vec<char> = s.display().chars().collect();
    assert_eq!(shown.len(), 8);
    assert_eq!(&shown[..2], &['a', 'b']);
    assert_eq!(shown[2], ' ');
    assert_eq!(shown[3], 'c');
    assert_eq!(shown[5], '\n');
    assert_eq!(s.resolved(), 3);
}

#[test]
fn reveal_count_carries_into_assembly() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = TextScramble::new("abcdef");
    s.set_phase(BootPhase::Scanner);
    s.tick(&mut rng);
    s.tick(&mut rng);
    s.set_phase(BootPhase::Assembly);
    assert_eq!(s.resolved(), 2);
    s.set_phase(BootPhase::Glitch);
    assert_eq!(s.resolved(), 0);
}

#[test]
fn glitch_shows_pool_strings() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut s = TextScramble::new(TARGET_TEXT);
    for _ in 0..10 {
        assert!(s.tick(&mut rng));
        assert!(site_core::boot::GIBBERISH_POOL.contains(&s.display()));
    }
}

#[test]
fn entering_complete_shows_target() {
    let mut s = TextScramble::new(TARGET_TEXT);
    s.set_phase(BootPhase::Complete);
    assert_eq!(s.display(), TARGET_TEXT);
}

#[test]
fn grid_lines_are_deterministic() {
    let a = generate_grid_lines();
    let b = generate_grid_lines();
    assert_eq!(a, b);
    assert_eq!(a.len(), 20);
    assert_eq!(a.iter().filter(|l| l.id.starts_with("v-")).count(), 13);
    assert_eq!(a[13].id, "h-0");
}

#[test]
fn grid_delays_grow_from_centre() {
    let lines = generate_grid_lines();
    let max = lines.iter().map(|l| l.assembly_delay).fold(0.0, f32::max);
    assert!((max - GRID_MAX_DELAY_S).abs() < 1e-6);
    assert!(lines.iter().all(|l| (0.0..=GRID_MAX_DELAY_S + 1e-6).contains(&l.assembly_delay)));
    // v-6 sits on the centre column
    let centre = lines.iter().find(|l| l.id == "v-6").map(|l| l.assembly_delay);
    assert_eq!(centre, Some(0.0));
}

#[test]
fn grid_positions_follow_phase() {
    let line = &generate_grid_lines()[0];
    let (pos, op) = line.position(BootPhase::Assembly);
    assert_eq!(pos, line.assembled);
    assert_eq!(op, GRID_ASSEMBLED_OPACITY);
    let (pos, _) = line.position(BootPhase::Glitch);
    assert_eq!(pos, line.scattered);
}

#[test]
fn wipe_eases_out() {
    assert_eq!(wipe_progress(0.0), 0.0);
    assert_eq!(wipe_progress(800.0), 1.0);
    assert_eq!(wipe_progress(5000.0), 1.0);
    assert!(wipe_progress(400.0) > 0.5);
}
