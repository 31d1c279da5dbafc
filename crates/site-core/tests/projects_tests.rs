// Host-side tests for the project fixtures.

use site_core::iso::project_stack;
use site_core::projects::{find, illustration, wireframe, PROJECTS};
use site_core::Rgb;

#[test]
fn slugs_are_unique_and_findable() {
    for p in &PROJECTS {
        assert_eq!(find(p.slug).map(|f| f.title), Some(p.title));
    }
    assert!(find("missing").is_none());
}

#[test]
fn accents_parse() {
    assert_eq!(find("tradeos").map(|p| p.accent()), Some(Rgb(0xFF, 0x6A, 0x00)));
    assert_eq!(find("grova").map(|p| p.accent()), Some(Rgb(0x00, 0xC8, 0x7A)));
    assert_eq!(find("zero").map(|p| p.accent()), Some(Rgb(0x00, 0xF5, 0xD4)));
}

#[test]
fn every_project_has_card_art() {
    for p in &PROJECTS {
        let art = project_stack(p.slug, p.accent());
        assert!(art.path_count() > 0, "{}", p.slug);
        assert!(!p.architecture.layers.is_empty());
    }
}

#[test]
fn illustration_keys_resolve() {
    // Every project has a detail wireframe: three layers over the drafting grid.
    for p in &PROJECTS {
        let wire = illustration(&format!("{}-wireframe", p.slug));
        assert_eq!(wire.grid.len(), 18, "{}", p.slug);
        assert_eq!(wire.layers.len(), 3, "{}", p.slug);
        let direct = wireframe(p.slug, p.accent()).expect("wireframe");
        assert_eq!(wire.label, direct.label);
    }
    assert!(illustration("grova-wireframe").label.starts_with("Grova"));
    assert!(illustration("zero-wireframe").label.starts_with("ZERO"));

    // A wireframe key for a project without one falls back to its stack.
    assert!(wireframe("unknown", Rgb::COPPER).is_none());
    assert!(illustration("unknown-wireframe").path_count() > 0);

    // A slug gets the same stack the card would draw.
    let zero = illustration("zero");
    let direct = project_stack("zero", Rgb(0x00, 0xF5, 0xD4));
    assert_eq!(zero.path_count(), direct.path_count());
    assert_eq!(zero.label, direct.label);

    // Unknown slugs still produce something drawable.
    assert!(illustration("unknown").path_count() > 0);
}
