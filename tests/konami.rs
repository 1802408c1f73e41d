// Integration tests (native) for the `retro-fx` crate.
// These tests avoid wasm-specific functionality and exercise the pure key
// sequence matching logic so they can run under `cargo test` on the host.

use retro_fx::{KONAMI_SEQUENCE, SequenceDetector};

fn feed(detector: &mut SequenceDetector, keys: &[&str]) -> usize {
    keys.iter().filter(|k| detector.handle_key(k)).count()
}

#[test]
fn exact_sequence_fires_exactly_once() {
    let mut d = SequenceDetector::konami();
    assert_eq!(feed(&mut d, &KONAMI_SEQUENCE), 1);
}

#[test]
fn sequence_fires_even_after_leading_garbage() {
    let mut d = SequenceDetector::konami();
    assert_eq!(feed(&mut d, &["x", "y", "Escape", "ArrowUp", "q"]), 0);
    assert_eq!(feed(&mut d, &KONAMI_SEQUENCE), 1);
}

#[test]
fn wrong_order_never_fires() {
    let mut d = SequenceDetector::konami();
    // a/b swapped at the tail
    let keys = [
        "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
        "ArrowRight", "a", "b",
    ];
    assert_eq!(feed(&mut d, &keys), 0);
}

#[test]
fn match_is_case_sensitive() {
    let mut d = SequenceDetector::konami();
    let keys = [
        "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
        "ArrowRight", "B", "A",
    ];
    assert_eq!(feed(&mut d, &keys), 0);
}

#[test]
fn unrecognized_identifiers_fail_comparison_naturally() {
    let mut d = SequenceDetector::konami();
    let mut keys = KONAMI_SEQUENCE.to_vec();
    keys[4] = "NotAKey";
    assert_eq!(feed(&mut d, &keys), 0);
}

#[test]
fn buffer_never_exceeds_target_length() {
    let mut d = SequenceDetector::konami();
    for i in 0..1000 {
        d.handle_key(&format!("k{i}"));
        assert!(d.buffered() <= KONAMI_SEQUENCE.len());
    }
    assert_eq!(d.buffered(), KONAMI_SEQUENCE.len());
}

#[test]
fn buffer_slides_so_back_to_back_sequences_fire_twice() {
    let mut d = SequenceDetector::konami();
    assert_eq!(feed(&mut d, &KONAMI_SEQUENCE), 1);
    // The buffer is never cleared; the second full entry re-matches.
    assert_eq!(feed(&mut d, &KONAMI_SEQUENCE), 1);
}

#[test]
fn one_stray_key_inside_the_sequence_spoils_it() {
    let mut d = SequenceDetector::konami();
    let mut fired = 0;
    for (i, key) in KONAMI_SEQUENCE.iter().enumerate() {
        if i == 7 && d.handle_key("x") {
            fired += 1;
        }
        if d.handle_key(key) {
            fired += 1;
        }
    }
    assert_eq!(fired, 0);
}

#[test]
fn custom_target_sequences_work() {
    static TARGET: [&str; 3] = ["a", "b", "c"];
    let mut d = SequenceDetector::new(&TARGET);
    assert_eq!(feed(&mut d, &["a", "b"]), 0);
    assert_eq!(feed(&mut d, &["c"]), 1);
    // Sliding window over a longer stream: ...a b c matches again.
    assert_eq!(feed(&mut d, &["z", "a", "b", "c"]), 1);
}
