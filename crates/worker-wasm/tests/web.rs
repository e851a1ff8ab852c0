//! Tests run in a wasm32 host with `wasm-pack test`.

#![cfg(target_arch = "wasm32")]

use slides_worker_wasm::{deck_manifest, format_outline, parse_slides};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_parse_slides_returns_object() {
    let value = parse_slides("# Intro\n- one\n\n::section\nNext").unwrap();
    assert!(value.is_object());
}

#[wasm_bindgen_test]
fn test_deck_manifest_returns_object() {
    let value = deck_manifest("A\n\nB", Some("talk".to_string()), "dark").unwrap();
    assert!(value.is_object());
}

#[wasm_bindgen_test]
fn test_format_outline() {
    let text = format_outline("# A\n- x", "light", false).unwrap();
    assert_eq!(text, "A\n=\nx\n");
}
