#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn init_resolves_light_outside_the_browser() {
    assert!(!init());
}

#[test]
fn toggle_flips_the_current_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
