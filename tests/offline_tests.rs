// Host-side tests for service worker registration timing.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod offline {
    include!("../src/offline.rs");
}

use offline::{registration_plan, Registration};

#[test]
fn waits_for_load_while_page_is_loading() {
    assert_eq!(registration_plan("https:", true, false), Registration::OnLoad);
    assert_eq!(registration_plan("http:", true, false), Registration::OnLoad);
}

#[test]
fn registers_at_once_after_load() {
    assert_eq!(registration_plan("https:", true, true), Registration::Now);
}

#[test]
fn file_pages_and_missing_support_skip() {
    assert!(matches!(registration_plan("file:", true, false), Registration::Skip(_)));
    assert!(matches!(registration_plan("https:", false, true), Registration::Skip(_)));
}
