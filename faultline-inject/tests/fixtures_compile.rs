//! Every golden output must build against the `faultline` macros and behave
//! like its input while no fault is armed.
//!
//! New fixtures need a module here.

#![allow(dead_code)]

#[path = "fixtures/already_instrumented/expected.rs"]
mod already_instrumented;
#[path = "fixtures/basic/expected.rs"]
mod basic;
#[path = "fixtures/const_contexts/expected.rs"]
mod const_contexts;
#[path = "fixtures/macros_and_closures/expected.rs"]
mod macros_and_closures;
#[path = "fixtures/negative_literals/expected.rs"]
mod negative_literals;

#[test]
fn test_negative_literals_keep_their_value() {
    assert_eq!(negative_literals::floor(), i8::MIN);
    assert_eq!(negative_literals::earliest(), i64::MIN);
    assert_eq!(negative_literals::step_back(10), 7);
    assert_eq!(negative_literals::distance(1), 6);
}

#[test]
fn test_instrumented_window_behaves() {
    let mut window = basic::Window::new();
    assert_eq!(window.last_offset(), None);
    window.push(4);
    assert_eq!(window.last_offset(), Some(0));
    assert_eq!(basic::backoff(1), 200);
}

#[test]
fn test_instrumented_closures_behave() {
    assert_eq!(macros_and_closures::summarize(&[4, 20]), "72-2");
}
