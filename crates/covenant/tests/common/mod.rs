#![allow(dead_code)]

use std::panic::{AssertUnwindSafe, catch_unwind};

/// Runs `f` and returns the panic message if it panicked.
pub fn panic_message<R>(f: impl FnOnce() -> R) -> Option<String> {
    let payload = catch_unwind(AssertUnwindSafe(f)).err()?;
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .or_else(|| Some(String::from("<non-string panic payload>")))
}

/// Asserts that `f` aborts with a contract violation whose message contains
/// `expected`. Only meaningful in builds where violations panic, so callers
/// sit behind the same `cfg` as the `violations` modules.
pub fn assert_violation<R>(expected: &str, f: impl FnOnce() -> R) {
    match panic_message(f) {
        Some(message) => assert!(
            message.contains(expected),
            "expected violation containing {expected:?}, got {message:?}"
        ),
        None => panic!("expected violation containing {expected:?}, but nothing was reported"),
    }
}
