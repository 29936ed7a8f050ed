//! The assertion primitives behind `require!`, `ensure!` and `maintain!`.
//!
//! Each function evaluates its check only when [`PROFILE`] is active. A false
//! check is a contract violation: in a checked build it panics with the
//! check's message, in an observe build it is logged and execution continues.
//! Violations never come back as a `Result`.

use std::fmt;

use crate::check::{AssertionCheck, Clause, Predicate, Validator};
use crate::profile::PROFILE;

/// Checks a precondition.
#[inline(always)]
#[track_caller]
pub fn require<P: Predicate>(check: AssertionCheck<'_, P>) {
    enforce(Clause::Precondition, check);
}

/// Checks a postcondition.
#[inline(always)]
#[track_caller]
pub fn ensure<P: Predicate>(check: AssertionCheck<'_, P>) {
    enforce(Clause::Postcondition, check);
}

#[inline(always)]
#[track_caller]
pub fn require_bool(condition: bool, message: &str) {
    require(AssertionCheck::new(condition, message));
}

#[inline(always)]
#[track_caller]
pub fn ensure_bool(condition: bool, message: &str) {
    ensure(AssertionCheck::new(condition, message));
}

/// Checks a precondition by running `validator` on `value`.
#[inline(always)]
#[track_caller]
pub fn require_with<T: ?Sized, V: Validator<T>>(value: &T, validator: V, message: &str) {
    require(AssertionCheck::validated(value, validator, message));
}

/// Checks a postcondition by running `validator` on `value`.
#[inline(always)]
#[track_caller]
pub fn ensure_with<T: ?Sized, V: Validator<T>>(value: &T, validator: V, message: &str) {
    ensure(AssertionCheck::validated(value, validator, message));
}

#[inline(always)]
#[track_caller]
fn enforce<P: Predicate>(clause: Clause, check: AssertionCheck<'_, P>) {
    if PROFILE.is_active() {
        let message = check.message();
        if !check.holds() {
            violation(clause, format_args!("{}", message));
        }
    }
}

/// Reports a failed check. Only reachable from an active profile.
#[cold]
#[inline(never)]
#[track_caller]
pub fn violation(clause: Clause, message: fmt::Arguments<'_>) {
    if PROFILE.aborts() {
        panic!("{}", message);
    }
    let location = std::panic::Location::caller();
    tracing::error!(
        clause = %clause,
        file = location.file(),
        line = location.line(),
        "contract violation: {}",
        message
    );
}
