#![doc = include_str!("../../../README.md")]

// Lets `#[maintains]` expansions name `::covenant` from inside this crate.
extern crate self as covenant;

mod assert;
mod check;
mod executor;
mod invariant;
mod macros;
mod profile;

pub use assert::{ensure, ensure_bool, ensure_with, require, require_bool, require_with};
pub use check::{AssertionCheck, Clause, Predicate, Validated, Validator};
pub use executor::{ContractMode, Outcome, run, run_error_tolerant, run_strict};
pub use invariant::Invariant;
pub use profile::{BuildProfile, PROFILE};

pub use covenant_macros::maintains;

#[doc(hidden)]
pub mod __private {
    pub use crate::assert::violation;
}
