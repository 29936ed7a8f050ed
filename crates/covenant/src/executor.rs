//! The contract executor: runs a method body between invariant checks and
//! lends it the caller's old-state snapshot for postconditions.

use crate::invariant::Invariant;
use crate::profile::PROFILE;

/// How the invariant is checked after a body that reported an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractMode {
    /// Check the invariant after the body on every return, `Ok` or `Err`.
    Strict,
    /// Check the invariant after the body only when it succeeded. For
    /// operations whose contract allows partial mutation on failure.
    ErrorTolerant,
}

/// Classifies a body's return value as success or failure.
///
/// `Result` fails on `Err`; everything else is a plain value and always
/// succeeds. Implement it with an empty impl for your own return types.
pub trait Outcome {
    #[inline(always)]
    fn succeeded(&self) -> bool {
        true
    }
}

impl<T, E> Outcome for Result<T, E> {
    #[inline(always)]
    fn succeeded(&self) -> bool {
        self.is_ok()
    }
}

impl<T> Outcome for Option<T> {}
impl<T> Outcome for Vec<T> {}
impl<T: ?Sized> Outcome for Box<T> {}
impl<T: ?Sized> Outcome for &T {}
impl<T: ?Sized> Outcome for &mut T {}

macro_rules! plain_outcome {
    ($($ty:ty),+ $(,)?) => {
        $(impl Outcome for $ty {})+
    };
}

plain_outcome!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
);

impl<T, const N: usize> Outcome for [T; N] {}

macro_rules! tuple_outcome {
    ($($name:ident)+) => {
        impl<$($name),+> Outcome for ($($name,)+) {}
    };
}

tuple_outcome!(A);
tuple_outcome!(A B);
tuple_outcome!(A B C);
tuple_outcome!(A B C D);

/// Runs `body` under the contract of `subject` with the given `mode`.
///
/// With checking active this is: invariant, body, then invariant again
/// unless `mode` is [`ContractMode::ErrorTolerant`] and the body failed.
/// With checking compiled out it is exactly `body(&old, subject)`.
///
/// A panic inside `body` is not a body-level error: it unwinds through
/// here without the closing invariant check.
#[inline(always)]
pub fn run<S, O, R, F>(mode: ContractMode, subject: &mut S, old: O, body: F) -> R
where
    S: Invariant + ?Sized,
    R: Outcome,
    F: FnOnce(&O, &mut S) -> R,
{
    if mode == ContractMode::Strict {
        return run_strict(subject, old, body);
    }
    if !PROFILE.is_active() {
        return body(&old, subject);
    }

    subject.invariant();
    let result = body(&old, subject);

    if result.succeeded() {
        subject.invariant();
    } else {
        tracing::trace!(?mode, "body failed, leaving invariant unchecked");
    }

    result
}

/// Runs `body` with the invariant checked before it and after it on every return.
///
/// The body's result is never inspected, so it can be any type.
///
/// ```
/// use covenant::{Invariant, ensure, maintain, run_strict};
///
/// struct Counter {
///     count: u32,
///     capacity: u32,
/// }
///
/// impl Invariant for Counter {
///     fn invariant(&self) {
///         maintain!(self.count <= self.capacity);
///     }
/// }
///
/// let mut counter = Counter { count: 1, capacity: 3 };
/// let old_count = counter.count;
/// run_strict(&mut counter, old_count, |old, c| {
///     c.count += 1;
///     ensure!(c.count == *old + 1, "count grows by one");
/// });
/// assert_eq!(counter.count, 2);
/// ```
#[inline(always)]
pub fn run_strict<S, O, R, F>(subject: &mut S, old: O, body: F) -> R
where
    S: Invariant + ?Sized,
    F: FnOnce(&O, &mut S) -> R,
{
    if !PROFILE.is_active() {
        return body(&old, subject);
    }

    subject.invariant();
    let result = body(&old, subject);
    subject.invariant();

    result
}

/// Runs `body` with the invariant checked before it and, only if it
/// succeeded, after it. A failed body's partial mutations are left as they are.
#[inline(always)]
pub fn run_error_tolerant<S, O, R, F>(subject: &mut S, old: O, body: F) -> R
where
    S: Invariant + ?Sized,
    R: Outcome,
    F: FnOnce(&O, &mut S) -> R,
{
    run(ContractMode::ErrorTolerant, subject, old, body)
}
