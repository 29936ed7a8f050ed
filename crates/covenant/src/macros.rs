//! Call-site macros. Every expansion is guarded by `PROFILE.is_active()`, a
//! constant, so an unchecked build never evaluates the condition, the
//! validator or the message.

/// Checks a precondition.
///
/// Two forms, picked by the number of arguments: a condition, or a value
/// with a [`Validator`](crate::Validator) for it. A bare closure validator
/// gets its parameter type from the value.
///
/// ```
/// use covenant::require;
///
/// fn withdraw(balance: &mut u64, amount: u64) {
///     require!(*balance >= amount, "insufficient balance");
///     require!(amount, |a| *a > 0, "amount must be positive");
///     *balance -= amount;
/// }
///
/// let mut balance = 10;
/// withdraw(&mut balance, 4);
/// assert_eq!(balance, 6);
/// ```
///
/// Any other arity does not compile:
///
/// ```compile_fail
/// covenant::require!(true);
/// ```
///
/// ```compile_fail
/// covenant::require!(1u8, |v: &u8| *v > 0, "positive", "extra");
/// ```
#[macro_export]
macro_rules! require {
    ($condition:expr, $message:expr $(,)?) => {
        if $crate::PROFILE.is_active() {
            $crate::require($crate::AssertionCheck::new($condition, $message));
        }
    };
    ($value:expr, |$param:pat_param| $body:expr, $message:expr $(,)?) => {
        if $crate::PROFILE.is_active() {
            $crate::require($crate::AssertionCheck::validated_by(
                &$value,
                |$param| $body,
                $message,
            ));
        }
    };
    ($value:expr, $validator:expr, $message:expr $(,)?) => {
        if $crate::PROFILE.is_active() {
            $crate::require($crate::AssertionCheck::validated(
                &$value, $validator, $message,
            ));
        }
    };
}

/// Checks a postcondition. Same forms as [`require!`].
///
/// ```compile_fail
/// covenant::ensure!();
/// ```
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $message:expr $(,)?) => {
        if $crate::PROFILE.is_active() {
            $crate::ensure($crate::AssertionCheck::new($condition, $message));
        }
    };
    ($value:expr, |$param:pat_param| $body:expr, $message:expr $(,)?) => {
        if $crate::PROFILE.is_active() {
            $crate::ensure($crate::AssertionCheck::validated_by(
                &$value,
                |$param| $body,
                $message,
            ));
        }
    };
    ($value:expr, $validator:expr, $message:expr $(,)?) => {
        if $crate::PROFILE.is_active() {
            $crate::ensure($crate::AssertionCheck::validated(
                &$value, $validator, $message,
            ));
        }
    };
}

/// Checks a precondition with a `format!`-style message. The arguments are
/// only formatted when the check runs and fails.
///
/// ```
/// let index = 2;
/// let len = 5;
/// covenant::requiref!(index < len, "index {} out of bounds for length {}", index, len);
/// ```
#[macro_export]
macro_rules! requiref {
    ($condition:expr, $($arg:tt)+) => {
        if $crate::PROFILE.is_active() && !($condition) {
            $crate::__private::violation(
                $crate::Clause::Precondition,
                ::core::format_args!($($arg)+),
            );
        }
    };
}

/// Checks a postcondition with a `format!`-style message. See [`requiref!`].
#[macro_export]
macro_rules! ensuref {
    ($condition:expr, $($arg:tt)+) => {
        if $crate::PROFILE.is_active() && !($condition) {
            $crate::__private::violation(
                $crate::Clause::Postcondition,
                ::core::format_args!($($arg)+),
            );
        }
    };
}

/// Checks a precondition, reporting `Precondition failed: <condition>`.
///
/// ```
/// let queue = vec![1, 2, 3];
/// covenant::require_ctx!(!queue.is_empty());
/// ```
#[macro_export]
macro_rules! require_ctx {
    ($condition:expr $(,)?) => {
        if $crate::PROFILE.is_active() && !($condition) {
            $crate::__private::violation(
                $crate::Clause::Precondition,
                ::core::format_args!(
                    "{}",
                    ::core::concat!("Precondition failed: ", ::core::stringify!($condition))
                ),
            );
        }
    };
}

/// Checks a postcondition, reporting `Postcondition failed: <condition>`.
#[macro_export]
macro_rules! ensure_ctx {
    ($condition:expr $(,)?) => {
        if $crate::PROFILE.is_active() && !($condition) {
            $crate::__private::violation(
                $crate::Clause::Postcondition,
                ::core::format_args!(
                    "{}",
                    ::core::concat!("Postcondition failed: ", ::core::stringify!($condition))
                ),
            );
        }
    };
}

/// Checks one invariant condition, for use inside [`Invariant::invariant`](crate::Invariant).
///
/// Without a message it reports `Invariant failed: <condition>`.
#[macro_export]
macro_rules! maintain {
    ($condition:expr $(,)?) => {
        if $crate::PROFILE.is_active() && !($condition) {
            $crate::__private::violation(
                $crate::Clause::Invariant,
                ::core::format_args!(
                    "{}",
                    ::core::concat!("Invariant failed: ", ::core::stringify!($condition))
                ),
            );
        }
    };
    ($condition:expr, $message:expr $(,)?) => {
        if $crate::PROFILE.is_active() && !($condition) {
            $crate::__private::violation(
                $crate::Clause::Invariant,
                ::core::format_args!("{}", $message),
            );
        }
    };
}
