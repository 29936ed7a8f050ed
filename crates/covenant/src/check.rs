use std::fmt;

/// Which part of a contract a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Precondition,
    Postcondition,
    Invariant,
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Clause::Precondition => "Precondition",
            Clause::Postcondition => "Postcondition",
            Clause::Invariant => "Invariant",
        };
        f.write_str(name)
    }
}

/// A reusable predicate over values of type `T`.
///
/// Any `Fn(&T) -> bool` is a validator, so plain functions and closures work
/// directly. Types that carry configuration (a range, a pattern) implement
/// the trait themselves:
///
/// ```
/// use covenant::Validator;
///
/// struct InRange(u32, u32);
///
/// impl Validator<u32> for InRange {
///     fn validate(&self, value: &u32) -> bool {
///         (self.0..=self.1).contains(value)
///     }
/// }
///
/// assert!(InRange(1, 10).validate(&5));
/// assert!((|v: &u32| *v % 2 == 0).validate(&4u32));
/// ```
///
/// Closures passed where a `Validator` is expected need their parameter type
/// written out (`|v: &u32| ...`); inference does not see through the blanket impl.
/// [`AssertionCheck::validated_by`], and the `require!`/`ensure!` macros given
/// a bare `|v| ...` closure, take the closure directly and infer it.
pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn validate(&self, value: &T) -> bool {
        self(value)
    }
}

/// The outcome half of an [`AssertionCheck`], evaluated at most once.
pub trait Predicate {
    fn holds(self) -> bool;
}

impl Predicate for bool {
    #[inline(always)]
    fn holds(self) -> bool {
        self
    }
}

/// A value paired with the validator that judges it. The validator only runs
/// when the check is evaluated.
pub struct Validated<'v, T: ?Sized, V> {
    value: &'v T,
    validator: V,
}

impl<T: ?Sized, V: Validator<T>> Predicate for Validated<'_, T, V> {
    #[inline]
    fn holds(self) -> bool {
        self.validator.validate(self.value)
    }
}

/// A single contract check: an outcome and the message reported when it is false.
pub struct AssertionCheck<'m, P = bool> {
    predicate: P,
    message: &'m str,
}

impl<'m> AssertionCheck<'m, bool> {
    /// A check whose outcome was already computed by the caller.
    #[inline(always)]
    pub fn new(condition: bool, message: &'m str) -> Self {
        AssertionCheck {
            predicate: condition,
            message,
        }
    }
}

impl<'m, 'v, T: ?Sized, V: Validator<T>> AssertionCheck<'m, Validated<'v, T, V>> {
    /// A check that runs `validator` on `value` when evaluated.
    #[inline(always)]
    pub fn validated(value: &'v T, validator: V, message: &'m str) -> Self {
        AssertionCheck {
            predicate: Validated { value, validator },
            message,
        }
    }
}

impl<'m, 'v, T: ?Sized, F: Fn(&T) -> bool> AssertionCheck<'m, Validated<'v, T, F>> {
    /// Like [`validated`](AssertionCheck::validated), for a closure whose
    /// parameter type is inferred from `value`.
    #[inline(always)]
    pub fn validated_by(value: &'v T, validator: F, message: &'m str) -> Self {
        AssertionCheck {
            predicate: Validated { value, validator },
            message,
        }
    }
}

impl<'m, P: Predicate> AssertionCheck<'m, P> {
    pub fn message(&self) -> &'m str {
        self.message
    }

    /// Evaluates the outcome, consuming the check.
    #[inline]
    pub fn holds(self) -> bool {
        self.predicate.holds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Even;

    impl Validator<u32> for Even {
        fn validate(&self, value: &u32) -> bool {
            value % 2 == 0
        }
    }

    fn is_even(value: &u32) -> bool {
        value % 2 == 0
    }

    #[test]
    fn boolean_check_keeps_outcome_and_message() {
        let check = AssertionCheck::new(false, "count must be positive");
        assert_eq!(check.message(), "count must be positive");
        assert!(!check.holds());
        assert!(AssertionCheck::new(true, "unused").holds());
    }

    #[test]
    fn validator_shapes_agree() {
        for value in [0u32, 1, 2, 7, 10] {
            let by_object = AssertionCheck::validated(&value, Even, "even").holds();
            let by_fn = AssertionCheck::validated(&value, is_even, "even").holds();
            let by_closure =
                AssertionCheck::validated(&value, |v: &u32| v % 2 == 0, "even").holds();
            assert_eq!(by_object, value % 2 == 0);
            assert_eq!(by_fn, by_object);
            assert_eq!(by_closure, by_object);
        }
    }

    #[test]
    fn validator_runs_only_on_evaluation() {
        let calls = Cell::new(0);
        let counting = |v: &u32| {
            calls.set(calls.get() + 1);
            *v > 0
        };

        let check = AssertionCheck::validated(&3, counting, "positive");
        assert_eq!(calls.get(), 0);
        assert!(check.holds());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn closure_parameter_is_inferred_from_the_value() {
        let limit = 10u64;
        assert!(AssertionCheck::validated_by(&4u64, |v| *v < limit, "below limit").holds());
        assert!(!AssertionCheck::validated_by("", |s| !s.is_empty(), "non-empty").holds());
    }

    #[test]
    fn unsized_values() {
        let non_empty = |s: &str| !s.is_empty();
        assert!(AssertionCheck::validated("abc", non_empty, "non-empty").holds());
        assert!(!AssertionCheck::validated("", non_empty, "non-empty").holds());

        let sorted = |items: &[i32]| items.windows(2).all(|w| w[0] <= w[1]);
        assert!(AssertionCheck::validated(&[1, 2, 3][..], sorted, "sorted").holds());
    }

    #[test]
    fn clause_names() {
        assert_eq!(Clause::Precondition.to_string(), "Precondition");
        assert_eq!(Clause::Postcondition.to_string(), "Postcondition");
        assert_eq!(Clause::Invariant.to_string(), "Invariant");
    }
}
