/// The invariant of a contracted subject.
///
/// The default `invariant()` is trivially true, so a type without an
/// invariant opts in with an empty impl. Types that have one override it and
/// state each condition with [`maintain!`](crate::maintain) (or generate the
/// impl with [`#[maintains(...)]`](crate::maintains)):
///
/// ```
/// use covenant::{Invariant, maintain};
///
/// struct Window {
///     start: usize,
///     end: usize,
/// }
///
/// impl Invariant for Window {
///     fn invariant(&self) {
///         maintain!(self.start <= self.end);
///     }
/// }
///
/// Window { start: 1, end: 4 }.invariant();
/// ```
///
/// An invariant must be a pure function of the subject's state.
pub trait Invariant {
    #[inline]
    fn invariant(&self) {}
}

impl<T: Invariant + ?Sized> Invariant for &T {
    #[inline]
    fn invariant(&self) {
        (**self).invariant();
    }
}

impl<T: Invariant + ?Sized> Invariant for &mut T {
    #[inline]
    fn invariant(&self) {
        (**self).invariant();
    }
}

impl<T: Invariant + ?Sized> Invariant for Box<T> {
    #[inline]
    fn invariant(&self) {
        (**self).invariant();
    }
}

impl<T: Invariant> Invariant for [T] {
    fn invariant(&self) {
        for item in self {
            item.invariant();
        }
    }
}

impl<T: Invariant> Invariant for Vec<T> {
    fn invariant(&self) {
        self.as_slice().invariant();
    }
}

impl Invariant for () {}

// Several subjects under one contract, e.g. both accounts of a transfer.
// Elements are checked left to right.
macro_rules! tuple_invariant {
    ($($name:ident)+) => {
        impl<$($name: Invariant),+> Invariant for ($($name,)+) {
            #[inline]
            #[allow(non_snake_case)]
            fn invariant(&self) {
                let ($($name,)+) = self;
                $($name.invariant();)+
            }
        }
    };
}

tuple_invariant!(A B);
tuple_invariant!(A B C);
tuple_invariant!(A B C D);
