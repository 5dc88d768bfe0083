//! Shared macros for constructing interpolation points.
//!
//! These macros delegate to [`Point::new`](crate::point::Point::new), so any
//! coordinate type that converts into `BigInt` is accepted.

/// Simplifies constructing a single [`Point`](crate::point::Point).
///
/// ```
/// use num_bigint::BigInt;
/// use shamir_math::prelude::*;
///
/// let p = point!(2, 7);
/// assert_eq!(p.y(), &BigInt::from(7));
/// ```
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::point::Point::new($x, $y)
    };
}

/// Create a [`Vec`] of [`Point`](crate::point::Point)s from `(x, y)` pairs.
///
/// ```
/// use shamir_math::prelude::*;
///
/// let pts = points![(1, 4), (2, 7)];
/// assert_eq!(pts, vec![point!(1, 4), point!(2, 7)]);
/// ```
#[macro_export]
macro_rules! points {
    () => {
        ::std::vec::Vec::<$crate::point::Point>::new()
    };
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        vec![$($crate::point::Point::new($x, $y)),+]
    };
}
