//! Exact Lagrange interpolation at `x = 0` over big integers.
//!
//! For pivot `j` the basis weight at zero is
//!
//! ```text
//! L_j(0) = Π_{i≠j} (0 - x_i) / Π_{i≠j} (x_j - x_i)
//! ```
//!
//! and the secret is `f(0) = Σ_j y_j · L_j(0)`. Each term is divided with
//! truncating big-integer division. When a division leaves a remainder the
//! remainder is kept as an exact fraction and folded back in at the end, so the
//! result never depends on how the remainders happened to be distributed
//! across the pivots.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::InterpolationError;
use crate::point::Point;

/// Numerator and denominator of one Lagrange basis weight evaluated at zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LagrangeBasis {
    pub numerator: BigInt,
    pub denominator: BigInt,
}

impl LagrangeBasis {
    /// Truncated quotient and remainder of `y · numerator / denominator`.
    pub fn weigh(&self, y: &BigInt) -> (BigInt, BigInt) {
        let product = y * &self.numerator;
        let quotient = &product / &self.denominator;
        let remainder = product % &self.denominator;
        (quotient, remainder)
    }
}

/// Outcome of an interpolation, with the exactness diagnostics attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpolation {
    /// `f(0)` truncated toward zero. Equal to `f(0)` whenever it is an integer.
    pub secret: BigInt,
    /// The exact value of the interpolated polynomial at zero.
    pub value: BigRational,
    /// Pivot indices whose term division left a nonzero remainder.
    pub inexact_pivots: Vec<usize>,
}

impl Interpolation {
    /// True when every term divided without remainder.
    pub fn is_exact(&self) -> bool {
        self.inexact_pivots.is_empty()
    }

    /// True when the points lie on a polynomial whose value at zero is an
    /// integer, i.e. `secret` is the exact constant term.
    pub fn is_integral(&self) -> bool {
        self.value.is_integer()
    }
}

/// Compute the basis numerator/denominator for `points[pivot]`.
pub fn basis_at_zero(
    points: &[Point],
    pivot: usize,
) -> Result<LagrangeBasis, InterpolationError> {
    let pivot_point = points
        .get(pivot)
        .ok_or(InterpolationError::InvalidPivot(pivot, points.len()))?;

    let mut numerator = BigInt::one();
    let mut denominator = BigInt::one();
    for (i, other) in points.iter().enumerate() {
        if i == pivot {
            continue;
        }
        numerator *= -other.x();
        denominator *= pivot_point.x() - other.x();
    }

    if denominator.is_zero() {
        return Err(InterpolationError::DuplicateCoordinate {
            x: pivot_point.x().clone(),
        });
    }

    Ok(LagrangeBasis {
        numerator,
        denominator,
    })
}

/// Interpolate through `points` and report the value at zero together with
/// which pivots needed the remainder correction.
pub fn interpolate_at_zero_checked(
    points: &[Point],
) -> Result<Interpolation, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }

    let mut secret = BigInt::zero();
    let mut residual = BigRational::zero();
    let mut inexact_pivots = Vec::new();

    for (pivot, point) in points.iter().enumerate() {
        let basis = basis_at_zero(points, pivot)?;
        let (quotient, remainder) = basis.weigh(point.y());
        secret += quotient;
        if !remainder.is_zero() {
            residual += BigRational::new(remainder, basis.denominator);
            inexact_pivots.push(pivot);
        }
    }

    let value = BigRational::from_integer(secret.clone()) + &residual;
    // The truncated quotients and the residual can straddle zero, so the
    // corrected secret is truncated from the exact value.
    if !residual.is_zero() {
        secret = value.trunc().to_integer();
    }

    Ok(Interpolation {
        secret,
        value,
        inexact_pivots,
    })
}

/// Interpolate through `points` and return the constant term `f(0)`.
///
/// ```
/// use num_bigint::BigInt;
/// use shamir_math::prelude::*;
///
/// let secret = interpolate_at_zero(&points![(1, 4), (2, 7)]).unwrap();
/// assert_eq!(secret, BigInt::from(1));
/// ```
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, InterpolationError> {
    interpolate_at_zero_checked(points).map(|interpolation| interpolation.secret)
}
