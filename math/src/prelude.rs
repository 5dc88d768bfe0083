pub use crate::{point, points};
pub use crate::{
    error::{InterpolationError, RadixError},
    lagrange::{
        basis_at_zero, interpolate_at_zero, interpolate_at_zero_checked,
        Interpolation, LagrangeBasis,
    },
    point::Point,
    radix::{decode_bigint, decode_biguint, parse_radix, MAX_RADIX, MIN_RADIX},
};
