pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error(
            "unsupported base {0:?}: expected a decimal integer in {min}..={max}",
            min = crate::radix::MIN_RADIX,
            max = crate::radix::MAX_RADIX
        )]
        UnsupportedRadix(String),
        #[error("no digits to decode")]
        EmptyDigits,
        #[error("invalid digit {digit:?} at position {position} for base {radix}")]
        InvalidDigit {
            digit: char,
            position: usize,
            radix: u32,
        },
    }
}

pub mod interpolation {
    use num_bigint::BigInt;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("cannot interpolate with zero points")]
        EmptyInput,
        #[error("duplicate x-value {x} makes a Lagrange denominator zero")]
        DuplicateCoordinate { x: BigInt },
        #[error("pivot index {0} is out of range for {1} points")]
        InvalidPivot(usize, usize),
    }
}

pub use interpolation::Error as InterpolationError;
pub use radix::Error as RadixError;
