pub mod error;
pub mod lagrange;
pub mod macros;
pub mod point;
pub mod prelude;
pub mod radix;

pub use point::Point;
