#![no_std]

mod error;
mod position;
mod range;

pub use error::*;
pub use position::*;
pub use range::*;

/// Q96 constant (2^96) for fixed-point math
pub const Q96: u128 = 1 << 96;

/// Minimum tick index
/// Limited by u128 representation (originally -887272 for uint160)
pub const MIN_TICK: i32 = -443636;

/// Maximum tick index
/// Limited by u128 representation (originally 887272 for uint160)
pub const MAX_TICK: i32 = 443636;

/// Minimum sqrt price (at MIN_TICK)
pub const MIN_SQRT_RATIO: u128 = 18447090764788882728;

/// Maximum sqrt price (at MAX_TICK)
/// sqrt(1.0001^443636) * 2^96, bounded by u128::MAX
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

/// Basis points in 100%
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Widest width a caller may request (the whole price axis)
pub const MAX_WIDTH_BPS: u32 = BPS_DENOMINATOR;

/// Accepted deviation of the realised width from the requested one, in percent
pub const WIDTH_TOLERANCE_PERCENT: u32 = 5;
