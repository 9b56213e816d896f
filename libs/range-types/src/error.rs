use soroban_sdk::contracterror;

/// Failure kinds surfaced by range sizing and position provisioning.
///
/// Every variant is terminal for the invocation that produced it: returning it
/// from a contract function rolls back all custody and allowance changes.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RangeError {
    /// Target width outside (0, 10000] bps
    InvalidWidth = 1,
    /// A tick (current or computed) lies outside [MIN_TICK, MAX_TICK]
    TickOutOfRange = 2,
    /// Aligned range misses the requested width by more than the tolerance band
    WidthToleranceExceeded = 3,
    /// Caller balance below the requested amount
    InsufficientFunds = 4,
    /// Caller allowance to this contract below the requested amount
    InsufficientAllowance = 5,
    /// External position manager declined or returned an unusable outcome
    MintRejected = 6,
    /// Sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    SqrtPriceOutOfRange = 7,
    InvalidTickSpacing = 8,
    InvalidAmount = 9,
    AlreadyInitialized = 10,
    NotInitialized = 11,
}
