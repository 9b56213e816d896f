use soroban_sdk::contracttype;

/// Direction used when snapping a raw tick onto the spacing grid
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    /// Toward negative infinity (lower bounds)
    Down,
    /// Toward positive infinity (upper bounds)
    Up,
}

/// Aligned tick bounds of a position
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
}

/// Record of one sizing decision, published for every attempt that reaches
/// a computed range so the choice can be reproduced off-chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WidthRecord {
    /// Pool tick the range was centred on
    pub current_tick: i32,
    /// Symmetric bounds before spacing alignment
    pub raw_tick_lower: i32,
    pub raw_tick_upper: i32,
    /// Bounds after alignment and clamping
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Realised width of the aligned bounds
    pub actual_width_bps: u32,
    /// Width the caller asked for
    pub target_width_bps: u32,
}

impl WidthRecord {
    pub fn range(&self) -> TickRange {
        TickRange {
            tick_lower: self.tick_lower,
            tick_upper: self.tick_upper,
        }
    }
}
