use soroban_sdk::{contracttype, Address};

use crate::WidthRecord;

/// Tokens held by the orchestrator on behalf of one caller for the
/// duration of a single invocation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyReceipt {
    /// Address the tokens were pulled from (and refunds go back to)
    pub owner: Address,
    pub token0: Address,
    pub token1: Address,
    pub amount0: i128,
    pub amount1: i128,
}

/// Interpreted return value of the external mint call
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintOutcome {
    pub position_id: u32,
    pub liquidity: u128,
    pub amount0_used: i128,
    pub amount1_used: i128,
}

/// Result of a successful `create_position`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionResult {
    /// Identifier issued by the external position manager
    pub position_id: u32,
    pub liquidity: u128,
    pub amount0_used: i128,
    pub amount1_used: i128,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub current_tick: i32,
    pub actual_width_bps: u32,
}

impl PositionResult {
    pub fn new(record: &WidthRecord, outcome: &MintOutcome) -> Self {
        Self {
            position_id: outcome.position_id,
            liquidity: outcome.liquidity,
            amount0_used: outcome.amount0_used,
            amount1_used: outcome.amount1_used,
            tick_lower: record.tick_lower,
            tick_upper: record.tick_upper,
            current_tick: record.current_tick,
            actual_width_bps: record.actual_width_bps,
        }
    }
}

/// Read-only preview of what `create_position` would mint at the pool's
/// current tick price
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionQuote {
    pub record: WidthRecord,
    /// Estimated liquidity for the supplied amounts
    pub liquidity: u128,
    /// Estimated amounts the position would consume
    pub amount0: i128,
    pub amount1: i128,
}
