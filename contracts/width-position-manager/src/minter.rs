use range_types::{CustodyReceipt, MintOutcome, RangeError, TickRange};
use soroban_sdk::{contracttype, log, Address, Env, IntoVal, Symbol};

use crate::pool::PoolSnapshot;

/// Argument of the external position manager's `mint` function
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintParams {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    /// Owner of the minted position
    pub recipient: Address,
    /// Account the manager draws the tokens from
    pub payer: Address,
    pub deadline: u64,
}

impl MintParams {
    pub fn new(env: &Env, pool: &PoolSnapshot, range: &TickRange, receipt: &CustodyReceipt) -> Self {
        Self {
            token0: pool.token0.clone(),
            token1: pool.token1.clone(),
            fee: pool.fee,
            tick_lower: range.tick_lower,
            tick_upper: range.tick_upper,
            amount0_desired: receipt.amount0,
            amount1_desired: receipt.amount1,
            amount0_min: 0,
            amount1_min: 0,
            recipient: receipt.owner.clone(),
            payer: env.current_contract_address(),
            deadline: env.ledger().timestamp(),
        }
    }
}

/// Call `mint` on the external position manager and validate what it reports
///
/// Any failure of the call, a zero liquidity or a consumed amount outside
/// `[0, desired]` is reported as `MintRejected`.
pub fn mint(
    env: &Env,
    position_manager: &Address,
    params: &MintParams,
) -> Result<MintOutcome, RangeError> {
    let result = env.try_invoke_contract::<(u32, u128, i128, i128), RangeError>(
        position_manager,
        &Symbol::new(env, "mint"),
        (params.clone(),).into_val(env),
    );

    let (position_id, liquidity, amount0_used, amount1_used) = match result {
        Ok(Ok(returned)) => returned,
        _ => {
            log!(env, "mint: call failed", position_manager.clone());
            return Err(RangeError::MintRejected);
        }
    };

    let outcome = MintOutcome {
        position_id,
        liquidity,
        amount0_used,
        amount1_used,
    };
    validate_outcome(params, &outcome).map_err(|err| {
        log!(env, "mint: unusable outcome", liquidity, amount0_used, amount1_used);
        err
    })?;

    Ok(outcome)
}

fn validate_outcome(params: &MintParams, outcome: &MintOutcome) -> Result<(), RangeError> {
    if outcome.liquidity == 0 {
        return Err(RangeError::MintRejected);
    }
    if !(0..=params.amount0_desired).contains(&outcome.amount0_used)
        || !(0..=params.amount1_desired).contains(&outcome.amount1_used)
    {
        return Err(RangeError::MintRejected);
    }
    Ok(())
}
