#![no_std]

mod custody;
mod events;
mod minter;
mod pool;
mod refund;
mod storage;

#[cfg(feature = "certora")]
mod certora_specs;


pub use minter::MintParams;

use range_math::{
    check_tolerance, get_amounts_for_liquidity, get_liquidity_for_amounts,
    get_sqrt_ratio_at_tick, plan_range, validate_width,
};
use range_types::{PositionQuote, PositionResult, RangeError, TickRange, WidthRecord};
use soroban_sdk::{contract, contractimpl, log, Address, Env};
use storage::{get_config, has_config, set_config, Config};

#[contract]
pub struct WidthPositionManager;

#[contractimpl]
impl WidthPositionManager {
    /// Initialize with the address of the external position manager
    pub fn initialize(env: Env, position_manager: Address) -> Result<(), RangeError> {
        if has_config(&env) {
            return Err(RangeError::AlreadyInitialized);
        }
        set_config(&env, &Config { position_manager });
        Ok(())
    }

    /// Open a liquidity position on `pool` whose price range is
    /// `target_width_bps` wide and centred on the pool's current tick
    ///
    /// Pulls both amounts from `caller`, mints through the external position
    /// manager with `caller` as owner, and refunds whatever the mint did not
    /// consume. Any error leaves balances and allowances untouched.
    pub fn create_position(
        env: Env,
        caller: Address,
        pool: Address,
        amount0: i128,
        amount1: i128,
        target_width_bps: u32,
    ) -> Result<PositionResult, RangeError> {
        caller.require_auth();

        if let Err(err) = validate_width(target_width_bps) {
            log!(&env, "create_position: invalid width", target_width_bps);
            return Err(err);
        }
        if amount0 <= 0 || amount1 <= 0 {
            log!(&env, "create_position: invalid amount", amount0, amount1);
            return Err(RangeError::InvalidAmount);
        }

        let config = get_config(&env)?;
        let snapshot = pool::read_pool(&env, &pool);

        let record = plan_range(&env, snapshot.tick, snapshot.tick_spacing, target_width_bps)
            .map_err(|err| {
                log!(
                    &env,
                    "create_position: no range",
                    snapshot.address.clone(),
                    snapshot.tick,
                    snapshot.tick_spacing,
                    target_width_bps,
                    err as u32
                );
                err
            })?;
        events::width_resolved(&env, &snapshot.address, &record);

        let range = check_tolerance(&record).map_err(|err| {
            log!(
                &env,
                "create_position: width out of tolerance",
                snapshot.address.clone(),
                record.clone()
            );
            err
        })?;

        let receipt = custody::acquire(&env, &caller, &snapshot, amount0, amount1)?;
        custody::authorize(&env, &receipt, &config.position_manager);

        let params = minter::MintParams::new(&env, &snapshot, &range, &receipt);
        let outcome = minter::mint(&env, &config.position_manager, &params)?;

        let (refund0, refund1) = refund::settle(&env, &receipt, &outcome, &config.position_manager);
        log!(&env, "create_position: refunded", refund0, refund1);

        let result = PositionResult::new(&record, &outcome);
        events::position_created(&env, &caller, &result);

        Ok(result)
    }

    /// Preview the sizing decision for `pool` at its current tick
    ///
    /// The tolerance band is not applied; compare `actual_width_bps` with
    /// `target_width_bps` to see whether `create_position` would accept it.
    pub fn quote_range(env: Env, pool: Address, target_width_bps: u32) -> Result<WidthRecord, RangeError> {
        let snapshot = pool::read_pool(&env, &pool);
        plan_range(&env, snapshot.tick, snapshot.tick_spacing, target_width_bps)
    }

    /// Estimate the liquidity and consumed amounts `create_position` would
    /// produce, priced at the pool's current tick
    pub fn quote_position(
        env: Env,
        pool: Address,
        amount0: i128,
        amount1: i128,
        target_width_bps: u32,
    ) -> Result<PositionQuote, RangeError> {
        validate_width(target_width_bps)?;
        if amount0 <= 0 || amount1 <= 0 {
            return Err(RangeError::InvalidAmount);
        }

        let snapshot = pool::read_pool(&env, &pool);
        let record = plan_range(&env, snapshot.tick, snapshot.tick_spacing, target_width_bps)?;
        let range = check_tolerance(&record)?;

        let sqrt_price_x96 = get_sqrt_ratio_at_tick(&env, record.current_tick)?;
        let sqrt_ratio_lower = get_sqrt_ratio_at_tick(&env, range.tick_lower)?;
        let sqrt_ratio_upper = get_sqrt_ratio_at_tick(&env, range.tick_upper)?;

        let liquidity = get_liquidity_for_amounts(
            &env,
            sqrt_price_x96,
            sqrt_ratio_lower,
            sqrt_ratio_upper,
            amount0 as u128,
            amount1 as u128,
        )?;
        let (used0, used1) = get_amounts_for_liquidity(
            &env,
            sqrt_price_x96,
            sqrt_ratio_lower,
            sqrt_ratio_upper,
            liquidity,
        )?;

        Ok(PositionQuote {
            record,
            liquidity,
            amount0: i128::try_from(used0).map_err(|_| RangeError::InvalidAmount)?,
            amount1: i128::try_from(used1).map_err(|_| RangeError::InvalidAmount)?,
        })
    }

    /// Pure range resolution, independent of any pool
    pub fn resolve_range(
        env: Env,
        current_tick: i32,
        tick_spacing: i32,
        target_width_bps: u32,
    ) -> Result<TickRange, RangeError> {
        range_math::resolve_range(&env, current_tick, tick_spacing, target_width_bps)
    }

    // === View Functions ===

    /// Get the configured external position manager
    pub fn position_manager(env: Env) -> Result<Address, RangeError> {
        Ok(get_config(&env)?.position_manager)
    }
}
