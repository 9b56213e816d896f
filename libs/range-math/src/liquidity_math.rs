use crate::full_math::mul_div;
use range_types::{RangeError, Q96};
use soroban_sdk::Env;

fn sort_ratios(sqrt_ratio_a_x96: u128, sqrt_ratio_b_x96: u128) -> (u128, u128) {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    }
}

/// Calculate the largest liquidity the given amounts can back over a price
/// range at the current price (rounds down)
pub fn get_liquidity_for_amounts(
    env: &Env,
    sqrt_ratio_x96: u128,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    amount0: u128,
    amount1: u128,
) -> Result<u128, RangeError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_lower == sqrt_ratio_upper {
        return Err(RangeError::TickOutOfRange);
    }

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        // Current price below range - all token0
        get_liquidity_for_amount0(env, sqrt_ratio_lower, sqrt_ratio_upper, amount0)
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        // Current price in range - both tokens
        let liquidity0 =
            get_liquidity_for_amount0(env, sqrt_ratio_x96, sqrt_ratio_upper, amount0)?;
        let liquidity1 =
            get_liquidity_for_amount1(env, sqrt_ratio_lower, sqrt_ratio_x96, amount1)?;
        Ok(liquidity0.min(liquidity1))
    } else {
        // Current price above range - all token1
        get_liquidity_for_amount1(env, sqrt_ratio_lower, sqrt_ratio_upper, amount1)
    }
}

/// L = amount0 * sqrt_pa * sqrt_pb / (sqrt_pb - sqrt_pa)
fn get_liquidity_for_amount0(
    env: &Env,
    sqrt_ratio_lower: u128,
    sqrt_ratio_upper: u128,
    amount0: u128,
) -> Result<u128, RangeError> {
    let intermediate =
        mul_div(env, sqrt_ratio_lower, sqrt_ratio_upper, Q96).ok_or(RangeError::InvalidAmount)?;
    mul_div(env, amount0, intermediate, sqrt_ratio_upper - sqrt_ratio_lower)
        .ok_or(RangeError::InvalidAmount)
}

/// L = amount1 / (sqrt_pb - sqrt_pa)
fn get_liquidity_for_amount1(
    env: &Env,
    sqrt_ratio_lower: u128,
    sqrt_ratio_upper: u128,
    amount1: u128,
) -> Result<u128, RangeError> {
    mul_div(env, amount1, Q96, sqrt_ratio_upper - sqrt_ratio_lower).ok_or(RangeError::InvalidAmount)
}

/// Token amounts represented by `liquidity` over a price range at the current
/// price (rounds down)
pub fn get_amounts_for_liquidity(
    env: &Env,
    sqrt_ratio_x96: u128,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    liquidity: u128,
) -> Result<(u128, u128), RangeError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_lower == 0 {
        return Err(RangeError::SqrtPriceOutOfRange);
    }

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        let amount0 = get_amount0_for_liquidity(env, sqrt_ratio_lower, sqrt_ratio_upper, liquidity)?;
        Ok((amount0, 0))
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        let amount0 = get_amount0_for_liquidity(env, sqrt_ratio_x96, sqrt_ratio_upper, liquidity)?;
        let amount1 = get_amount1_for_liquidity(env, sqrt_ratio_lower, sqrt_ratio_x96, liquidity)?;
        Ok((amount0, amount1))
    } else {
        let amount1 = get_amount1_for_liquidity(env, sqrt_ratio_lower, sqrt_ratio_upper, liquidity)?;
        Ok((0, amount1))
    }
}

// amount0 = L * (sqrt_pb - sqrt_pa) / sqrt_pb * Q96 / sqrt_pa
fn get_amount0_for_liquidity(
    env: &Env,
    sqrt_ratio_lower: u128,
    sqrt_ratio_upper: u128,
    liquidity: u128,
) -> Result<u128, RangeError> {
    let scaled = mul_div(env, liquidity, sqrt_ratio_upper - sqrt_ratio_lower, sqrt_ratio_upper)
        .ok_or(RangeError::InvalidAmount)?;
    mul_div(env, scaled, Q96, sqrt_ratio_lower).ok_or(RangeError::InvalidAmount)
}

// amount1 = L * (sqrt_pb - sqrt_pa) / Q96
fn get_amount1_for_liquidity(
    env: &Env,
    sqrt_ratio_lower: u128,
    sqrt_ratio_upper: u128,
    liquidity: u128,
) -> Result<u128, RangeError> {
    mul_div(env, liquidity, sqrt_ratio_upper - sqrt_ratio_lower, Q96).ok_or(RangeError::InvalidAmount)
}
