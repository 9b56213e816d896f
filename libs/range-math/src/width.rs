use crate::full_math::sqrt;
use crate::tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio};
use crate::tick_spacing::align_tick;
use range_types::{
    RangeError, Rounding, TickRange, WidthRecord, BPS_DENOMINATOR, MAX_TICK, MAX_WIDTH_BPS,
    MIN_TICK, Q96, WIDTH_TOLERANCE_PERCENT,
};
use soroban_sdk::{Env, U256};

/// Reject widths outside (0, MAX_WIDTH_BPS]
pub fn validate_width(target_width_bps: u32) -> Result<(), RangeError> {
    if target_width_bps == 0 || target_width_bps > MAX_WIDTH_BPS {
        return Err(RangeError::InvalidWidth);
    }
    Ok(())
}

/// Number of ticks on each side of the current tick for a symmetric range of
/// `target_width_bps`
///
/// A range whose price ratio is r = pU/pL has width (r - 1)/(r + 1), so the
/// requested width w needs r = (1 + w)/(1 - w). The full span is the floor tick
/// of sqrt(r) in Q64.96, and half of it is rounded to the nearest tick.
pub fn half_range_ticks(env: &Env, target_width_bps: u32) -> Result<i32, RangeError> {
    validate_width(target_width_bps)?;

    if target_width_bps == MAX_WIDTH_BPS {
        // r is unbounded; alignment clamps this to the usable limits
        return Ok(MAX_TICK - MIN_TICK);
    }

    let bps = target_width_bps as u128;
    let denominator = BPS_DENOMINATOR as u128;

    // r in Q112 stays below 2^127 for every bps < 10000, and
    // sqrt(r * 2^192) = sqrt(r * 2^112) * 2^40
    let ratio_x112 = ((denominator + bps) << 112) / (denominator - bps);
    let sqrt_ratio_x96 = sqrt(ratio_x112) << 40;

    let span = get_tick_at_sqrt_ratio(env, sqrt_ratio_x96)?;
    Ok((span + 1) / 2)
}

/// Realised width of `[tick_lower, tick_upper]` in basis points
///
/// 10000 * (pU - pL) / (pU + pL) with p = sqrt^2 / 2^96, all floored
pub fn width_bps_between(env: &Env, tick_lower: i32, tick_upper: i32) -> Result<u32, RangeError> {
    let sqrt_lower = U256::from_u128(env, get_sqrt_ratio_at_tick(env, tick_lower)?);
    let sqrt_upper = U256::from_u128(env, get_sqrt_ratio_at_tick(env, tick_upper)?);
    let q96 = U256::from_u128(env, Q96);

    let price_lower = sqrt_lower.mul(&sqrt_lower).div(&q96);
    let price_upper = sqrt_upper.mul(&sqrt_upper).div(&q96);
    if price_upper.le(&price_lower) {
        return Ok(0);
    }

    let width = U256::from_u32(env, BPS_DENOMINATOR)
        .mul(&price_upper.sub(&price_lower))
        .div(&price_upper.add(&price_lower));

    width
        .to_u128()
        .and_then(|w| u32::try_from(w).ok())
        .ok_or(RangeError::TickOutOfRange)
}

/// floor(target * 95 / 100) <= actual <= floor(target * 105 / 100)
pub fn width_within_tolerance(actual_width_bps: u32, target_width_bps: u32) -> bool {
    let target = target_width_bps as u64;
    let actual = actual_width_bps as u64;
    let tolerance = WIDTH_TOLERANCE_PERCENT as u64;

    let min = target * (100 - tolerance) / 100;
    let max = target * (100 + tolerance) / 100;
    actual >= min && actual <= max
}

/// Compute the aligned range for a width without enforcing the tolerance band
///
/// The returned record carries every intermediate value so that a rejected
/// attempt can be reproduced.
pub fn plan_range(
    env: &Env,
    current_tick: i32,
    tick_spacing: i32,
    target_width_bps: u32,
) -> Result<WidthRecord, RangeError> {
    validate_width(target_width_bps)?;
    if tick_spacing <= 0 {
        return Err(RangeError::InvalidTickSpacing);
    }
    if !(MIN_TICK..=MAX_TICK).contains(&current_tick) {
        return Err(RangeError::TickOutOfRange);
    }

    let half_range = half_range_ticks(env, target_width_bps)?;
    let raw_tick_lower = current_tick - half_range;
    let raw_tick_upper = current_tick + half_range;

    let tick_lower = align_tick(raw_tick_lower, tick_spacing, Rounding::Down)?;
    let tick_upper = align_tick(raw_tick_upper, tick_spacing, Rounding::Up)?;
    if tick_lower >= tick_upper {
        return Err(RangeError::TickOutOfRange);
    }

    let actual_width_bps = width_bps_between(env, tick_lower, tick_upper)?;

    Ok(WidthRecord {
        current_tick,
        raw_tick_lower,
        raw_tick_upper,
        tick_lower,
        tick_upper,
        actual_width_bps,
        target_width_bps,
    })
}

/// Accept a planned range only if its realised width is within tolerance
pub fn check_tolerance(record: &WidthRecord) -> Result<TickRange, RangeError> {
    if !width_within_tolerance(record.actual_width_bps, record.target_width_bps) {
        return Err(RangeError::WidthToleranceExceeded);
    }
    Ok(record.range())
}

/// Resolve the spacing-aligned tick range around `current_tick` whose width
/// matches `target_width_bps` within the tolerance band
pub fn resolve_range(
    env: &Env,
    current_tick: i32,
    tick_spacing: i32,
    target_width_bps: u32,
) -> Result<TickRange, RangeError> {
    let record = plan_range(env, current_tick, tick_spacing, target_width_bps)?;
    check_tolerance(&record)
}
