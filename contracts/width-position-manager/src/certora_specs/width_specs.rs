// ============================================================================
// WIDTH RESOLUTION SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Aligned ticks are multiples of the spacing and inside the tick domain
// 2. Lower bounds round down, upper bounds round up
// 3. A resolved range never violates the tolerance band
// 4. Wider targets never produce narrower half ranges
//
// ============================================================================

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;
use range_types::{Rounding, MAX_TICK, MAX_WIDTH_BPS, MIN_TICK};
use soroban_sdk::Env;

/// RULE: Sanity check - a range can be resolved at all
#[rule]
pub fn sanity_resolve_range(env: Env, current_tick: i32, tick_spacing: i32, target_width_bps: u32) {
    let resolved = range_math::resolve_range(&env, current_tick, tick_spacing, target_width_bps);
    cvlr_satisfy!(resolved.is_ok());
}

/// RULE: Aligned ticks sit on the grid and inside the domain
#[rule]
pub fn aligned_tick_on_grid(raw_tick: i32, tick_spacing: i32, round_up: bool) {
    cvlr_assume!(tick_spacing > 0 && tick_spacing <= 16384);
    cvlr_assume!(raw_tick >= 2 * MIN_TICK && raw_tick <= 2 * MAX_TICK);

    let rounding = if round_up { Rounding::Up } else { Rounding::Down };
    if let Ok(tick) = range_math::align_tick(raw_tick, tick_spacing, rounding) {
        cvlr_assert!(tick % tick_spacing == 0);
        cvlr_assert!(tick >= MIN_TICK && tick <= MAX_TICK);
    }
}

/// RULE: Inside the usable range, Down never moves up and Up never moves down
#[rule]
pub fn aligned_tick_rounds_outward(raw_tick: i32, tick_spacing: i32) {
    cvlr_assume!(tick_spacing > 0 && tick_spacing <= 16384);
    cvlr_assume!(raw_tick >= range_math::min_usable_tick(tick_spacing));
    cvlr_assume!(raw_tick <= range_math::max_usable_tick(tick_spacing));

    if let Ok(lower) = range_math::align_tick(raw_tick, tick_spacing, Rounding::Down) {
        cvlr_assert!(lower <= raw_tick);
        cvlr_assert!(raw_tick - lower < tick_spacing);
    }
    if let Ok(upper) = range_math::align_tick(raw_tick, tick_spacing, Rounding::Up) {
        cvlr_assert!(upper >= raw_tick);
        cvlr_assert!(upper - raw_tick < tick_spacing);
    }
}

/// RULE: Widths outside (0, MAX_WIDTH_BPS] are always rejected
#[rule]
pub fn invalid_width_rejected(env: Env, current_tick: i32, tick_spacing: i32, target_width_bps: u32) {
    cvlr_assume!(target_width_bps == 0 || target_width_bps > MAX_WIDTH_BPS);
    let resolved = range_math::resolve_range(&env, current_tick, tick_spacing, target_width_bps);
    cvlr_assert!(resolved.is_err());
}

/// RULE: A resolved range is ordered, aligned and within tolerance
#[rule]
pub fn resolved_range_within_tolerance(
    env: Env,
    current_tick: i32,
    tick_spacing: i32,
    target_width_bps: u32,
) {
    if let Ok(range) = range_math::resolve_range(&env, current_tick, tick_spacing, target_width_bps) {
        cvlr_assert!(range.tick_lower < range.tick_upper);
        cvlr_assert!(range.tick_lower % tick_spacing == 0);
        cvlr_assert!(range.tick_upper % tick_spacing == 0);

        let actual = range_math::width_bps_between(&env, range.tick_lower, range.tick_upper);
        if let Ok(actual) = actual {
            cvlr_assert!(range_math::width_within_tolerance(actual, target_width_bps));
        }
    }
}

/// RULE: Half range is non-decreasing in the target width
#[rule]
pub fn half_range_monotonic(env: Env, bps1: u32, bps2: u32) {
    cvlr_assume!(bps1 > 0 && bps1 < bps2 && bps2 <= MAX_WIDTH_BPS);

    let half1 = range_math::half_range_ticks(&env, bps1);
    let half2 = range_math::half_range_ticks(&env, bps2);
    if let (Ok(half1), Ok(half2)) = (half1, half2) {
        cvlr_assert!(half1 <= half2);
    }
}
