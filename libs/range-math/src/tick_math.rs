use range_types::{RangeError, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use soroban_sdk::{Env, U256};

/// sqrt(1.0001^-(2^i)) in Q128.128, for i = 0..20
///
/// Entry i is applied when bit i of |tick| is set. These values are shared
/// bit-for-bit with every consumer that verifies ticks, so they must never be
/// recomputed or rounded differently.
const SQRT_RATIO_LADDER: [u128; 20] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

// Q128 constant: 2^128 represented as U256
fn q128(env: &Env) -> U256 {
    U256::from_u128(env, 1u128 << 64).mul(&U256::from_u128(env, 1u128 << 64))
}

/// Calculate sqrt(1.0001^tick) * 2^96
///
/// The Q128.128 ratio is converted to Q64.96 rounding up, so a derived sqrt
/// price never understates the true value.
pub fn get_sqrt_ratio_at_tick(env: &Env, tick: i32) -> Result<u128, RangeError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(RangeError::TickOutOfRange);
    }

    let abs_tick = tick.unsigned_abs();

    // The ladder computes the ratio for -|tick|
    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from_u128(env, SQRT_RATIO_LADDER[0])
    } else {
        q128(env)
    };
    for (bit, factor) in SQRT_RATIO_LADDER.iter().enumerate().skip(1) {
        if abs_tick & (1u32 << bit) != 0 {
            ratio = mul_shift_128(env, &ratio, *factor);
        }
    }

    if tick > 0 {
        ratio = u256_max(env).div(&ratio);
    }

    // Q128.128 -> Q64.96, rounding up on any discarded bit
    let q32 = U256::from_u128(env, 1u128 << 32);
    let mut sqrt_ratio = ratio.div(&q32);
    if ratio.rem_euclid(&q32).gt(&U256::from_u32(env, 0)) {
        sqrt_ratio = sqrt_ratio.add(&U256::from_u32(env, 1));
    }

    sqrt_ratio.to_u128().ok_or(RangeError::TickOutOfRange)
}

/// Get the greatest tick whose sqrt ratio is at or below `sqrt_price_x96`
pub fn get_tick_at_sqrt_ratio(env: &Env, sqrt_price_x96: u128) -> Result<i32, RangeError> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        return Err(RangeError::SqrtPriceOutOfRange);
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_ratio_at_tick(env, mid)? <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Helper: multiply by u128 and right shift by 128 bits
fn mul_shift_128(env: &Env, x: &U256, y: u128) -> U256 {
    x.mul(&U256::from_u128(env, y)).div(&q128(env))
}

/// Helper: get U256 max value
fn u256_max(env: &Env) -> U256 {
    // U256 max = 2^256 - 1
    let high = U256::from_u128(env, u128::MAX);
    high.mul(&q128(env)).add(&U256::from_u128(env, u128::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use range_types::Q96;
    use soroban_sdk::Env;

    // === get_sqrt_ratio_at_tick tests ===

    #[test]
    fn test_get_sqrt_ratio_at_tick_zero() {
        let env = Env::default();
        assert_eq!(get_sqrt_ratio_at_tick(&env, 0), Ok(Q96));
    }

    #[test]
    fn test_known_tick_values() {
        let env = Env::default();
        // Reference values of the integer ladder; a floating-point
        // 1.0001^(tick/2) disagrees with these in the low digits
        let cases: [(i32, u128); 10] = [
            (1, 79232123823359799118286999568),
            (-1, 79224201403219477170569942574),
            (10, 79267784519130042428790663799),
            (-10, 79188560314459151373725315960),
            (500, 81233731461783161732293370115),
            (-500, 77272108795590369356373805297),
            (6931, 112040957517951813098925484553),
            (-6931, 56025063284388026574112267992),
            (100000, 11755562826496067164730007768450),
            (-100000, 533968626430936354154228408),
        ];
        for (tick, expected) in cases {
            assert_eq!(get_sqrt_ratio_at_tick(&env, tick), Ok(expected), "tick {}", tick);
        }
    }

    #[test]
    fn test_tick_bounds() {
        let env = Env::default();
        assert_eq!(get_sqrt_ratio_at_tick(&env, MIN_TICK), Ok(MIN_SQRT_RATIO));
        assert_eq!(get_sqrt_ratio_at_tick(&env, MAX_TICK), Ok(MAX_SQRT_RATIO));
        assert_eq!(
            get_sqrt_ratio_at_tick(&env, MAX_TICK - 1),
            Ok(340258959196860441002220642289651527916)
        );
    }

    #[test]
    fn test_get_sqrt_ratio_out_of_range() {
        let env = Env::default();
        assert_eq!(
            get_sqrt_ratio_at_tick(&env, MIN_TICK - 1),
            Err(RangeError::TickOutOfRange)
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(&env, MAX_TICK + 1),
            Err(RangeError::TickOutOfRange)
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(&env, i32::MIN),
            Err(RangeError::TickOutOfRange)
        );
    }

    #[test]
    fn test_get_sqrt_ratio_at_tick_monotonic() {
        let env = Env::default();
        env.cost_estimate().budget().reset_unlimited();

        let mut prev_sqrt = get_sqrt_ratio_at_tick(&env, -10000).unwrap();
        for tick in (-9999..=10000).step_by(100) {
            let sqrt = get_sqrt_ratio_at_tick(&env, tick).unwrap();
            assert!(sqrt > prev_sqrt, "sqrt_price should be monotonically increasing");
            prev_sqrt = sqrt;
        }

        // Adjacent ticks near both ends of the domain
        for tick in [MIN_TICK, -200001, -1, 0, 199999, MAX_TICK - 1] {
            let lower = get_sqrt_ratio_at_tick(&env, tick).unwrap();
            let upper = get_sqrt_ratio_at_tick(&env, tick + 1).unwrap();
            assert!(upper > lower, "tick {} not below tick {}", tick, tick + 1);
        }
    }

    // === get_tick_at_sqrt_ratio tests ===

    #[test]
    fn test_get_tick_at_sqrt_ratio_q96() {
        let env = Env::default();
        assert_eq!(get_tick_at_sqrt_ratio(&env, Q96), Ok(0));
        assert_eq!(get_tick_at_sqrt_ratio(&env, Q96 - 1), Ok(-1));
    }

    #[test]
    fn test_get_tick_at_sqrt_ratio_roundtrip() {
        let env = Env::default();
        env.cost_estimate().budget().reset_unlimited();

        for tick in [MIN_TICK, -100000, -10000, -1001, -1, 0, 1, 999, 10000, 100000, MAX_TICK - 1] {
            let sqrt_price = get_sqrt_ratio_at_tick(&env, tick).unwrap();
            assert_eq!(get_tick_at_sqrt_ratio(&env, sqrt_price), Ok(tick));
            // Anything strictly between two ticks floors to the lower one
            let next = get_sqrt_ratio_at_tick(&env, tick + 1).unwrap();
            assert_eq!(get_tick_at_sqrt_ratio(&env, next - 1), Ok(tick));
        }
    }

    #[test]
    fn test_get_tick_at_sqrt_ratio_bounds() {
        let env = Env::default();
        assert_eq!(get_tick_at_sqrt_ratio(&env, MIN_SQRT_RATIO), Ok(MIN_TICK));
        assert_eq!(
            get_tick_at_sqrt_ratio(&env, MAX_SQRT_RATIO - 1),
            Ok(MAX_TICK - 1)
        );
        assert_eq!(
            get_tick_at_sqrt_ratio(&env, MIN_SQRT_RATIO - 1),
            Err(RangeError::SqrtPriceOutOfRange)
        );
        // MAX_SQRT_RATIO is exclusive
        assert_eq!(
            get_tick_at_sqrt_ratio(&env, MAX_SQRT_RATIO),
            Err(RangeError::SqrtPriceOutOfRange)
        );
    }
}
