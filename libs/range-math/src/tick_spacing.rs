use range_types::{RangeError, Rounding, MAX_TICK, MIN_TICK};

/// Lowest multiple of `tick_spacing` inside the tick domain
pub fn min_usable_tick(tick_spacing: i32) -> i32 {
    (MIN_TICK / tick_spacing) * tick_spacing
}

/// Highest multiple of `tick_spacing` inside the tick domain
pub fn max_usable_tick(tick_spacing: i32) -> i32 {
    (MAX_TICK / tick_spacing) * tick_spacing
}

pub fn is_aligned(tick: i32, tick_spacing: i32) -> bool {
    tick_spacing > 0 && tick.rem_euclid(tick_spacing) == 0
}

/// Snap `raw_tick` onto the spacing grid, then clamp into the usable range
///
/// `Down` floors toward negative infinity and `Up` ceils toward positive
/// infinity, so negative ticks round the same direction as positive ones.
/// The clamp bounds are themselves multiples of the spacing, so the result is
/// always aligned.
pub fn align_tick(raw_tick: i32, tick_spacing: i32, rounding: Rounding) -> Result<i32, RangeError> {
    if tick_spacing <= 0 {
        return Err(RangeError::InvalidTickSpacing);
    }

    let floor = raw_tick.div_euclid(tick_spacing) * tick_spacing;
    let aligned = match rounding {
        Rounding::Down => floor,
        Rounding::Up if floor == raw_tick => floor,
        Rounding::Up => floor + tick_spacing,
    };

    Ok(aligned.clamp(min_usable_tick(tick_spacing), max_usable_tick(tick_spacing)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_ticks() {
        assert_eq!(min_usable_tick(1), MIN_TICK);
        assert_eq!(max_usable_tick(1), MAX_TICK);
        assert_eq!(min_usable_tick(10), -443630);
        assert_eq!(max_usable_tick(10), 443630);
        assert_eq!(min_usable_tick(60), -443580);
        assert_eq!(max_usable_tick(60), 443580);
        assert_eq!(max_usable_tick(200), 443600);
    }

    #[test]
    fn test_align_down_floors() {
        assert_eq!(align_tick(-250, 60, Rounding::Down), Ok(-300));
        assert_eq!(align_tick(250, 60, Rounding::Down), Ok(240));
        assert_eq!(align_tick(-1, 10, Rounding::Down), Ok(-10));
        assert_eq!(align_tick(0, 10, Rounding::Down), Ok(0));
    }

    #[test]
    fn test_align_up_ceils() {
        assert_eq!(align_tick(250, 60, Rounding::Up), Ok(300));
        assert_eq!(align_tick(-250, 60, Rounding::Up), Ok(-240));
        assert_eq!(align_tick(1, 10, Rounding::Up), Ok(10));
        assert_eq!(align_tick(-9, 10, Rounding::Up), Ok(0));
    }

    #[test]
    fn test_align_already_aligned_is_identity() {
        for tick in [-600, -60, 0, 60, 600] {
            assert_eq!(align_tick(tick, 60, Rounding::Down), Ok(tick));
            assert_eq!(align_tick(tick, 60, Rounding::Up), Ok(tick));
        }
    }

    #[test]
    fn test_align_clamps_to_usable_range() {
        assert_eq!(align_tick(MIN_TICK - 500, 60, Rounding::Down), Ok(-443580));
        assert_eq!(align_tick(MAX_TICK + 500, 60, Rounding::Up), Ok(443580));
        // Ceiling past the last usable multiple
        assert_eq!(align_tick(443590, 60, Rounding::Up), Ok(443580));
        // Floor past the first usable multiple
        assert_eq!(align_tick(-443590, 60, Rounding::Down), Ok(-443580));
    }

    #[test]
    fn test_align_result_is_aligned() {
        for raw in [-443700, -12345, -7, 0, 7, 12345, 443700] {
            for spacing in [1, 10, 60, 200] {
                for rounding in [Rounding::Down, Rounding::Up] {
                    let tick = align_tick(raw, spacing, rounding).unwrap();
                    assert!(is_aligned(tick, spacing));
                    assert!((MIN_TICK..=MAX_TICK).contains(&tick));
                }
            }
        }
    }

    #[test]
    fn test_invalid_spacing() {
        assert_eq!(align_tick(0, 0, Rounding::Down), Err(RangeError::InvalidTickSpacing));
        assert_eq!(align_tick(0, -10, Rounding::Up), Err(RangeError::InvalidTickSpacing));
        assert!(!is_aligned(0, 0));
    }
}
