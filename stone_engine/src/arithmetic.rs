/// Stone Engine v1 — Arithmetic Primitives
///
/// All stone values: u64. Digit counts: u32.
/// No float. No string round-tripping.

/// Factor applied to stones with an odd, nonzero digit count.
pub const STONE_MULTIPLIER: u64 = 2024;

/// Number of decimal digits in `v`, by repeated division by 10.
/// `0` has one digit.
pub fn digit_count(v: u64) -> u32 {
    if v == 0 {
        return 1;
    }
    let mut n = v;
    let mut count = 0;
    while n > 0 {
        count += 1;
        n /= 10;
    }
    count
}

/// `10^exp`. Panics on u64 overflow.
pub fn pow10(exp: u32) -> u64 {
    match 10u64.checked_pow(exp) {
        Some(result) => result,
        None => panic!("Overflow: 10^{} overflows u64", exp),
    }
}

/// Split `v` into its left and right decimal halves.
///
/// `digits` must be the (even) digit count of `v`. The right half keeps
/// no leading zeros: `1005` splits into `(10, 5)`.
pub fn split_digits(v: u64, digits: u32) -> (u64, u64) {
    let divisor = pow10(digits / 2);
    (v / divisor, v % divisor)
}

/// Multiply rule. Wraps modulo 2^64 on overflow; the blink loop never aborts.
pub fn multiply_stone(v: u64) -> u64 {
    v.wrapping_mul(STONE_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(7), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(253000), 6);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_split_digits() {
        assert_eq!(split_digits(1234, 4), (12, 34));
        assert_eq!(split_digits(1005, 4), (10, 5));
        assert_eq!(split_digits(1000, 4), (10, 0));
        assert_eq!(split_digits(17, 2), (1, 7));
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(3), 1000);
        assert_eq!(pow10(19), 10_000_000_000_000_000_000);
    }

    #[test]
    #[should_panic(expected = "Overflow")]
    fn test_pow10_overflow() {
        pow10(20);
    }

    #[test]
    fn test_multiply_stone() {
        assert_eq!(multiply_stone(125), 253000);
        assert_eq!(multiply_stone(1), STONE_MULTIPLIER);
    }

    #[test]
    fn test_multiply_stone_wraps() {
        // 10^16 * 2024 = 20_240_000_000_000_000_000, minus 2^64
        assert_eq!(multiply_stone(10_000_000_000_000_000), 1_793_255_926_290_448_384);
        assert_eq!(multiply_stone(u64::MAX), u64::MAX.wrapping_mul(2024));
    }
}
