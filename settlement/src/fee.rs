//! Time-based fee calculation.
//!
//! All arithmetic is deterministic integer multiply/divide: rates are
//! `u128` raw units per quantum, elapsed time is `u64` milliseconds.

/// The fixed billing quantum. Rates are expressed in raw value units per
/// `QUANTUM_MS` milliseconds of streamed time.
pub const QUANTUM_MS: u64 = 10_000;

/// Fee for `elapsed_ms` of streaming at `rate` units per quantum,
/// truncated toward zero.
///
/// Sub-quantum remainders are not billed here; the engine keeps them
/// billable by not advancing the checkpoint clock on a zero-amount
/// settlement. Returns 0 on overflow — the engine uses
/// [`calc_fee_checked`] and surfaces overflow as an error instead.
pub fn calc_fee(elapsed_ms: u64, rate: u128) -> u128 {
    calc_fee_checked(elapsed_ms, rate).unwrap_or(0)
}

/// Checked variant: `None` if the intermediate product overflows `u128`.
pub fn calc_fee_checked(elapsed_ms: u64, rate: u128) -> Option<u128> {
    rate.checked_mul(elapsed_ms as u128)
        .map(|product| product / QUANTUM_MS as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_quantum() {
        assert_eq!(calc_fee(10_000, 1000), 1000);
    }

    #[test]
    fn half_quantum() {
        assert_eq!(calc_fee(5_000, 1000), 500);
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(calc_fee(9_999, 1000), 999);
    }

    #[test]
    fn zero_elapsed_is_free() {
        for rate in [1, 1000, u128::MAX] {
            assert_eq!(calc_fee(0, rate), 0);
        }
    }

    #[test]
    fn zero_rate_is_free() {
        for elapsed in [1, 10_000, u64::MAX] {
            assert_eq!(calc_fee(elapsed, 0), 0);
        }
    }

    #[test]
    fn sub_quantum_below_one_unit_rounds_to_zero() {
        // 9ms at 1 unit/quantum: 9 * 1 / 10000 = 0
        assert_eq!(calc_fee(9, 1), 0);
        // The first elapsed span that bills a single unit at rate 1.
        assert_eq!(calc_fee(QUANTUM_MS, 1), 1);
    }

    #[test]
    fn checked_detects_overflow() {
        assert!(calc_fee_checked(u64::MAX, u128::MAX).is_none());
        assert_eq!(calc_fee(u64::MAX, u128::MAX), 0);
    }

    #[test]
    fn checked_agrees_with_unchecked_in_range() {
        for (elapsed, rate) in [(12_000u64, 1000u128), (25_000, 7), (1, 1)] {
            assert_eq!(calc_fee_checked(elapsed, rate).unwrap(), calc_fee(elapsed, rate));
        }
    }
}
