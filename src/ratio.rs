//! Integer ratio arithmetic. Ratios are parts per million; no rounding
//! happens anywhere except in [`apply_ratio_ceiled`].

use multiversx_sc::api::ManagedTypeApi;
use multiversx_sc::types::BigUint;

/// 100%.
pub const RATIO_BASE: u32 = 1_000_000;

/// `ceil(value * ratio / RATIO_BASE)`.
pub fn apply_ratio_ceiled<M: ManagedTypeApi>(value: &BigUint<M>, ratio: u32) -> BigUint<M> {
    let product = value * &BigUint::from(ratio);
    let base = BigUint::from(RATIO_BASE);
    let quotient = &product / &base;
    let remainder = &product % &base;
    if remainder > 0u64 {
        quotient + 1u64
    } else {
        quotient
    }
}

/// `yes / (yes + no) > threshold`, cross-multiplied.
pub fn support_reached<M: ManagedTypeApi>(
    yes: &BigUint<M>,
    no: &BigUint<M>,
    support_threshold: u32,
) -> bool {
    let lhs = yes * &BigUint::from(RATIO_BASE - support_threshold);
    let rhs = no * &BigUint::from(support_threshold);
    lhs > rhs
}

/// Support holds even if every voting power unit that has not voted yet
/// (or abstained) ends up voting no.
pub fn support_reached_early<M: ManagedTypeApi>(
    yes: &BigUint<M>,
    abstain: &BigUint<M>,
    total_voting_power: &BigUint<M>,
    support_threshold: u32,
) -> bool {
    let counted = yes + abstain;
    let worst_case_no = if total_voting_power > &counted {
        total_voting_power - &counted
    } else {
        BigUint::zero()
    };
    support_reached(yes, &worst_case_no, support_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiversx_sc_scenario::api::StaticApi;

    fn big(value: u64) -> BigUint<StaticApi> {
        BigUint::from(value)
    }

    #[test]
    fn ceil_only_rounds_up_with_a_remainder() {
        assert_eq!(apply_ratio_ceiled(&big(10), 300_000), big(3));
        assert_eq!(apply_ratio_ceiled(&big(10), 300_001), big(4));
        assert_eq!(apply_ratio_ceiled(&big(0), 999_999), big(0));
        assert_eq!(apply_ratio_ceiled(&big(7), RATIO_BASE), big(7));
    }

    #[test]
    fn support_is_strictly_greater_than_threshold() {
        // 50% exactly is not enough at a 50% threshold
        assert!(!support_reached(&big(5), &big(5), 500_000));
        assert!(support_reached(&big(6), &big(5), 500_000));
        assert!(!support_reached(&big(0), &big(0), 0));
        assert!(support_reached(&big(1), &big(0), 0));
    }

    #[test]
    fn early_support_counts_missing_votes_as_no() {
        let total = big(100);
        assert!(!support_reached_early(&big(50), &big(0), &total, 500_000));
        assert!(support_reached_early(&big(51), &big(0), &total, 500_000));
        // abstentions shrink the worst case no side
        assert!(support_reached_early(&big(30), &big(45), &total, 500_000));
    }

    #[test]
    fn early_support_is_sharp_at_large_magnitudes() {
        let total = BigUint::<StaticApi>::from(10u64).pow(48);
        let delta = &total / &big(RATIO_BASE as u64);
        let largest = &total - &delta;
        assert!(!support_reached_early(&largest, &big(0), &total, 999_999));
        assert!(support_reached(&largest, &big(0), 999_999));

        let with_one_more = &largest + &big(1);
        assert!(support_reached_early(&with_one_more, &big(0), &total, 999_999));
    }
}
