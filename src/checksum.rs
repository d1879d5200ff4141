//! Shared check digit arithmetic.
//!
//! Three algorithm families cover most jurisdictions: a weighted positional
//! sum reduced by a modulus, the Luhn-style double-and-fold sum, and the
//! ISO 7064 MOD 11,10 recurrence. Each country rule supplies its own weight
//! vector, modulus, and remainder remapping on top of these.

/// Sum of `digit * weight` over the paired digits and weights.
///
/// Extra digits or weights beyond the shorter slice are ignored, so a rule
/// can pass a full body slice against a truncated weight vector.
pub(crate) fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum()
}

/// Luhn-style sum: every digit at an alternating position is doubled, and
/// two-digit products are folded back to a single digit (`1 + p % 10`).
///
/// `double_even` selects which zero-based positions are doubled.
pub(crate) fn double_fold_sum(digits: &[u8], double_even: bool) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let factor = if (i % 2 == 0) == double_even { 2 } else { 1 };
            let p = u32::from(d) * factor;
            if p > 9 { 1 + p % 10 } else { p }
        })
        .sum()
}

/// ISO 7064 MOD 11,10 recurrence over the given digits.
///
/// Returns the final running product; the caller decides the check relation
/// (either `11 - product` as a check digit, or a pass/fail congruence).
pub(crate) fn mod11_10_product(digits: &[u8]) -> u32 {
    let mut product = 10;
    for &d in digits {
        let mut sum = (u32::from(d) + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (2 * sum) % 11;
    }
    product
}

/// Digits folded into an integer, most significant first.
pub(crate) fn to_number(digits: &[u8]) -> u64 {
    digits.iter().fold(0, |acc, &d| acc * 10 + u64::from(d))
}
