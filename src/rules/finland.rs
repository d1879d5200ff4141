//! Finland: 8 digits, weighted mod 11 check digit.

use crate::checksum::weighted_sum;

use super::{digit_values, strip_prefix_ci};

const WEIGHTS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "FI") else {
        return false;
    };
    if body.len() != 8 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    let mut check = 11 - weighted_sum(&d[..7], &WEIGHTS) % 11;
    if check > 9 {
        check = 0;
    }
    check == u32::from(d[7])
}
