//! Poland: 10-digit NIP, weighted mod 11.

use crate::checksum::weighted_sum;

use super::{digit_values, strip_prefix_ci};

const WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "PL") else {
        return false;
    };
    if body.len() != 10 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    let mut check = weighted_sum(&d[..9], &WEIGHTS) % 11;
    if check > 9 {
        check = 0;
    }
    check == u32::from(d[9])
}
