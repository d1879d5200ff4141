//! Austria: `ATU` + 8 digits, Luhn-style fold with a +4 offset.

use crate::checksum::double_fold_sum;

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "ATU") else {
        return false;
    };
    if body.len() != 8 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    let total = double_fold_sum(&d[..7], false);
    let mut check = 10 - (total + 4) % 10;
    if check == 10 {
        check = 0;
    }
    check == u32::from(d[7])
}
