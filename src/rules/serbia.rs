//! Serbia: 9-digit PIB, ISO 7064 MOD 11,10 in its pass/fail form.

use crate::checksum::mod11_10_product;

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "RS") else {
        return false;
    };
    if body.len() != 9 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    (mod11_10_product(&d[..8]) + u32::from(d[8])) % 10 == 1
}
