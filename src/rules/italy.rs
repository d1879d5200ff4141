//! Italy: 11-digit Partita IVA.
//!
//! The first seven digits identify the taxpayer and must not be all zero;
//! digits 8-10 name the issuing tax office (1-201, or the special 888 and
//! 999 codes). The check digit is a Luhn-style fold over the first ten.

use crate::checksum::{double_fold_sum, to_number};

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "IT") else {
        return false;
    };
    if body.len() != 11 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    if to_number(&d[..7]) == 0 {
        return false;
    }
    let office = to_number(&d[7..10]);
    if (office == 0 || office > 201) && office != 888 && office != 999 {
        return false;
    }

    let mut check = 10 - double_fold_sum(&d[..10], false) % 10;
    if check > 9 {
        check = 0;
    }
    check == u32::from(d[10])
}
