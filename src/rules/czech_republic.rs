//! Czech Republic: four structurally distinct forms.
//!
//! Legal entities carry 8 digits with a mod 11 check digit. Individuals
//! come in three flavours: a 9-digit birth-number shape accepted on
//! structure alone, a 9-digit special series starting with 6 checked
//! through a remainder lookup table, and a 10-digit birth number whose
//! digit pairs and full value must both divide by 11.

use crate::checksum::to_number;

use super::{digit_values, strip_prefix_ci};

const SPECIAL_LOOKUP: [u32; 11] = [8, 7, 6, 5, 4, 3, 2, 1, 0, 9, 8];

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "CZ") else {
        return false;
    };
    if !(8..=13).contains(&body.len()) {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    match d.len() {
        8 => validate_legal_entity(&d),
        9 if is_birth_number_shape(&d) => true,
        9 if d[0] == 6 => validate_special_series(&d),
        10 => validate_ten_digit(&d),
        _ => false,
    }
}

fn descending_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, &dig)| u32::from(dig) * (8 - i as u32))
        .sum()
}

fn validate_legal_entity(d: &[u8]) -> bool {
    let total = descending_sum(&d[..7]);
    let check = match 11 - total % 11 {
        10 => 0,
        11 => 1,
        v => v,
    };
    check == u32::from(d[7])
}

// YYMMDD + 3-digit serial, with the month digit shifted for women (+50).
fn is_birth_number_shape(d: &[u8]) -> bool {
    d[0] <= 5 && matches!(d[2], 0 | 1 | 5 | 6) && d[4] <= 3
}

fn validate_special_series(d: &[u8]) -> bool {
    let total = descending_sum(&d[1..8]);
    let next_multiple = if total % 11 == 0 {
        total + 11
    } else {
        total.div_ceil(11) * 11
    };
    let pointer = next_multiple - total;
    SPECIAL_LOOKUP[(pointer - 1) as usize] == u32::from(d[8])
}

fn validate_ten_digit(d: &[u8]) -> bool {
    if !(matches!(d[2], 0..=3 | 5..=8) && d[4] <= 3) {
        return false;
    }
    let pair_sum: u64 = d.chunks_exact(2).map(to_number).sum();
    pair_sum % 11 == 0 && to_number(d) % 11 == 0
}
