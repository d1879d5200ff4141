//! Bulgaria: 9-digit legal entities and 10-digit personal numbers.
//!
//! The 9-digit form uses positional weights 1..8 with a fallback weight
//! vector when the first pass leaves remainder 10. The 10-digit form tries
//! the birth-date-encoded personal scheme first (months 1-12, plus the
//! 21-32 and 41-52 ranges used for pre-1900 and post-1999 births), then
//! two legal-entity weight vectors in turn.

use crate::checksum::weighted_sum;

use super::{digit_values, strip_prefix_ci};

const PERSONAL_WEIGHTS: [u32; 9] = [2, 4, 8, 5, 10, 9, 7, 3, 6];
const LEGAL_WEIGHTS: [u32; 9] = [21, 19, 17, 13, 11, 9, 7, 3, 1];
const LEGAL_FALLBACK_WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "BG") else {
        return false;
    };
    let Some(d) = digit_values(body) else {
        return false;
    };
    match d.len() {
        9 => validate_nine_digit(&d),
        10 => validate_ten_digit(&d),
        _ => false,
    }
}

fn positional_sum(d: &[u8], offset: u32) -> u32 {
    d.iter()
        .enumerate()
        .map(|(i, &dig)| u32::from(dig) * (i as u32 + offset))
        .sum()
}

fn validate_nine_digit(d: &[u8]) -> bool {
    let check = u32::from(d[8]);
    let total = positional_sum(&d[..8], 1) % 11;
    if total != 10 {
        return total == check;
    }

    let mut total = positional_sum(&d[..8], 3) % 11;
    if total == 10 {
        total = 0;
    }
    total == check
}

fn validate_ten_digit(d: &[u8]) -> bool {
    let check = u32::from(d[9]);

    if has_birth_date_shape(d) {
        let mut total = weighted_sum(&d[..9], &PERSONAL_WEIGHTS) % 11;
        if total == 10 {
            total = 0;
        }
        if total == check {
            return true;
        }
    }

    if weighted_sum(&d[..9], &LEGAL_WEIGHTS) % 10 == check {
        return true;
    }

    let mut total = 11 - weighted_sum(&d[..9], &LEGAL_FALLBACK_WEIGHTS) % 11;
    if total == 10 {
        return false;
    }
    if total == 11 {
        total = 0;
    }
    total == check
}

fn has_birth_date_shape(d: &[u8]) -> bool {
    if d[2] > 5 || d[4] > 3 {
        return false;
    }
    let month = u32::from(d[2]) * 10 + u32::from(d[3]);
    (1..13).contains(&month) || (21..33).contains(&month) || (41..53).contains(&month)
}
