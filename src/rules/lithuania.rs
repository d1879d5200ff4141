//! Lithuania: 9-digit legal persons and 12-digit temporarily registered
//! taxpayers.
//!
//! Both forms fix a literal 1 just before the check digit and retry with a
//! shifted weight vector when the first pass leaves remainder 10.

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "LT") else {
        return false;
    };
    let Some(d) = digit_values(body) else {
        return false;
    };
    match d.len() {
        9 => validate_nine_digit(&d),
        12 => validate_twelve_digit(&d),
        _ => false,
    }
}

fn validate_nine_digit(d: &[u8]) -> bool {
    if d[7] != 1 {
        return false;
    }
    let mut total: u32 = d
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, &dig)| u32::from(dig) * (i as u32 + 1))
        .sum();
    if total % 11 == 10 {
        total = u32::from(d[7]);
        total += d
            .iter()
            .take(7)
            .enumerate()
            .map(|(i, &dig)| u32::from(dig) * (i as u32 + 3))
            .sum::<u32>();
    }
    total %= 11;
    if total == 10 {
        total = 0;
    }
    total == u32::from(d[8])
}

fn validate_twelve_digit(d: &[u8]) -> bool {
    if d[10] != 1 {
        return false;
    }
    let weighted = |shift: u32, bump_from: usize| -> u32 {
        d.iter()
            .take(11)
            .enumerate()
            .map(|(i, &dig)| {
                let bump = u32::from(i >= bump_from);
                u32::from(dig) * ((i as u32 + shift + bump) % 10)
            })
            .sum()
    };
    let mut total = weighted(1, 9);
    if total % 11 == 10 {
        total = weighted(3, 7);
    }
    total %= 11;
    if total == 10 {
        total = 0;
    }
    total == u32::from(d[11])
}
