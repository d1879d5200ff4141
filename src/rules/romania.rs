//! Romania: 2 to 10 digits (no leading zero), with the weight vector
//! right-aligned to the variable-length body.

use super::{digit_values, strip_prefix_ci};

const WEIGHTS: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "RO") else {
        return false;
    };
    if !(2..=10).contains(&body.len()) || body[0] == b'0' {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    let weights = &WEIGHTS[10 - d.len()..];
    let total: u32 = d
        .iter()
        .zip(weights)
        .take(d.len() - 1)
        .map(|(&dig, &w)| u32::from(dig) * w)
        .sum();
    let mut check = (10 * total) % 11;
    if check == 10 {
        check = 0;
    }
    check == u32::from(d[d.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn valid_numbers() {
        for vat in ["RO18547290", "RO6529540"] {
            assert!(validate(vat), "{vat}");
        }
    }

    #[test]
    fn shortest_form_accepted() {
        assert!(validate("RO19"));
    }

    #[test]
    fn invalid_numbers() {
        for vat in ["RO26332986", "RO0529540", "RO1", "RO12345678901"] {
            assert!(!validate(vat), "{vat}");
        }
    }
}
