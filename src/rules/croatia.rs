//! Croatia: 11-digit OIB, ISO 7064 MOD 11,10 in its pass/fail form.

use crate::checksum::mod11_10_product;

use super::{digit_values, strip_prefix_ci};

pub(crate) fn validate(vat: &str) -> bool {
    let Some(body) = strip_prefix_ci(vat, "HR") else {
        return false;
    };
    if body.len() != 11 {
        return false;
    }
    let Some(d) = digit_values(body) else {
        return false;
    };

    (mod11_10_product(&d[..10]) + u32::from(d[10])) % 10 == 1
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn valid_numbers() {
        for vat in ["HR33392005961", "HR12345678903", "HR24595836665"] {
            assert!(validate(vat), "{vat}");
        }
    }

    #[test]
    fn invalid_numbers() {
        for vat in ["HR33392005962", "HR3339200596", "HR333920059611"] {
            assert!(!validate(vat), "{vat}");
        }
    }
}
