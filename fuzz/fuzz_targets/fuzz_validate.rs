#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; a false result is fine, a panic is a bug.
        let _ = ustid::validate_vat_number(s);
    }
});
