#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(id) = ustid::VatId::parse(s) {
            // Canonical forms must parse back to themselves.
            assert_eq!(ustid::VatId::parse(id.as_str()).as_ref(), Ok(&id));
        }
    }
});
