#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // A normalized amount must normalize to itself.
        if let Ok(amount) = qrbill::Amount::normalize(s) {
            let again = qrbill::Amount::normalize(amount.as_str())
                .expect("normalized amount must stay valid");
            assert_eq!(again, amount);
        }
    }
});
