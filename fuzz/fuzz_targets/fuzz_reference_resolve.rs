#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Resolving the formatted form must not panic and must be stable.
        if let Ok(reference) = qrbill::Reference::resolve(s) {
            let again = qrbill::Reference::resolve(&reference.formatted())
                .expect("formatted reference must resolve");
            assert_eq!(again, reference);
        }
    }
});
