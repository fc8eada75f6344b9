#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let Some(bytes) = inet6_core::address_to_bytes(text) else {
        return;
    };
    assert!(bytes.len() == 4 || bytes.len() == 16, "{text:?}");
    assert_eq!(bytes.len() == 4, inet6_core::is_ipv4(text));

    // The canonical text reparses to the same bytes and is a fixed point.
    let canonical = inet6_core::bytes_to_address(&bytes).expect("4 or 16 bytes format");
    let reparsed = inet6_core::address_to_bytes(&canonical);
    assert_eq!(reparsed.as_deref(), Some(bytes.as_slice()), "{canonical:?}");
    let again = reparsed.and_then(|b| inet6_core::bytes_to_address(&b));
    assert_eq!(again.as_deref(), Some(canonical.as_str()));
});
