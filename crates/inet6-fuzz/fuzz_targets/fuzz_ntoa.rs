#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let formatted = inet6_core::bytes_to_address(data);
    assert_eq!(formatted.is_some(), data.len() == 4 || data.len() == 16);

    if let Some(text) = formatted {
        assert_eq!(inet6_core::address_to_bytes(&text).as_deref(), Some(data), "{text:?}");
    }

    if data.len() == 16 {
        let compat = inet6_core::is_ipv4_compat(data);
        let mapped = inet6_core::is_ipv4_mapped(data);
        assert!(!(compat && mapped));
    }
});
