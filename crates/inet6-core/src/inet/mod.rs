//! IPv6-capable address conversion.
//!
//! Converts between textual addresses (dotted-quad IPv4, colon-hex IPv6
//! with optional dotted-quad tail) and their 4- or 16-byte network-order
//! binary forms, following the `INET6_ATON` / `INET6_NTOA` rules of the
//! MySQL server. All logic is pure safe Rust with no I/O.
//!
//! Rejections are reported as [`InetError`] by the `Result` forms and as
//! `None` by [`address_to_bytes`] / [`bytes_to_address`]. Each rejection is
//! also logged through the `log` facade at `debug` level.

mod address;
pub mod v4;
pub mod v6;

pub use address::Address;
pub use v4::{IN_ADDR_SIZE, format_v4, parse_v4};
pub use v6::{IN6_ADDR_SIZE, format_v6, parse_v6};

use crate::error::InetError;

// ---------------------------------------------------------------------------
// Text -> binary
// ---------------------------------------------------------------------------

/// Parses IPv4 or IPv6 text, trying IPv4 first.
pub fn parse_address(text: &str) -> Result<Address, InetError> {
    if let Ok(octets) = parse_v4(text) {
        return Ok(Address::V4(octets));
    }
    if let Ok(octets) = parse_v6(text) {
        return Ok(Address::V6(octets));
    }
    log::debug!("inet6_aton ({text}): {}", InetError::NotAnAddress);
    Err(InetError::NotAnAddress)
}

/// Converts an address string to its binary form (`INET6_ATON`).
///
/// Returns 4 bytes for IPv4 text, 16 bytes for IPv6 text, and `None` for
/// anything else.
#[must_use]
pub fn address_to_bytes(text: &str) -> Option<Vec<u8>> {
    parse_address(text).ok().map(|addr| addr.to_vec())
}

// ---------------------------------------------------------------------------
// Binary -> text
// ---------------------------------------------------------------------------

/// Formats a 4- or 16-byte address, dispatching on length.
pub fn format_address(bytes: &[u8]) -> Result<String, InetError> {
    Address::try_from(bytes)
        .map(|addr| addr.to_string())
        .inspect_err(|err| log::debug!("inet6_ntoa ({} bytes): {err}", bytes.len()))
}

/// Converts a binary address to text (`INET6_NTOA`).
///
/// Returns `None` unless `bytes` is exactly 4 or 16 bytes long.
#[must_use]
pub fn bytes_to_address(bytes: &[u8]) -> Option<String> {
    format_address(bytes).ok()
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// True when `text` is a valid dotted-quad IPv4 address (`IS_IPV4`).
#[must_use]
pub fn is_ipv4(text: &str) -> bool {
    parse_v4(text).is_ok()
}

/// True when `text` is a valid colon-hex IPv6 address (`IS_IPV6`).
#[must_use]
pub fn is_ipv6(text: &str) -> bool {
    parse_v6(text).is_ok()
}

/// True for a 16-byte IPv4-compatible address (`IS_IPV4_COMPAT`).
#[must_use]
pub fn is_ipv4_compat(bytes: &[u8]) -> bool {
    <&[u8; IN6_ADDR_SIZE]>::try_from(bytes).is_ok_and(v6::is_v4_compat)
}

/// True for a 16-byte IPv4-mapped address (`IS_IPV4_MAPPED`).
#[must_use]
pub fn is_ipv4_mapped(bytes: &[u8]) -> bool {
    <&[u8; IN6_ADDR_SIZE]>::try_from(bytes).is_ok_and(v6::is_v4_mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unhex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    // -- address_to_bytes --

    #[test]
    fn aton_prefers_ipv4() {
        assert_eq!(address_to_bytes("0.0.0.0"), Some(vec![0, 0, 0, 0]));
        assert_eq!(
            address_to_bytes("255.255.255.255"),
            Some(vec![0xff, 0xff, 0xff, 0xff])
        );
        assert_eq!(address_to_bytes("1.2.3.4").map(|b| b.len()), Some(4));
    }

    #[test]
    fn aton_falls_back_to_ipv6() {
        assert_eq!(
            address_to_bytes("::").map(|b| hex(&b)).as_deref(),
            Some("00000000000000000000000000000000")
        );
        assert_eq!(
            address_to_bytes("::192.168.1.2").map(|b| hex(&b)).as_deref(),
            Some("000000000000000000000000c0a80102")
        );
        assert_eq!(
            address_to_bytes("1020:3040:5060:7080:90A0:B0C0:D0E0:F010").map(|b| b.len()),
            Some(16)
        );
    }

    #[test]
    fn aton_rejects_everything_else() {
        let rejected = [
            "",
            "1.2.3",
            "1.2.3.",
            "1..3.4",
            "-1.2.3.4",
            "1.2.3.256",
            "1.2.3.4.5",
            "0001.2.3.4",
            "0x1.2.3.4",
            "a.2.3.4",
            "1.2.3.4:80",
            "1.2.3.4/32",
            "mysql.com",
            "2014-02-28 09:00:00",
            ":::",
            ":1:2:3",
            "1:2:3:",
            ":1::2:3",
            "1::2:3:",
            "::00001",
            "::00001:2",
            "::12345",
            "1020::3040::5060",
            "::ABCZ",
            "::0x1.2.3.4",
            "::1.0x2.3.4",
            "::a.b.c.d",
            "::FFFF:0x1.2.3.4",
            "::FFFF:1.0x2.3.4",
            "::FFFF:a.b.c.d",
            "::1.2.3.4:ABCD",
            "1234",
            "0123456789abcdef",
        ];
        for text in rejected {
            assert_eq!(address_to_bytes(text), None, "{text:?}");
            assert_eq!(parse_address(text), Err(InetError::NotAnAddress), "{text:?}");
        }
    }

    // -- bytes_to_address --

    #[test]
    fn ntoa_dispatches_on_length() {
        assert_eq!(bytes_to_address(&unhex("c0a80102")).as_deref(), Some("192.168.1.2"));
        assert_eq!(
            bytes_to_address(&unhex("0102030405060708090a0b0c0d0e0f10")).as_deref(),
            Some("102:304:506:708:90a:b0c:d0e:f10")
        );
        assert_eq!(bytes_to_address(b"1234").as_deref(), Some("49.50.51.52"));
        assert_eq!(
            bytes_to_address(b"0123456789abcdef").as_deref(),
            Some("3031:3233:3435:3637:3839:6162:6364:6566")
        );
    }

    #[test]
    fn ntoa_rejects_other_lengths() {
        for hex in [
            "",
            "c0a801",
            "c0a8010203",
            "0102030405060708090a0b0c0d0e0f",
            "0102030405060708090a0b0c0d0e0f1011",
        ] {
            assert_eq!(bytes_to_address(&unhex(hex)), None, "{hex}");
            assert_eq!(format_address(&unhex(hex)), Err(InetError::InvalidLength));
        }
    }

    // -- predicates --

    #[test]
    fn text_predicates() {
        assert!(is_ipv4("10.0.5.9"));
        assert!(!is_ipv4("10.0.5.256"));
        assert!(!is_ipv4("::1"));
        assert!(is_ipv6("10::a"));
        assert!(is_ipv6("::10.0.5.9"));
        assert!(!is_ipv6("10.0.5.9"));
        assert!(!is_ipv6("1020::3040::5060"));
    }

    #[test]
    fn byte_predicates_require_16_bytes() {
        let compat = address_to_bytes("::10.0.5.9").unwrap();
        let mapped = address_to_bytes("::ffff:10.0.5.9").unwrap();
        assert!(is_ipv4_compat(&compat));
        assert!(!is_ipv4_mapped(&compat));
        assert!(is_ipv4_mapped(&mapped));
        assert!(!is_ipv4_compat(&mapped));
        assert!(!is_ipv4_compat(&[10, 0, 5, 9]));
        assert!(!is_ipv4_mapped(&[10, 0, 5, 9]));
        assert!(!is_ipv4_mapped(&mapped[..15]));
    }
}
