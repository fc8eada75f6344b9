//! Dotted-quad IPv4 text <-> 4-byte binary form.

use crate::error::InetError;

/// Size of a binary IPv4 address.
pub const IN_ADDR_SIZE: usize = 4;

/// Shortest dotted-quad text (`0.0.0.0`).
const MIN_TEXT_LEN: usize = 7;
/// Longest dotted-quad text (`255.255.255.255`).
const MAX_TEXT_LEN: usize = 15;

const MAX_DIGITS_IN_GROUP: u8 = 3;

/// Parses a dotted-quad IPv4 address into 4 network-order bytes.
///
/// Octets are plain decimal: leading zeros are accepted and never mean
/// octal, so `001.002.003.004` is `1.2.3.4`. Rejections are logged at
/// `debug` level with the offending text.
pub fn parse_v4(text: &str) -> Result<[u8; IN_ADDR_SIZE], InetError> {
    scan(text).inspect_err(|err| log::debug!("IPv4 ({text}): {err}"))
}

fn scan(text: &str) -> Result<[u8; IN_ADDR_SIZE], InetError> {
    let src = text.as_bytes();
    if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&src.len()) {
        return Err(InetError::InvalidSize);
    }

    let mut octets = [0u8; IN_ADDR_SIZE];
    let mut byte_value: u8 = 0;
    let mut chars_in_group: u8 = 0;
    let mut dot_count: usize = 0;

    for &c in src {
        match c {
            b'0'..=b'9' => {
                chars_in_group += 1;
                if chars_in_group > MAX_DIGITS_IN_GROUP {
                    return Err(InetError::TooManyDigits);
                }
                byte_value = byte_value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(c - b'0'))
                    .ok_or(InetError::ByteOverflow)?;
            }
            b'.' => {
                if chars_in_group == 0 {
                    return Err(InetError::EmptyGroup);
                }
                if dot_count == IN_ADDR_SIZE - 1 {
                    return Err(InetError::TooManyDots);
                }
                octets[dot_count] = byte_value;
                dot_count += 1;
                byte_value = 0;
                chars_in_group = 0;
            }
            _ => return Err(InetError::InvalidCharacter),
        }
    }

    if src.last() == Some(&b'.') {
        return Err(InetError::InvalidEnding);
    }
    if dot_count != IN_ADDR_SIZE - 1 {
        return Err(InetError::TooFewGroups);
    }

    octets[IN_ADDR_SIZE - 1] = byte_value;
    Ok(octets)
}

/// Formats 4 bytes as dotted-decimal text without leading zeros.
#[must_use]
pub fn format_v4(octets: &[u8; IN_ADDR_SIZE]) -> String {
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}
