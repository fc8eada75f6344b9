//! Colon-hex IPv6 text <-> 16-byte binary form.
//!
//! The parser is a single left-to-right scan that records at most one `::`
//! gap and expands it at the end. A dotted-quad tail is handed to the IPv4
//! parser and always ends the scan. The formatter compresses the longest
//! run of zero words (leftmost on ties) and renders IPv4-compatible and
//! IPv4-mapped addresses with a dotted-quad tail.

use super::v4::{IN_ADDR_SIZE, format_v4, parse_v4};
use crate::error::InetError;

/// Size of a binary IPv6 address.
pub const IN6_ADDR_SIZE: usize = 16;

const IN6_ADDR_NUM_WORDS: usize = IN6_ADDR_SIZE / 2;

/// Shortest colon-hex text (`::`).
const MIN_TEXT_LEN: usize = 2;
/// Eight full groups and seven separators.
const MAX_TEXT_LEN: usize = IN6_ADDR_NUM_WORDS * 4 + IN6_ADDR_NUM_WORDS - 1;

const MAX_DIGITS_IN_GROUP: u8 = 4;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses a colon-hex IPv6 address into 16 network-order bytes.
///
/// Supports:
/// - Full form (8 groups of 1-4 hex digits, either case)
/// - One `::` gap standing for one or more zero groups
/// - A trailing dotted-quad (e.g. `::ffff:192.168.1.2`)
///
/// Rejections are logged at `debug` level with the offending text.
pub fn parse_v6(text: &str) -> Result<[u8; IN6_ADDR_SIZE], InetError> {
    scan(text).inspect_err(|err| log::debug!("IPv6 ({text}): {err}"))
}

fn scan(text: &str) -> Result<[u8; IN6_ADDR_SIZE], InetError> {
    let src = text.as_bytes();
    if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&src.len()) {
        return Err(InetError::InvalidSize);
    }

    // Only `::` may open the address; skip its first colon so the second
    // one records the gap.
    let mut start = 0;
    if src[0] == b':' {
        if src.get(1) != Some(&b':') {
            return Err(InetError::InvalidLeadingColon);
        }
        start = 1;
    }

    let mut addr = [0u8; IN6_ADDR_SIZE];
    let mut dst: usize = 0;
    let mut gap: Option<usize> = None;
    // With no colon seen yet, an IPv4 tail is read from the second byte.
    let mut group_start = start + 1;
    let mut chars_in_group: u8 = 0;
    let mut group_value: u16 = 0;

    for (pos, &c) in src.iter().enumerate().skip(start) {
        match c {
            b':' => {
                group_start = pos + 1;

                if chars_in_group == 0 {
                    if gap.is_some() {
                        return Err(InetError::MultipleGaps);
                    }
                    gap = Some(dst);
                    continue;
                }

                if pos + 1 == src.len() {
                    return Err(InetError::TrailingColon);
                }
                if dst + 2 > IN6_ADDR_SIZE {
                    return Err(InetError::TooManyGroups);
                }

                addr[dst..dst + 2].copy_from_slice(&group_value.to_be_bytes());
                dst += 2;
                chars_in_group = 0;
                group_value = 0;
            }
            b'.' => {
                if dst + IN_ADDR_SIZE > IN6_ADDR_SIZE {
                    return Err(InetError::UnexpectedV4);
                }
                // `group_start` always follows an ASCII byte, so it is a
                // char boundary.
                let tail = parse_v4(&text[group_start..]).map_err(|_| InetError::InvalidV4Tail)?;
                addr[dst..dst + IN_ADDR_SIZE].copy_from_slice(&tail);
                dst += IN_ADDR_SIZE;
                chars_in_group = 0;
                break;
            }
            _ => {
                let digit = char::from(c)
                    .to_digit(16)
                    .ok_or(InetError::InvalidCharacter)?;
                if chars_in_group >= MAX_DIGITS_IN_GROUP {
                    return Err(InetError::TooManyDigits);
                }
                group_value = (group_value << 4) | digit as u16;
                chars_in_group += 1;
            }
        }
    }

    if chars_in_group > 0 {
        if dst + 2 > IN6_ADDR_SIZE {
            return Err(InetError::TooManyGroups);
        }
        addr[dst..dst + 2].copy_from_slice(&group_value.to_be_bytes());
        dst += 2;
    }

    if let Some(gap) = gap {
        if dst == IN6_ADDR_SIZE {
            return Err(InetError::NoRoomForGap);
        }
        // Slide everything written after the gap to the end of the
        // buffer and zero the hole it leaves behind.
        let tail_len = dst - gap;
        let tail_dst = IN6_ADDR_SIZE - tail_len;
        addr.copy_within(gap..dst, tail_dst);
        addr[gap..tail_dst].fill(0);
        dst = IN6_ADDR_SIZE;
    }

    if dst < IN6_ADDR_SIZE {
        return Err(InetError::TooFewGroups);
    }

    Ok(addr)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// A run of consecutive zero words, in word indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ZeroRun {
    start: usize,
    len: usize,
}

impl ZeroRun {
    /// Longest run of zero words; the first one found wins a tie.
    ///
    /// A single zero word is a run like any other.
    fn longest(words: &[u16; IN6_ADDR_NUM_WORDS]) -> Option<Self> {
        let mut best: Option<ZeroRun> = None;
        let mut current: Option<ZeroRun> = None;

        for (i, &word) in words.iter().enumerate() {
            if word == 0 {
                match current.as_mut() {
                    Some(run) => run.len += 1,
                    None => current = Some(ZeroRun { start: i, len: 1 }),
                }
            } else if let Some(run) = current.take() {
                best = Self::longer(best, run);
            }
        }
        if let Some(run) = current {
            best = Self::longer(best, run);
        }

        best
    }

    fn longer(best: Option<ZeroRun>, candidate: ZeroRun) -> Option<ZeroRun> {
        match best {
            Some(best) if best.len >= candidate.len => Some(best),
            _ => Some(candidate),
        }
    }

    /// Whether the run marks `::a.b.c.d` or `::ffff:a.b.c.d`.
    fn is_v4_prefix(self, words: &[u16; IN6_ADDR_NUM_WORDS]) -> bool {
        self.start == 0 && (self.len == 6 || (self.len == 5 && words[5] == 0xffff))
    }
}

/// Formats 16 bytes as compressed colon-hex text.
///
/// Groups are lower-case hex without leading zeros. The longest zero run
/// (leftmost on ties, single zero words included) becomes `::`.
/// IPv4-compatible (`::a.b.c.d`) and IPv4-mapped (`::ffff:a.b.c.d`)
/// addresses end in dotted-decimal.
#[must_use]
pub fn format_v6(addr: &[u8; IN6_ADDR_SIZE]) -> String {
    let mut words = [0u16; IN6_ADDR_NUM_WORDS];
    for (word, pair) in words.iter_mut().zip(addr.chunks_exact(2)) {
        *word = u16::from_be_bytes([pair[0], pair[1]]);
    }

    let gap = ZeroRun::longest(&words);

    let mut out = String::with_capacity(MAX_TEXT_LEN);
    let mut i = 0usize;
    while i < IN6_ADDR_NUM_WORDS {
        match gap {
            Some(run) if run.start == i => {
                if i == 0 {
                    out.push(':');
                }
                out.push(':');
                i += run.len;
                continue;
            }
            Some(run) if i == 6 && run.is_v4_prefix(&words) => {
                out.push_str(&format_v4(&[addr[12], addr[13], addr[14], addr[15]]));
                break;
            }
            _ => {}
        }

        out.push_str(&format!("{:x}", words[i]));
        if i != IN6_ADDR_NUM_WORDS - 1 {
            out.push(':');
        }
        i += 1;
    }

    out
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// True for `::a.b.c.d` addresses: 96 zero bits followed by an IPv4
/// address other than `0.0.0.0` and `0.0.0.1`.
#[must_use]
pub fn is_v4_compat(addr: &[u8; IN6_ADDR_SIZE]) -> bool {
    let v4 = u32::from_be_bytes([addr[12], addr[13], addr[14], addr[15]]);
    addr[..12].iter().all(|&b| b == 0) && v4 > 1
}

/// True for `::ffff:a.b.c.d` addresses: 80 zero bits, 16 one bits, then
/// an IPv4 address.
#[must_use]
pub fn is_v4_mapped(addr: &[u8; IN6_ADDR_SIZE]) -> bool {
    addr[..10].iter().all(|&b| b == 0) && addr[10] == 0xff && addr[11] == 0xff
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unhex(s: &str) -> [u8; IN6_ADDR_SIZE] {
        let mut out = [0u8; IN6_ADDR_SIZE];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap();
        }
        out
    }

    fn parsed(text: &str) -> [u8; IN6_ADDR_SIZE] {
        parse_v6(text).unwrap_or_else(|e| panic!("{text:?} rejected: {e}"))
    }

    // -- parse_v6 --

    #[test]
    fn parses_gap_positions() {
        let cases = [
            ("::", "00000000000000000000000000000000"),
            ("0::0", "00000000000000000000000000000000"),
            ("0::", "00000000000000000000000000000000"),
            ("::0", "00000000000000000000000000000000"),
            ("1::", "00010000000000000000000000000000"),
            ("::1", "00000000000000000000000000000001"),
            ("1::2", "00010000000000000000000000000002"),
            ("::2:3:4:5:6:7:8", "00000002000300040005000600070008"),
            ("1::3:4:5:6:7:8", "00010000000300040005000600070008"),
            ("1:2::4:5:6:7:8", "00010002000000040005000600070008"),
            ("1:2:3::5:6:7:8", "00010002000300000005000600070008"),
            ("1:2:3:4::6:7:8", "00010002000300040000000600070008"),
            ("1:2:3:4:5::7:8", "00010002000300040005000000070008"),
            ("1:2:3:4:5:6::8", "00010002000300040005000600000008"),
            ("1:2:3:4:5:6:7::", "00010002000300040005000600070000"),
            ("0000:0000::0000:0001", "00000000000000000000000000000001"),
        ];
        for (text, hex) in cases {
            assert_eq!(parsed(text), unhex(hex), "{text}");
        }
    }

    #[test]
    fn parses_full_form_any_case() {
        assert_eq!(
            parsed("1:2:3:4:5:6:7:8"),
            unhex("00010002000300040005000600070008")
        );
        assert_eq!(
            parsed("1234:5678:9abc:def0:4321:8765:cba9:0fed"),
            unhex("123456789abcdef043218765cba90fed")
        );
        assert_eq!(
            parsed("1020:3040:5060:7080:90A0:B0C0:D0E0:F010"),
            unhex("102030405060708090a0b0c0d0e0f010")
        );
        assert_eq!(parsed("::FfFf:C0a8:0102"), unhex("00000000000000000000ffffc0a80102"));
    }

    #[test]
    fn parses_ipv4_tail() {
        let cases = [
            ("::192.168.1.2", "000000000000000000000000c0a80102"),
            ("::ffff:192.168.1.2", "00000000000000000000ffffc0a80102"),
            ("::ABCD:1.2.3.4", "00000000000000000000abcd01020304"),
            ("::01.2.3.4", "00000000000000000000000001020304"),
            ("::1.2.3.00", "00000000000000000000000001020300"),
            ("::FFFF:1.2.03.4", "00000000000000000000ffff01020304"),
            ("1:2:3:4:5:6:1.2.3.4", "00010002000300040005000601020304"),
            ("1::5:6:7.8.9.10", "0001000000000000000500060708090a"),
        ];
        for (text, hex) in cases {
            assert_eq!(parsed(text), unhex(hex), "{text}");
        }
    }

    #[test]
    fn rejects_each_reason() {
        let cases = [
            ("1", InetError::InvalidSize),
            ("1111:2222:3333:4444:5555:6666:7777:8888:9", InetError::InvalidSize),
            (":1:2:3", InetError::InvalidLeadingColon),
            (":1::2:3", InetError::InvalidLeadingColon),
            ("1:2:3:", InetError::TrailingColon),
            ("1::2:3:", InetError::TrailingColon),
            (":::", InetError::MultipleGaps),
            ("1020::3040::5060", InetError::MultipleGaps),
            ("1:2:3:4:5:6:7:8:9", InetError::TooManyGroups),
            ("1:2:3:4:5:6:7:8:9:a", InetError::TooManyGroups),
            ("1:2:3:4:5:6:7:8:", InetError::TrailingColon),
            ("1:2:3:4", InetError::TooFewGroups),
            ("1:2:3:4:5:6:7:8::", InetError::NoRoomForGap),
            ("::1:2:3:4:5:6:7:8", InetError::NoRoomForGap),
            ("1:2:3:4:5:6:7:1.2.3.4", InetError::UnexpectedV4),
            ("::0x1.2.3.4", InetError::InvalidCharacter),
            ("::1.0x2.3.4", InetError::InvalidV4Tail),
            ("::a.b.c.d", InetError::InvalidV4Tail),
            ("::1.2.3.4:ABCD", InetError::InvalidV4Tail),
            ("::FFFF:a.b.c.d", InetError::InvalidV4Tail),
            ("::00001", InetError::TooManyDigits),
            ("::12345", InetError::TooManyDigits),
            ("::ABCZ", InetError::InvalidCharacter),
            ("mysql.com", InetError::InvalidCharacter),
            ("fe80::1%eth0", InetError::InvalidCharacter),
        ];
        for (text, expected) in cases {
            assert_eq!(parse_v6(text), Err(expected), "{text}");
        }
    }

    #[test]
    fn v4_tail_without_colon_skips_first_byte() {
        // The tail is `1.2.3.4`, which fills only 4 bytes.
        assert_eq!(parse_v6("a1.2.3.4"), Err(InetError::TooFewGroups));
        assert_eq!(parse_v6(".1.2.3.4"), Err(InetError::TooFewGroups));
        assert_eq!(parse_v6("1.2.3.4"), Err(InetError::InvalidV4Tail));
    }

    #[test]
    fn gap_needs_room_for_a_zero_group() {
        // Seven explicit groups leave exactly one group for the gap.
        assert!(parse_v6("1:2:3:4:5:6:7::").is_ok());
        assert!(parse_v6("::2:3:4:5:6:7:8").is_ok());
        // Eight explicit groups leave none.
        assert_eq!(
            parse_v6("1:2:3:4::5:6:7:8"),
            Err(InetError::NoRoomForGap)
        );
        assert_eq!(
            parse_v6("::ffff:1:2:3:4:5:1.2.3.4"),
            Err(InetError::NoRoomForGap)
        );
    }

    // -- format_v6 --

    #[test]
    fn formats_compressed() {
        let cases = [
            ("00000000000000000000000000000000", "::"),
            ("00000000000000000000000000000001", "::1"),
            ("00010000000000000000000000000000", "1::"),
            ("00010000000000000000000000000002", "1::2"),
            ("00010002000300040005000600070008", "1:2:3:4:5:6:7:8"),
            ("00000002000300040005000600070008", "::2:3:4:5:6:7:8"),
            ("00010002000300040005000600070000", "1:2:3:4:5:6:7::"),
            ("0102030405060708090a0b0c0d0e0f10", "102:304:506:708:90a:b0c:d0e:f10"),
            ("123456789abcdef043218765cba90fed", "1234:5678:9abc:def0:4321:8765:cba9:fed"),
            ("30313233343536373839616263646566", "3031:3233:3435:3637:3839:6162:6364:6566"),
        ];
        for (hex, text) in cases {
            assert_eq!(format_v6(&unhex(hex)), text, "{hex}");
        }
    }

    #[test]
    fn single_zero_word_is_compressed() {
        assert_eq!(
            format_v6(&unhex("00010000000200030004000500060007")),
            "1::2:3:4:5:6:7"
        );
    }

    #[test]
    fn longest_run_wins_and_leftmost_breaks_ties() {
        // 1:0:0:2:0:0:0:3 -> longer run at word 4.
        assert_eq!(
            format_v6(&unhex("00010000000000020000000000000003")),
            "1:0:0:2::3"
        );
        // 1:0:0:2:0:0:3:4 -> equal runs, first one wins.
        assert_eq!(
            format_v6(&unhex("00010000000000020000000000030004")),
            "1::2:0:0:3:4"
        );
        // 0:1:0:1:0:1:0:1 -> four single-word runs, first one wins.
        assert_eq!(
            format_v6(&unhex("00000001000000010000000100000001")),
            "::1:0:1:0:1:0:1"
        );
    }

    #[test]
    fn formats_ipv4_compatible_and_mapped() {
        assert_eq!(
            format_v6(&unhex("000000000000000000000000c0a80102")),
            "::192.168.1.2"
        );
        assert_eq!(
            format_v6(&unhex("00000000000000000000ffffc0a80102")),
            "::ffff:192.168.1.2"
        );
        assert_eq!(
            format_v6(&unhex("00000000000000000000ffff01020300")),
            "::ffff:1.2.3.0"
        );
        assert_eq!(
            format_v6(&unhex("00000000000000000000ffff00000000")),
            "::ffff:0.0.0.0"
        );
    }

    #[test]
    fn non_ffff_word_five_stays_hex() {
        assert_eq!(
            format_v6(&unhex("00000000000000000000abcdc0a80102")),
            "::abcd:c0a8:102"
        );
        assert_eq!(
            format_v6(&unhex("00000000000000000000fffec0a80102")),
            "::fffe:c0a8:102"
        );
    }

    #[test]
    fn compat_tail_depends_on_run_length() {
        // Run of 7 zero words: plain `::1`, never `::0.0.0.1`.
        assert_eq!(
            format_v6(&unhex("00000000000000000000000000000102")),
            "::102"
        );
        // Run of exactly 6 zero words: dotted tail even if it ends in zeros.
        assert_eq!(
            format_v6(&unhex("00000000000000000000000001020000")),
            "::1.2.0.0"
        );
    }

    #[test]
    fn zero_run_selection() {
        let words = [1, 0, 0, 2, 0, 0, 0, 3];
        assert_eq!(
            ZeroRun::longest(&words),
            Some(ZeroRun { start: 4, len: 3 })
        );
        assert_eq!(ZeroRun::longest(&[1, 2, 3, 4, 5, 6, 7, 8]), None);
        assert_eq!(
            ZeroRun::longest(&[0; 8]),
            Some(ZeroRun { start: 0, len: 8 })
        );
    }

    // -- predicates --

    #[test]
    fn compat_and_mapped_predicates() {
        assert!(is_v4_compat(&unhex("000000000000000000000000c0a80102")));
        assert!(!is_v4_compat(&unhex("00000000000000000000000000000001")));
        assert!(!is_v4_compat(&unhex("00000000000000000000000000000000")));
        assert!(!is_v4_compat(&unhex("00000000000000000000ffffc0a80102")));

        assert!(is_v4_mapped(&unhex("00000000000000000000ffffc0a80102")));
        assert!(is_v4_mapped(&unhex("00000000000000000000ffff00000000")));
        assert!(!is_v4_mapped(&unhex("000000000000000000000000c0a80102")));
        assert!(!is_v4_mapped(&unhex("00010000000000000000ffffc0a80102")));
    }

    #[test]
    fn format_then_parse_is_identity() {
        let cases = [
            "00000000000000000000000000000000",
            "00000000000000000000000000000001",
            "00000000000000000000ffffc0a80102",
            "000000000000000000000000c0a80102",
            "20010db885a3000000008a2e03707334",
            "fe800000000000000000000000000000",
            "ffffffffffffffffffffffffffffffff",
            "00010000000200030004000500060007",
        ];
        for hex in cases {
            let addr = unhex(hex);
            assert_eq!(parse_v6(&format_v6(&addr)), Ok(addr), "{hex}");
        }
    }
}
