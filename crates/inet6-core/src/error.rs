//! Rejection reasons for address conversion.

use thiserror::Error;

/// Why a textual or binary address was rejected.
///
/// Every variant is a permanent, deterministic outcome for the input that
/// produced it. The `Display` text is a short diagnostic reason and carries
/// no contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InetError {
    /// Text length is outside the range the grammar can produce.
    #[error("Invalid size")]
    InvalidSize,
    /// A character outside the grammar's alphabet.
    #[error("Invalid character")]
    InvalidCharacter,
    /// IPv6 text starting with `:x` instead of `::`.
    #[error("Can not start with :x")]
    InvalidLeadingColon,
    /// IPv6 text ending in a single `:` after a group.
    #[error("Trailing colon")]
    TrailingColon,
    /// More than one `::` in IPv6 text.
    #[error("Too many gaps(::)")]
    MultipleGaps,
    /// More than eight 16-bit groups.
    #[error("Too many groups")]
    TooManyGroups,
    /// Fewer groups than a complete address needs.
    #[error("Too few groups")]
    TooFewGroups,
    /// `::` present although the explicit groups already fill 16 bytes.
    #[error("No room for a gap (::)")]
    NoRoomForGap,
    /// Dotted-quad tail where fewer than 4 bytes remain.
    #[error("Unexpected IPv4-part")]
    UnexpectedV4,
    /// Dotted-quad tail that is not a valid IPv4 address.
    #[error("Invalid IPv4-part")]
    InvalidV4Tail,
    /// Dot with no digits before it.
    #[error("Too few characters in a group")]
    EmptyGroup,
    /// More than three dots.
    #[error("Too many dots")]
    TooManyDots,
    /// Too many digits in one group (3 decimal, 4 hex).
    #[error("Too many digits in a group")]
    TooManyDigits,
    /// Decimal group above 255.
    #[error("Invalid byte value")]
    ByteOverflow,
    /// Dotted-quad ending in `.`.
    #[error("Invalid ending")]
    InvalidEnding,
    /// Neither the IPv4 nor the IPv6 grammar accepts the text.
    #[error("Not an IPv4 or IPv6 address")]
    NotAnAddress,
    /// Binary address is neither 4 nor 16 bytes long.
    #[error("4 or 16 bytes expected")]
    InvalidLength,
}

impl InetError {
    /// Every error kind, in declaration order.
    pub const ALL: [InetError; 17] = [
        InetError::InvalidSize,
        InetError::InvalidCharacter,
        InetError::InvalidLeadingColon,
        InetError::TrailingColon,
        InetError::MultipleGaps,
        InetError::TooManyGroups,
        InetError::TooFewGroups,
        InetError::NoRoomForGap,
        InetError::UnexpectedV4,
        InetError::InvalidV4Tail,
        InetError::EmptyGroup,
        InetError::TooManyDots,
        InetError::TooManyDigits,
        InetError::ByteOverflow,
        InetError::InvalidEnding,
        InetError::NotAnAddress,
        InetError::InvalidLength,
    ];

    /// Stable identifier for the kind, as used in fixture files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            InetError::InvalidSize => "InvalidSize",
            InetError::InvalidCharacter => "InvalidCharacter",
            InetError::InvalidLeadingColon => "InvalidLeadingColon",
            InetError::TrailingColon => "TrailingColon",
            InetError::MultipleGaps => "MultipleGaps",
            InetError::TooManyGroups => "TooManyGroups",
            InetError::TooFewGroups => "TooFewGroups",
            InetError::NoRoomForGap => "NoRoomForGap",
            InetError::UnexpectedV4 => "UnexpectedV4",
            InetError::InvalidV4Tail => "InvalidV4Tail",
            InetError::EmptyGroup => "EmptyGroup",
            InetError::TooManyDots => "TooManyDots",
            InetError::TooManyDigits => "TooManyDigits",
            InetError::ByteOverflow => "ByteOverflow",
            InetError::InvalidEnding => "InvalidEnding",
            InetError::NotAnAddress => "NotAnAddress",
            InetError::InvalidLength => "InvalidLength",
        }
    }

    /// Looks up a kind by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip_through_lookup() {
        for kind in InetError::ALL {
            assert_eq!(InetError::from_name(kind.name()), Some(kind));
        }
        assert_eq!(InetError::from_name("Bogus"), None);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = InetError::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), InetError::ALL.len());
    }

    #[test]
    fn display_is_short_reason() {
        assert_eq!(InetError::MultipleGaps.to_string(), "Too many gaps(::)");
        assert_eq!(InetError::InvalidLength.to_string(), "4 or 16 bytes expected");
    }
}
