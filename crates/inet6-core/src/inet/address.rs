//! Owned binary address: exactly 4 or 16 bytes.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::v4::{IN_ADDR_SIZE, format_v4};
use super::v6::{IN6_ADDR_SIZE, format_v6};
use crate::error::InetError;

/// A binary IPv4 or IPv6 address in network byte order.
///
/// No other length is representable, so any `Address` can be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    V4([u8; IN_ADDR_SIZE]),
    V6([u8; IN6_ADDR_SIZE]),
}

impl Address {
    /// The raw network-order bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Address::V4(octets) => octets.as_slice(),
            Address::V6(octets) => octets.as_slice(),
        }
    }

    /// Byte length: 4 or 16.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    #[must_use]
    pub fn is_v4(&self) -> bool {
        matches!(self, Address::V4(_))
    }

    #[must_use]
    pub fn is_v6(&self) -> bool {
        matches!(self, Address::V6(_))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = InetError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if let Ok(octets) = <[u8; IN_ADDR_SIZE]>::try_from(bytes) {
            Ok(Address::V4(octets))
        } else if let Ok(octets) = <[u8; IN6_ADDR_SIZE]>::try_from(bytes) {
            Ok(Address::V6(octets))
        } else {
            Err(InetError::InvalidLength)
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::V4(octets) => f.write_str(&format_v4(octets)),
            Address::V6(octets) => f.write_str(&format_v6(octets)),
        }
    }
}

impl FromStr for Address {
    type Err = InetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_address(s)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address::V4(ip.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address::V6(ip.octets())
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            Address::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }
}
