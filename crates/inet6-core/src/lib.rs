//! # inet6-core
//!
//! Safe Rust conversion between textual IP addresses and their binary
//! network-order form, with the exact acceptance rules of the
//! `INET6_ATON` / `INET6_NTOA` SQL functions.
//!
//! No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod error;
pub mod inet;

pub use error::InetError;
pub use inet::{
    Address, address_to_bytes, bytes_to_address, format_address, is_ipv4, is_ipv4_compat,
    is_ipv4_mapped, is_ipv6, parse_address,
};
