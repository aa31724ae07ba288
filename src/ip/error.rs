use thiserror::Error;

use super::family::AddressFamily;

/// Errors produced by the address engine. All of these are local,
/// per-call outcomes; nothing in the engine panics or aborts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IpError {
    #[error("Invalid IP address: '{0}'")]
    InvalidAddress(String),

    #[error("Invalid CIDR prefix: '{0}'")]
    InvalidPrefix(String),

    #[error("CIDR prefix /{prefix} is out of range for {family} (maximum /{})", .family.bit_width())]
    FamilyMismatch { prefix: u8, family: AddressFamily },
}
