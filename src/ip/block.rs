use std::fmt;

use num_traits::{One, PrimInt};
use serde::{Serialize, Serializer};

use super::{address::IpAddress, error::IpError, mask, prefix::PrefixLength};

/// Decimal expansion of 2^128, the one block size `u128` cannot hold.
const FULL_IPV6_SPACE: &str = "340282366920938463463374607431768211456";

/// Total number of addresses in a block: `2^host_bits`. Stored as the
/// exponent so the full IPv6 space still renders exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressCount {
    host_bits: u8,
}

impl AddressCount {
    const fn new(host_bits: u8) -> Self {
        Self { host_bits }
    }

    /// The exact count, when it fits a native integer. `None` only for
    /// the 128-host-bit block.
    pub const fn value(self) -> Option<u128> {
        if self.host_bits == 128 {
            None
        } else {
            Some(1u128 << self.host_bits)
        }
    }
}

impl fmt::Display for AddressCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(count) => write!(f, "{count}"),
            None => f.write_str(FULL_IPV6_SPACE),
        }
    }
}

impl Serialize for AddressCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Derived properties of an (address, prefix) block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkBlock {
    pub address: IpAddress,
    pub prefix: PrefixLength,
    pub mask: IpAddress,
    pub network: IpAddress,
    pub broadcast: IpAddress,
    pub first_usable: IpAddress,
    pub last_usable: IpAddress,
    pub address_count: AddressCount,
}

impl NetworkBlock {
    /// Derives the block around `address`. The prefix must have been
    /// validated against the same family as the address.
    pub fn compute(address: IpAddress, prefix: PrefixLength) -> Result<Self, IpError> {
        if prefix.family() != address.family() {
            return Err(IpError::FamilyMismatch {
                prefix: prefix.length(),
                family: address.family(),
            });
        }

        let block = match address {
            IpAddress::V4(value) => derive_block(value, prefix, IpAddress::V4),
            IpAddress::V6(value) => derive_block(value, prefix, IpAddress::V6),
        };

        Ok(block)
    }

    /// True when the queried address is the network address of its block.
    pub fn is_network_address(&self) -> bool {
        self.address == self.network
    }

    /// True when the queried address is the broadcast address of its block.
    pub fn is_broadcast_address(&self) -> bool {
        self.address == self.broadcast
    }
}

/// The family-independent arithmetic. A single-address block reports the
/// address itself as both usable endpoints; every other prefix uses
/// `network + 1` / `broadcast - 1` unconditionally, so a /31 or /127
/// reports its two endpoints crossed.
fn derive_block<R>(value: R, prefix: PrefixLength, wrap: impl Fn(R) -> IpAddress) -> NetworkBlock
where
    R: PrimInt + One,
{
    let mask = mask::bits::<R>(prefix.length());
    let network = value & mask;
    let broadcast = network | !mask;

    let (first_usable, last_usable) = if prefix.is_single_address() {
        (value, value)
    } else {
        (network + R::one(), broadcast - R::one())
    };

    NetworkBlock {
        address: wrap(value),
        prefix,
        mask: wrap(mask),
        network: wrap(network),
        broadcast: wrap(broadcast),
        first_usable: wrap(first_usable),
        last_usable: wrap(last_usable),
        address_count: AddressCount::new(prefix.host_bits()),
    }
}
