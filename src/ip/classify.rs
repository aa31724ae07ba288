use std::fmt;

use strum_macros::Display;

use super::address::IpAddress;

/// Legacy IPv4 class, decided by the leading octet. Historical only.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Ipv4Class {
    A,
    B,
    C,
    D,
    E,
    /// 0.x, 127.x, and 255.x sit outside the historical table.
    #[strum(serialize = "-")]
    Unclassified,
}

/// IPv6 scope label with its conventional prefix length.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Ipv6Scope {
    #[strum(serialize = "Multicast (/8)")]
    Multicast,
    #[strum(serialize = "Link-Local (/10)")]
    LinkLocal,
    #[strum(serialize = "Unique-Local (/7)")]
    UniqueLocal,
    #[strum(serialize = "Global (/3)")]
    Global,
    Other,
}

/// What an address is used for, across both families.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Private,
    Loopback,
    Multicast,
    Public,
    Unspecified,
    #[strum(serialize = "Link-Local")]
    LinkLocal,
    #[strum(serialize = "Unique-Local")]
    UniqueLocal,
    Documentation,
    #[strum(serialize = "Global-Unicast")]
    GlobalUnicast,
    Reserved,
}

/// Class label for either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    V4(Ipv4Class),
    V6(Ipv6Scope),
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(class) => write!(f, "{class}"),
            Self::V6(scope) => write!(f, "{scope}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub class: AddressClass,
    pub kind: AddressKind,
}

/// Classifies an address by the high bits of its decoded value, so the
/// result is independent of how the input text was compressed.
pub fn classify(address: IpAddress) -> Classification {
    match address {
        IpAddress::V4(value) => Classification {
            class: AddressClass::V4(ipv4_class(value)),
            kind: ipv4_kind(value),
        },
        IpAddress::V6(value) => Classification {
            class: AddressClass::V6(ipv6_scope(value)),
            kind: ipv6_kind(value),
        },
    }
}

fn ipv4_class(value: u32) -> Ipv4Class {
    match value >> 24 {
        1..=126 => Ipv4Class::A,
        128..=191 => Ipv4Class::B,
        192..=223 => Ipv4Class::C,
        224..=239 => Ipv4Class::D,
        240..=254 => Ipv4Class::E,
        _ => Ipv4Class::Unclassified,
    }
}

fn ipv4_kind(value: u32) -> AddressKind {
    if value >> 24 == 10 || value >> 20 == 0xac1 || value >> 16 == 0xc0a8 {
        AddressKind::Private
    } else if value >> 24 == 127 {
        AddressKind::Loopback
    } else if value >> 28 == 0xe {
        AddressKind::Multicast
    } else {
        AddressKind::Public
    }
}

fn ipv6_scope(value: u128) -> Ipv6Scope {
    if value >> 120 == 0xff {
        Ipv6Scope::Multicast
    } else if value >> 118 == 0x3fa {
        Ipv6Scope::LinkLocal
    } else if value >> 121 == 0x7e {
        Ipv6Scope::UniqueLocal
    } else if value >> 125 == 0b001 {
        Ipv6Scope::Global
    } else {
        Ipv6Scope::Other
    }
}

// The documentation prefix is inside 2000::/3, so it is tested first.
fn ipv6_kind(value: u128) -> AddressKind {
    if value == 1 {
        AddressKind::Loopback
    } else if value == 0 {
        AddressKind::Unspecified
    } else if value >> 120 == 0xff {
        AddressKind::Multicast
    } else if value >> 118 == 0x3fa {
        AddressKind::LinkLocal
    } else if value >> 121 == 0x7e {
        AddressKind::UniqueLocal
    } else if value >> 96 == 0x2001_0db8 {
        AddressKind::Documentation
    } else if value >> 125 == 0b001 {
        AddressKind::GlobalUnicast
    } else {
        AddressKind::Reserved
    }
}
