use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use super::{error::IpError, family::AddressFamily, validate};

/// A decoded IP address: the family tag plus the big-endian integer
/// value. The integer is the single source of truth; the canonical text
/// form is recomputed from it on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpAddress {
    V4(u32),
    V6(u128),
}

impl IpAddress {
    pub const fn family(self) -> AddressFamily {
        match self {
            Self::V4(_) => AddressFamily::V4,
            Self::V6(_) => AddressFamily::V6,
        }
    }
}

impl FromStr for IpAddress {
    type Err = IpError;

    /// Tries the IPv4 grammar first, then IPv6.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if let Some(octets) = validate::ipv4_octets(text) {
            return Ok(Self::V4(u32::from_be_bytes(octets)));
        }

        if let Some(hextets) = validate::ipv6_hextets(text) {
            let value = hextets
                .iter()
                .fold(0u128, |bits, hextet| (bits << 16) | u128::from(*hextet));
            return Ok(Self::V6(value));
        }

        Err(IpError::InvalidAddress(text.to_string()))
    }
}

impl fmt::Display for IpAddress {
    /// IPv4 renders as dotted decimal; IPv6 as eight fully expanded
    /// lowercase hextets, no `::` compression.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::V4(value) => {
                let [a, b, c, d] = value.to_be_bytes();
                write!(f, "{a}.{b}.{c}.{d}")
            }
            Self::V6(value) => {
                for index in (0..8).rev() {
                    let hextet = (value >> (index * 16)) & 0xffff;
                    if index < 7 {
                        write!(f, ":")?;
                    }
                    write!(f, "{hextet:04x}")?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for IpAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4_value() {
        assert_eq!("10.0.0.5".parse(), Ok(IpAddress::V4(0x0a00_0005)));
        assert_eq!("255.255.255.255".parse(), Ok(IpAddress::V4(u32::MAX)));
        assert_eq!("0.0.0.0".parse(), Ok(IpAddress::V4(0)));
    }

    #[test]
    fn test_parse_ipv6_value() {
        assert_eq!(
            "2001:db8::1".parse(),
            Ok(IpAddress::V6(0x2001_0db8_0000_0000_0000_0000_0000_0001))
        );
        assert_eq!("::".parse(), Ok(IpAddress::V6(0)));
        assert_eq!("::1".parse(), Ok(IpAddress::V6(1)));
        assert_eq!(
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff".parse(),
            Ok(IpAddress::V6(u128::MAX))
        );
    }

    #[test]
    fn test_parse_tries_ipv4_first() {
        let address: IpAddress = "192.168.1.1".parse().unwrap();
        assert_eq!(address.family(), AddressFamily::V4);

        let address: IpAddress = "fe80::1".parse().unwrap();
        assert_eq!(address.family(), AddressFamily::V6);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "not-an-ip", "10.0.0", "1::2::3", "10.0.0.5/24"] {
            assert_eq!(
                text.parse::<IpAddress>(),
                Err(IpError::InvalidAddress(text.to_string())),
                "Should fail to parse: {text}"
            );
        }
    }

    #[test]
    fn test_canonical_ipv4_display() {
        let address: IpAddress = "010.001.000.005".parse().unwrap();
        assert_eq!(address.to_string(), "10.1.0.5");
    }

    #[test]
    fn test_canonical_ipv6_display() {
        let address: IpAddress = "2001:db8::1".parse().unwrap();
        assert_eq!(
            address.to_string(),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );

        let address: IpAddress = "::".parse().unwrap();
        assert_eq!(
            address.to_string(),
            "0000:0000:0000:0000:0000:0000:0000:0000"
        );
    }

    #[test]
    fn test_uppercase_hex_decodes_to_lowercase_canonical() {
        let address: IpAddress = "2001:DB8::A".parse().unwrap();
        assert_eq!(
            address.to_string(),
            "2001:0db8:0000:0000:0000:0000:0000:000a"
        );
    }

    #[test]
    fn test_display_parse_round_trip() {
        for text in ["10.0.0.5", "0.0.0.0", "2001:db8::1", "fe80::a:1", "::"] {
            let address: IpAddress = text.parse().unwrap();
            let reparsed: IpAddress = address.to_string().parse().unwrap();
            assert_eq!(address, reparsed, "Round trip failed for: {text}");
        }
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let canonical = "2001:db8::1".parse::<IpAddress>().unwrap().to_string();
        let again = canonical.parse::<IpAddress>().unwrap().to_string();
        assert_eq!(canonical, again);
    }
}
