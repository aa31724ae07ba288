use std::fmt;

use serde::{Serialize, Serializer};

use super::{error::IpError, family::AddressFamily};

/// A CIDR prefix length bound to the family it was validated against.
/// Always within `[0, bit width]`; out-of-range values are rejected at
/// construction, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixLength {
    length: u8,
    family: AddressFamily,
}

impl PrefixLength {
    pub fn new(length: u8, family: AddressFamily) -> Result<Self, IpError> {
        if length <= family.bit_width() {
            Ok(Self { length, family })
        } else if length <= AddressFamily::V6.bit_width() {
            Err(IpError::FamilyMismatch {
                prefix: length,
                family,
            })
        } else {
            Err(IpError::InvalidPrefix(length.to_string()))
        }
    }

    /// Parses a prefix length from text. The text must be a bare base-10
    /// integer; fractions, hex, exponents, and unit suffixes are rejected.
    pub fn parse(text: &str, family: AddressFamily) -> Result<Self, IpError> {
        let length = text
            .parse::<u8>()
            .map_err(|_| IpError::InvalidPrefix(text.to_string()))?;

        Self::new(length, family)
    }

    pub const fn length(self) -> u8 {
        self.length
    }

    pub const fn family(self) -> AddressFamily {
        self.family
    }

    /// Number of bits not fixed by the prefix.
    pub const fn host_bits(self) -> u8 {
        self.family.bit_width() - self.length
    }

    /// True when the prefix pins every bit, i.e. a single-address block.
    pub const fn is_single_address(self) -> bool {
        self.length == self.family.bit_width()
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.length)
    }
}

impl Serialize for PrefixLength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_bounds() {
        assert!(PrefixLength::new(0, AddressFamily::V4).is_ok());
        assert!(PrefixLength::new(32, AddressFamily::V4).is_ok());
        assert!(PrefixLength::new(0, AddressFamily::V6).is_ok());
        assert!(PrefixLength::new(128, AddressFamily::V6).is_ok());
    }

    #[test]
    fn test_prefix_out_of_family_range() {
        assert_eq!(
            PrefixLength::new(33, AddressFamily::V4),
            Err(IpError::FamilyMismatch {
                prefix: 33,
                family: AddressFamily::V4
            })
        );
        assert_eq!(
            PrefixLength::new(64, AddressFamily::V4),
            Err(IpError::FamilyMismatch {
                prefix: 64,
                family: AddressFamily::V4
            })
        );
        assert_eq!(
            PrefixLength::new(129, AddressFamily::V6),
            Err(IpError::InvalidPrefix("129".to_string()))
        );
    }

    #[test]
    fn test_prefix_parse() {
        let prefix = PrefixLength::parse("24", AddressFamily::V4).unwrap();
        assert_eq!(prefix.length(), 24);
        assert_eq!(prefix.family(), AddressFamily::V4);
        assert_eq!(prefix.host_bits(), 8);

        assert_eq!(
            PrefixLength::parse("24.5", AddressFamily::V4),
            Err(IpError::InvalidPrefix("24.5".to_string()))
        );
        assert_eq!(
            PrefixLength::parse("", AddressFamily::V6),
            Err(IpError::InvalidPrefix(String::new()))
        );
    }

    #[test]
    fn test_single_address_prefix() {
        assert!(PrefixLength::new(32, AddressFamily::V4)
            .unwrap()
            .is_single_address());
        assert!(PrefixLength::new(128, AddressFamily::V6)
            .unwrap()
            .is_single_address());
        assert!(!PrefixLength::new(31, AddressFamily::V4)
            .unwrap()
            .is_single_address());
    }

    #[test]
    fn test_mismatch_error_message() {
        let error = PrefixLength::new(64, AddressFamily::V4).unwrap_err();
        assert_eq!(
            error.to_string(),
            "CIDR prefix /64 is out of range for IPv4 (maximum /32)"
        );
    }
}
