use strum_macros::Display;

/// Address family tag. Carries the fixed bit width that all block
/// arithmetic for the family operates within.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    #[strum(serialize = "IPv4")]
    V4,
    #[strum(serialize = "IPv6")]
    V6,
}

impl AddressFamily {
    pub const fn bit_width(self) -> u8 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }
}
