use num_traits::{PrimInt, Zero};

/// Mask with the top `prefix` bits set, generic over the integer width.
/// Shifting by the full width is not defined for primitive integers, so
/// the all-ones and all-zeros masks are produced directly.
pub fn bits<R: PrimInt + Zero>(prefix: u8) -> R {
    if u32::from(prefix) == R::zero().count_zeros() {
        !R::zero()
    } else if prefix == 0 {
        R::zero()
    } else {
        !(!R::zero() >> usize::from(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ip::address::IpAddress;

    #[test]
    fn test_ipv4_mask_bits() {
        assert_eq!(bits::<u32>(0), 0);
        assert_eq!(bits::<u32>(8), 0xff00_0000);
        assert_eq!(bits::<u32>(12), 0xfff0_0000);
        assert_eq!(bits::<u32>(24), 0xffff_ff00);
        assert_eq!(bits::<u32>(31), 0xffff_fffe);
        assert_eq!(bits::<u32>(32), u32::MAX);
    }

    #[test]
    fn test_ipv6_mask_bits() {
        assert_eq!(bits::<u128>(0), 0);
        assert_eq!(
            bits::<u128>(64),
            0xffff_ffff_ffff_ffff_0000_0000_0000_0000
        );
        assert_eq!(bits::<u128>(127), u128::MAX - 1);
        assert_eq!(bits::<u128>(128), u128::MAX);
    }

    #[test]
    fn test_mask_renders_in_address_notation() {
        assert_eq!(IpAddress::V4(bits(24)).to_string(), "255.255.255.0");
        assert_eq!(
            IpAddress::V6(bits(64)).to_string(),
            "ffff:ffff:ffff:ffff:0000:0000:0000:0000"
        );
        assert_eq!(IpAddress::V4(bits(0)).to_string(), "0.0.0.0");
    }
}
