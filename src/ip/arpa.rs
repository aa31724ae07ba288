use super::{address::IpAddress, family::AddressFamily};

/// Placeholder character substituted with the reversed labels.
pub const TEMPLATE_PLACEHOLDER: char = '$';

/// Separator placed between reversed labels unless overridden.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Standard reverse-lookup domain template for `family`.
pub const fn default_template(family: AddressFamily) -> &'static str {
    match family {
        AddressFamily::V4 => "$.in-addr.arpa",
        AddressFamily::V6 => "$.ip6.arpa",
    }
}

/// Builds the reverse-DNS (PTR) name for `address`.
///
/// IPv4 reverses the four decimal octets; IPv6 reverses the 32 hex
/// nibbles of the canonical 128-bit value, so compressed and expanded
/// spellings of the same address produce the same name. The joined
/// labels replace every `$` in `template`.
pub fn reverse_dns_name(address: IpAddress, template: &str, separator: &str) -> String {
    let labels: Vec<String> = match address {
        IpAddress::V4(value) => value
            .to_be_bytes()
            .iter()
            .rev()
            .map(|octet| octet.to_string())
            .collect(),
        IpAddress::V6(value) => (0..32)
            .map(|shift| format!("{:x}", (value >> (shift * 4)) & 0xf))
            .collect(),
    };

    template.replace(TEMPLATE_PLACEHOLDER, &labels.join(separator))
}
