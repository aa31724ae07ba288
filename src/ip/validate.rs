use std::sync::LazyLock;

use regex::Regex;

use super::{family::AddressFamily, prefix::PrefixLength};

static OCTET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("Invalid octet regex pattern"));

static HEXTET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{1,4}$").expect("Invalid hextet regex pattern"));

/// Checks whether `text` is a syntactically valid address of `family`.
///
/// Total and side-effect-free; callers distinguish "absent" from
/// "invalid" before calling, so blank text is simply invalid here.
pub fn is_valid_address(text: &str, family: AddressFamily) -> bool {
    match family {
        AddressFamily::V4 => ipv4_octets(text).is_some(),
        AddressFamily::V6 => ipv6_hextets(text).is_some(),
    }
}

/// Checks whether `text` is an integer prefix length within `family`'s
/// bit width.
pub fn is_valid_prefix(text: &str, family: AddressFamily) -> bool {
    PrefixLength::parse(text, family).is_ok()
}

/// Parses exactly four dot-separated decimal octets. Leading zeros are
/// accepted; signs, spaces, and non-digit characters are not.
pub fn ipv4_octets(text: &str) -> Option<[u8; 4]> {
    let mut parts = text.split('.');
    let mut octets = [0u8; 4];

    for octet in &mut octets {
        let part = parts.next()?;
        if !OCTET_REGEX.is_match(part) {
            return None;
        }
        *octet = part.parse().ok()?;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(octets)
}

/// Expands at most one `::` and parses exactly eight hextets.
///
/// A `::` standing for zero groups is accepted when the explicit groups
/// already number eight; a second `::`, too many groups, or an empty
/// group not created by the one `::` is rejected.
pub fn ipv6_hextets(text: &str) -> Option<[u16; 8]> {
    let groups = match text.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return None;
            }

            let head = hextet_groups(head)?;
            let tail = hextet_groups(tail)?;
            let elided = 8usize.checked_sub(head.len() + tail.len())?;

            let mut groups = head;
            groups.resize(groups.len() + elided, 0);
            groups.extend(tail);
            groups
        }
        None => hextet_groups(text)?,
    };

    groups.try_into().ok()
}

fn hextet_groups(section: &str) -> Option<Vec<u16>> {
    if section.is_empty() {
        return Some(Vec::new());
    }

    section
        .split(':')
        .map(|group| {
            if HEXTET_REGEX.is_match(group) {
                u16::from_str_radix(group, 16).ok()
            } else {
                None
            }
        })
        .collect()
}
