//! Content hashes for compiled rules.
//!
//! FNV-1a (64-bit) is used because the value must be identical across
//! processes and toolchain versions; `std`'s `DefaultHasher` promises neither.

use std::fmt;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A stable 64-bit content hash of a normalized declaration set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleHash(pub u64);

impl RuleHash {
    /// Hash raw bytes.
    pub fn of(bytes: &[u8]) -> Self {
        let mut hash = FNV_OFFSET;
        for b in bytes {
            hash ^= u64::from(*b);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        RuleHash(hash)
    }

    /// Base-36 rendering, used for hash-derived class names.
    pub fn to_base36(self) -> String {
        const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let mut n = self.0;
        if n == 0 {
            return "0".to_string();
        }
        let mut out = Vec::with_capacity(13);
        while n > 0 {
            out.push(DIGITS[(n % 36) as usize]);
            n /= 36;
        }
        out.reverse();
        String::from_utf8(out).unwrap_or_default()
    }
}

impl fmt::Display for RuleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_reference_values() {
        assert_eq!(RuleHash::of(b""), RuleHash(0xcbf2_9ce4_8422_2325));
        assert_eq!(RuleHash::of(b"a"), RuleHash(0xaf63_dc4c_8601_ec8c));
    }

    #[test]
    fn display_is_sixteen_hex_digits() {
        assert_eq!(RuleHash(0xff).to_string(), "00000000000000ff");
    }

    #[test]
    fn base36() {
        assert_eq!(RuleHash(0).to_base36(), "0");
        assert_eq!(RuleHash(35).to_base36(), "z");
        assert_eq!(RuleHash(36).to_base36(), "10");
    }

    #[test]
    fn different_input_different_hash() {
        assert_ne!(RuleHash::of(b"row-gap:2px;"), RuleHash::of(b"row-gap:4px;"));
    }
}
