//! 32-bit FNV-1a hash.

use super::Digest;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Standard FNV-1a with the fixed 32-bit offset basis and prime.
///
/// XOR each byte into the accumulator, then multiply by the FNV prime with
/// 32-bit wraparound. Formatted as 8 hex digits.
#[must_use]
pub fn fnv1a32(message: &[u8]) -> Digest {
    let mut h = FNV_OFFSET_BASIS;
    for &b in message {
        h ^= u32::from(b);
        h = h.wrapping_mul(FNV_PRIME);
    }
    format!("{h:08x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_is_offset_basis() {
        assert_eq!(fnv1a32(b""), "811c9dc5");
    }

    #[test]
    fn test_reference_values() {
        // Published FNV-1a test vectors
        assert_eq!(fnv1a32(b"a"), "e40c292c");
        assert_eq!(fnv1a32(b"Hello"), "f55c314b");
    }

    #[test]
    fn test_determinism() {
        assert_eq!(fnv1a32(b"same input"), fnv1a32(b"same input"));
    }

    #[test]
    fn test_single_byte_difference_diverges() {
        // XOR and odd-prime multiplication are both injective modulo 2^32,
        // so equal-length messages differing in one byte cannot collide.
        assert_ne!(fnv1a32(b"near-duplicate-1"), fnv1a32(b"near-duplicate-2"));
    }
}
