//! Little-endian limb codec for integers in [0, 2^256).
//!
//! Limb `i` contributes bits [64i, 64i+64). Encoding and decoding form a
//! bijection on the full 256-bit range.

use num_bigint::BigUint;

/// Assemble four little-endian limbs into an integer.
pub fn limbs_to_int(limbs: &[u64; 4]) -> BigUint {
    let mut bytes = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        bytes[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// Split an integer into four little-endian limbs. Exact inverse of
/// [`limbs_to_int`]. A value >= 2^256 is a caller bug, not a recoverable
/// condition.
pub fn int_to_limbs(n: &BigUint) -> [u64; 4] {
    assert!(n.bits() <= 256, "value does not fit in 4 limbs");
    let bytes = n.to_bytes_le();
    let mut padded = [0u8; 32];
    padded[..bytes.len()].copy_from_slice(&bytes);
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        *limb = u64::from_le_bytes(padded[i * 8..(i + 1) * 8].try_into().unwrap());
    }
    limbs
}
