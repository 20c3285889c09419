//! Word inverse of the modulus via Hensel lifting.

use crate::error::GenError;

/// Compute `INV = -p0^{-1} mod 2^64` for the least-significant modulus limb.
///
/// Starts from `inv = 1` (correct mod 2) and applies the Newton step
/// `inv <- inv * (2 - p0 * inv)` in wrapping u64 arithmetic. Each step doubles
/// the number of correct low bits (1 -> 2 -> 4 -> 8 -> 16 -> 32 -> 64), so six
/// iterations suffice.
///
/// `p0` must be odd; a prime modulus > 2 guarantees this. The postcondition
/// `p0 * inv == 1 (mod 2^64)` is re-checked before negating: for odd `p0` the
/// lift always converges, so a failure here means the lift itself is broken.
pub fn neg_inv_u64(p0: u64) -> Result<u64, GenError> {
    if p0 & 1 == 0 {
        return Err(GenError::Invariant {
            check: "modulus word is odd",
            detail: format!("p0 = {p0:#018x} has no inverse mod 2^64"),
        });
    }
    let mut inv = 1u64;
    for _ in 0..6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(p0.wrapping_mul(inv)));
    }
    let product = p0.wrapping_mul(inv);
    if product != 1 {
        return Err(GenError::Invariant {
            check: "p0 * p0^{-1} == 1 (mod 2^64)",
            detail: format!("got {product:#018x}"),
        });
    }
    Ok(inv.wrapping_neg())
}
