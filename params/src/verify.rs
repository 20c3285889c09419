//! Algebraic self-checks gating every generator run.
//!
//! Runs before any re-encoding. A single failure aborts the run with no
//! output: a silently wrong parameter would corrupt every downstream use of
//! the permutation.

use crate::error::GenError;
use crate::hensel;
use crate::mont::{Fr, MontParams, MODULUS};

/// Run the full battery against a parameter bundle, in order:
///
/// 1. INV re-derivation and the word-level postconditions
///    `p0 · (2^64 − INV) ≡ 1` and `p0 · INV ≡ −1 (mod 2^64)`;
/// 2. `to_mont(1) == R`;
/// 3. `R · R · R^{p−2} mod p == R`, the Montgomery self-multiplication of
///    one round-trips;
/// 4. probe round-trip `from_mont(to_mont(42)) == 42`.
///
/// (The half-element identity runs in `encode`, where that scalar enters.)
pub fn verify_params(params: &MontParams) -> Result<(), GenError> {
    let rederived = hensel::neg_inv_u64(MODULUS[0])?;
    if rederived != params.inv() {
        return Err(GenError::Invariant {
            check: "INV == -p^{-1} mod 2^64",
            detail: format!("expected {rederived:#018x}, got {:#018x}", params.inv()),
        });
    }
    let product = MODULUS[0].wrapping_mul(params.inv().wrapping_neg());
    if product != 1 {
        return Err(GenError::Invariant {
            check: "p[0] * (2^64 - INV) == 1 (mod 2^64)",
            detail: format!("got {product:#018x}"),
        });
    }
    let product = MODULUS[0].wrapping_mul(params.inv());
    if product != u64::MAX {
        return Err(GenError::Invariant {
            check: "p[0] * INV == -1 (mod 2^64)",
            detail: format!("got {product:#018x}"),
        });
    }

    let one_mont = params.to_mont(&Fr::from_u64(1));
    if one_mont.value() != params.r() {
        return Err(GenError::Invariant {
            check: "to_mont(1) == R",
            detail: format!("expected {}, got {}", params.r(), one_mont.value()),
        });
    }

    let r_inv = params.r().modpow(&(params.modulus() - 2u32), params.modulus());
    let product = params.r() * params.r() * r_inv % params.modulus();
    if &product != params.r() {
        return Err(GenError::Invariant {
            check: "R * R * R^{p-2} == R (mod p)",
            detail: format!("expected {}, got {product}", params.r()),
        });
    }

    let probe = Fr::from_u64(42);
    let back = params.from_mont(&params.to_mont(&probe));
    if back != probe {
        return Err(GenError::Invariant {
            check: "from_mont(to_mont(42)) == 42",
            detail: format!("got {}", back.value()),
        });
    }

    Ok(())
}
