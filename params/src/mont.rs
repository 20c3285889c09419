//! Montgomery form conversion for the BN254 scalar field Fr.
//!
//! p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//!
//! Standard and Montgomery form are separate types ([`Fr`] and [`FrMont`]) so
//! a value cannot be converted twice or used in the wrong form by accident.
//! All derived parameters live in an immutable [`MontParams`] bundle built
//! once per run; there is no process-wide state.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::GenError;
use crate::hensel;
use crate::limbs::{int_to_limbs, limbs_to_int};

/// The prime modulus p (BN254 Fr), little-endian limbs.
pub const MODULUS: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// A field element in standard (canonical) form, in [0, p).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fr(BigUint);

impl Fr {
    pub fn from_u64(val: u64) -> Self {
        Fr(BigUint::from(val))
    }

    /// Assemble from four little-endian limbs.
    pub fn from_limbs(limbs: &[u64; 4]) -> Self {
        Fr(limbs_to_int(limbs))
    }

    pub fn to_limbs(&self) -> [u64; 4] {
        int_to_limbs(&self.0)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// A field element in Montgomery form: `value * R mod p`.
///
/// No arithmetic is exposed here: this crate only re-encodes constants; the
/// downstream field implementation does the actual Montgomery multiplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrMont(BigUint);

impl FrMont {
    pub fn to_limbs(&self) -> [u64; 4] {
        int_to_limbs(&self.0)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// Immutable Montgomery parameter bundle for the fixed modulus.
///
/// Built once by [`MontParams::bn254`] and passed by reference everywhere;
/// p, R, R² and INV never change after construction.
pub struct MontParams {
    p: BigUint,
    r: BigUint,
    r2: BigUint,
    inv: u64,
}

impl MontParams {
    /// Derive the full parameter set for BN254 Fr.
    pub fn bn254() -> Result<Self, GenError> {
        let p = limbs_to_int(&MODULUS);
        let r = (BigUint::one() << 256u32) % &p;
        let r2 = (&r * &r) % &p;
        let inv = hensel::neg_inv_u64(MODULUS[0])?;
        Ok(MontParams { p, r, r2, inv })
    }

    /// Test-only escape hatch for building corrupted bundles.
    #[cfg(test)]
    pub(crate) fn from_parts(p: BigUint, r: BigUint, r2: BigUint, inv: u64) -> Self {
        MontParams { p, r, r2, inv }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// R = 2^256 mod p.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// R² mod p.
    pub fn r2(&self) -> &BigUint {
        &self.r2
    }

    /// INV = -p^{-1} mod 2^64.
    pub fn inv(&self) -> u64 {
        self.inv
    }

    /// Standard -> Montgomery: `val * R mod p`. The only conversion the bulk
    /// re-encoding path needs.
    pub fn to_mont(&self, val: &Fr) -> FrMont {
        FrMont((val.value() * &self.r) % &self.p)
    }

    /// Montgomery -> standard: `val * R^{p-2} mod p`, i.e. multiplication by
    /// the Fermat inverse of R (p is prime, so the inverse exists).
    ///
    /// Verification-only. A real Montgomery reduction would be far cheaper,
    /// but for a one-shot generator the exponentiation keeps this conversion
    /// independent of the word-level reduction it is meant to cross-check.
    pub fn from_mont(&self, val: &FrMont) -> Fr {
        let r_inv = self.r.modpow(&(&self.p - 2u32), &self.p);
        Fr((val.value() * r_inv) % &self.p)
    }
}
