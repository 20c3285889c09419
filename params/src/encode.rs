//! Re-encoding of the extracted constant table into Montgomery form.
//!
//! Every raw value maps 1:1 through `to_mont` with order preserved, then the
//! sequence is partitioned by position: the first 195 entries are the Poseidon
//! round constants, the next 9 fill the 3x3 MDS matrix in row-major order.
//! Two named scalars come from fixed program literals rather than the table.

use num_traits::One;

use crate::error::GenError;
use crate::mont::{Fr, FrMont, MontParams};

/// Poseidon BN254 t=3: R_f=8 full + R_p=57 partial rounds, 195 round constants.
pub const ROUND_CONSTANT_COUNT: usize = 195;

/// MDS matrix dimension (state width t = 3).
pub const MDS_DIM: usize = 3;

/// GENERATOR_2_28 raw limbs: generator of the 2^28-order subgroup, used by
/// the downstream radix-2 FFT domain.
pub const GENERATOR_2_28_RAW: [u64; 4] = [
    0x9bd61b6e725b19f0,
    0x402d111e41112ed4,
    0x00e0a7eb8ef62abc,
    0x2a3c09f0a58a7e85,
];

/// INV_TWO = (p+1)/2 raw limbs: the half element, satisfies 2·h ≡ 1 (mod p).
pub const INV_TWO_RAW: [u64; 4] = [
    0xa1f0fac9f8000001,
    0x9419f4243cdcb848,
    0xdc2822db40c0ac2e,
    0x183227397098d014,
];

/// The re-encoded output schema. Every value is in Montgomery form; table
/// order is preserved from the source.
#[derive(Debug)]
pub struct ConstantSet {
    pub round_constants: Vec<FrMont>,
    pub mds: [[FrMont; MDS_DIM]; MDS_DIM],
    pub generator: FrMont,
    pub inv_two: FrMont,
}

/// Check the half-element identity `2·h ≡ 1 (mod p)` on the raw (standard
/// form) value, before any conversion.
pub fn verify_half_element(params: &MontParams, h: &Fr) -> Result<(), GenError> {
    let doubled = (h.value() * 2u32) % params.modulus();
    if !doubled.is_one() {
        return Err(GenError::Invariant {
            check: "2 * INV_TWO == 1 (mod p)",
            detail: format!("got {doubled}"),
        });
    }
    Ok(())
}

impl ConstantSet {
    /// Re-encode the raw table and the named scalars.
    ///
    /// `raw` must hold at least 195 + 9 entries (the extractor already
    /// enforces this; re-checked here so the partition can never read out of
    /// bounds). Entry `i` of the output equals `to_mont` of raw entry `i`.
    pub fn from_raw(params: &MontParams, raw: &[Fr]) -> Result<Self, GenError> {
        let needed = ROUND_CONSTANT_COUNT + MDS_DIM * MDS_DIM;
        if raw.len() < needed {
            return Err(GenError::TableTooShort {
                expected: needed,
                found: raw.len(),
            });
        }

        let round_constants = raw[..ROUND_CONSTANT_COUNT]
            .iter()
            .map(|v| params.to_mont(v))
            .collect();

        let mds_raw = &raw[ROUND_CONSTANT_COUNT..needed];
        let mds = std::array::from_fn(|row| {
            std::array::from_fn(|col| params.to_mont(&mds_raw[row * MDS_DIM + col]))
        });

        let generator = params.to_mont(&Fr::from_limbs(&GENERATOR_2_28_RAW));

        let inv_two_raw = Fr::from_limbs(&INV_TWO_RAW);
        verify_half_element(params, &inv_two_raw)?;
        let inv_two = params.to_mont(&inv_two_raw);

        Ok(ConstantSet {
            round_constants,
            mds,
            generator,
            inv_two,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table(n: usize) -> Vec<Fr> {
        (1..=n as u64).map(Fr::from_u64).collect()
    }

    #[test]
    fn test_partition_and_order() {
        let params = MontParams::bn254().unwrap();
        let raw = raw_table(204);
        let set = ConstantSet::from_raw(&params, &raw).unwrap();

        assert_eq!(set.round_constants.len(), ROUND_CONSTANT_COUNT);
        for (i, rc) in set.round_constants.iter().enumerate() {
            assert_eq!(rc, &params.to_mont(&raw[i]), "round constant {i} scrambled");
        }
        // MDS is row-major from entries 195..204
        for row in 0..MDS_DIM {
            for col in 0..MDS_DIM {
                let idx = ROUND_CONSTANT_COUNT + row * MDS_DIM + col;
                assert_eq!(set.mds[row][col], params.to_mont(&raw[idx]));
            }
        }
    }

    #[test]
    fn test_short_table_rejected() {
        let params = MontParams::bn254().unwrap();
        let err = ConstantSet::from_raw(&params, &raw_table(203)).unwrap_err();
        assert!(matches!(err, GenError::TableTooShort { found: 203, .. }));
    }

    #[test]
    fn test_half_element_identity_holds() {
        let params = MontParams::bn254().unwrap();
        verify_half_element(&params, &Fr::from_limbs(&INV_TWO_RAW)).unwrap();
    }

    #[test]
    fn test_perturbed_half_element_rejected() {
        let params = MontParams::bn254().unwrap();
        let mut limbs = INV_TWO_RAW;
        limbs[0] ^= 1;
        let err = verify_half_element(&params, &Fr::from_limbs(&limbs)).unwrap_err();
        assert!(matches!(err, GenError::Invariant { .. }));
    }

    #[test]
    fn test_generator_converted_with_same_transform() {
        let params = MontParams::bn254().unwrap();
        let set = ConstantSet::from_raw(&params, &raw_table(204)).unwrap();
        assert_eq!(
            set.generator,
            params.to_mont(&Fr::from_limbs(&GENERATOR_2_28_RAW))
        );
    }
}
