//! End-to-end tests for the generation pipeline, driven through temp files.

use std::io::Write;

use cli::generate;
use params::{Fr, GenError, MontParams};

/// Write a fixture constants file with `n` literals whose raw values are 1..=n.
fn write_fixture(n: usize) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "pub const POSEIDON_TABLE: [U256; {n}] = [").unwrap();
    for i in 1..=n {
        writeln!(
            file,
            "    U256::from_limbs([{:#018x}, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),",
            i as u64
        )
        .unwrap();
    }
    writeln!(file, "];").unwrap();
    file
}

#[test]
fn test_full_pipeline_emits_all_sections() {
    let file = write_fixture(204);
    let (rendered, found) = generate(file.path().to_str().unwrap()).unwrap();
    assert_eq!(found, 204);

    assert!(rendered.contains("const MODULUS: [u64; 4] = [0x43e1f593f0000001, 0x2833e84879b97091, 0xb85045b68181585d, 0x30644e72e131a029];"));
    assert!(rendered.contains("const INV: u64 = 0xc2e1f593efffffff;"));
    assert!(rendered.contains("pub const ROUND_CONSTANTS: [Fp; 195]"));
    assert!(rendered.contains("pub const MDS_MATRIX: [[Fp; 3]; 3]"));
    assert!(rendered.contains("pub const GENERATOR_2_28"));
    assert!(rendered.contains("const INV_TWO"));
}

#[test]
fn test_emitted_values_match_direct_conversion() {
    let file = write_fixture(204);
    let (rendered, _) = generate(file.path().to_str().unwrap()).unwrap();

    let mont = MontParams::bn254().unwrap();
    // Raw value 1 is the first round constant: its Montgomery form is R
    let one_limbs = mont.to_mont(&Fr::from_u64(1)).to_limbs();
    let expected = format!(
        "Fp::from_raw([{:#018x}, {:#018x}, {:#018x}, {:#018x}])",
        one_limbs[0], one_limbs[1], one_limbs[2], one_limbs[3]
    );
    assert!(rendered.contains(&expected), "first round constant missing");

    // Raw value 196 is the first MDS entry (position 195, row 0 col 0)
    let mds_limbs = mont.to_mont(&Fr::from_u64(196)).to_limbs();
    let expected = format!(
        "Fp::from_raw([{:#018x}, {:#018x}, {:#018x}, {:#018x}])",
        mds_limbs[0], mds_limbs[1], mds_limbs[2], mds_limbs[3]
    );
    assert!(rendered.contains(&expected), "first MDS entry missing");

    // The round constant section must come before the MDS section, so the
    // partition preserved positions, not just membership
    let rc_at = rendered.find("ROUND_CONSTANTS").unwrap();
    let mds_at = rendered.find("MDS_MATRIX").unwrap();
    assert!(rc_at < mds_at);
}

#[test]
fn test_short_table_aborts_with_no_output() {
    let file = write_fixture(203);
    let err = generate(file.path().to_str().unwrap()).unwrap_err();
    match err {
        GenError::TableTooShort { expected, found } => {
            assert_eq!(expected, 204);
            assert_eq!(found, 203);
        }
        other => panic!("wrong error: {other}"),
    }
}

#[test]
fn test_missing_input_is_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("no-such-file.rs");
    let err = generate(bogus.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, GenError::Resource { .. }));
}
