//! Output formatting for the generated declarations.
//!
//! Emits Rust constant declarations in the layout the downstream `Fp`
//! implementation consumes. The section grouping, entry order, and numeric
//! values are contractual; the interleaved comments are descriptive only.

use params::encode::MDS_DIM;
use params::limbs::int_to_limbs;
use params::mont::MODULUS;
use params::{ConstantSet, Fr, MontParams};

const BANNER: &str =
    "// ============================================================================";

/// Format limbs as a `[u64; 4]` array literal with zero-padded hex words.
fn format_u64_limbs(limbs: &[u64; 4]) -> String {
    format!(
        "[{:#018x}, {:#018x}, {:#018x}, {:#018x}]",
        limbs[0], limbs[1], limbs[2], limbs[3]
    )
}

/// Format limbs as an `Fp::from_raw([...])` expression.
fn format_fp(limbs: &[u64; 4]) -> String {
    format!("Fp::from_raw({})", format_u64_limbs(limbs))
}

/// Human-readable boundary labels for the round constant sequence
/// (t=3: 4 full rounds, 57 partial rounds, 4 full rounds; 3 constants each).
fn round_label(index: usize) -> Option<&'static str> {
    match index {
        0 => Some("Round 0 (Full)"),
        3 => Some("Round 1 (Full)"),
        6 => Some("Round 2 (Full)"),
        9 => Some("Round 3 (Full)"),
        12 => Some("Partial rounds (rounds 4-60, 57 rounds)"),
        183 => Some("Round 61-64 (Full - second half)"),
        _ => None,
    }
}

/// Render every declaration, in the contractual order: Montgomery parameters,
/// round constants, MDS matrix, named scalars.
pub fn render(params: &MontParams, set: &ConstantSet) -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push_str("\n// Montgomery parameters for BN254 Fr\n");
    out.push_str(BANNER);
    out.push('\n');

    out.push_str("\n// MODULUS (p)\n");
    out.push_str(&format!(
        "const MODULUS: [u64; 4] = {};\n",
        format_u64_limbs(&MODULUS)
    ));

    out.push_str("\n// INV = -p^{-1} mod 2^64\n");
    out.push_str(&format!("const INV: u64 = {:#018x};\n", params.inv()));

    out.push_str("\n// R^2 mod p (for converting to Montgomery form)\n");
    out.push_str(&format!(
        "const R2: [u64; 4] = {};\n",
        format_u64_limbs(&int_to_limbs(params.r2()))
    ));

    out.push_str("\n// Fp::ONE = R mod p (1 in Montgomery form)\n");
    out.push_str(&format!(
        "pub const ONE: Fp = Fp({});\n",
        format_u64_limbs(&int_to_limbs(params.r()))
    ));

    let two_mont = params.to_mont(&Fr::from_u64(2));
    out.push_str("\n// 2 in Montgomery form (for verification)\n");
    out.push_str(&format!("// {}\n", format_fp(&two_mont.to_limbs())));

    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\n// Round constants in Montgomery form\n");
    out.push_str(BANNER);
    out.push('\n');

    out.push_str(&format!(
        "\npub const ROUND_CONSTANTS: [Fp; {}] = [\n",
        set.round_constants.len()
    ));
    for (i, rc) in set.round_constants.iter().enumerate() {
        if let Some(label) = round_label(i) {
            out.push_str(&format!("    // {label}\n"));
        }
        out.push_str(&format!("    {},\n", format_fp(&rc.to_limbs())));
    }
    out.push_str("];\n");

    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\n// MDS matrix in Montgomery form\n");
    out.push_str(BANNER);
    out.push('\n');

    out.push_str(&format!(
        "\npub const MDS_MATRIX: [[Fp; {MDS_DIM}]; {MDS_DIM}] = [\n"
    ));
    for row in &set.mds {
        out.push_str("    [\n");
        for entry in row {
            out.push_str(&format!("        {},\n", format_fp(&entry.to_limbs())));
        }
        out.push_str("    ],\n");
    }
    out.push_str("];\n");

    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\n// Other constants in Montgomery form\n");
    out.push_str(BANNER);
    out.push('\n');

    out.push_str("\n// GENERATOR_2_28 in Montgomery form\n");
    out.push_str(&format!(
        "pub const GENERATOR_2_28: Fp = {};\n",
        format_fp(&set.generator.to_limbs())
    ));

    out.push_str("\n// INV_TWO = (p+1)/2 in Montgomery form\n");
    out.push_str(&format!(
        "const INV_TWO: Fp = {};\n",
        format_fp(&set.inv_two.to_limbs())
    ));

    out
}
