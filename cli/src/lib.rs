pub mod args;
pub mod emit;

use std::fs;

use params::{ConstantSet, Extractor, GenError, MontParams};

/// Full generation pipeline: read the source file, derive and verify the
/// Montgomery parameters, extract and re-encode the constant table, render
/// the declarations.
///
/// Returns the rendered text together with the number of literals found.
/// Every error is fatal; nothing is emitted on failure.
pub fn generate(path: &str) -> Result<(String, usize), GenError> {
    let source = fs::read_to_string(path).map_err(|e| GenError::Resource {
        path: path.to_string(),
        detail: e.to_string(),
    })?;

    let mont = MontParams::bn254()?;
    params::verify::verify_params(&mont)?;

    let raw = Extractor::extract(&source)?;
    let set = ConstantSet::from_raw(&mont, &raw)?;

    Ok((emit::render(&mont, &set), raw.len()))
}
