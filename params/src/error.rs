use std::fmt;

/// Errors from the constant generator.
///
/// Every variant is fatal: there is no retry and no partial output. A wrong
/// cryptographic constant would corrupt every downstream use of the
/// permutation, so the pipeline either passes every check or emits nothing.
#[derive(Debug)]
pub enum GenError {
    /// The scanned source held fewer constant literals than the output schema
    /// needs. Zero matches means the literal pattern was not found at all.
    TableTooShort { expected: usize, found: usize },
    /// An algebraic self-check failed. `check` names the identity; `detail`
    /// carries the expected/actual values.
    Invariant { check: &'static str, detail: String },
    /// The input text source could not be read.
    Resource { path: String, detail: String },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::TableTooShort { expected, found } => {
                if *found == 0 {
                    write!(f, "no constant literals found (expected at least {expected})")
                } else {
                    write!(
                        f,
                        "constant table too short: expected at least {expected} literals, found {found}"
                    )
                }
            }
            GenError::Invariant { check, detail } => {
                write!(f, "invariant violated: {check} ({detail})")
            }
            GenError::Resource { path, detail } => {
                write!(f, "cannot read `{path}`: {detail}")
            }
        }
    }
}

impl std::error::Error for GenError {}
