pub mod encode;
pub mod error;
pub mod extract;
pub mod hensel;
pub mod limbs;
pub mod mont;
pub mod verify;

pub use encode::ConstantSet;
pub use error::GenError;
pub use extract::Extractor;
pub use mont::{Fr, FrMont, MontParams};
