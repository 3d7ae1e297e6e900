//! Question bank loading and validation.

mod loader;

pub use loader::{load_bank_from_json, parse_bank, LoadError};
