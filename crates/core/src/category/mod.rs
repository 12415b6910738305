//! Category directory resolution with guaranteed fallback.

pub mod resolver;
pub mod types;

pub use resolver::CategoryResolver;
pub use types::{Category, FALLBACK_CATEGORY_ID};
