//! Generic utility primitives with zero domain knowledge.
//!
//! - `token` - Token-set similarity scoring and threshold filtering
//! - `validation` - Input validation helpers

pub mod token;
pub mod validation;
