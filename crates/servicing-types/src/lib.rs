//! Core types for car servicing checks

mod error;
mod types;

pub use error::*;
pub use types::*;
