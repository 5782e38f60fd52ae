//! Core definitions (error and result types, argument checks), relied upon by all seqkit-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
