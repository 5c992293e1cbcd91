//! Shared trait-first kernel substrate.
//!
//! Defines the constructor-validation lifecycle and the contiguous 1D
//! buffer adapters used by every numeric kernel in the crate.

mod errors;
mod io;
mod lifecycle;

pub use errors::*;
pub use io::*;
pub use lifecycle::*;
