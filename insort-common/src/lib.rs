//! # insort Common Utilities
//!
//! Shared primitives for the insort crates.
//!
//! ## Modules
//!
//! - [`arena`]: Type-safe arena allocation with index-based references and
//!   fallible allocation
//! - [`numeric`]: Permissive `atoi`-style leading-integer parsing
//!
//! ## Design Principles
//!
//! 1. **Ownership-based teardown**: releasing a linked structure is dropping
//!    its backing store, never a hand-written free loop
//! 2. **Fallible where it matters**: allocation failure is an error value,
//!    not an abort
//! 3. **Preserve the classic CLI surface**: parsing keeps `atoi` semantics,
//!    quirks included, and documents them

pub mod arena;
pub mod numeric;

// Re-export main types for convenience
pub use arena::{AllocError, Arena, ArenaId};
