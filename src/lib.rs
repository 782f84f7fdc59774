//! Shared plumbing for the pixflate binaries: input/output selection,
//! logging setup and the bit-dump formatter.

pub mod bits;
pub mod cli;
pub mod input;
pub mod output;
