//! lattice-cli: evaluate matrix jobs described in JSON files.
pub mod job;
