//! Small helpers shared by the workspace crates: environment lookups and
//! secret resolution with an explicit fallback source.

pub mod config;
pub mod env;
