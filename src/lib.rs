#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]
#![doc = include_str!("../README.md")]

/// Module containing the typed conversion failures.
pub mod errors;
pub(crate) mod macros;
/// Module containing the signature conversion APIs.
pub mod signature;
/// Module containing the APIs for the JVM type system.
pub mod types;

/// Test utilities
#[cfg(test)]
pub(crate) mod tests;
