//! Typed failures produced by the conversion APIs.
//!
//! All failures are surfaced synchronously to the caller; nothing is retried
//! or recovered internally.

use crate::macros::see_jvm_spec;

/// An error indicating that a string does not follow the field descriptor
/// grammar.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid descriptor: {0}")]
pub struct InvalidDescriptor(pub String);

/// An error indicating that a signature string is missing its
/// `ReturnType name(Parameters)` structure.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid signature: {0}")]
pub struct InvalidSignature(pub String);

/// An error indicating that a component type was requested from a type that
/// is not an array.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Type {0} is not an array")]
pub struct NotAnArray(pub String);
