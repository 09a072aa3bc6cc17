//! References to classes by name.

/// A reference to a class by its binary name (e.g. `java/lang/String`).
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display)]
#[display("{binary_name}")]
pub struct ClassRef {
    /// The binary name of the class.
    pub binary_name: String,
}

impl ClassRef {
    /// Creates a new [`ClassRef`] from a binary name.
    pub fn new<S: Into<String>>(binary_name: S) -> Self {
        ClassRef {
            binary_name: binary_name.into(),
        }
    }

    /// The fully qualified source-level name, with `.` separating packages.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.binary_name.replace('/', ".")
    }
}
