//! JVM type values and their descriptor forms.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::{
    errors::{InvalidDescriptor, NotAnArray},
    macros::see_jvm_spec,
};

use super::{Descriptor, references::ClassRef};

/// A primitive JVM type.
///
/// `void` is a sort of its own in the descriptor grammar (`V`), and the
/// conversion APIs treat it like the other primitives.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `void` pseudo-type.
    Void,
    /// The `boolean` type.
    Boolean,
    /// The `char` type.
    Char,
    /// The `byte` type.
    Byte,
    /// The `short` type.
    Short,
    /// The `int` type.
    Int,
    /// The `long` type.
    Long,
    /// The `float` type.
    Float,
    /// The `double` type.
    Double,
}

impl PrimitiveType {
    /// The source-level keyword of this type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Looks up a primitive type by its source-level keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "void" => Some(Self::Void),
            "boolean" => Some(Self::Boolean),
            "char" => Some(Self::Char),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    pub(crate) const fn descriptor_str(self) -> &'static str {
        match self {
            Self::Void => "V",
            Self::Boolean => "Z",
            Self::Char => "C",
            Self::Byte => "B",
            Self::Short => "S",
            Self::Int => "I",
            Self::Long => "J",
            Self::Float => "F",
            Self::Double => "D",
        }
    }

    /// The binary name of the boxed wrapper class, or [`None`] for `void`,
    /// which has no boxed equivalent.
    const fn wrapper_class(self) -> Option<&'static str> {
        match self {
            Self::Void => None,
            Self::Boolean => Some("java/lang/Boolean"),
            Self::Char => Some("java/lang/Character"),
            Self::Byte => Some("java/lang/Byte"),
            Self::Short => Some("java/lang/Short"),
            Self::Int => Some("java/lang/Integer"),
            Self::Long => Some("java/lang/Long"),
            Self::Float => Some("java/lang/Float"),
            Self::Double => Some("java/lang/Double"),
        }
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        match descriptor {
            'V' => Ok(Self::Void),
            'Z' => Ok(Self::Boolean),
            'C' => Ok(Self::Char),
            'B' => Ok(Self::Byte),
            'S' => Ok(Self::Short),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            'F' => Ok(Self::Float),
            'D' => Ok(Self::Double),
            _ => Err(InvalidDescriptor(descriptor.to_string())),
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl Descriptor for PrimitiveType {
    fn descriptor(&self) -> String {
        self.descriptor_str().to_owned()
    }
}

/// A JVM type: a primitive, a class or interface, or an array.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum JvmType {
    /// A primitive type.
    Base(PrimitiveType),
    /// A class or interface type.
    Object(ClassRef),
    /// An array type.
    Array(Box<JvmType>),
}

impl From<PrimitiveType> for JvmType {
    fn from(primitive: PrimitiveType) -> Self {
        Self::Base(primitive)
    }
}

impl From<ClassRef> for JvmType {
    fn from(class: ClassRef) -> Self {
        Self::Object(class)
    }
}

impl JvmType {
    /// Creates an object type from a binary class name.
    pub fn object<S: Into<String>>(binary_name: S) -> Self {
        Self::Object(ClassRef::new(binary_name))
    }

    /// Wraps this type into an array type with one more dimension.
    #[must_use]
    pub fn into_array_type(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Creates an array type with the given number of dimensions over
    /// `base`.
    #[must_use]
    pub fn array_of(base: Self, dimensions: u8) -> Self {
        (0..dimensions).fold(base, |component, _| component.into_array_type())
    }

    /// Whether this type is a primitive, i.e. any sort other than an array
    /// or an object.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Base(_))
    }

    /// Whether this type is an array type.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns the descriptor of this type.
    #[must_use]
    pub fn descriptor(&self) -> String {
        match self {
            Self::Base(primitive) => primitive.descriptor_str().to_owned(),
            Self::Object(class) => format!("L{};", class.binary_name),
            Self::Array(component) => format!("[{}", component.descriptor()),
        }
    }

    /// The component type of an array, i.e. the type with one dimension
    /// stripped.
    ///
    /// # Errors
    /// [`NotAnArray`] if this type is not an array.
    pub fn component_type(&self) -> Result<Self, NotAnArray> {
        match self {
            Self::Array(component) => Ok((**component).clone()),
            other => Err(NotAnArray(other.to_string())),
        }
    }

    /// The source-level name of this type: the primitive keyword, the
    /// dotted class name, or the component name followed by `[]` per
    /// dimension.
    #[must_use]
    pub fn class_name(&self) -> String {
        match self {
            Self::Base(primitive) => primitive.keyword().to_owned(),
            Self::Object(class) => class.class_name(),
            Self::Array(component) => format!("{}[]", component.class_name()),
        }
    }

    /// The boxed wrapper equivalent of a primitive type.
    ///
    /// Reference types and `void` are returned unchanged.
    #[must_use]
    pub fn boxed(&self) -> Self {
        match self {
            Self::Base(primitive) => match primitive.wrapper_class() {
                Some(wrapper) => Self::object(wrapper),
                None => self.clone(),
            },
            other => other.clone(),
        }
    }

    /// The name `Class.getName()` reports for this type: the descriptor
    /// with `/` replaced by `.` for primitives and arrays, the dotted class
    /// name otherwise.
    #[must_use]
    pub fn runtime_class_name(&self) -> String {
        if self.is_primitive() || self.is_array() {
            self.descriptor().replace('/', ".")
        } else {
            self.class_name()
        }
    }
}

impl Display for JvmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

impl Descriptor for JvmType {
    fn descriptor(&self) -> String {
        self.descriptor()
    }
}

impl FromStr for JvmType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let mut chars = descriptor.chars();
        match chars.next() {
            Some('[') => Self::from_str(chars.as_str())
                .map(Self::into_array_type)
                .map_err(|_| InvalidDescriptor(descriptor.to_owned())),
            Some('L') => {
                let binary_name: String = chars.take_while_ref(|it| *it != ';').collect();
                match (chars.next(), chars.next()) {
                    (Some(';'), None) => Ok(Self::Object(ClassRef::new(binary_name))),
                    _ => Err(InvalidDescriptor(descriptor.to_owned())),
                }
            }
            Some(c) => match chars.next() {
                None => PrimitiveType::try_from(c).map(Self::Base),
                _ => Err(InvalidDescriptor(descriptor.to_owned())),
            },
            None => Err(InvalidDescriptor(descriptor.to_owned())),
        }
    }
}
