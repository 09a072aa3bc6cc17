//! Conversion between source-level signatures and binary descriptors.
//!
//! The functions in this module accept the human-readable form of a type or
//! method signature (`"int foo(String,int[])"`) and produce the descriptor
//! form used in class files (`"(Ljava/lang/String;[I)I"`). Class names
//! without a package default to `java.lang`, so `"String"` resolves to
//! `java.lang.String`. Names that resolve to no known class are trusted and
//! encoded as given; no classpath is consulted.

use std::str::FromStr;

use itertools::Itertools;

use crate::{
    errors::{InvalidDescriptor, InvalidSignature},
    macros::see_jvm_spec,
    types::{
        Descriptor,
        jvm_type::{JvmType, PrimitiveType},
        references::ClassRef,
    },
};

/// A method name paired with its method descriptor.
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display)]
#[display("{name}{descriptor}")]
pub struct MethodSignature {
    /// The name of the method.
    pub name: String,
    /// The method descriptor, of the shape `(ParameterDescriptor*)ReturnDescriptor`.
    pub descriptor: String,
}

impl MethodSignature {
    /// The reserved name of instance initializers.
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";

    /// Creates a signature from a method name and a method descriptor.
    pub fn new<N: Into<String>, D: Into<String>>(name: N, descriptor: D) -> Self {
        MethodSignature {
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    /// Builds the signature of a constructor taking the given parameter
    /// types.
    #[must_use]
    pub fn constructor<T: Descriptor>(parameter_types: &[T]) -> Self {
        let parameters = parameter_types.iter().map(T::descriptor).join("");
        Self::new(Self::CONSTRUCTOR_NAME, format!("({parameters})V"))
    }
}

impl FromStr for MethodSignature {
    type Err = InvalidSignature;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidSignature(signature.to_owned());
        let space = signature.find(' ').ok_or_else(malformed)?;
        let lparen = signature[space..]
            .find('(')
            .map(|it| it + space)
            .ok_or_else(malformed)?;
        let rparen = signature[lparen..]
            .find(')')
            .map(|it| it + lparen)
            .ok_or_else(malformed)?;
        let return_type = &signature[..space];
        let name = &signature[space + 1..lparen];
        let parameters = signature[lparen + 1..rparen]
            .split(',')
            .map(|it| map_type_name(it.trim()))
            .join("");
        let descriptor = format!("({}){}", parameters, map_type_name(return_type));
        Ok(Self::new(name, descriptor))
    }
}

/// Parses a `"ReturnType name(Type,Type)"` signature string.
///
/// The return type is separated from the method name by a single space, and
/// parameter entries are comma-separated and trimmed. An empty parameter
/// list produces an empty descriptor section.
///
/// # Errors
/// [`InvalidSignature`] if the space or a parenthesis is missing.
pub fn parse_signature(signature: &str) -> Result<MethodSignature, InvalidSignature> {
    signature.parse()
}

/// Parses the signature of a constructor from its comma-separated parameter
/// list, e.g. `"int,String"`.
///
/// Constructors are void-returning methods named
/// [`MethodSignature::CONSTRUCTOR_NAME`].
///
/// # Errors
/// [`InvalidSignature`] if the parameter list breaks the signature
/// structure.
pub fn parse_constructor(parameters: &str) -> Result<MethodSignature, InvalidSignature> {
    parse_signature(&format!(
        "void {}({parameters})",
        MethodSignature::CONSTRUCTOR_NAME
    ))
}

/// Resolves a single type name to a [`JvmType`].
///
/// # Errors
/// [`InvalidDescriptor`] if the mapped descriptor names no type; of all
/// accepted names only the empty one does that.
pub fn parse_type(name: &str) -> Result<JvmType, InvalidDescriptor> {
    map_type_name(name).parse()
}

/// Resolves a comma-separated list of type names, preserving order.
///
/// Entries are trimmed before mapping. The empty string splits into one
/// empty entry rather than an empty list; an empty entry names no type, so
/// it surfaces as [`InvalidDescriptor`] instead of being dropped.
///
/// # Errors
/// [`InvalidDescriptor`] if an entry resolves to no type.
pub fn parse_types(names: &str) -> Result<Vec<JvmType>, InvalidDescriptor> {
    names.split(',').map(|it| parse_type(it.trim())).collect()
}

/// Maps a source-level type name to its descriptor form.
///
/// Primitive keywords map to their one-character code. A name without a
/// package defaults to `java.lang`, and each `[]` suffix adds one leading
/// `[`. The empty string maps to itself. Unknown class names are
/// descriptor-encoded as given; the mapping never fails.
#[must_use]
pub fn map_type_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    if let Some(primitive) = PrimitiveType::from_keyword(name) {
        return primitive.descriptor_str().to_owned();
    }
    let dimensions = count_array_suffixes(name);
    if dimensions > 0 {
        let base: String = name
            .chars()
            .take(name.chars().count() - 2 * dimensions)
            .collect();
        return format!("{}{}", "[".repeat(dimensions), map_type_name(&base));
    }
    if !name.contains('.') {
        return map_type_name(&format!("java.lang.{name}"));
    }
    format!("L{};", name.replace('.', "/"))
}

/// Counts `[]` groups by a forward scan. The scan does not require the
/// groups to be trailing; the caller strips two characters from the end per
/// counted group.
fn count_array_suffixes(name: &str) -> usize {
    let mut count = 0;
    let mut from = 0;
    while let Some(found) = name[from..].find("[]") {
        count += 1;
        from += found + 1;
    }
    count
}

/// Appends `extra` to `types` unless an equal element is already present.
///
/// The input vector is returned unchanged when the element is present.
#[must_use]
pub fn add_unique(mut types: Vec<JvmType>, extra: JvmType) -> Vec<JvmType> {
    if !types.contains(&extra) {
        types.push(extra);
    }
    types
}

/// Wraps a binary class name (e.g. `java/lang/String`) as an object type.
///
/// Only class names are accepted; primitives and arrays have no internal
/// name of this shape.
#[must_use]
pub fn from_internal_name(name: &str) -> JvmType {
    JvmType::object(name)
}

/// Maps binary class names to object types, preserving order.
///
/// An absent input propagates to an absent output, not to an empty list.
#[must_use]
pub fn from_internal_names<S: AsRef<str>>(names: Option<&[S]>) -> Option<Vec<JvmType>> {
    names.map(|names| {
        names
            .iter()
            .map(|it| from_internal_name(it.as_ref()))
            .collect()
    })
}

/// Maps class references to their type equivalents, preserving order and
/// size.
///
/// An absent input propagates to an absent output, not to an empty list.
#[must_use]
pub fn types_of(classes: Option<&[ClassRef]>) -> Option<Vec<JvmType>> {
    classes.map(|classes| classes.iter().cloned().map(JvmType::Object).collect())
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::tests::{arb_bare_class_name, arb_dotted_class_name};

    proptest! {
        #[test]
        fn bare_names_default_to_java_lang(name in arb_bare_class_name()) {
            assert_eq!(map_type_name(&name), map_type_name(&format!("java.lang.{name}")));
            assert_eq!(map_type_name(&name), format!("Ljava/lang/{name};"));
        }

        #[test]
        fn qualified_names_encode_as_given(name in arb_dotted_class_name()) {
            assert_eq!(map_type_name(&name), format!("L{};", name.replace('.', "/")));
        }

        #[test]
        fn array_suffixes_become_leading_brackets(
            name in arb_dotted_class_name(),
            dimensions in 1_usize..=6,
        ) {
            let suffixed = format!("{}{}", name, "[]".repeat(dimensions));
            let expected = format!(
                "{}L{};",
                "[".repeat(dimensions),
                name.replace('.', "/")
            );
            assert_eq!(map_type_name(&suffixed), expected);
        }

        #[test]
        fn primitive_keywords_map_to_codes(primitive in any::<PrimitiveType>()) {
            assert_eq!(map_type_name(primitive.keyword()), primitive.descriptor_str());
        }
    }

    #[test]
    fn empty_name_maps_to_itself() {
        assert_eq!(map_type_name(""), "");
    }

    #[test]
    fn primitive_array_maps_to_primitive_code() {
        assert_eq!(map_type_name("int[]"), "[I");
        assert_eq!(map_type_name("double[][]"), "[[D");
    }

    #[test]
    fn parse_signature_with_parameters() {
        let signature = parse_signature("int foo(String,int[])").unwrap();
        assert_eq!(signature.name, "foo");
        assert_eq!(signature.descriptor, "(Ljava/lang/String;[I)I");
    }

    #[test]
    fn parse_signature_without_parameters() {
        let signature = parse_signature("void bar()").unwrap();
        assert_eq!(signature.name, "bar");
        assert_eq!(signature.descriptor, "()V");
    }

    #[test]
    fn parse_signature_trims_parameter_entries() {
        let signature = parse_signature("void baz( int , java.util.List )").unwrap();
        assert_eq!(signature.descriptor, "(ILjava/util/List;)V");
    }

    #[test]
    fn malformed_signatures_are_rejected() {
        for signature in ["foo()", "void bar", "void bar(int", "voidbar()"] {
            assert_eq!(
                parse_signature(signature),
                Err(InvalidSignature(signature.to_owned())),
                "{signature:?}"
            );
        }
    }

    #[test]
    fn parse_constructor_builds_void_initializer() {
        let constructor = parse_constructor("int,String").unwrap();
        assert_eq!(constructor.name, MethodSignature::CONSTRUCTOR_NAME);
        assert_eq!(constructor.descriptor, "(ILjava/lang/String;)V");
    }

    #[test]
    fn constructor_from_resolved_types() {
        let parameters = [
            JvmType::from(PrimitiveType::Int),
            JvmType::object("java/lang/String"),
        ];
        let constructor = MethodSignature::constructor(&parameters);
        assert_eq!(constructor.name, MethodSignature::CONSTRUCTOR_NAME);
        assert_eq!(constructor.descriptor, "(ILjava/lang/String;)V");
    }

    #[test]
    fn constructor_without_parameters() {
        let constructor = MethodSignature::constructor::<JvmType>(&[]);
        assert_eq!(constructor.descriptor, "()V");
    }

    #[test]
    fn signature_display_is_name_then_descriptor() {
        let signature = parse_signature("void bar()").unwrap();
        assert_eq!(signature.to_string(), "bar()V");
    }

    #[test]
    fn parse_types_preserves_order() {
        let types = parse_types("int, java.lang.String ,double[]").unwrap();
        assert_eq!(
            types,
            vec![
                JvmType::from(PrimitiveType::Int),
                JvmType::object("java/lang/String"),
                JvmType::from(PrimitiveType::Double).into_array_type(),
            ]
        );
    }

    #[test]
    fn parse_types_on_empty_input_is_one_empty_entry() {
        assert_eq!(parse_types(""), Err(InvalidDescriptor(String::new())));
    }

    #[test]
    fn add_unique_skips_present_elements() {
        let int = JvmType::from(PrimitiveType::Int);
        let types = add_unique(Vec::new(), int.clone());
        assert_eq!(types.len(), 1);
        let types = add_unique(types, int.clone());
        assert_eq!(types, vec![int.clone()]);
        let types = add_unique(types, JvmType::object("java/lang/String"));
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn internal_names_wrap_as_objects() {
        assert_eq!(
            from_internal_name("java/util/List"),
            JvmType::object("java/util/List")
        );
    }

    #[test]
    fn absent_inputs_propagate() {
        assert_eq!(from_internal_names::<&str>(None), None);
        assert_eq!(types_of(None), None);

        let names = ["java/lang/String", "java/util/List"];
        let types = from_internal_names(Some(names.as_slice())).unwrap();
        assert_eq!(types.len(), names.len());

        let classes = [ClassRef::new("java/lang/String")];
        let types = types_of(Some(&classes)).unwrap();
        assert_eq!(types, vec![JvmType::object("java/lang/String")]);
    }
}
