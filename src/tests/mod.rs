use proptest::prelude::*;

use crate::types::jvm_type::{JvmType, PrimitiveType};

pub(crate) fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z][\w\$_]*")
        .expect("The regex is invalid")
        .prop_filter("Identifiers must not be primitive keywords", |it| {
            PrimitiveType::from_keyword(it).is_none()
        })
}

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_identifier(), 1..6).prop_map(|it| it.join("/"))
}

pub(crate) fn arb_bare_class_name() -> impl Strategy<Value = String> {
    arb_identifier()
}

pub(crate) fn arb_dotted_class_name() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_identifier(), 2..6).prop_map(|it| it.join("."))
}

pub(crate) fn arb_non_array_jvm_type() -> impl Strategy<Value = JvmType> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(JvmType::Base),
        arb_class_name().prop_map(JvmType::object),
    ]
}

prop_compose! {
    fn arb_array_jvm_type()(
        base in arb_non_array_jvm_type(),
        dimensions in 1..=4_u8,
    ) -> JvmType {
        JvmType::array_of(base, dimensions)
    }
}

pub(crate) fn arb_jvm_type() -> impl Strategy<Value = JvmType> {
    prop_oneof![arb_non_array_jvm_type(), arb_array_jvm_type()]
}
