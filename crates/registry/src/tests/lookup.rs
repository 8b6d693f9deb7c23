use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{DuplicateValue, EdgeText, EdgeValue, HttpStatus, MixedDescription, OrderStatus, Priority, Unpopulated};
use crate::{Constant, Description, RichEnum, ValueOf, registry};

#[test]
fn constants_carry_value_name_and_description() {
	assert_eq!(*HttpStatus::OK.value(), 200);
	assert_eq!(HttpStatus::OK.name(), "OK");
	assert_eq!(HttpStatus::OK.description(), Some(&Description::Text("Request succeeded")));

	assert_eq!(*Priority::LOW.value(), 1);
	assert_eq!(Priority::LOW.description(), None);

	assert_eq!(*OrderStatus::PENDING.value(), "PENDING");
	assert_eq!(OrderStatus::PENDING.name(), "Pending");
}

#[test]
fn values_follow_declaration_order() {
	assert_eq!(
		HttpStatus::values(),
		[HttpStatus::OK, HttpStatus::CREATED, HttpStatus::BAD_REQUEST, HttpStatus::NOT_FOUND, HttpStatus::SERVER_ERROR]
	);
	assert_eq!(
		OrderStatus::values(),
		[OrderStatus::PENDING, OrderStatus::PROCESSING, OrderStatus::COMPLETED, OrderStatus::CANCELLED]
	);
	assert_eq!(Priority::values(), [Priority::LOW, Priority::MEDIUM, Priority::HIGH]);
}

#[test]
fn values_is_empty_without_constants() {
	assert!(Unpopulated::values().is_empty());
	assert!(Unpopulated::from_value(&0).is_none());
	assert!(registry().slot_for::<Unpopulated>().is_some());
}

#[rstest]
#[case(200, Some(HttpStatus::OK))]
#[case(404, Some(HttpStatus::NOT_FOUND))]
#[case(500, Some(HttpStatus::SERVER_ERROR))]
#[case(999, None)]
#[case(-200, None)]
fn from_value_resolves_numeric_values(#[case] value: i64, #[case] expected: Option<Constant<HttpStatus>>) {
	assert_eq!(HttpStatus::from_value(&value), expected);
}

#[test]
fn from_value_resolves_string_values() {
	assert_eq!(OrderStatus::from_value("PENDING"), Some(OrderStatus::PENDING));
	assert_eq!(OrderStatus::from_value(String::from("CANCELLED").as_str()), Some(OrderStatus::CANCELLED));
	assert!(OrderStatus::from_value("INVALID").is_none());
	assert!(OrderStatus::from_value("pending").is_none());
}

#[test]
fn unset_inputs_resolve_to_nothing() {
	assert!(HttpStatus::from_value_opt::<i64>(None).is_none());
	assert_eq!(HttpStatus::from_value_opt(Some(&200)), Some(HttpStatus::OK));
	assert!(HttpStatus::from_name_opt(None).is_none());
	assert!(HttpStatus::from_name("").is_none());
	assert_eq!(HttpStatus::from_name_opt(Some("OK")), Some(HttpStatus::OK));
}

#[rstest]
#[case("OK", Some(HttpStatus::OK))]
#[case("NOT_FOUND", Some(HttpStatus::NOT_FOUND))]
#[case("SERVER_ERROR", Some(HttpStatus::SERVER_ERROR))]
#[case("ok", None)]
#[case("INVALID", None)]
#[case("", None)]
fn from_name_is_exact_and_case_sensitive(#[case] name: &str, #[case] expected: Option<Constant<HttpStatus>>) {
	assert_eq!(HttpStatus::from_name(name), expected);
}

#[test]
fn from_name_uses_declared_name_not_value() {
	assert_eq!(OrderStatus::from_name("Pending"), Some(OrderStatus::PENDING));
	assert!(OrderStatus::from_name("PENDING").is_none());
}

#[test]
fn types_do_not_see_each_other() {
	assert!(OrderStatus::from_name("OK").is_none());
	assert!(HttpStatus::from_name("Pending").is_none());
	assert!(Priority::from_value(&200).is_none());
	assert_eq!(EdgeText::from_value("200"), Some(EdgeText::DIGITS));
	assert!(EdgeText::from_name("OK").is_none());
	assert_eq!(HttpStatus::values().len(), 5);
	assert_eq!(OrderStatus::values().len(), 4);
	assert_eq!(Priority::values().len(), 3);
}

#[test]
fn duplicate_value_keeps_both_and_resolves_to_later() {
	assert_eq!(DuplicateValue::values(), [DuplicateValue::FIRST, DuplicateValue::SECOND]);
	assert_eq!(DuplicateValue::from_value(&1), Some(DuplicateValue::SECOND));
	assert_eq!(DuplicateValue::from_name("FIRST"), Some(DuplicateValue::FIRST));
	assert_ne!(DuplicateValue::FIRST, DuplicateValue::SECOND);

	let slot = registry().slot::<DuplicateValue>();
	assert_eq!(slot.collisions().len(), 1);
	assert_eq!(slot.collisions()[0].key, "1");
}

#[test]
fn descriptions_keep_their_shape() {
	assert_eq!(MixedDescription::STRING_DESC.description().and_then(Description::as_text), Some("string description"));
	assert_eq!(MixedDescription::NUMBER_DESC.description().and_then(Description::as_integer), Some(42));

	let object = MixedDescription::OBJECT_DESC.description().expect("declared with a record");
	assert_eq!(object.get("key"), Some(&Description::Text("value")));

	let array = MixedDescription::ARRAY_DESC.description().and_then(Description::as_list);
	assert_eq!(array, Some(&[Description::Text("a"), Description::Text("b")][..]));
}

#[test]
fn zero_and_empty_values_are_real_values() {
	assert_eq!(EdgeValue::from_value(&0), Some(EdgeValue::ZERO));
	assert_eq!(EdgeText::from_value(""), Some(EdgeText::EMPTY));
}

#[test]
fn display_name_and_canonical_value_differ() {
	assert_eq!(HttpStatus::OK.to_string(), "OK");
	assert_eq!(format!("Status: {}", HttpStatus::OK), "Status: OK");
	assert_eq!(format!("Status: {}", HttpStatus::OK.canonical_value()), "Status: 200");
	assert_eq!(HttpStatus::NOT_FOUND.canonical_value(), "404");
	assert_eq!(OrderStatus::COMPLETED.canonical_value(), "COMPLETED");
	assert_eq!(OrderStatus::COMPLETED.display_name(), "Completed");
}

#[test]
fn debug_names_type_and_constant() {
	assert_eq!(format!("{:?}", HttpStatus::OK), "HttpStatus::OK(200)");
	assert_eq!(format!("{:?}", OrderStatus::PENDING), "OrderStatus::Pending(\"PENDING\")");
}

#[test]
fn value_type_alias_names_the_primitive() {
	let status: ValueOf<HttpStatus> = 404;
	let order: ValueOf<OrderStatus> = "PENDING";
	assert_eq!(HttpStatus::from_value(&status), Some(HttpStatus::NOT_FOUND));
	assert_eq!(OrderStatus::from_value(order), Some(OrderStatus::PENDING));
}
