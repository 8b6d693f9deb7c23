use std::sync::Arc;

use super::{HttpStatus, OrderStatus, Unpopulated};
use crate::core::decl::declarations;
use crate::{Registry, RichEnum};

#[test]
fn every_declared_type_is_collected() {
	let names: Vec<&str> = declarations().map(|decl| decl.type_name).collect();
	for expected in ["HttpStatus", "OrderStatus", "Priority", "DuplicateValue", "MixedDescription", "EdgeValue", "EdgeText", "Unpopulated"] {
		assert!(names.contains(&expected), "{expected} missing from {names:?}");
	}
}

#[test]
fn loading_seeds_every_slot_up_front() {
	let registry = Registry::new();
	assert!(registry.slot_for::<HttpStatus>().is_none());

	let loaded = registry.load_declarations();
	assert_eq!(loaded, declarations().count());
	assert_eq!(registry.type_count(), loaded);

	let http = registry.slot_for::<HttpStatus>().expect("seeded by load_declarations");
	assert_eq!(http.instances(), HttpStatus::DECLARED);
	assert_eq!(registry.slot_for::<OrderStatus>().map(|s| s.len()), Some(4));
	assert_eq!(registry.slot_for::<Unpopulated>().map(|s| s.len()), Some(0));
}

#[test]
fn loading_twice_keeps_existing_slots() {
	let registry = Registry::new();
	registry.load_declarations();
	let before = registry.slot::<HttpStatus>();

	registry.load_declarations();
	assert!(Arc::ptr_eq(&before, &registry.slot::<HttpStatus>()));
	assert_eq!(before.len(), 5);
}
