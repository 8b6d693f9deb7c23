//! Per-type registry slot.
//!
//! # Invariants
//!
//! - Every registered constant appears exactly once in `instances`, in
//!   registration order.
//! - `by_value` and `by_name` only ever hold constants of the slot's own type.
//! - Duplicate keys rebind to the later constant and are recorded as
//!   [`Collision`]s.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::collision::{Collision, KeyKind};
use crate::core::{Constant, RegistryError, RichEnum};

/// Declaration-ordered constants of one type plus its two lookup indexes.
pub struct Slot<E: RichEnum> {
	instances: Vec<Constant<E>>,
	by_value: FxHashMap<E::Value, Constant<E>>,
	by_name: FxHashMap<&'static str, Constant<E>>,
	collisions: Vec<Collision>,
}

impl<E: RichEnum> Clone for Slot<E> {
	fn clone(&self) -> Self {
		Self {
			instances: self.instances.clone(),
			by_value: self.by_value.clone(),
			by_name: self.by_name.clone(),
			collisions: self.collisions.clone(),
		}
	}
}

impl<E: RichEnum> Default for Slot<E> {
	fn default() -> Self {
		Self {
			instances: Vec::new(),
			by_value: FxHashMap::default(),
			by_name: FxHashMap::default(),
			collisions: Vec::new(),
		}
	}
}

impl<E: RichEnum> Slot<E> {
	/// Creates a slot holding the type's declared constants.
	///
	/// Every declared constant is registered, whatever its name. A constant
	/// listed twice in [`RichEnum::DECLARED`] is registered once.
	pub(super) fn seeded() -> Self {
		let mut slot = Self::default();
		for &constant in E::DECLARED {
			if slot.contains(constant) {
				tracing::error!(type_name = E::type_name(), name = constant.name(), "declared constant listed twice");
				continue;
			}
			slot.insert(constant);
		}
		tracing::trace!(type_name = E::type_name(), constants = slot.len(), "slot created");
		slot
	}

	/// Validates a registration without touching the slot.
	pub(super) fn check(&self, constant: Constant<E>) -> Result<(), RegistryError> {
		if constant.name().is_empty() {
			return Err(RegistryError::EmptyName {
				type_name: E::type_name(),
				value: constant.canonical_value(),
			});
		}
		if self.contains(constant) {
			return Err(RegistryError::AlreadyRegistered {
				type_name: E::type_name(),
				name: constant.name(),
			});
		}
		Ok(())
	}

	/// Appends a constant and binds its value and name, last write wins.
	///
	/// Callers validate first; see [`Slot::check`].
	pub(super) fn insert(&mut self, constant: Constant<E>) {
		let ordinal = self.instances.len();
		self.instances.push(constant);

		if let Some(prev) = self.by_value.insert(constant.value().clone(), constant) {
			self.record(KeyKind::Value, constant.canonical_value(), prev, ordinal);
		}
		if let Some(prev) = self.by_name.insert(constant.name(), constant) {
			self.record(KeyKind::Name, constant.name().to_owned(), prev, ordinal);
		}

		#[cfg(feature = "registry-contracts")]
		debug_assert!(self.verify().is_ok(), "slot contract broken: {:?}", self.verify());
	}

	fn record(&mut self, kind: KeyKind, key: String, displaced: Constant<E>, incoming: usize) {
		let existing = self.ordinal_of(displaced).unwrap_or(incoming);
		let collision = Collision { kind, key, existing, incoming };
		tracing::debug!(type_name = E::type_name(), %collision, "index key rebound");
		self.collisions.push(collision);
	}

	/// Returns every constant in registration order.
	#[inline]
	pub fn instances(&self) -> &[Constant<E>] {
		&self.instances
	}

	/// Looks up the constant currently bound to `value`.
	#[inline]
	pub fn get_by_value<Q>(&self, value: &Q) -> Option<Constant<E>>
	where
		E::Value: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.by_value.get(value).copied()
	}

	/// Looks up the constant currently bound to `name`.
	#[inline]
	pub fn get_by_name(&self, name: &str) -> Option<Constant<E>> {
		self.by_name.get(name).copied()
	}

	/// Returns the value index.
	#[inline]
	pub fn value_index(&self) -> &FxHashMap<E::Value, Constant<E>> {
		&self.by_value
	}

	/// Returns every recorded index overwrite, oldest first.
	#[inline]
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	/// Returns the registration ordinal of a constant.
	pub fn ordinal_of(&self, constant: Constant<E>) -> Option<usize> {
		self.instances.iter().position(|c| *c == constant)
	}

	/// Returns true if the constant object is registered here.
	pub fn contains(&self, constant: Constant<E>) -> bool {
		self.instances.contains(&constant)
	}

	/// Returns the number of registered constants.
	#[inline]
	pub fn len(&self) -> usize {
		self.instances.len()
	}

	/// Returns true if nothing is registered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.instances.is_empty()
	}

	/// Re-checks the slot invariants, describing the first violation.
	#[cfg(any(test, feature = "registry-contracts"))]
	pub fn verify(&self) -> Result<(), String> {
		for (i, c) in self.instances.iter().enumerate() {
			if self.instances[..i].contains(c) {
				return Err(format!("{} registered twice", c.name()));
			}
		}
		for (value, c) in &self.by_value {
			if !self.contains(*c) || c.value() != value {
				return Err(format!("value index entry {value} is stale"));
			}
		}
		for (name, c) in &self.by_name {
			if !self.contains(*c) || c.name() != *name {
				return Err(format!("name index entry {name:?} is stale"));
			}
		}
		Ok(())
	}
}
