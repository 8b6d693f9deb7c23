//! The [`RichEnum`] trait and its type-scoped query API.
//!
//! Every query resolves the slot of the implementing type and no other, so
//! `HttpStatus::from_value(&200)` can never return a constant of a sibling
//! type even when both declare the value `200`.

use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use super::constant::Constant;
use super::description::Description;
use super::error::RegistryError;
use super::meta::EnumMeta;
use super::registry::registry;
use super::value::{EnumValue, is_decimal_digits};

/// The primitive value type of a rich enum.
pub type ValueOf<E> = <E as RichEnum>::Value;

/// A concrete rich enum type.
///
/// Usually implemented through [`rich_enum!`](crate::rich_enum). Manual
/// implementations supply the value type, the declared constants in
/// declaration order, and access to each instance's [`EnumMeta`].
pub trait RichEnum: Sized + Send + Sync + 'static {
	/// Primitive value type of every constant.
	type Value: EnumValue;

	/// Declared constants, in declaration order.
	///
	/// Registered into the type's slot when the slot is first created.
	const DECLARED: &'static [Constant<Self>];

	/// Returns the payload of this instance.
	fn meta(&self) -> &EnumMeta<Self::Value>;

	/// Returns the type name used in diagnostics.
	fn type_name() -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Returns the canonical primitive value.
	fn value(&self) -> &Self::Value {
		self.meta().value()
	}

	/// Returns the declared symbolic name.
	fn name(&self) -> &'static str {
		self.meta().name()
	}

	/// Returns the attached description, if any.
	fn description(&self) -> Option<&Description> {
		self.meta().description()
	}

	/// Registers a runtime-built instance after the declared constants.
	fn register(instance: &'static Self) -> Result<Constant<Self>, RegistryError> {
		registry().register(instance)
	}

	/// Returns every registered constant in declaration order.
	fn values() -> Vec<Constant<Self>> {
		registry().slot::<Self>().instances().to_vec()
	}

	/// Looks up a constant by value. Later declarations shadow earlier ones.
	fn from_value<Q>(value: &Q) -> Option<Constant<Self>>
	where
		Self::Value: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		registry().slot::<Self>().get_by_value(value)
	}

	/// Like [`from_value`](Self::from_value), returning `None` without a
	/// lookup when no value is given.
	fn from_value_opt<Q>(value: Option<&Q>) -> Option<Constant<Self>>
	where
		Self::Value: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		value.and_then(Self::from_value)
	}

	/// Looks up a constant by exact, case-sensitive name.
	///
	/// The empty string never matches.
	fn from_name(name: &str) -> Option<Constant<Self>> {
		if name.is_empty() {
			return None;
		}
		registry().slot::<Self>().get_by_name(name)
	}

	/// Like [`from_name`](Self::from_name), returning `None` when no name is given.
	fn from_name_opt(name: Option<&str>) -> Option<Constant<Self>> {
		name.and_then(Self::from_name)
	}

	/// Collects constants into an identity set, keeping first-seen order.
	fn set_of<I>(items: I) -> IndexSet<Constant<Self>>
	where
		I: IntoIterator<Item = Constant<Self>>,
	{
		items.into_iter().collect()
	}

	/// Maps raw entries keyed by value or by name onto constants.
	///
	/// A key whose text is made only of decimal digits is treated as a value
	/// and coerced to [`Self::Value`]; any other key is treated as a name.
	/// Keys that resolve to nothing are skipped. When several keys resolve to
	/// the same constant the last one wins.
	fn enum_map<K, T, I>(entries: I) -> IndexMap<Constant<Self>, T>
	where
		K: Display,
		I: IntoIterator<Item = (K, T)>,
	{
		let slot = registry().slot::<Self>();
		let mut out = IndexMap::new();
		for (key, raw) in entries {
			let key = key.to_string();
			let resolved = if is_decimal_digits(&key) {
				Self::Value::resolve_digits(slot.value_index(), &key)
			} else if key.is_empty() {
				None
			} else {
				slot.get_by_name(&key)
			};
			if let Some(constant) = resolved {
				out.insert(constant, raw);
			}
		}
		out
	}
}
