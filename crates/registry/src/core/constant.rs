//! Identity handles for enum constants.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use super::description::Description;
use super::traits::RichEnum;

/// Handle to a registered enum constant.
///
/// Equality and hashing go by object identity: two constants declaring the
/// same value are still different handles. This is what lets constants key
/// sets and maps (see [`RichEnum::set_of`] and [`RichEnum::enum_map`]).
pub struct Constant<E: 'static>(&'static E);

impl<E: 'static> Constant<E> {
	/// Wraps a `'static` instance.
	pub const fn new(instance: &'static E) -> Self {
		Self(instance)
	}

	/// Returns the underlying instance.
	#[inline]
	pub fn get(self) -> &'static E {
		self.0
	}
}

impl<E: RichEnum> Constant<E> {
	/// Returns the canonical primitive value.
	pub fn value(&self) -> &'static E::Value {
		self.0.meta().value()
	}

	/// Returns the declared symbolic name.
	pub fn name(&self) -> &'static str {
		self.0.meta().name()
	}

	/// Returns the attached description, if any.
	pub fn description(&self) -> Option<&'static Description> {
		self.0.meta().description()
	}

	/// Display form: the declared name. Same text as [`fmt::Display`].
	pub fn display_name(&self) -> &'static str {
		self.name()
	}

	/// Primitive form: the textual value, e.g. `"200"` for `HttpStatus::OK`.
	///
	/// Use this where a raw value is expected (query strings, storage keys),
	/// and `display_name` or `Display` where a human-facing label is.
	pub fn canonical_value(&self) -> String {
		self.value().to_string()
	}
}

impl<E: 'static> Clone for Constant<E> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<E: 'static> Copy for Constant<E> {}

impl<E: 'static> PartialEq for Constant<E> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.0, other.0)
	}
}

impl<E: 'static> Eq for Constant<E> {}

impl<E: 'static> Hash for Constant<E> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::ptr::hash(self.0, state);
	}
}

impl<E: 'static> Deref for Constant<E> {
	type Target = E;

	fn deref(&self) -> &E {
		self.0
	}
}

impl<E: RichEnum> fmt::Display for Constant<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl<E: RichEnum> fmt::Debug for Constant<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}::{}({:?})", E::type_name(), self.name(), self.value())
	}
}
