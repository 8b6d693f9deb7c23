use super::description::Description;
use super::value::EnumValue;

/// Payload shared by every enum constant: value, name and description.
///
/// Const-constructible so declared constants can be `static` items.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMeta<V> {
	value: V,
	name: &'static str,
	description: Option<Description>,
}

impl<V> EnumMeta<V> {
	/// Creates the payload for one constant.
	pub const fn new(value: V, name: &'static str, description: Option<Description>) -> Self {
		Self { value, name, description }
	}

	/// Creates a payload without a description.
	pub const fn bare(value: V, name: &'static str) -> Self {
		Self::new(value, name, None)
	}
}

impl<V: EnumValue> EnumMeta<V> {
	/// Returns the canonical primitive value.
	pub fn value(&self) -> &V {
		&self.value
	}

	/// Returns the declared symbolic name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the attached description, if any.
	pub fn description(&self) -> Option<&Description> {
		self.description.as_ref()
	}
}
