//! UI option records for rich enums.
//!
//! Option-list widgets expect `{ value, label }` pairs. This crate turns a
//! type's registered constants into [`EnumOption`] records carrying the
//! constant's own fields plus `label`, in [`RichEnum::values`] order.
//!
//! ```
//! use rich_enum::rich_enum;
//! use rich_enum_options::options;
//!
//! rich_enum! {
//! 	pub struct Priority: u8 {
//! 		LOW = (1, "Low"),
//! 		HIGH = (3, "High", "Handle first"),
//! 	}
//! }
//!
//! let opts = options::<Priority>();
//! assert_eq!(opts[0].label, "Low");
//! assert_eq!(opts[1].value, 3);
//! ```

use rich_enum::{Constant, Description, RichEnum};
use serde::Serialize;

/// One entry of a UI option list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumOption<V> {
	/// Canonical value, submitted back by the widget.
	pub value: V,
	/// Declared name.
	pub name: &'static str,
	/// Attached description; omitted from serialized output when absent.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<Description>,
	/// Text shown to the user; same as `name`.
	pub label: &'static str,
}

impl<E: RichEnum> From<Constant<E>> for EnumOption<E::Value> {
	fn from(constant: Constant<E>) -> Self {
		Self {
			value: constant.value().clone(),
			name: constant.name(),
			description: constant.description().copied(),
			label: constant.display_name(),
		}
	}
}

/// Builds option records for every registered constant of `E`.
pub fn options<E: RichEnum>() -> Vec<EnumOption<E::Value>> {
	to_options(&E::values())
}

/// Builds option records for a chosen subset of constants, in the given order.
pub fn to_options<E: RichEnum>(constants: &[Constant<E>]) -> Vec<EnumOption<E::Value>> {
	constants.iter().copied().map(EnumOption::from).collect()
}
