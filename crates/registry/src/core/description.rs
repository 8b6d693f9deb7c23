//! Free-form metadata attached to enum constants.
//!
//! A [`Description`] is never indexed or interpreted by the registry. It is
//! built in const context so declared constants can live in `static` items.

use std::fmt;

/// Description payload of an enum constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Description {
	/// Plain text.
	Text(&'static str),
	/// Integer number.
	Integer(i64),
	/// Floating-point number.
	Float(f64),
	/// Boolean flag.
	Bool(bool),
	/// Ordered list of nested payloads.
	List(&'static [Description]),
	/// Keyed record of nested payloads, in declaration order.
	Record(&'static [(&'static str, Description)]),
}

impl Description {
	/// Returns the text if this is a `Text` payload.
	pub fn as_text(&self) -> Option<&'static str> {
		match *self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the number if this is an `Integer` payload.
	pub fn as_integer(&self) -> Option<i64> {
		match *self {
			Self::Integer(n) => Some(n),
			_ => None,
		}
	}

	/// Returns the number if this is a `Float` payload.
	pub fn as_float(&self) -> Option<f64> {
		match *self {
			Self::Float(n) => Some(n),
			_ => None,
		}
	}

	/// Returns the flag if this is a `Bool` payload.
	pub fn as_bool(&self) -> Option<bool> {
		match *self {
			Self::Bool(b) => Some(b),
			_ => None,
		}
	}

	/// Returns the items if this is a `List` payload.
	pub fn as_list(&self) -> Option<&'static [Description]> {
		match *self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Looks up a field of a `Record` payload. First matching key wins.
	pub fn get(&self, key: &str) -> Option<&'static Description> {
		match *self {
			Self::Record(fields) => fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v),
			_ => None,
		}
	}

	/// Returns the payload kind for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Text(_) => "text",
			Self::Integer(_) => "integer",
			Self::Float(_) => "float",
			Self::Bool(_) => "bool",
			Self::List(_) => "list",
			Self::Record(_) => "record",
		}
	}
}

impl fmt::Display for Description {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Integer(n) => write!(f, "{n}"),
			Self::Float(n) => write!(f, "{n}"),
			Self::Bool(b) => write!(f, "{b}"),
			Self::List(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Self::Record(fields) => {
				f.write_str("{")?;
				for (i, (key, value)) in fields.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{key}: {value}")?;
				}
				f.write_str("}")
			}
		}
	}
}

/// Serializes untagged: text as a string, numbers as numbers, lists as
/// sequences and records as maps.
#[cfg(feature = "serde")]
impl serde::Serialize for Description {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		use serde::ser::{SerializeMap, SerializeSeq};

		match self {
			Self::Text(text) => serializer.serialize_str(text),
			Self::Integer(n) => serializer.serialize_i64(*n),
			Self::Float(n) => serializer.serialize_f64(*n),
			Self::Bool(b) => serializer.serialize_bool(*b),
			Self::List(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items.iter() {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Record(fields) => {
				let mut map = serializer.serialize_map(Some(fields.len()))?;
				for (key, value) in fields.iter() {
					map.serialize_entry(key, value)?;
				}
				map.end()
			}
		}
	}
}
