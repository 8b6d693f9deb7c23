//! Primitive value types carried by enum constants.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A primitive type usable as the canonical value of an enum constant.
///
/// Implemented for every built-in integer type and for `&'static str`.
pub trait EnumValue: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {
	/// Resolves a raw key made only of decimal digits against a value index.
	///
	/// The key is coerced to `Self` first; keys that do not fit (overflow for
	/// integers) resolve to nothing.
	fn resolve_digits<T: Copy>(index: &FxHashMap<Self, T>, digits: &str) -> Option<T>;
}

macro_rules! impl_integer_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl EnumValue for $ty {
				fn resolve_digits<T: Copy>(index: &FxHashMap<Self, T>, digits: &str) -> Option<T> {
					let value = digits.parse::<$ty>().ok()?;
					index.get(&value).copied()
				}
			}
		)*
	};
}

impl_integer_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl EnumValue for &'static str {
	fn resolve_digits<T: Copy>(index: &FxHashMap<Self, T>, digits: &str) -> Option<T> {
		index.get(digits).copied()
	}
}

/// Returns true if `key` is non-empty and made only of ASCII decimal digits.
///
/// Raw keys passing this test denote values; everything else denotes a name.
pub fn is_decimal_digits(key: &str) -> bool {
	!key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}
