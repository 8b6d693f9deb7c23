//! Declaration macro for rich enum types.

/// Declares a rich enum type and its constants.
///
/// Each constant becomes a `static` instance exposed as an associated
/// [`Constant`](crate::Constant) of the same name. Constants are registered
/// in the order written here the first time the type's slot is touched.
///
/// The optional third tuple element is the description: a string literal for
/// plain text, or a braced [`Description`](crate::Description) expression.
///
/// Names must be non-empty; an empty name is rejected at compile time.
///
/// ```
/// use rich_enum::{Description, RichEnum, rich_enum};
///
/// rich_enum! {
/// 	pub struct OrderStatus: &'static str {
/// 		PENDING = ("PENDING", "Pending", "Order is pending"),
/// 		COMPLETED = ("COMPLETED", "Completed", { Description::Integer(2) }),
/// 		CANCELLED = ("CANCELLED", "Cancelled"),
/// 	}
/// }
///
/// assert_eq!(OrderStatus::values().len(), 3);
/// assert_eq!(OrderStatus::from_value("PENDING"), Some(OrderStatus::PENDING));
/// assert_eq!(OrderStatus::PENDING.to_string(), "Pending");
/// assert_eq!(OrderStatus::PENDING.canonical_value(), "PENDING");
/// ```
///
/// ```compile_fail
/// rich_enum::rich_enum! {
/// 	pub struct Blank: i64 {
/// 		NONE = (1, ""),
/// 	}
/// }
/// ```
#[macro_export]
macro_rules! rich_enum {
	(
		$(#[$attr:meta])*
		$vis:vis struct $ty:ident : $value_ty:ty {
			$(
				$(#[$cattr:meta])*
				$cname:ident = ($cvalue:expr, $cdisplay:expr $(, $cdesc:tt)?)
			),* $(,)?
		}
	) => {
		$(#[$attr])*
		$vis struct $ty {
			meta: $crate::EnumMeta<$value_ty>,
		}

		$crate::paste::paste! {
			$(
				const _: () = assert!(!::core::primitive::str::is_empty($cdisplay), concat!("empty name for ", stringify!($ty), "::", stringify!($cname)));

				#[allow(non_upper_case_globals)]
				#[doc(hidden)]
				static [<__ $ty _ $cname>]: $ty = $ty {
					meta: $crate::EnumMeta::new($cvalue, $cdisplay, $crate::__rich_enum_description!($($cdesc)?)),
				};
			)*

			#[allow(non_upper_case_globals)]
			impl $ty {
				$(
					$(#[$cattr])*
					pub const $cname: $crate::Constant<$ty> = $crate::Constant::new(&[<__ $ty _ $cname>]);
				)*
			}
		}

		impl $crate::RichEnum for $ty {
			type Value = $value_ty;

			const DECLARED: &'static [$crate::Constant<Self>] = &[$(Self::$cname),*];

			fn meta(&self) -> &$crate::EnumMeta<$value_ty> {
				&self.meta
			}

			fn type_name() -> &'static str {
				stringify!($ty)
			}
		}

		impl ::std::fmt::Debug for $ty {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.debug_struct(stringify!($ty))
					.field("value", <Self as $crate::RichEnum>::value(self))
					.field("name", &<Self as $crate::RichEnum>::name(self))
					.field("description", &<Self as $crate::RichEnum>::description(self))
					.finish()
			}
		}

		$crate::__rich_enum_submit!($ty);
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rich_enum_description {
	() => {
		::std::option::Option::None
	};
	($text:literal) => {
		::std::option::Option::Some($crate::Description::Text($text))
	};
	({ $desc:expr }) => {
		::std::option::Option::Some($desc)
	};
}

#[doc(hidden)]
#[cfg(feature = "declarations")]
#[macro_export]
macro_rules! __rich_enum_submit {
	($ty:ident) => {
		$crate::inventory::submit! {
			$crate::EnumDecl::of::<$ty>(stringify!($ty))
		}
	};
}

#[doc(hidden)]
#[cfg(not(feature = "declarations"))]
#[macro_export]
macro_rules! __rich_enum_submit {
	($ty:ident) => {};
}
