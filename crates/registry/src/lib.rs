//! Registry-backed rich enumerated constants.
//!
//! A rich enum is a concrete type whose constants are singleton instances, each
//! carrying a primitive value, a display name, and an optional [`Description`]
//! payload. Every concrete type owns one slot in a process-wide [`Registry`],
//! keyed by its [`TypeId`](std::any::TypeId), holding its constants in
//! declaration order together with a value index and a name index.
//!
//! # Declaring a type
//!
//! ```
//! use rich_enum::{RichEnum, rich_enum};
//!
//! rich_enum! {
//! 	/// HTTP response codes.
//! 	pub struct HttpStatus: i64 {
//! 		OK = (200, "OK", "Request succeeded"),
//! 		NOT_FOUND = (404, "NOT_FOUND", "Resource not found"),
//! 		SERVER_ERROR = (500, "SERVER_ERROR"),
//! 	}
//! }
//!
//! assert_eq!(HttpStatus::from_value(&200), Some(HttpStatus::OK));
//! assert_eq!(HttpStatus::from_name("NOT_FOUND"), Some(HttpStatus::NOT_FOUND));
//! assert!(HttpStatus::from_value(&999).is_none());
//!
//! let messages = HttpStatus::enum_map([("200", "Success"), ("999", "Invalid"), ("NOT_FOUND", "Missing")]);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[&HttpStatus::OK], "Success");
//! ```
//!
//! # Modules
//!
//! - [`core::registry`] - Type-keyed table and per-type slots
//! - [`core::traits`] - The [`RichEnum`] trait and its query API
//! - [`core::value`] - Primitive value types and raw-key coercion
//! - [`core::description`] - Free-form description payloads
//! - [`core::decl`] - Link-time collection of declared types

mod macros;

pub mod core;

pub use crate::core::{
	Collision, Constant, Description, EnumMeta, EnumValue, KeyKind, Registry, RegistryError, RichEnum, Slot, ValueOf, is_decimal_digits, registry,
};
#[cfg(feature = "declarations")]
pub use crate::core::decl::EnumDecl;

#[doc(hidden)]
#[cfg(feature = "declarations")]
pub use inventory;
#[doc(hidden)]
pub use paste;

#[cfg(test)]
mod tests;
