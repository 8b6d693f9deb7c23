//! Collision records for index overwrites.
//!
//! # Role
//!
//! Both slot indexes resolve duplicate keys by letting the later registration
//! win. Every such overwrite is recorded here for diagnostics; the displaced
//! constant stays in the slot's instance list.

use std::fmt;

/// Which index a collision happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
	/// The value index.
	Value,
	/// The name index.
	Name,
}

impl fmt::Display for KeyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value => write!(f, "value"),
			Self::Name => write!(f, "name"),
		}
	}
}

/// A key that was bound twice within one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	pub kind: KeyKind,
	/// Textual form of the conflicting key.
	pub key: String,
	/// Registration ordinal of the displaced constant.
	pub existing: usize,
	/// Registration ordinal of the constant now bound to `key`.
	pub incoming: usize,
}

impl fmt::Display for Collision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {:?}: #{} replaced by #{}", self.kind, self.key, self.existing, self.incoming)
	}
}
