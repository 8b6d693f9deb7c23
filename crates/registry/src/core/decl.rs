//! Link-time collection of declared enum types.
//!
//! Every [`rich_enum!`](crate::rich_enum) invocation submits one [`EnumDecl`].
//! [`Registry::load_declarations`] walks them all so a program can seed every
//! slot at startup instead of on first query.

use super::registry::Registry;
use super::traits::RichEnum;

/// Declaration record for one enum type.
pub struct EnumDecl {
	/// Type name, for diagnostics.
	pub type_name: &'static str,
	seed: fn(&Registry),
}

inventory::collect!(EnumDecl);

impl EnumDecl {
	/// Creates the declaration record of `E`.
	pub const fn of<E: RichEnum>(type_name: &'static str) -> Self {
		Self {
			type_name,
			seed: seed::<E>,
		}
	}
}

fn seed<E: RichEnum>(registry: &Registry) {
	registry.slot::<E>();
}

/// Iterates the declaration records linked into this program.
pub fn declarations() -> impl Iterator<Item = &'static EnumDecl> {
	inventory::iter::<EnumDecl>.into_iter()
}

impl Registry {
	/// Seeds the slot of every declared type; returns how many were visited.
	///
	/// Already-seeded slots are left as they are.
	pub fn load_declarations(&self) -> usize {
		let mut count = 0;
		for decl in declarations() {
			(decl.seed)(self);
			count += 1;
		}
		tracing::debug!(types = count, "enum declarations loaded");
		count
	}
}
