//! Process-wide, type-keyed registry of enum constants.
//!
//! # Mental Model
//!
//! 1. **Identity:** each concrete [`RichEnum`] type owns one [`Slot`], keyed by
//!    its [`TypeId`]. Types never share a slot, whatever their values or names.
//! 2. **Seeding:** the first access to a type's slot creates it and registers
//!    the type's declared constants ([`RichEnum::DECLARED`]) in order.
//! 3. **Extension:** [`Registry::register`] appends runtime-built instances
//!    after the declared ones.
//! 4. **Consumption:** readers receive an `Arc<Slot<E>>` snapshot and perform
//!    lookups without holding the lock.
//!
//! # Concurrency
//!
//! - **Writes:** serialized by one table-wide `RwLock`. Slot creation and
//!   seeding happen under the write lock, so no reader sees a half-seeded slot.
//! - **Reads:** the read lock is held only to clone the slot `Arc`. Writers
//!   copy-on-write through [`Arc::make_mut`], so a reader's snapshot stays
//!   consistent while later registrations land.

use std::any::{Any, TypeId};
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::core::{Constant, RegistryError, RichEnum};

mod collision;
mod slot;

pub use collision::{Collision, KeyKind};
pub use slot::Slot;

type Table = FxHashMap<TypeId, Box<dyn Any + Send + Sync>>;

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Returns the process-wide registry used by [`RichEnum`]'s query API.
pub fn registry() -> &'static Registry {
	&REGISTRY
}

/// Table of per-type slots.
pub struct Registry {
	table: RwLock<Table>,
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl Registry {
	/// Creates an empty, isolated registry.
	pub fn new() -> Self {
		Self {
			table: RwLock::new(Table::default()),
		}
	}

	/// Returns the slot of `E`, or `None` if `E` has never been touched.
	pub fn slot_for<E: RichEnum>(&self) -> Option<Arc<Slot<E>>> {
		let table = self.table.read();
		table.get(&TypeId::of::<E>()).map(|slot| Arc::clone(downcast::<E>(&**slot)))
	}

	/// Returns the slot of `E`, creating and seeding it on first use.
	pub fn slot<E: RichEnum>(&self) -> Arc<Slot<E>> {
		if let Some(slot) = self.slot_for::<E>() {
			return slot;
		}
		let mut table = self.table.write();
		Arc::clone(slot_entry::<E>(&mut table))
	}

	/// Registers a runtime-built instance of `E`.
	///
	/// Creates and seeds the slot first if needed. The instance is appended
	/// after everything already registered and rebinds its value and name.
	///
	/// # Errors
	///
	/// - [`RegistryError::EmptyName`] if the instance has an empty name.
	/// - [`RegistryError::AlreadyRegistered`] if this exact object is already
	///   in the slot (declared constants included).
	pub fn register<E: RichEnum>(&self, instance: &'static E) -> Result<Constant<E>, RegistryError> {
		let constant = Constant::new(instance);
		let mut table = self.table.write();
		let slot = slot_entry::<E>(&mut table);
		// Validate before `make_mut` so a rejected registration never clones the slot.
		slot.check(constant)?;
		Arc::make_mut(slot).insert(constant);
		Ok(constant)
	}

	/// Returns true if the slot of `E` exists.
	pub fn contains<E: RichEnum>(&self) -> bool {
		self.table.read().contains_key(&TypeId::of::<E>())
	}

	/// Returns the number of slots created so far.
	pub fn type_count(&self) -> usize {
		self.table.read().len()
	}
}

fn slot_entry<E: RichEnum>(table: &mut Table) -> &mut Arc<Slot<E>> {
	let slot = table
		.entry(TypeId::of::<E>())
		.or_insert_with(|| Box::new(Arc::new(Slot::<E>::seeded())) as Box<dyn Any + Send + Sync>);
	match slot.downcast_mut::<Arc<Slot<E>>>() {
		Some(slot) => slot,
		None => unreachable!("slot stored under the type id of {} has a foreign type", E::type_name()),
	}
}

fn downcast<E: RichEnum>(slot: &(dyn Any + Send + Sync)) -> &Arc<Slot<E>> {
	match slot.downcast_ref::<Arc<Slot<E>>>() {
		Some(slot) => slot,
		None => unreachable!("slot stored under the type id of {} has a foreign type", E::type_name()),
	}
}
