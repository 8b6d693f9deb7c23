//! Shared registry infrastructure.

pub mod constant;
#[cfg(feature = "declarations")]
pub mod decl;
pub mod description;
pub mod error;
pub mod meta;
pub mod registry;
pub mod traits;
pub mod value;

pub use constant::Constant;
pub use description::Description;
pub use error::RegistryError;
pub use meta::EnumMeta;
pub use registry::{Collision, KeyKind, Registry, Slot, registry};
pub use traits::{RichEnum, ValueOf};
pub use value::{EnumValue, is_decimal_digits};
