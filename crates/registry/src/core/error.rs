/// Registration errors.
///
/// Raised only for caller contract violations. A rejected registration leaves
/// the registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The constant was declared with an empty name.
	#[error("empty name: type={type_name} value={value}")]
	EmptyName { type_name: &'static str, value: String },

	/// The same constant object was registered twice.
	#[error("already registered: type={type_name} name={name:?}")]
	AlreadyRegistered { type_name: &'static str, name: &'static str },
}
