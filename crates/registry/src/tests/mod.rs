//! Behavior of declared types through the process-wide registry.
//!
//! Every fixture type here is only ever read, so tests can share the global
//! registry while running in parallel.

#[cfg(feature = "declarations")]
mod declarations;
mod lookup;

use crate::Description;

crate::rich_enum! {
	/// HTTP response codes.
	pub struct HttpStatus: i64 {
		OK = (200, "OK", "Request succeeded"),
		CREATED = (201, "CREATED", "Resource created"),
		BAD_REQUEST = (400, "BAD_REQUEST", "Invalid request"),
		NOT_FOUND = (404, "NOT_FOUND", "Resource not found"),
		SERVER_ERROR = (500, "SERVER_ERROR", "Internal server error"),
	}
}

crate::rich_enum! {
	pub struct OrderStatus: &'static str {
		PENDING = ("PENDING", "Pending", "Order is pending"),
		PROCESSING = ("PROCESSING", "Processing", "Order is being processed"),
		COMPLETED = ("COMPLETED", "Completed", "Order completed"),
		CANCELLED = ("CANCELLED", "Cancelled", "Order cancelled"),
	}
}

crate::rich_enum! {
	pub struct Priority: u8 {
		LOW = (1, "LOW"),
		MEDIUM = (2, "MEDIUM"),
		HIGH = (3, "HIGH"),
	}
}

crate::rich_enum! {
	pub struct DuplicateValue: i32 {
		FIRST = (1, "FIRST"),
		SECOND = (1, "SECOND"),
	}
}

crate::rich_enum! {
	pub struct MixedDescription: i64 {
		STRING_DESC = (1, "STRING", "string description"),
		NUMBER_DESC = (2, "NUMBER", { Description::Integer(42) }),
		OBJECT_DESC = (3, "OBJECT", { Description::Record(&[("key", Description::Text("value"))]) }),
		ARRAY_DESC = (4, "ARRAY", { Description::List(&[Description::Text("a"), Description::Text("b")]) }),
	}
}

crate::rich_enum! {
	pub struct EdgeValue: i64 {
		ZERO = (0, "ZERO"),
	}
}

crate::rich_enum! {
	pub struct EdgeText: &'static str {
		EMPTY = ("", "EMPTY"),
		DIGITS = ("200", "DIGITS"),
	}
}

crate::rich_enum! {
	pub struct Unpopulated: i64 {}
}
