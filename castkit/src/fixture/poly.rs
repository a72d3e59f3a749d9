use crate::error::ErrorKind;
use crate::fixture::{NamedType, Typename};
use crate::Result;
use std::any::Any;

/// The shared capability of the polymorphic pair.
///
/// Calls through a `&dyn Describe` dispatch on the concrete variant stored
/// behind the handle, never on the handle's declared type.
pub trait Describe: Any {
	/// The concrete variant's message.
	fn describe(&self) -> &'static str;

	/// The concrete variant's name, for diagnostics.
	fn typename(&self) -> Typename;

	#[doc(hidden)]
	fn as_any(&self) -> &dyn Any;
}

/// The polymorphic base fixture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generic;

/// The polymorphic derived fixture; overrides the base's message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Specific;

impl Generic {
	pub const MESSAGE: &'static str = "generic fixture";
}

impl Specific {
	pub const MESSAGE: &'static str = "specific fixture";
}

impl NamedType for Generic {
	const TYPENAME: Typename = "Generic";
}

impl NamedType for Specific {
	const TYPENAME: Typename = "Specific";
}

impl Describe for Generic {
	fn describe(&self) -> &'static str {
		Self::MESSAGE
	}

	fn typename(&self) -> Typename {
		Self::TYPENAME
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl Describe for Specific {
	fn describe(&self) -> &'static str {
		Self::MESSAGE
	}

	fn typename(&self) -> Typename {
		Self::TYPENAME
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Upcast to the capability type.
///
/// Always valid; this is just the unsize coercion, named for symmetry with
/// [`downcast_ref`].
pub fn upcast<T: Describe>(fixture: &T) -> &dyn Describe {
	fixture
}

/// Checked downcast against the dynamic type behind `handle`.
///
/// Yields `None` when the stored variant is not a `T`; a usable result is
/// never produced for a mismatched pointee.
#[must_use]
pub fn downcast_ref<T: Describe>(handle: &dyn Describe) -> Option<&T> {
	handle.as_any().downcast_ref()
}

/// Like [`downcast_ref`], but reports the mismatch as an [`Error`] naming
/// both types, for callers who treat it as a failure rather than a branch.
///
/// [`Error`]: crate::Error
pub fn try_downcast_ref<T: Describe + NamedType>(handle: &dyn Describe) -> Result<&T> {
	downcast_ref(handle).ok_or_else(|| {
		ErrorKind::InvalidTypeGiven { expected: T::TYPENAME, given: handle.typename() }.into()
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dispatch_follows_the_stored_variant() {
		let base: Box<dyn Describe> = Box::new(Generic);
		let derived: Box<dyn Describe> = Box::new(Specific);

		assert_eq!(base.describe(), Generic::MESSAGE);
		assert_eq!(derived.describe(), Specific::MESSAGE);
	}

	#[test]
	fn downcast_misses_on_a_foreign_variant() {
		let base: Box<dyn Describe> = Box::new(Generic);
		let derived: Box<dyn Describe> = Box::new(Specific);

		assert!(downcast_ref::<Specific>(&*base).is_none());
		assert!(downcast_ref::<Generic>(&*derived).is_none());
	}

	#[test]
	fn downcast_hits_on_the_stored_variant() {
		let base: Box<dyn Describe> = Box::new(Generic);
		let derived: Box<dyn Describe> = Box::new(Specific);

		assert_eq!(downcast_ref::<Generic>(&*base), Some(&Generic));
		assert_eq!(downcast_ref::<Specific>(&*derived), Some(&Specific));
	}

	#[test]
	fn upcast_always_succeeds() {
		let specific = Specific;

		let handle = upcast(&specific);
		assert_eq!(handle.describe(), Specific::MESSAGE);

		// And a downcast of the upcast view finds the variant again.
		assert_eq!(downcast_ref::<Specific>(handle), Some(&specific));
	}

	#[test]
	fn try_downcast_names_both_types() {
		let base: Box<dyn Describe> = Box::new(Generic);

		let err = try_downcast_ref::<Specific>(&*base).unwrap_err();
		assert_matches!(
			err.kind(),
			crate::ErrorKind::InvalidTypeGiven { expected: "Specific", given: "Generic" }
		);

		assert!(try_downcast_ref::<Generic>(&*base).is_ok());
	}
}
