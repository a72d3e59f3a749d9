use crate::fixture::{NamedType, Typename};
use std::ops::Deref;

/// The non-polymorphic base fixture.
///
/// [`Extended`] embeds a `Plain` and derefs to it, so an `Extended` is usable
/// anywhere a `Plain` is expected. There is no dynamic dispatch between the
/// two: which [`describe`](Self::describe) runs is decided entirely by the
/// type of the handle it is called through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct Plain;

impl Plain {
	pub const MESSAGE: &'static str = "plain fixture";

	#[must_use]
	pub const fn new() -> Self {
		Self
	}

	/// What a `Plain`-typed view reports.
	///
	/// Calling this through a `&Plain` that actually borrows into an
	/// [`Extended`] still yields this message; the declared type decides.
	#[must_use]
	pub const fn describe(&self) -> &'static str {
		Self::MESSAGE
	}
}

/// The non-polymorphic derived fixture.
///
/// The embedded [`Plain`] sits at offset zero (`repr(C)`), which is what makes
/// [`downcast_unchecked`](Self::downcast_unchecked) a plain pointer cast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct Extended {
	base: Plain,
}

sa::assert_eq_size!(Plain, Extended);
sa::assert_eq_align!(Plain, Extended);

impl Extended {
	pub const MESSAGE: &'static str = "extended fixture";

	#[must_use]
	pub const fn new() -> Self {
		Self { base: Plain::new() }
	}

	/// Shadows [`Plain::describe`] for `Extended`-typed views.
	#[must_use]
	pub const fn describe(&self) -> &'static str {
		Self::MESSAGE
	}

	/// Upcast to the base type.
	///
	/// A compile-time coercion with no runtime component; the deref coercion
	/// `&Extended -> &Plain` does the same thing implicitly.
	#[must_use]
	pub const fn as_plain(&self) -> &Plain {
		&self.base
	}

	/// Downcast from the base type, without a runtime check.
	///
	/// # Safety
	/// `plain` must borrow the `base` field of a live `Extended`. Nothing
	/// verifies this at runtime; there is no tag to consult. Passing any
	/// other `Plain` is undefined behavior.
	#[must_use]
	pub unsafe fn downcast_unchecked(plain: &Plain) -> &Self {
		// `base` is the first field of a `repr(C)` struct.
		&*(plain as *const Plain).cast::<Self>()
	}
}

impl NamedType for Plain {
	const TYPENAME: Typename = "Plain";
}

impl NamedType for Extended {
	const TYPENAME: Typename = "Extended";
}

impl Deref for Extended {
	type Target = Plain;

	fn deref(&self) -> &Plain {
		&self.base
	}
}
