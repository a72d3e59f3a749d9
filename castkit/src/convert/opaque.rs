use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

/// A pointer-sized opaque handle: the bit pattern of some `NonNull<T>` with
/// the `T` erased.
///
/// [`erase`](Self::erase) and [`restore`](Self::restore) never touch the bits,
/// so a round trip yields a pointer to the identical storage, provenance
/// intact. The handle itself grants no access; dereferencing a restored
/// pointer is where the usual raw-pointer obligations apply.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Opaque(NonNull<()>);

sa::assert_eq_size!(Opaque, *mut (), usize, Option<Opaque>);
sa::assert_eq_align!(Opaque, *mut ());
sa::assert_not_impl_any!(Opaque: Drop);

impl Opaque {
	/// Erases the pointee type, keeping the bits.
	#[must_use]
	pub fn erase<T>(ptr: NonNull<T>) -> Self {
		trace!(ptr = ?ptr.as_ptr(), "erasing pointee type");

		Self(ptr.cast())
	}

	/// Reinterprets the bits as a `NonNull<T>` again.
	///
	/// The cast is free and always succeeds. The result is only
	/// dereferenceable if `self` was [erased](Self::erase) from a valid
	/// `NonNull<T>` with the same (or a layout-compatible) `T`, and the
	/// allocation it pointed into is still live.
	#[must_use]
	pub fn restore<T>(self) -> NonNull<T> {
		self.0.cast()
	}

	/// The address the handle carries.
	#[must_use]
	pub fn addr(self) -> usize {
		self.0.as_ptr() as usize
	}
}

impl<T> From<NonNull<T>> for Opaque {
	fn from(ptr: NonNull<T>) -> Self {
		Self::erase(ptr)
	}
}

impl Debug for Opaque {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "Opaque({:p})", self.0.as_ptr())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn roundtrip_preserves_address_and_value() {
		let cell: Box<i64> = Box::default();
		let typed = NonNull::from(&*cell);

		let erased = Opaque::erase(typed);
		let restored: NonNull<i64> = erased.restore();

		assert_eq!(restored, typed);
		assert_eq!(erased.addr(), typed.as_ptr() as usize);

		// SAFETY: `restored` carries `typed`'s provenance and `cell` is live.
		assert_eq!(unsafe { *restored.as_ptr() }, 0);
		assert_eq!(unsafe { *restored.as_ptr() }, *cell);
	}

	#[test]
	fn roundtrip_preserves_nonzero_values() {
		for value in [1_i64, -1, i64::MAX, i64::MIN] {
			let slot = value;
			let typed = NonNull::from(&slot);

			let restored: NonNull<i64> = Opaque::erase(typed).restore();

			// SAFETY: same provenance, `slot` is live for the read.
			assert_eq!(unsafe { *restored.as_ptr() }, value);
		}
	}

	#[test]
	fn erase_is_type_oblivious() {
		let a = 7_u8;
		let b = 7_i64;

		assert_eq!(Opaque::from(NonNull::from(&a)).addr(), &a as *const u8 as usize);
		assert_eq!(Opaque::from(NonNull::from(&b)).addr(), &b as *const i64 as usize);
	}
}
