use std::cell::Cell;

/// Strips the read-only qualifier from a raw pointer.
///
/// The cast itself is free and always succeeds; it changes what the type
/// system will let you write, not what the hardware will. Whether a write
/// through the result is defined depends entirely on the pointer's
/// provenance: it must reach back to a mutable place (or a [`Cell`]'s
/// interior) with no overlapping borrows live at the write.
#[must_use]
pub fn strip<T>(ptr: *const T) -> *mut T {
	ptr.cast_mut()
}

/// A read-only-looking alias over shared-mutable storage.
///
/// Rust has no defined way to strip the qualifier off a `&T` itself, so the
/// reference half of the demonstration is phrased the only way the language
/// admits: the storage is a [`Cell`], the view exposes nothing but reads, and
/// [`strip`](Self::strip) hands back the write half that was there all along.
#[derive(Debug, Clone, Copy)]
pub struct ReadonlyView<'a, T: Copy> {
	cell: &'a Cell<T>,
}

impl<'a, T: Copy> ReadonlyView<'a, T> {
	#[must_use]
	pub const fn new(cell: &'a Cell<T>) -> Self {
		Self { cell }
	}

	/// The only operation the view itself offers.
	#[must_use]
	pub fn get(self) -> T {
		self.cell.get()
	}

	/// Recovers write access to the aliased storage.
	#[must_use]
	pub fn strip(self) -> &'a Cell<T> {
		self.cell
	}
}
