//! The five demonstrations, in the fixed order the binary runs them.
//!
//! Each writes its lines to the given sink so tests can capture them exactly;
//! the only failure mode is the sink itself.

use crate::convert::{numeric, readonly, Opaque, ReadonlyView};
use crate::fixture::{Describe, Extended, Generic, Plain, Specific};
use crate::fixture::poly;
use std::cell::Cell;
use std::io::{self, Write};
use std::ptr::NonNull;

/// Safe/static conversions: numeric truncation, then the non-polymorphic
/// up- and downcast.
pub fn safe_conversions(out: &mut dyn Write) -> io::Result<()> {
	let pi = numeric::PI;
	let truncated = numeric::truncate(pi);
	trace!(pi, truncated, "static truncation");

	writeln!(out, "pi: {pi}")?;
	writeln!(out, "pi as integer: {truncated}")?;

	let plain = Plain::new();
	let extended = Extended::new();

	writeln!(out, "{}", plain.describe())?;
	writeln!(out, "{}", extended.describe())?;

	// Upcast: a compile-time coercion. The `Plain`-typed view now decides
	// which `describe` runs.
	let as_plain: &Plain = extended.as_plain();
	writeln!(out, "{}", as_plain.describe())?;

	// Downcast: no runtime check either way.
	// SAFETY: `as_plain` borrows the base embedded in `extended`.
	let back = unsafe { Extended::downcast_unchecked(as_plain) };
	writeln!(out, "{}", back.describe())?;

	Ok(())
}

/// Runtime-checked conversions across the polymorphic pair, including the
/// miss path.
pub fn checked_conversions(out: &mut dyn Write) -> io::Result<()> {
	// Both fixtures behind the capability type; the stored variant, not the
	// handle, picks the message.
	let base: Box<dyn Describe> = Box::new(Generic);
	let derived: Box<dyn Describe> = Box::new(Specific);

	writeln!(out, "{}", base.describe())?;
	writeln!(out, "{}", derived.describe())?;

	// A `Generic` is not a `Specific`: the downcast misses and its print is
	// skipped, silently.
	if let Some(specific) = poly::downcast_ref::<Specific>(&*base) {
		writeln!(out, "{}", specific.describe())?;
	}

	if let Some(specific) = poly::downcast_ref::<Specific>(&*derived) {
		writeln!(out, "{}", specific.describe())?;

		// Upcast back to the capability; always succeeds.
		let up = poly::upcast(specific);
		writeln!(out, "{}", up.describe())?;
	}

	Ok(())
}

/// Bit reinterpretation: a typed pointer erased to an [`Opaque`] handle and
/// restored, with the pointee checked for identity.
pub fn reinterpret_roundtrip(out: &mut dyn Write) -> io::Result<()> {
	// One heap cell, default-initialized. Owned by the `Box`, so it is freed
	// on return rather than leaked.
	let cell: Box<i64> = Box::default();

	let typed = NonNull::from(&*cell);
	let restored: NonNull<i64> = Opaque::erase(typed).restore();

	// SAFETY: `restored` carries `typed`'s provenance and `cell` is live.
	let roundtripped = unsafe { *restored.as_ptr() };

	if *cell == roundtripped {
		writeln!(out, "reinterpret round-trip preserved {roundtripped}")?;
	}

	Ok(())
}

/// Qualifier stripping: one storage slot behind a read-only pointer and a
/// read-only view, each stripped and written through once.
pub fn qualifier_stripping(out: &mut dyn Write) -> io::Result<()> {
	let variable = Cell::new(0_i64);

	let readonly_ptr: *const i64 = variable.as_ptr().cast_const();
	let readonly_ref = ReadonlyView::new(&variable);

	// Neither alias permits a write as declared:
	//     *readonly_ptr = 1;   // error[E0594]: cannot assign through a `*const` pointer
	//     readonly_ref.set(2); // no such method; the view only exposes `get`

	// SAFETY: `readonly_ptr` derives from the cell's interior pointer, whose
	// provenance permits writes; no other access overlaps the store.
	unsafe {
		*readonly::strip(readonly_ptr) = 1;
	}
	writeln!(out, "variable: {}", variable.get())?;

	readonly_ref.strip().set(2);
	writeln!(out, "variable: {}", variable.get())?;

	Ok(())
}

/// The legacy form, for contrast with [`safe_conversions`]: same numeric
/// result, one undifferentiated operator.
pub fn legacy_conversion(out: &mut dyn Write) -> io::Result<()> {
	let pi = numeric::PI;
	let not_pi = numeric::legacy_truncate(pi);

	writeln!(out, "pi: {pi}")?;
	writeln!(out, "not pi: {not_pi}")?;

	Ok(())
}

/// Runs the five demonstrations in their fixed order.
pub fn run_all(out: &mut dyn Write) -> io::Result<()> {
	debug!("running conversion demonstrations");

	safe_conversions(out)?;
	checked_conversions(out)?;
	reinterpret_roundtrip(out)?;
	qualifier_stripping(out)?;
	legacy_conversion(out)
}
