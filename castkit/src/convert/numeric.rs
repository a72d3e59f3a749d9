use crate::error::ErrorKind;
use crate::Result;

/// The irrational fixture the numeric demos truncate.
///
/// Written out well past `f64` precision; the nearest representable value is
/// what actually gets converted.
#[allow(clippy::excessive_precision, clippy::approx_constant)]
pub const PI: f64 = 3.14159265358979323846264338327950;

/// The safe, statically-checked truncating conversion.
///
/// Rounds toward zero. Out-of-range inputs saturate and NaN becomes zero,
/// per the semantics of `as`; see [`try_truncate`] for a form that refuses
/// such inputs instead.
#[must_use]
pub fn truncate(value: f64) -> i64 {
	value as i64
}

/// The legacy, ambiguous conversion form.
///
/// For plain numerics there is nothing to disambiguate, so this collapses to
/// the same truncation as [`truncate`]; the contrast is in the operator (one
/// form covering every conversion), not the result.
#[must_use]
pub fn legacy_truncate(value: f64) -> i64 {
	value as i64
}

/// Truncation that refuses inputs with no exact integral home.
///
/// # Errors
/// NaN and values whose truncation falls outside `i64` yield
/// [`ErrorKind::ConversionFailed`] rather than saturating.
pub fn try_truncate(value: f64) -> Result<i64> {
	// `i64::MAX as f64` rounds up to 2^63, one past the largest `i64`, so the
	// exclusive bound is exact; `i64::MIN as f64` is exactly -2^63.
	if value.is_nan() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
		return Err(ErrorKind::ConversionFailed { into: "Integer" }.into());
	}

	Ok(value as i64)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn truncation_rounds_toward_zero() {
		assert_eq!(truncate(PI), 3);
		assert_eq!(truncate(-PI), -3);
		assert_eq!(truncate(0.999), 0);
		assert_eq!(truncate(0.0), 0);
	}

	#[test]
	fn legacy_form_agrees_with_the_safe_form() {
		for value in [PI, -PI, 0.0, 0.5, -123.456, 1e18] {
			assert_eq!(legacy_truncate(value), truncate(value));
		}
	}

	#[test]
	fn saturation_at_the_edges() {
		assert_eq!(truncate(f64::INFINITY), i64::MAX);
		assert_eq!(truncate(f64::NEG_INFINITY), i64::MIN);
		assert_eq!(truncate(f64::NAN), 0);
	}

	#[test]
	fn try_truncate_accepts_in_range_values() {
		assert_matches!(try_truncate(PI), Ok(3));
		assert_matches!(try_truncate(-PI), Ok(-3));
		assert_matches!(try_truncate(i64::MIN as f64), Ok(i64::MIN));
	}

	#[test]
	fn try_truncate_refuses_nan_and_overflow() {
		for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e19, -1e19] {
			let err = try_truncate(value).unwrap_err();
			assert_matches!(err.kind(), ErrorKind::ConversionFailed { into: "Integer" });
		}
	}
}
