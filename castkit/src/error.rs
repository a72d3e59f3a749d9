use crate::fixture::Typename;
use std::fmt::{self, Display, Formatter};

/// An error type wrapping an [`ErrorKind`].
#[derive(Debug)]
#[must_use]
pub struct Error {
	kind: ErrorKind,
}

/// Type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a conversion can miss.
#[derive(Debug)]
#[must_use]
#[non_exhaustive]
pub enum ErrorKind {
	/// An `expected` type was required but a `given` was given.
	InvalidTypeGiven {
		expected: Typename,
		given: Typename,
	},

	/// A conversion into `into` was requested for a value with no
	/// representation there.
	ConversionFailed {
		into: Typename,
	},
}

impl Error {
	/// The kind of failure this error reports.
	pub const fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.kind, f)
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::InvalidTypeGiven { expected, given } => {
				write!(f, "invalid type {given:?}, expected {expected:?}")
			}
			Self::ConversionFailed { into } => write!(f, "conversion into {into:?} failed"),
		}
	}
}

impl From<ErrorKind> for Error {
	fn from(kind: ErrorKind) -> Self {
		Self { kind }
	}
}

impl std::error::Error for Error {
	fn cause(&self) -> Option<&(dyn std::error::Error)> {
		None
	}
}
