#![allow(
	// Truncating `as` casts are the subject matter here, not an accident.
	clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss,

	// Simply my coding style, bite me clippy
	clippy::module_name_repetitions,
)]

extern crate static_assertions as sa;

#[macro_use]
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod error;

pub mod convert;
pub mod demo;
pub mod fixture;


pub use error::{Error, ErrorKind, Result};
