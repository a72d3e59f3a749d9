//! The two fixture hierarchies the conversion demos run against: a
//! non-polymorphic pair ([`plain`]) and a polymorphic pair ([`poly`]).

pub mod plain;
pub mod poly;

pub use plain::{Extended, Plain};
pub use poly::{Describe, Generic, Specific};

pub type Typename = &'static str;

pub trait NamedType {
	const TYPENAME: Typename;
}
