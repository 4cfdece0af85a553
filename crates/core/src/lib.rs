//! # namedrecord core
//!
//! Turns an ordered sequence of values into an immutable, field-named
//! [`Record`], either directly through [`RecordBuilder`] or by wrapping a
//! producer function with [`wrap`].
//!
//! ## Naming
//!
//! Field names are supplied by the caller or collected from a
//! [`NameSource`] (the terminal by default). Every name goes through the
//! [`Sanitizer`] so the result is always a set of unique identifiers.

pub mod error;
pub mod keywords;
pub mod sanitize;
pub mod record;
pub mod source;
pub mod builder;
pub mod wrap;

#[cfg(test)]
mod property_tests;

// Re-export key types at crate root for ergonomics
pub use error::{Error, NameSourceError, Result};
pub use keywords::ReservedWords;
pub use sanitize::Sanitizer;
pub use record::Record;
pub use source::{AutoNames, ConsoleNames, FixedNames, NameSource};
pub use builder::{RecordBuilder, StdioNames, build, from_names};
pub use wrap::{ConversionArgs, ConvertArgs, make_record, wrap};
