//! Self-describing binary header support.
//!
//! A header is an ordered list of named, fixed-width scalar fields. The
//! wire format carries values only — names and kinds travel out-of-band
//! as a schema, which both sides must agree on.

pub mod binary;
pub mod entry;

pub use binary::BinaryHeader;
pub use entry::{EntryKind, EntryValue, HeaderEntry};
