//! ODF XML element naming.

pub mod namespace;

pub use namespace::QualifiedName;
