//! Unified error type exposed by **`introspec-core`**.
//!
//! Every failure mode of the derivation pipeline gets its own variant so the
//! caller can tell a mis-tagged field apart from a type the schema language
//! simply cannot express.  Tag correctness is a development-time concern:
//! nothing here is retried or recovered from, the first error aborts the
//! whole derivation and nothing is cached.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The value handed to [`crate::derive_schema`] does not reduce to a
    /// struct, even after unwrapping pointer-like indirection.
    #[error("invalid type: expected a struct, found {kind}")]
    InvalidType { kind: &'static str },

    /// A field or element type has no schema representation (function,
    /// channel, raw pointer, …).
    #[error("unsupported kind: {kind}")]
    UnsupportedKind { kind: &'static str },

    /// A map-typed field whose keys are not string-like.
    #[error("unsupported map key kind `{kind}`, only string keys can be described")]
    UnsupportedMapKey { kind: &'static str },

    /// A flattened field contributed a property name that already exists in
    /// the enclosing object.
    #[error("duplicate property `{name}` merged from a flattened field")]
    DuplicateProperty { name: String },

    /// A `values`, `default` or `required` tag literal could not be parsed
    /// as the field's primitive kind.
    #[error("field `{field}`: literal `{literal}` is not a valid {expected} value")]
    TagConversion {
        field: String,
        literal: String,
        expected: &'static str,
    },

    /// A struct refers back to itself; the produced schema language has no
    /// way to express recursive shapes.
    #[error("cyclic type: `{key}` refers back to itself")]
    CyclicType { key: &'static str },
}
