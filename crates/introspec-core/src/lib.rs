//! # `introspec-core` — reflective input-schema derivation
//!
//! Turns a plain Rust struct into a JSON-Schema-like descriptor at runtime,
//! without the caller writing or maintaining a parallel schema by hand. The
//! usual consumer is a protocol layer that must describe tool/function-call
//! parameter shapes to an external caller (an agent framework, an MCP
//! client, OpenAI-style function calling).
//!
//! The pipeline has four cooperating pieces:
//!
//! | piece | where | job |
//! |---|---|---|
//! | type resolver | [`derive_schema`] | unwrap pointer-like indirection down to the struct |
//! | cache | `cache` (internal) | one reflection per distinct struct type, process-wide |
//! | object reflector | `object` (internal) | field enumeration, tag parsing, flattening, required list |
//! | kind reflector | `kind` (internal) | classify field/element types, recurse for composites |
//!
//! Type information comes from the [`reflect::Reflect`] trait; most types
//! get their implementation from `#[derive(Reflect)]` in the
//! `introspec-derive` crate (re-exported by the umbrella `introspec` crate).
//!
//! ```rust
//! use introspec_core::reflect::{FieldShape, Reflect, Shape, StructShape};
//!
//! struct WeatherParams {
//!     location: String,
//!     unit: String,
//! }
//!
//! impl Reflect for WeatherParams {
//!     fn shape() -> Shape {
//!         static FIELDS: &[FieldShape] = &[
//!             FieldShape::new("location", <String as Reflect>::shape)
//!                 .with_description("The city and state, e.g. San Francisco, CA"),
//!             FieldShape::new("unit", <String as Reflect>::shape)
//!                 .with_name("unit,omitempty")
//!                 .with_enum("celsius,fahrenheit"),
//!         ];
//!         Shape::Struct(StructShape {
//!             key: std::any::type_name::<WeatherParams>(),
//!             fields: FIELDS,
//!         })
//!     }
//! }
//!
//! let schema = introspec_core::derive_schema::<WeatherParams>().unwrap();
//! assert_eq!(schema.required, vec!["location".to_string()]);
//! ```
//!
//! The engine is synchronous and touches no I/O; the only shared state is
//! the internal schema cache, which callers may hit from as many threads as
//! they like without extra locking.

use std::sync::Arc;

pub mod error;
pub mod reflect;
pub mod schema;

mod cache;
mod kind;
mod object;

pub use error::{Result, SchemaError};
pub use reflect::{FieldShape, Reflect, Shape, StructShape};
pub use schema::{DataType, Property, RootSchema};

/// Derive the input schema for `T`, serving repeat calls from the cache.
///
/// `T` may be the struct itself or any pointer-like wrapping of it
/// (`Box<Params>`, `&Params`, …); indirection is resolved before the cache
/// is consulted, so every spelling shares one entry.
///
/// # Errors
///
/// * [`SchemaError::InvalidType`] – `T` does not reduce to a struct.
/// * [`SchemaError::UnsupportedKind`] / [`SchemaError::UnsupportedMapKey`] –
///   a field or element type has no schema representation.
/// * [`SchemaError::DuplicateProperty`] – a flattened field collides with an
///   existing property.
/// * [`SchemaError::TagConversion`] – a `values`, `default` or `required`
///   tag literal does not parse as the field's kind.
/// * [`SchemaError::CyclicType`] – the struct refers back to itself.
///
/// Failed derivations are not cached; a later call reflects afresh.
pub fn derive_schema<T: Reflect>() -> Result<Arc<RootSchema>> {
    let meta = T::shape().resolve_struct()?;

    if let Some(schema) = cache::lookup(meta.key) {
        return Ok(schema);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(key = meta.key, "deriving input schema");

    let object = object::reflect_struct(&meta, &mut object::ReflectStack::default())?;
    let schema = Arc::new(RootSchema {
        kind: DataType::Object,
        // The object reflector always fills both for struct-backed objects.
        properties: object.properties.unwrap_or_default(),
        required: object.required.unwrap_or_default(),
    });
    cache::store(meta.key, Arc::clone(&schema));
    Ok(schema)
}

/// Value-taking convenience over [`derive_schema`], for call sites that hold
/// a (zero-value) instance rather than a type parameter.
pub fn schema_of<T: Reflect>(_value: &T) -> Result<Arc<RootSchema>> {
    derive_schema::<T>()
}
