//! # `introspec` – The umbrella crate
//!
//! One-stop import gluing together the two building-block crates in the
//! workspace
//!
//! | Crate                  | What it provides                                                        |
//! |------------------------|-------------------------------------------------------------------------|
//! | **`introspec-core`**   | Schema model, `Reflect` trait + metadata, the derivation engine, errors |
//! | **`introspec-derive`** | `#[derive(Reflect)]` for named-field structs *(default feature)*        |
//!
//! The point of the crate: declare a tool's parameter struct once, in Rust,
//! and get the JSON-Schema `parameters` payload of a function-calling /
//! tool declaration derived from it — names, requiredness, enums and
//! defaults included — instead of hand-maintaining a `json!` blob next to
//! the struct.
//!
//! ## Quick example
//!
//! ```rust
//! use introspec::{derive_schema, Reflect};
//!
//! #[derive(Reflect)]
//! struct WeatherParams {
//!     #[schema(description = "The city and state, e.g. San Francisco, CA")]
//!     pub location: String,
//!
//!     #[schema(name = "unit,omitempty", values = "celsius,fahrenheit")]
//!     pub unit: String,
//! }
//!
//! let schema = derive_schema::<WeatherParams>().unwrap();
//! assert_eq!(schema.required, vec!["location".to_string()]);
//! println!("{}", serde_json::to_string_pretty(schema.as_ref()).unwrap());
//! ```
//!
//! Derivation happens once per struct type for the process lifetime; repeat
//! calls are served from a concurrent cache, so it is fine to call
//! [`derive_schema`] on every request inside a protocol handler.
//!
//! Disable the `derive` feature to depend on the engine alone and implement
//! [`Reflect`] by hand (see `introspec_core::reflect` for the metadata
//! types).

pub use introspec_core::*;

#[cfg(feature = "derive")]
pub use introspec_derive::Reflect;
