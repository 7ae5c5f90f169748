//! Proc macros for the introspec workspace.
//!
//! `#[derive(Reflect)]` implements `introspec_core::reflect::Reflect` for a
//! named-field struct by emitting a static field table. Tags go on fields as
//! `#[schema(...)]` keys and are carried to the runtime engine as raw text —
//! the macro never interprets them, so a malformed literal surfaces as a
//! `SchemaError` from `derive_schema`, not as a compile error.
//!
//! ```ignore
//! use introspec::{derive_schema, Reflect};
//!
//! #[derive(Reflect)]
//! struct WeatherParams {
//!     #[schema(description = "The city and state, e.g. San Francisco, CA")]
//!     pub location: String,
//!
//!     #[schema(name = "unit,omitempty", values = "celsius,fahrenheit")]
//!     pub unit: String,
//!
//!     #[schema(default = "3")]
//!     pub days: u8,
//! }
//!
//! let schema = derive_schema::<WeatherParams>()?;
//! ```
//!
//! Recognized keys: `name` (external property name, `,omitempty` suffix
//! makes the field optional, `-` excludes it), `description`, `required`
//! (boolean literal text), `values` (comma-separated enum literals),
//! `default` (single literal), and the bare `flatten` marker. Non-`pub`
//! fields are not part of the public contract and are omitted from the
//! table entirely.

mod reflect_struct;

use proc_macro::TokenStream;

#[proc_macro_derive(Reflect, attributes(schema))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect_struct::derive_reflect_impl(input)
}
