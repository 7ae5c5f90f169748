//! The [`Reflect`] capability trait and the runtime type metadata it
//! produces.
//!
//! Rust has no runtime reflection, so every type that wants a derived input
//! schema describes its own shape through this trait.  The usual way to get
//! an implementation is `#[derive(Reflect)]` from the `introspec-derive`
//! crate, which emits a static [`FieldShape`] table carrying the raw
//! `#[schema(...)]` tag text.  Hand-written implementations are equally
//! supported — the const builder methods on [`FieldShape`] keep such tables
//! readable:
//!
//! ```rust
//! use introspec_core::reflect::{FieldShape, Reflect, Shape, StructShape};
//!
//! struct Params {
//!     location: String,
//! }
//!
//! impl Reflect for Params {
//!     fn shape() -> Shape {
//!         static FIELDS: &[FieldShape] = &[
//!             FieldShape::new("location", <String as Reflect>::shape)
//!                 .with_description("City and state, e.g. San Francisco, CA"),
//!         ];
//!         Shape::Struct(StructShape {
//!             key: std::any::type_name::<Params>(),
//!             fields: FIELDS,
//!         })
//!     }
//! }
//! ```
//!
//! Tag *text* lives here, tag *parsing* does not: literal conversion,
//! `omitempty` handling and requiredness all happen later in the derivation
//! engine, so a malformed tag surfaces as a [`crate::SchemaError`] from
//! [`crate::derive_schema`] rather than being baked into the metadata.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::{mpsc, Arc};

use crate::error::{Result, SchemaError};

/// A type that can describe its own shape for schema derivation.
pub trait Reflect {
    /// Return the runtime descriptor of this type.
    fn shape() -> Shape;
}

/// Runtime type descriptor consumed by the derivation engine.
///
/// The variants mirror the kinds the schema language can talk about, plus
/// [`Shape::Ref`] for transparent pointer-like indirection and
/// [`Shape::Opaque`] for kinds that have no representation at all.  Signed
/// and unsigned integers stay distinct so tag-literal conversion can use the
/// matching parser.
#[derive(Debug, Clone)]
pub enum Shape {
    String,
    Int,
    Uint,
    Float,
    Bool,
    /// Sequence types; the box holds the element shape.
    List(Box<Shape>),
    /// Keyed mappings. Only the key shape matters: string-keyed maps become
    /// open objects, anything else is rejected.
    Map { key: Box<Shape> },
    Struct(StructShape),
    /// Pointer-like indirection (`Box`, `Arc`, `Rc`, `Option`, references).
    /// The engine looks straight through it; optionality is expressed via
    /// the `required` list, never via the wrapper.
    Ref(Box<Shape>),
    /// A kind the schema language cannot express. Carries the kind name used
    /// in the resulting error.
    Opaque(&'static str),
}

impl Shape {
    /// Kind name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Int => "integer",
            Shape::Uint => "unsigned integer",
            Shape::Float => "number",
            Shape::Bool => "boolean",
            Shape::List(_) => "list",
            Shape::Map { .. } => "map",
            Shape::Struct(_) => "struct",
            Shape::Ref(_) => "reference",
            Shape::Opaque(kind) => kind,
        }
    }

    /// Walk through pointer-like indirection until a struct shows up.
    ///
    /// This is the type-resolution step of [`crate::derive_schema`]: a
    /// `Box<Params>` or `&Params` resolves to the same [`StructShape`] (and
    /// therefore the same cache entry) as `Params` itself.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidType`] if unwrapping terminates at anything
    /// other than a struct.
    pub fn resolve_struct(self) -> Result<StructShape> {
        let mut shape = self;
        loop {
            match shape {
                Shape::Struct(meta) => return Ok(meta),
                Shape::Ref(inner) => shape = *inner,
                other => {
                    return Err(SchemaError::InvalidType {
                        kind: other.kind_name(),
                    })
                }
            }
        }
    }
}

/// Descriptor of one struct type: its stable identity key and field table.
#[derive(Debug, Clone, Copy)]
pub struct StructShape {
    /// Stable identity, unique per struct type for the process lifetime.
    /// The derive emits the fully qualified path
    /// (`module_path!() + "::" + ident`); hand-written impls may use any
    /// stable string, e.g. [`std::any::type_name`].
    pub key: &'static str,
    pub fields: &'static [FieldShape],
}

/// Descriptor of one declared field, tags still in raw text form.
#[derive(Debug, Clone, Copy)]
pub struct FieldShape {
    /// The declared Rust identifier, the fallback external name.
    pub ident: &'static str,
    /// Whether the field is part of the public contract. Non-public fields
    /// are skipped entirely.
    pub public: bool,
    /// Whether the field's own properties are merged into the parent object.
    pub flattened: bool,
    /// Raw naming tag; may carry a trailing `,omitempty`, or be `-` to
    /// exclude the field.
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
    /// Raw boolean literal overriding computed requiredness.
    pub required: Option<&'static str>,
    /// Raw comma-separated enum literal list.
    pub enum_values: Option<&'static str>,
    /// Raw default literal.
    pub default: Option<&'static str>,
    /// Deferred shape of the field's type. A plain function pointer so the
    /// whole table can live in a `static`.
    pub shape: fn() -> Shape,
}

impl FieldShape {
    /// A public, non-flattened, untagged field.
    pub const fn new(ident: &'static str, shape: fn() -> Shape) -> Self {
        Self {
            ident,
            public: true,
            flattened: false,
            name: None,
            description: None,
            required: None,
            enum_values: None,
            default: None,
            shape,
        }
    }

    pub const fn with_name(mut self, tag: &'static str) -> Self {
        self.name = Some(tag);
        self
    }

    pub const fn with_description(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    pub const fn with_required(mut self, literal: &'static str) -> Self {
        self.required = Some(literal);
        self
    }

    pub const fn with_enum(mut self, literals: &'static str) -> Self {
        self.enum_values = Some(literals);
        self
    }

    pub const fn with_default(mut self, literal: &'static str) -> Self {
        self.default = Some(literal);
        self
    }

    pub const fn flattened(mut self) -> Self {
        self.flattened = true;
        self
    }

    pub const fn private(mut self) -> Self {
        self.public = false;
        self
    }
}

macro_rules! impl_reflect {
    ($shape:expr => $($ty:ty),+ $(,)?) => {
        $(impl Reflect for $ty {
            fn shape() -> Shape {
                $shape
            }
        })+
    };
}

impl_reflect!(Shape::String => String, str, char);
impl_reflect!(Shape::Int => i8, i16, i32, i64, i128, isize);
impl_reflect!(Shape::Uint => u8, u16, u32, u64, u128, usize);
impl_reflect!(Shape::Float => f32, f64);
impl_reflect!(Shape::Bool => bool);

impl<T: Reflect> Reflect for Vec<T> {
    fn shape() -> Shape {
        Shape::List(Box::new(T::shape()))
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape() -> Shape {
        Shape::List(Box::new(T::shape()))
    }
}

// Map values stay unconstrained: a string-keyed map is described as an open
// object, so only the key shape is ever inspected.
impl<K: Reflect, V> Reflect for HashMap<K, V> {
    fn shape() -> Shape {
        Shape::Map {
            key: Box::new(K::shape()),
        }
    }
}

impl<K: Reflect, V> Reflect for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Map {
            key: Box::new(K::shape()),
        }
    }
}

macro_rules! impl_reflect_ref {
    ($($ty:ident),+ $(,)?) => {
        $(impl<T: Reflect> Reflect for $ty<T> {
            fn shape() -> Shape {
                Shape::Ref(Box::new(T::shape()))
            }
        })+
    };
}

impl_reflect_ref!(Option, Box, Rc, Arc);

impl<'a, T: Reflect + ?Sized> Reflect for &'a T {
    fn shape() -> Shape {
        Shape::Ref(Box::new(T::shape()))
    }
}

// Kinds with no schema representation. Giving them impls keeps the failure a
// runtime `UnsupportedKind` error from the engine, the same contract other
// schema-less kinds get, instead of an unrelated trait-bound error.
impl<T> Reflect for *const T {
    fn shape() -> Shape {
        Shape::Opaque("raw pointer")
    }
}

impl<T> Reflect for *mut T {
    fn shape() -> Shape {
        Shape::Opaque("raw pointer")
    }
}

impl<T> Reflect for mpsc::Sender<T> {
    fn shape() -> Shape {
        Shape::Opaque("channel")
    }
}

impl<T> Reflect for mpsc::Receiver<T> {
    fn shape() -> Shape {
        Shape::Opaque("channel")
    }
}

impl Reflect for () {
    fn shape() -> Shape {
        Shape::Opaque("unit")
    }
}

macro_rules! impl_reflect_fn {
    ($($arg:ident),*) => {
        impl<R $(, $arg)*> Reflect for fn($($arg),*) -> R {
            fn shape() -> Shape {
                Shape::Opaque("function")
            }
        }
    };
}

impl_reflect_fn!();
impl_reflect_fn!(A1);
impl_reflect_fn!(A1, A2);
impl_reflect_fn!(A1, A2, A3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containers_nest() {
        let shape = <Vec<Vec<u8>> as Reflect>::shape();
        let Shape::List(elem) = shape else {
            panic!("expected list")
        };
        assert!(matches!(*elem, Shape::List(_)));
    }

    #[test]
    fn pointer_likes_are_transparent_refs() {
        assert!(matches!(<Option<i32> as Reflect>::shape(), Shape::Ref(_)));
        assert!(matches!(<Box<String> as Reflect>::shape(), Shape::Ref(_)));
        assert!(matches!(<&str as Reflect>::shape(), Shape::Ref(_)));
    }

    #[test]
    fn resolve_struct_rejects_non_structs() {
        let err = Shape::Ref(Box::new(Shape::Uint)).resolve_struct().unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidType {
                kind: "unsigned integer"
            }
        ));
    }

    #[test]
    fn resolve_struct_unwraps_nested_refs() {
        static FIELDS: &[FieldShape] = &[];
        let shape = Shape::Ref(Box::new(Shape::Ref(Box::new(Shape::Struct(StructShape {
            key: "tests::Empty",
            fields: FIELDS,
        })))));
        let meta = shape.resolve_struct().unwrap();
        assert_eq!(meta.key, "tests::Empty");
    }
}
