//! Kind classification: one [`Shape`] in, one base [`Property`] out.

use crate::error::{Result, SchemaError};
use crate::object::{self, ReflectStack};
use crate::reflect::Shape;
use crate::schema::{DataType, Property};

/// Classify a field or element shape into its schema property, recursing for
/// composites. Structs are handed off to the object reflector wholesale.
pub(crate) fn reflect_kind(shape: &Shape, stack: &mut ReflectStack) -> Result<Property> {
    match shape {
        Shape::String => Ok(Property::new(DataType::String)),
        Shape::Int | Shape::Uint => Ok(Property::new(DataType::Integer)),
        Shape::Float => Ok(Property::new(DataType::Number)),
        Shape::Bool => Ok(Property::new(DataType::Boolean)),
        Shape::List(elem) => {
            let items = reflect_kind(elem, stack)?;
            let mut property = Property::new(DataType::Array);
            property.items = Some(Box::new(items));
            Ok(property)
        }
        Shape::Struct(meta) => object::reflect_struct(meta, stack),
        Shape::Map { key } => {
            let mut key: &Shape = key;
            while let Shape::Ref(inner) = key {
                key = &**inner;
            }
            match key {
                // Open object: members are unknown, so neither `properties`
                // nor `required` is declared.
                Shape::String => Ok(Property::new(DataType::Object)),
                other => Err(SchemaError::UnsupportedMapKey {
                    kind: other.kind_name(),
                }),
            }
        }
        Shape::Ref(inner) => reflect_kind(inner, stack),
        Shape::Opaque(kind) => Err(SchemaError::UnsupportedKind { kind }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_kinds_match_the_table() {
        let cases = [
            (Shape::String, DataType::String),
            (Shape::Int, DataType::Integer),
            (Shape::Uint, DataType::Integer),
            (Shape::Float, DataType::Number),
            (Shape::Bool, DataType::Boolean),
        ];
        for (shape, expected) in cases {
            let property = reflect_kind(&shape, &mut ReflectStack::default()).unwrap();
            assert_eq!(property.kind, expected);
        }
    }

    #[test]
    fn lists_carry_their_element_schema() {
        let shape = Shape::List(Box::new(Shape::Uint));
        let property = reflect_kind(&shape, &mut ReflectStack::default()).unwrap();
        assert_eq!(property.kind, DataType::Array);
        assert_eq!(property.items.unwrap().kind, DataType::Integer);
    }

    #[test]
    fn string_keyed_maps_become_open_objects() {
        let shape = Shape::Map {
            key: Box::new(Shape::Ref(Box::new(Shape::String))),
        };
        let property = reflect_kind(&shape, &mut ReflectStack::default()).unwrap();
        assert_eq!(property.kind, DataType::Object);
        assert!(property.properties.is_none());
        assert!(property.required.is_none());
    }

    #[test]
    fn non_string_map_keys_are_rejected() {
        let shape = Shape::Map {
            key: Box::new(Shape::Int),
        };
        let err = reflect_kind(&shape, &mut ReflectStack::default()).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnsupportedMapKey { kind: "integer" }
        ));
    }

    #[test]
    fn opaque_kinds_are_rejected_by_name() {
        let err = reflect_kind(&Shape::Opaque("channel"), &mut ReflectStack::default())
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedKind { kind: "channel" }));
    }
}
