//! Object reflection: field enumeration, tag parsing and flattening.
//!
//! Explicit fields are processed in declaration order; flattened fields are
//! deferred until the end so duplicate detection always runs against the
//! fully populated explicit set.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::kind::reflect_kind;
use crate::reflect::{FieldShape, Shape, StructShape};
use crate::schema::{DataType, Property};

/// Struct keys currently being reflected. A key showing up twice means the
/// type refers back to itself, which the schema language cannot express.
#[derive(Debug, Default)]
pub(crate) struct ReflectStack(Vec<&'static str>);

/// Derive the object property for one struct type.
pub(crate) fn reflect_struct(meta: &StructShape, stack: &mut ReflectStack) -> Result<Property> {
    if stack.0.contains(&meta.key) {
        return Err(SchemaError::CyclicType { key: meta.key });
    }
    stack.0.push(meta.key);
    let result = reflect_fields(meta, stack);
    stack.0.pop();
    result
}

fn reflect_fields(meta: &StructShape, stack: &mut ReflectStack) -> Result<Property> {
    let mut properties = BTreeMap::new();
    let mut required = Vec::new();
    let mut flattened = Vec::new();

    for field in meta.fields {
        if !field.public {
            continue;
        }
        if field.name == Some("-") {
            continue;
        }
        if field.flattened {
            flattened.push(field);
            continue;
        }

        let (name, mut is_required) = external_name(field);
        let shape = (field.shape)();
        let mut property = reflect_kind(&shape, stack)?;

        if let Some(text) = field.description {
            property.description = Some(text.to_owned());
        }
        if let Some(raw) = field.enum_values {
            property.enum_values = Some(parse_enum_tag(raw, &shape, name)?);
        }
        if let Some(raw) = field.default {
            property.default = Some(parse_default_tag(raw, &shape, name)?);
        }
        if let Some(raw) = field.required {
            is_required = raw.parse::<bool>().map_err(|_| SchemaError::TagConversion {
                field: name.to_owned(),
                literal: raw.to_owned(),
                expected: "boolean",
            })?;
        }

        properties.insert(name.to_owned(), property);
        if is_required {
            required.push(name.to_owned());
        }
    }

    for field in flattened {
        merge_flattened(field, &mut properties, &mut required, stack)?;
    }

    let mut property = Property::new(DataType::Object);
    property.properties = Some(properties);
    property.required = Some(required);
    Ok(property)
}

/// Resolve the external property name and the requiredness it implies: the
/// naming tag if present (with a trailing `,omitempty` stripped and turning
/// the field optional), else the declared identifier. An empty tag counts
/// as absent.
fn external_name(field: &FieldShape) -> (&'static str, bool) {
    let mut name = match field.name {
        Some("") | None => field.ident,
        Some(tag) => tag,
    };
    let mut required = true;
    if let Some(stripped) = name.strip_suffix(",omitempty") {
        name = stripped;
        required = false;
    }
    (name, required)
}

fn merge_flattened(
    field: &FieldShape,
    properties: &mut BTreeMap<String, Property>,
    required: &mut Vec<String>,
    stack: &mut ReflectStack,
) -> Result<()> {
    let meta = (field.shape)().resolve_struct()?;
    let object = reflect_struct(&meta, stack)?;
    for (name, property) in object.properties.unwrap_or_default() {
        if properties.contains_key(&name) {
            return Err(SchemaError::DuplicateProperty { name });
        }
        properties.insert(name, property);
    }
    required.extend(object.required.unwrap_or_default());
    Ok(())
}

fn parse_enum_tag(raw: &str, shape: &Shape, field: &str) -> Result<Vec<Value>> {
    raw.split(',')
        .map(|literal| convert_literal(literal.trim(), shape, field))
        .collect()
}

fn parse_default_tag(raw: &str, shape: &Shape, field: &str) -> Result<Value> {
    match shape {
        Shape::String | Shape::Int | Shape::Uint | Shape::Float | Shape::Bool => {
            convert_literal(raw, shape, field)
        }
        // Composite kinds keep the raw text; the eventual consumer may
        // interpret it contextually.
        _ => Ok(Value::String(raw.to_owned())),
    }
}

/// Convert one tag literal according to the field's primitive shape.
fn convert_literal(literal: &str, shape: &Shape, field: &str) -> Result<Value> {
    let conversion_error = |expected: &'static str| SchemaError::TagConversion {
        field: field.to_owned(),
        literal: literal.to_owned(),
        expected,
    };
    match shape {
        Shape::String => Ok(Value::String(literal.to_owned())),
        Shape::Int => literal
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| conversion_error("integer")),
        Shape::Uint => literal
            .parse::<u64>()
            .map(Value::from)
            .map_err(|_| conversion_error("unsigned integer")),
        Shape::Float => literal
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| conversion_error("number")),
        Shape::Bool => literal
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| conversion_error("boolean")),
        other => Err(conversion_error(other.kind_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Reflect;

    #[test]
    fn literal_conversion_matches_the_field_kind() {
        assert_eq!(
            convert_literal("7", &Shape::Int, "n").unwrap(),
            Value::from(7i64)
        );
        assert_eq!(
            convert_literal("7", &Shape::Uint, "n").unwrap(),
            Value::from(7u64)
        );
        assert_eq!(
            convert_literal("0.5", &Shape::Float, "n").unwrap(),
            Value::from(0.5)
        );
        assert_eq!(
            convert_literal("true", &Shape::Bool, "n").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            convert_literal("7", &Shape::String, "n").unwrap(),
            Value::String("7".into())
        );
    }

    #[test]
    fn malformed_literals_name_field_literal_and_kind() {
        let err = convert_literal("x", &Shape::Int, "priority").unwrap_err();
        let SchemaError::TagConversion {
            field,
            literal,
            expected,
        } = err
        else {
            panic!("expected TagConversion")
        };
        assert_eq!(field, "priority");
        assert_eq!(literal, "x");
        assert_eq!(expected, "integer");
    }

    #[test]
    fn enum_tags_on_composite_kinds_are_rejected() {
        let shape = Shape::List(Box::new(Shape::String));
        let err = parse_enum_tag("a,b", &shape, "tags").unwrap_err();
        assert!(matches!(err, SchemaError::TagConversion { expected: "list", .. }));
    }

    #[test]
    fn enum_literals_are_trimmed() {
        let values = parse_enum_tag(" 1, 2 ,3", &Shape::Int, "n").unwrap();
        assert_eq!(values, vec![Value::from(1), Value::from(2), Value::from(3)]);
    }

    #[test]
    fn composite_defaults_keep_the_raw_text() {
        let shape = Shape::List(Box::new(Shape::String));
        let value = parse_default_tag("[]", &shape, "tags").unwrap();
        assert_eq!(value, Value::String("[]".into()));
    }

    #[test]
    fn omitempty_suffix_strips_and_marks_optional() {
        let field = FieldShape::new("unit", <String as Reflect>::shape).with_name("unit,omitempty");
        assert_eq!(external_name(&field), ("unit", false));

        let field = FieldShape::new("unit", <String as Reflect>::shape);
        assert_eq!(external_name(&field), ("unit", true));
    }

    #[test]
    fn empty_naming_tag_falls_back_to_the_identifier() {
        let field = FieldShape::new("location", <String as Reflect>::shape).with_name("");
        assert_eq!(external_name(&field), ("location", true));
    }

    #[test]
    fn private_fields_are_skipped() {
        static FIELDS: &[FieldShape] = &[
            FieldShape::new("token", <String as Reflect>::shape).private(),
            FieldShape::new("query", <String as Reflect>::shape),
        ];
        let meta = StructShape {
            key: "tests::Hidden",
            fields: FIELDS,
        };
        let object = reflect_struct(&meta, &mut ReflectStack::default()).unwrap();
        let properties = object.properties.unwrap();
        assert!(properties.contains_key("query"));
        assert!(!properties.contains_key("token"));
    }

    #[test]
    fn required_tag_overrides_and_rejects_garbage() {
        static FIELDS: &[FieldShape] = &[
            FieldShape::new("query", <String as Reflect>::shape).with_required("false"),
        ];
        let meta = StructShape {
            key: "tests::Overridden",
            fields: FIELDS,
        };
        let object = reflect_struct(&meta, &mut ReflectStack::default()).unwrap();
        assert!(object.required.unwrap().is_empty());

        static BAD: &[FieldShape] = &[
            FieldShape::new("query", <String as Reflect>::shape).with_required("yes"),
        ];
        let meta = StructShape {
            key: "tests::Garbage",
            fields: BAD,
        };
        let err = reflect_struct(&meta, &mut ReflectStack::default()).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::TagConversion { expected: "boolean", .. }
        ));
    }
}
