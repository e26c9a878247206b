//! Model specifications to utoipa schema objects.

use crate::service::{CollectionType, CompoundModelSpecification, ModelSpecification, ScalarType};
use crate::spi::ModelNamesRegistry;
use utoipa::openapi::schema::{
    AdditionalProperties, ArrayBuilder, ObjectBuilder, Schema, SchemaFormat, SchemaType, Type,
};
use utoipa::openapi::{Ref, RefOr};

/// Maps models to schemas. Compound models are always referenced through
/// `#/components/schemas/{name}`, named by the group's registry.
#[derive(Debug, Clone, Copy)]
pub struct SchemaMapper<'a> {
    names: &'a ModelNamesRegistry,
}

impl<'a> SchemaMapper<'a> {
    /// Creates a mapper naming models through `names`.
    pub fn new(names: &'a ModelNamesRegistry) -> Self {
        Self { names }
    }

    /// Schema of a model used inline (parameter, media type, property).
    pub fn model(&self, model: &ModelSpecification) -> RefOr<Schema> {
        match model {
            ModelSpecification::Scalar(scalar) => scalar_schema(*scalar),
            ModelSpecification::Collection(collection) => ArrayBuilder::new()
                .items(self.model(&collection.items))
                .unique_items(collection.collection_type == CollectionType::Set)
                .build()
                .into(),
            ModelSpecification::Map(map) => ObjectBuilder::new()
                .schema_type(Type::Object)
                .additional_properties(Some(AdditionalProperties::RefOr(self.model(&map.value))))
                .build()
                .into(),
            ModelSpecification::Compound(compound) => {
                RefOr::Ref(Ref::from_schema_name(self.names.name_for(&compound.key)))
            }
            ModelSpecification::Reference(key) => {
                RefOr::Ref(Ref::from_schema_name(self.names.name_for(key)))
            }
        }
    }

    /// Full definition of a compound model for `components.schemas`.
    pub fn compound(&self, compound: &CompoundModelSpecification) -> RefOr<Schema> {
        let mut builder = ObjectBuilder::new()
            .schema_type(Type::Object)
            .title(Some(self.names.name_for(&compound.key)))
            .description(compound.description.clone());
        for property in &compound.properties {
            let schema = describe(
                self.model(&property.model),
                property.description.clone(),
                property.example.clone(),
            );
            builder = builder.property(property.name.clone(), schema);
            if property.required {
                builder = builder.required(property.name.clone());
            }
        }
        builder.build().into()
    }
}

fn scalar_schema(scalar: ScalarType) -> RefOr<Schema> {
    let (type_, format) = scalar.type_and_format();
    let schema_type = match type_ {
        "integer" => Type::Integer,
        "number" => Type::Number,
        "boolean" => Type::Boolean,
        "object" => Type::Object,
        _ => Type::String,
    };
    ObjectBuilder::new()
        .schema_type(schema_type)
        .format(format.map(|f| SchemaFormat::Custom(f.to_string())))
        .build()
        .into()
}

/// Attaches a parameter default to an inline schema. String schemas keep
/// the raw text; other schemas take it as JSON when it parses, so `25` on an
/// integer stays a number.
pub fn with_default(schema: RefOr<Schema>, default: Option<&str>) -> RefOr<Schema> {
    let Some(raw) = default else {
        return schema;
    };
    let as_json = || {
        serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
    };
    match schema {
        RefOr::T(Schema::Object(mut object)) => {
            object.default = Some(if object.schema_type == SchemaType::Type(Type::String) {
                serde_json::Value::String(raw.to_string())
            } else {
                as_json()
            });
            RefOr::T(Schema::Object(object))
        }
        RefOr::T(Schema::Array(mut array)) => {
            array.default = Some(as_json());
            RefOr::T(Schema::Array(array))
        }
        other => other,
    }
}

/// Attaches a property description and example to inline object schemas.
/// References cannot carry siblings in OpenAPI 3.0 and are left alone.
#[allow(deprecated)]
fn describe(
    schema: RefOr<Schema>,
    description: Option<String>,
    example: Option<serde_json::Value>,
) -> RefOr<Schema> {
    match schema {
        RefOr::T(Schema::Object(mut object)) => {
            if description.is_some() {
                object.description = description;
            }
            if example.is_some() {
                object.example = example;
            }
            RefOr::T(Schema::Object(object))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{ModelKey, PropertySpecification};
    use indexmap::IndexMap;
    use serde_json::json;

    fn registry() -> ModelNamesRegistry {
        ModelNamesRegistry::new(IndexMap::from([(
            ModelKey::qualified("store", "Category"),
            "Category_1".to_string(),
        )]))
    }

    #[test]
    fn test_scalar_carries_type_and_format() {
        let names = ModelNamesRegistry::default();
        let schema = SchemaMapper::new(&names).model(&ModelSpecification::scalar(ScalarType::Long));
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": "integer", "format": "int64" })
        );
    }

    #[test]
    fn test_set_is_unique_array() {
        let names = ModelNamesRegistry::default();
        let model: ModelSpecification =
            crate::from_yaml_str("collection:\n  items:\n    scalar: string\n  collection_type: set\n")
                .unwrap();
        let value = serde_json::to_value(SchemaMapper::new(&names).model(&model)).unwrap();
        assert_eq!(value["type"], json!("array"));
        assert_eq!(value["uniqueItems"], json!(true));
        assert_eq!(value["items"], json!({ "type": "string" }));
    }

    #[test]
    fn test_default_keeps_the_schema_type() {
        let names = ModelNamesRegistry::default();
        let mapper = SchemaMapper::new(&names);
        let integer = mapper.model(&ModelSpecification::scalar(ScalarType::Integer));
        let limit = with_default(integer, Some("25"));
        assert_eq!(serde_json::to_value(&limit).unwrap()["default"], json!(25));
        let string = mapper.model(&ModelSpecification::scalar(ScalarType::String));
        let code = with_default(string, Some("25"));
        assert_eq!(serde_json::to_value(&code).unwrap()["default"], json!("25"));
        let reference = RefOr::Ref(Ref::from_schema_name("Pet"));
        assert_eq!(with_default(reference.clone(), Some("{}")), reference);
    }

    #[test]
    fn test_compound_is_referenced_by_registered_name() {
        let names = registry();
        let schema = SchemaMapper::new(&names)
            .model(&ModelSpecification::reference(ModelKey::qualified("store", "Category")));
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "$ref": "#/components/schemas/Category_1" })
        );
    }

    #[test]
    fn test_compound_definition_lists_required_properties() {
        let names = ModelNamesRegistry::default();
        let compound = CompoundModelSpecification {
            key: ModelKey::new("Pet"),
            properties: vec![
                PropertySpecification {
                    name: "id".into(),
                    model: ModelSpecification::scalar(ScalarType::Long),
                    description: Some("Identifier".into()),
                    required: true,
                    example: None,
                },
                PropertySpecification {
                    name: "name".into(),
                    model: ModelSpecification::scalar(ScalarType::String),
                    description: None,
                    required: false,
                    example: None,
                },
            ],
            description: None,
            extensions: vec![],
        };
        let value = serde_json::to_value(SchemaMapper::new(&names).compound(&compound)).unwrap();
        assert_eq!(value["title"], json!("Pet"));
        assert_eq!(value["required"], json!(["id"]));
        assert_eq!(value["properties"]["id"]["description"], json!("Identifier"));
        let keys: Vec<_> = value["properties"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["id", "name"]);
    }
}
