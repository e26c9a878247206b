#![deny(missing_docs)]

//! # Model Specifications
//!
//! Shape descriptions for parameter, body and response payloads. A model is
//! either a scalar, a collection of another model, a string-keyed map, a
//! named compound (object with properties) or a reference to a compound
//! declared elsewhere.

use crate::service::VendorExtension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a named (compound) model.
///
/// The namespace keeps models with the same simple name apart; the
/// `ModelNamesRegistry` decides the published name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelKey {
    /// Optional qualifier, e.g. a module path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Simple model name.
    pub name: String,
}

impl ModelKey {
    /// Creates a key without namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }

    /// Creates a namespaced key.
    pub fn qualified(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}.{}", ns, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Primitive value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Calendar date.
    Date,
    /// Timestamp.
    DateTime,
    /// Plain string.
    String,
    /// Base64 encoded bytes.
    Byte,
    /// Raw binary.
    Binary,
    /// Password string.
    Password,
    /// Boolean.
    Boolean,
    /// Double precision number.
    Double,
    /// Single precision number.
    Float,
    /// Arbitrary size integer.
    BigInteger,
    /// Arbitrary precision decimal.
    BigDecimal,
    /// UUID string.
    Uuid,
    /// E-mail address.
    Email,
    /// Currency code.
    Currency,
    /// URI.
    Uri,
    /// URL.
    Url,
    /// Untyped object.
    Object,
}

impl ScalarType {
    /// The JSON schema `type` and optional `format` for this scalar.
    pub fn type_and_format(&self) -> (&'static str, Option<&'static str>) {
        match self {
            ScalarType::Integer => ("integer", Some("int32")),
            ScalarType::Long => ("integer", Some("int64")),
            ScalarType::Date => ("string", Some("date")),
            ScalarType::DateTime => ("string", Some("date-time")),
            ScalarType::String => ("string", None),
            ScalarType::Byte => ("string", Some("byte")),
            ScalarType::Binary => ("string", Some("binary")),
            ScalarType::Password => ("string", Some("password")),
            ScalarType::Boolean => ("boolean", None),
            ScalarType::Double => ("number", Some("double")),
            ScalarType::Float => ("number", Some("float")),
            ScalarType::BigInteger => ("integer", Some("bigint")),
            ScalarType::BigDecimal => ("number", Some("bigdecimal")),
            ScalarType::Uuid => ("string", Some("uuid")),
            ScalarType::Email => ("string", Some("email")),
            ScalarType::Currency => ("string", Some("iso-4217")),
            ScalarType::Uri => ("string", Some("uri")),
            ScalarType::Url => ("string", Some("url")),
            ScalarType::Object => ("object", None),
        }
    }
}

/// Container kind of a collection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionType {
    /// Ordered, duplicates allowed.
    #[default]
    List,
    /// Unique items.
    Set,
    /// Fixed array.
    Array,
}

/// A collection of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSpecification {
    /// Item model.
    pub items: Box<ModelSpecification>,
    /// Container kind.
    #[serde(default)]
    pub collection_type: CollectionType,
}

/// A string keyed map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSpecification {
    /// Value model.
    pub value: Box<ModelSpecification>,
}

/// A single property of a compound model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpecification {
    /// Property name.
    pub name: String,
    /// Property model.
    pub model: ModelSpecification,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the property is required.
    #[serde(default)]
    pub required: bool,
    /// Example value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// A named object with properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundModelSpecification {
    /// Model identity.
    pub key: ModelKey,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertySpecification>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Facet extensions published on media types using this model.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<VendorExtension>,
}

/// Shape of a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSpecification {
    /// A primitive.
    Scalar(ScalarType),
    /// A list, set or array.
    Collection(CollectionSpecification),
    /// A string keyed map.
    Map(MapSpecification),
    /// A named object.
    Compound(CompoundModelSpecification),
    /// A reference to a compound model.
    Reference(ModelKey),
}

impl ModelSpecification {
    /// Shorthand for a scalar model.
    pub fn scalar(scalar: ScalarType) -> Self {
        ModelSpecification::Scalar(scalar)
    }

    /// Shorthand for a list of `items`.
    pub fn list_of(items: ModelSpecification) -> Self {
        ModelSpecification::Collection(CollectionSpecification {
            items: Box::new(items),
            collection_type: CollectionType::List,
        })
    }

    /// Shorthand for a reference.
    pub fn reference(key: ModelKey) -> Self {
        ModelSpecification::Reference(key)
    }

    /// The scalar type, when this is a scalar.
    pub fn as_scalar(&self) -> Option<ScalarType> {
        match self {
            ModelSpecification::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    /// The collection, when this is a collection.
    pub fn as_collection(&self) -> Option<&CollectionSpecification> {
        match self {
            ModelSpecification::Collection(c) => Some(c),
            _ => None,
        }
    }

    /// Facet extensions of the underlying compound model, if any.
    pub fn facet_extensions(&self) -> &[VendorExtension] {
        match self {
            ModelSpecification::Compound(c) => &c.extensions,
            _ => &[],
        }
    }

    /// Visits every compound model reachable from this one, depth first.
    pub fn visit_compounds<'a>(&'a self, visitor: &mut impl FnMut(&'a CompoundModelSpecification)) {
        match self {
            ModelSpecification::Scalar(_) | ModelSpecification::Reference(_) => {}
            ModelSpecification::Collection(c) => c.items.visit_compounds(visitor),
            ModelSpecification::Map(m) => m.value.visit_compounds(visitor),
            ModelSpecification::Compound(c) => {
                visitor(c);
                for property in &c.properties {
                    property.model.visit_compounds(visitor);
                }
            }
        }
    }
}
