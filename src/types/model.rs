//! Materialized models
//!
//! A [`Model`] is the output of mapping a document against a
//! [`ModelDescriptor`](crate::registry::ModelDescriptor): the whitelisted
//! attributes that were present in the document plus any relations resolved
//! from a [`RelationSpec`](crate::relations::RelationSpec).

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;

/// A model instance built from a response document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    model_type: String,
    attributes: Map<String, Value>,
    relations: Vec<(String, Materialized)>,
}

impl Model {
    /// Create an empty instance of `model_type`.
    pub fn new(model_type: impl Into<String>) -> Self {
        Self {
            model_type: model_type.into(),
            attributes: Map::new(),
            relations: Vec::new(),
        }
    }

    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Attributes in the order they were set.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }

    pub fn relation(&self, name: &str) -> Option<&Materialized> {
        self.relations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rel)| rel)
    }

    pub fn relation_mut(&mut self, name: &str) -> Option<&mut Materialized> {
        self.relations
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, rel)| rel)
    }

    /// Attach a relation, replacing an existing one of the same name in place.
    pub fn set_relation(&mut self, name: impl Into<String>, relation: Materialized) {
        let name = name.into();
        match self.relation_mut(&name) {
            Some(slot) => *slot = relation,
            None => self.relations.push((name, relation)),
        }
    }

    /// Detach a relation and return it.
    pub fn take_relation(&mut self, name: &str) -> Option<Materialized> {
        let idx = self.relations.iter().position(|(n, _)| n == name)?;
        Some(self.relations.remove(idx).1)
    }

    /// Names of the attached relations, in attachment order.
    pub fn relation_names(&self) -> Vec<&str> {
        self.relations.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn relations(&self) -> impl Iterator<Item = (&str, &Materialized)> {
        self.relations.iter().map(|(n, rel)| (n.as_str(), rel))
    }

    /// JSON view: attributes followed by relations. A relation shadows an
    /// attribute of the same name.
    pub fn to_value(&self) -> Value {
        let mut out = self.attributes.clone();
        for (name, rel) in &self.relations {
            out.insert(name.clone(), rel.to_value());
        }
        Value::Object(out)
    }

    /// Deserialize the JSON view into a host-defined struct.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.to_value())?)
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// One mapped document or a collection of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Materialized {
    One(Box<Model>),
    Many(Vec<Model>),
}

impl Materialized {
    pub fn one(model: Model) -> Self {
        Self::One(Box::new(model))
    }

    pub fn as_one(&self) -> Option<&Model> {
        match self {
            Self::One(model) => Some(&**model),
            Self::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[Model]> {
        match self {
            Self::One(_) => None,
            Self::Many(models) => Some(models),
        }
    }

    pub fn into_one(self) -> Option<Model> {
        match self {
            Self::One(model) => Some(*model),
            Self::Many(_) => None,
        }
    }

    pub fn into_models(self) -> Vec<Model> {
        match self {
            Self::One(model) => vec![*model],
            Self::Many(models) => models,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(models) => models.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::One(model) => model.to_value(),
            Self::Many(models) => Value::Array(models.iter().map(Model::to_value).collect()),
        }
    }
}

impl Serialize for Materialized {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
