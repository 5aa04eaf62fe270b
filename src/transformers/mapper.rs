//! Document-to-model mapping
//!
//! Copies whitelisted fields from decoded documents into [`Model`]s and walks
//! a [`RelationSpec`] to attach related models at any depth.

use serde_json::Value;

use crate::error::Result;
use crate::registry::{ModelDescriptor, ModelRegistry};
use crate::relations::RelationSpec;
use crate::transformers::document;
use crate::types::{Materialized, Model};

/// Maps documents onto models registered in a [`ModelRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct ModelMapper<'a> {
    registry: &'a ModelRegistry,
}

impl<'a> ModelMapper<'a> {
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self { registry }
    }

    /// A sequence maps to `Many`, anything else to `One`.
    pub fn map_document(&self, model_type: &str, doc: &Value) -> Result<Materialized> {
        let descriptor = self.registry.resolve(model_type)?;
        Ok(match doc {
            Value::Array(items) => Materialized::Many(map_collection(descriptor, items)),
            other => Materialized::one(map_one(descriptor, other)),
        })
    }

    /// Map a single document. Sequences are not unpacked.
    pub fn map_one(&self, model_type: &str, doc: &Value) -> Result<Model> {
        let descriptor = self.registry.resolve(model_type)?;
        Ok(map_one(descriptor, doc))
    }

    /// Map every element of `docs` into a model of `model_type`.
    pub fn map_collection(&self, model_type: &str, docs: &[Value]) -> Result<Vec<Model>> {
        let descriptor = self.registry.resolve(model_type)?;
        Ok(map_collection(descriptor, docs))
    }

    /// Attach the relations declared in `spec` to `model`, reading `doc`.
    ///
    /// Fields missing from `doc` (or null) are skipped. A nested entry reuses
    /// the relation already attached under the same name, if any.
    pub fn resolve_relations(&self, spec: &RelationSpec, doc: &Value, model: &mut Model) -> Result<()> {
        for entry in spec.entries() {
            let Some(sub) = document::present(doc, entry.field()) else {
                tracing::trace!(
                    "relation `{}` skipped: field absent on {}",
                    entry.field(),
                    model.model_type()
                );
                continue;
            };

            if entry.is_leaf() {
                let related = self.map_document(entry.model(), sub)?;
                model.set_relation(entry.field(), related);
                continue;
            }

            match model.relation_mut(entry.field()) {
                Some(existing) => self.resolve_into(entry.nested(), sub, existing)?,
                None => {
                    let mut related = self.map_document(entry.model(), sub)?;
                    self.resolve_into(entry.nested(), sub, &mut related)?;
                    model.set_relation(entry.field(), related);
                }
            }
        }
        Ok(())
    }

    /// Resolve `spec` on one model or, for a collection, on each model
    /// against the matching element of `doc`.
    pub fn resolve_into(&self, spec: &RelationSpec, doc: &Value, target: &mut Materialized) -> Result<()> {
        match target {
            Materialized::One(model) => self.resolve_relations(spec, doc, model),
            Materialized::Many(models) => {
                let Value::Array(docs) = doc else {
                    return Ok(());
                };
                for (model, item) in models.iter_mut().zip(docs) {
                    self.resolve_relations(spec, item, model)?;
                }
                Ok(())
            }
        }
    }
}

fn map_one(descriptor: &ModelDescriptor, doc: &Value) -> Model {
    let mut model = descriptor.instantiate();
    let Some(fields) = doc.as_object() else {
        return model;
    };
    for key in descriptor.candidate_keys() {
        if let Some(value) = fields.get(key) {
            model.set_attribute(key, value.clone());
        }
    }
    model
}

// Keys are discovered across all elements; each model then carries the full
// discovered set, null where its own element lacks the key.
fn map_collection(descriptor: &ModelDescriptor, docs: &[Value]) -> Vec<Model> {
    let keys: Vec<&str> = descriptor
        .candidate_keys()
        .into_iter()
        .filter(|key| {
            docs.iter()
                .any(|doc| doc.as_object().is_some_and(|o| o.contains_key(*key)))
        })
        .collect();

    docs.iter()
        .map(|doc| {
            let mut model = descriptor.instantiate();
            for key in &keys {
                let value = doc.get(*key).cloned().unwrap_or(Value::Null);
                model.set_attribute(*key, value);
            }
            model
        })
        .collect()
}
