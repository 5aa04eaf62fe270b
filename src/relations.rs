//! Relation declarations
//!
//! A [`RelationSpec`] lists which document fields become related models and
//! of which type. Entries can nest to any depth:
//!
//! ```rust,ignore
//! let relations = RelationSpec::new()
//!     .with("comments", "Comment")
//!     .nested("author", "User", |author| author.with("company", "Company"))
//!     .chain([("author", "User"), ("country", "Country")]);
//! ```
//!
//! Declaring a field twice at the same level merges both declarations into
//! the first entry. If the model types differ, the later one wins.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Result, TransformError};

/// Ordered, nested relation declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationSpec {
    entries: Vec<RelationEntry>,
}

/// One relation: a document field mapped into a model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationEntry {
    field: String,
    model: String,
    nested: RelationSpec,
}

impl RelationEntry {
    pub fn new(field: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            model: model.into(),
            nested: RelationSpec::default(),
        }
    }

    pub fn with_nested(mut self, nested: RelationSpec) -> Self {
        self.nested = nested;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn nested(&self) -> &RelationSpec {
        &self.nested
    }

    pub fn is_leaf(&self) -> bool {
        self.nested.is_empty()
    }
}

impl RelationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[RelationEntry] {
        &self.entries
    }

    pub fn get(&self, field: &str) -> Option<&RelationEntry> {
        self.entries.iter().find(|e| e.field == field)
    }

    /// Declare a leaf relation.
    pub fn with(mut self, field: impl Into<String>, model: impl Into<String>) -> Self {
        self.insert(RelationEntry::new(field, model));
        self
    }

    /// Declare a relation whose model carries relations of its own.
    pub fn nested<F>(mut self, field: impl Into<String>, model: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(RelationSpec) -> RelationSpec,
    {
        let nested = build(RelationSpec::new());
        self.insert(RelationEntry::new(field, model).with_nested(nested));
        self
    }

    /// Declare a relation path: each pair nests inside the previous one.
    ///
    /// `chain([("author", "User"), ("company", "Company")])` is the same as
    /// `nested("author", "User", |s| s.with("company", "Company"))`.
    pub fn chain<I, F, M>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = (F, M)>,
        F: Into<String>,
        M: Into<String>,
    {
        let pairs: Vec<(String, String)> = path
            .into_iter()
            .map(|(f, m)| (f.into(), m.into()))
            .collect();

        let mut tail: Option<RelationEntry> = None;
        for (field, model) in pairs.into_iter().rev() {
            let mut entry = RelationEntry::new(field, model);
            if let Some(inner) = tail.take() {
                entry.nested.insert(inner);
            }
            tail = Some(entry);
        }
        if let Some(head) = tail {
            self.insert(head);
        }
        self
    }

    /// Add an entry, merging it into an existing entry for the same field.
    pub fn insert(&mut self, entry: RelationEntry) {
        match self.entries.iter_mut().find(|e| e.field == entry.field) {
            Some(existing) => {
                existing.model = entry.model;
                existing.nested.merge(entry.nested);
            }
            None => self.entries.push(entry),
        }
    }

    pub fn merge(&mut self, other: RelationSpec) {
        for entry in other.entries {
            self.insert(entry);
        }
    }

    /// Parse the JSON form:
    /// `{"author": "User", "posts": {"model": "Post", "relations": {...}}}`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(TransformError::JsonError(
                "relation spec must be a JSON object".to_string(),
            ));
        };

        let mut spec = RelationSpec::new();
        for (field, decl) in map {
            let entry = match decl {
                Value::String(model) => RelationEntry::new(field.as_str(), model.as_str()),
                Value::Object(obj) => {
                    let model = obj.get("model").and_then(Value::as_str).ok_or_else(|| {
                        TransformError::JsonError(format!(
                            "relation `{field}` is missing a string `model`"
                        ))
                    })?;
                    let nested = match obj.get("relations") {
                        Some(Value::Null) | None => RelationSpec::new(),
                        Some(inner) => RelationSpec::from_value(inner)?,
                    };
                    RelationEntry::new(field.as_str(), model).with_nested(nested)
                }
                _ => {
                    return Err(TransformError::JsonError(format!(
                        "relation `{field}` must be a model name or an object"
                    )));
                }
            };
            spec.insert(entry);
        }
        Ok(spec)
    }
}

impl<'de> Deserialize<'de> for RelationSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RelationSpec::from_value(&value).map_err(serde::de::Error::custom)
    }
}
