//! Entity type metadata and the in-memory entity store.

use std::cmp::Ordering;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::query::{Condition, ConditionValue, EntityQuery, MatchOperator, SortDirection};

/// Field names an entity type uses for its well-known attributes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityKeys {
    #[serde(default = "default_id_key")]
    pub id: String,
    #[serde(default)]
    pub bundle: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// The language attribute key. Absent for untranslatable types.
    #[serde(default)]
    pub langcode: Option<String>,
}

fn default_id_key() -> String {
    "id".to_string()
}

impl Default for EntityKeys {
    fn default() -> Self {
        Self {
            id: default_id_key(),
            bundle: None,
            label: None,
            langcode: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub keys: EntityKeys,
    /// Bundle ids, for types with a bundle key.
    #[serde(default)]
    pub bundles: Vec<String>,
}

impl EntityType {
    /// Key lookup by name, as the query builder spells them.
    pub fn key(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(self.keys.id.as_str()),
            "bundle" => self.keys.bundle.as_deref(),
            "label" => self.keys.label.as_deref(),
            "langcode" => self.keys.langcode.as_deref(),
            _ => None,
        }
    }
}

pub trait EntityTypeRepository {
    fn definition(&self, entity_type_id: &str) -> Option<&EntityType>;

    fn language_key(&self, entity_type_id: &str) -> Option<&str> {
        self.definition(entity_type_id)
            .and_then(|t| t.keys.langcode.as_deref())
    }
}

impl EntityTypeRepository for [EntityType] {
    fn definition(&self, entity_type_id: &str) -> Option<&EntityType> {
        self.iter().find(|t| t.id == entity_type_id)
    }
}

impl EntityTypeRepository for Vec<EntityType> {
    fn definition(&self, entity_type_id: &str) -> Option<&EntityType> {
        self.as_slice().definition(entity_type_id)
    }
}

/// A stored entity. Well-known attributes live in their own fields; anything
/// else a query might reference goes in `fields`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub entity_type: String,
    pub id: String,
    #[serde(default)]
    pub bundle: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub langcode: Option<String>,
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Entity {
    fn field_value(&self, entity_type: &EntityType, field: &str) -> Option<String> {
        let keys = &entity_type.keys;
        if field == keys.id {
            return Some(self.id.clone());
        }
        if keys.bundle.as_deref() == Some(field) {
            return self.bundle.clone();
        }
        if keys.label.as_deref() == Some(field) {
            return Some(self.label.clone());
        }
        if keys.langcode.as_deref() == Some(field) {
            return self.langcode.clone();
        }
        self.fields.get(field).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

pub trait EntityStore {
    fn execute(&self, query: &EntityQuery) -> Result<Vec<&Entity>>;

    fn count(&self, query: &EntityQuery) -> Result<usize> {
        let mut unlimited = query.clone();
        unlimited.limit = None;
        Ok(self.execute(&unlimited)?.len())
    }
}

/// Evaluates queries against a list of entities held in memory.
///
/// Conditions are AND-ed. String search operators compare case-insensitively;
/// `=` and `<>` compare exactly. A field an entity does not carry never
/// matches.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntityStore {
    entity_types: Vec<EntityType>,
    entities: Vec<Entity>,
}

impl MemoryEntityStore {
    pub fn new(entity_types: Vec<EntityType>, entities: Vec<Entity>) -> Self {
        Self {
            entity_types,
            entities,
        }
    }

    pub fn entity_types(&self) -> &[EntityType] {
        &self.entity_types
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

impl EntityTypeRepository for MemoryEntityStore {
    fn definition(&self, entity_type_id: &str) -> Option<&EntityType> {
        self.entity_types.definition(entity_type_id)
    }
}

impl EntityStore for MemoryEntityStore {
    fn execute(&self, query: &EntityQuery) -> Result<Vec<&Entity>> {
        let Some(entity_type) = self.definition(&query.entity_type) else {
            bail!("Unknown entity type: \"{}\"", query.entity_type);
        };

        let mut matched: Vec<&Entity> = self
            .entities
            .iter()
            .filter(|e| e.entity_type == entity_type.id)
            .filter(|e| {
                query
                    .conditions
                    .iter()
                    .all(|c| condition_matches(c, e.field_value(entity_type, &c.field)))
            })
            .collect();

        if !query.sorts.is_empty() {
            matched.sort_by(|a, b| {
                query.sorts.iter().fold(Ordering::Equal, |ord, sort| {
                    ord.then_with(|| {
                        let left = a.field_value(entity_type, &sort.field);
                        let right = b.field_value(entity_type, &sort.field);
                        match sort.direction {
                            SortDirection::Asc => left.cmp(&right),
                            SortDirection::Desc => right.cmp(&left),
                        }
                    })
                })
            });
        }

        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }

        Ok(matched)
    }
}

fn condition_matches(condition: &Condition, actual: Option<String>) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    match &condition.value {
        ConditionValue::In(values) => values.contains(&actual),
        ConditionValue::Match(op, expected) => {
            let haystack = actual.to_lowercase();
            let needle = expected.to_lowercase();
            match op {
                MatchOperator::Equals => actual == *expected,
                MatchOperator::NotEquals => actual != *expected,
                MatchOperator::Contains => haystack.contains(&needle),
                MatchOperator::StartsWith => haystack.starts_with(&needle),
                MatchOperator::EndsWith => haystack.ends_with(&needle),
            }
        }
    }
}
