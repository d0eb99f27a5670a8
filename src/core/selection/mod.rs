//! Entity reference selection handlers.
//!
//! A [`SelectionHandler`] builds the query deciding which entities a
//! reference field may point at. [`DefaultSelection`] handles target type,
//! bundles, label matching and sorting. [`LanguageRestrictSelection`] wraps
//! it and narrows the query to a single language.
//!
//! The referenceable/count/validate operations are provided methods on the
//! trait. They always go through [`SelectionHandler::build_entity_query`], so
//! a wrapper that overrides the query hook changes all three at once.

mod default;
mod language_restrict;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use default::DefaultSelection;
pub use language_restrict::LanguageRestrictSelection;

use super::{
    entity::{EntityStore, EntityTypeRepository},
    form::FormElement,
    query::{Condition, EntityQuery, MatchOperator, SortDirection},
};

/// Sort field value meaning "leave results unsorted".
pub const SORT_NONE: &str = "_none";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSettings {
    #[serde(default = "default_sort_field")]
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

fn default_sort_field() -> String {
    SORT_NONE.to_string()
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            field: default_sort_field(),
            direction: SortDirection::Asc,
        }
    }
}

/// Settings of one reference field's selection handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfiguration {
    #[serde(default)]
    pub target_type: String,
    /// `None` allows every bundle. An empty list allows none.
    #[serde(default)]
    pub target_bundles: Option<Vec<String>>,
    #[serde(default)]
    pub sort: SortSettings,
    #[serde(default)]
    pub language_restriction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceableEntity {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleEntities {
    pub bundle: String,
    pub entities: Vec<ReferenceableEntity>,
}

/// Referenceable entities grouped by bundle, in result order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReferenceableEntities(Vec<BundleEntities>);

impl ReferenceableEntities {
    pub fn push(&mut self, bundle: &str, entity: ReferenceableEntity) {
        match self.0.iter_mut().find(|group| group.bundle == bundle) {
            Some(group) => group.entities.push(entity),
            None => self.0.push(BundleEntities {
                bundle: bundle.to_string(),
                entities: vec![entity],
            }),
        }
    }

    pub fn bundles(&self) -> &[BundleEntities] {
        &self.0
    }

    pub fn ids(&self) -> Vec<&str> {
        self.0
            .iter()
            .flat_map(|group| group.entities.iter().map(|e| e.id.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|group| group.entities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait SelectionHandler {
    fn configuration(&self) -> &SelectionConfiguration;

    fn default_configuration(&self) -> SelectionConfiguration;

    fn build_configuration_form(&self) -> Vec<FormElement>;

    /// Query for entities the field may reference, optionally matching
    /// `search` against the entity label.
    fn build_entity_query(
        &self,
        search: Option<&str>,
        match_operator: MatchOperator,
    ) -> Result<EntityQuery>;

    fn entity_types(&self) -> &dyn EntityTypeRepository;

    fn store(&self) -> &dyn EntityStore;

    /// Referenceable entities grouped by bundle. A `limit` of 0 means no limit.
    fn get_referenceable_entities(
        &self,
        search: Option<&str>,
        match_operator: MatchOperator,
        limit: usize,
    ) -> Result<ReferenceableEntities> {
        let mut query = self.build_entity_query(search, match_operator)?;
        if limit > 0 {
            query.range(limit);
        }

        let mut referenceable = ReferenceableEntities::default();
        for entity in self.store().execute(&query)? {
            let bundle = entity.bundle.as_deref().unwrap_or(&entity.entity_type);
            referenceable.push(
                bundle,
                ReferenceableEntity {
                    id: entity.id.clone(),
                    label: entity.label.clone(),
                },
            );
        }
        Ok(referenceable)
    }

    fn count_referenceable_entities(
        &self,
        search: Option<&str>,
        match_operator: MatchOperator,
    ) -> Result<usize> {
        let query = self.build_entity_query(search, match_operator)?;
        self.store().count(&query)
    }

    /// The subset of `ids` the field may reference, in input order.
    fn validate_referenceable_entities(&self, ids: &[String]) -> Result<Vec<String>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = self.build_entity_query(None, MatchOperator::default())?;
        let id_key = self
            .entity_types()
            .definition(&query.entity_type)
            .map_or_else(|| "id".to_string(), |t| t.keys.id.clone());
        query.condition(Condition::one_of(id_key, ids.to_vec()));

        let found = self.store().execute(&query)?;
        Ok(ids
            .iter()
            .filter(|id| found.iter().any(|e| &e.id == *id))
            .cloned()
            .collect())
    }
}
