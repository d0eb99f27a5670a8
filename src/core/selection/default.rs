use anyhow::{Result, bail};
use tracing::debug;

use super::{SORT_NONE, SelectionConfiguration, SelectionHandler, SortSettings};
use crate::core::{
    entity::{EntityStore, EntityTypeRepository},
    form::FormElement,
    options::{Localize, SelectOptions},
    query::{Condition, EntityQuery, MatchOperator},
};

/// Selection by target type, bundles, label match and sort.
pub struct DefaultSelection<'a> {
    configuration: SelectionConfiguration,
    entity_types: &'a dyn EntityTypeRepository,
    store: &'a dyn EntityStore,
    localize: &'a dyn Localize,
}

impl<'a> DefaultSelection<'a> {
    pub fn new(
        configuration: SelectionConfiguration,
        entity_types: &'a dyn EntityTypeRepository,
        store: &'a dyn EntityStore,
        localize: &'a dyn Localize,
    ) -> Self {
        Self {
            configuration,
            entity_types,
            store,
            localize,
        }
    }

    /// Defaults of the base handler: every bundle, unsorted, no language restriction.
    pub fn base_configuration() -> SelectionConfiguration {
        SelectionConfiguration {
            target_type: String::new(),
            target_bundles: None,
            sort: SortSettings::default(),
            language_restriction: String::new(),
        }
    }

    pub fn localize(&self) -> &'a dyn Localize {
        self.localize
    }
}

impl SelectionHandler for DefaultSelection<'_> {
    fn configuration(&self) -> &SelectionConfiguration {
        &self.configuration
    }

    fn default_configuration(&self) -> SelectionConfiguration {
        Self::base_configuration()
    }

    fn build_configuration_form(&self) -> Vec<FormElement> {
        let config = &self.configuration;
        let mut form = Vec::new();
        let Some(entity_type) = self.entity_types.definition(&config.target_type) else {
            return form;
        };

        if entity_type.keys.bundle.is_some() {
            let mut bundles = SelectOptions::default();
            for bundle in &entity_type.bundles {
                bundles.insert(bundle.as_str(), bundle.as_str());
            }
            form.push(FormElement::Checkboxes {
                name: "target_bundles".to_string(),
                title: self.localize.localize("Bundles", &[]),
                options: bundles,
                default_value: config.target_bundles.clone().unwrap_or_default(),
            });
        }

        let mut sort_fields = SelectOptions::default();
        sort_fields.insert(SORT_NONE, self.localize.localize("- None -", &[]));
        sort_fields.insert(entity_type.keys.id.as_str(), entity_type.keys.id.as_str());
        for key in [&entity_type.keys.label, &entity_type.keys.langcode]
            .into_iter()
            .flatten()
        {
            sort_fields.insert(key.as_str(), key.as_str());
        }
        form.push(FormElement::Select {
            name: "sort".to_string(),
            title: self.localize.localize("Sort by", &[]),
            options: sort_fields,
            default_value: config.sort.field.clone(),
        });

        form
    }

    fn build_entity_query(
        &self,
        search: Option<&str>,
        match_operator: MatchOperator,
    ) -> Result<EntityQuery> {
        let config = &self.configuration;
        let Some(entity_type) = self.entity_types.definition(&config.target_type) else {
            bail!("Unknown target entity type: \"{}\"", config.target_type);
        };

        let mut query = EntityQuery::new(entity_type.id.as_str());

        match &config.target_bundles {
            // An explicit empty list means nothing is referenceable.
            Some(bundles) if bundles.is_empty() => {
                query.condition(Condition::one_of(entity_type.keys.id.as_str(), Vec::new()));
            }
            Some(bundles) => {
                if let Some(bundle_key) = &entity_type.keys.bundle {
                    query.condition(Condition::one_of(bundle_key.as_str(), bundles.clone()));
                }
            }
            None => {}
        }

        if let Some(search) = search
            && let Some(label_key) = &entity_type.keys.label
        {
            query.condition(Condition::matching(
                label_key.as_str(),
                match_operator,
                search,
            ));
        }

        if config.sort.field != SORT_NONE {
            query.sort(config.sort.field.as_str(), config.sort.direction);
        }

        debug!(
            target_type = %entity_type.id,
            conditions = query.conditions.len(),
            "built base entity query"
        );
        Ok(query)
    }

    fn entity_types(&self) -> &dyn EntityTypeRepository {
        self.entity_types
    }

    fn store(&self) -> &dyn EntityStore {
        self.store
    }
}
