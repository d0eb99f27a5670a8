use anyhow::Result;
use tracing::debug;

use super::{DefaultSelection, SelectionConfiguration, SelectionHandler};
use crate::core::{
    account::AccountProvider,
    context::ResolutionContext,
    entity::{EntityStore, EntityTypeRepository},
    form::FormElement,
    language::LanguageProvider,
    options::{SelectOptions, list_restriction_options},
    query::{EntityQuery, MatchOperator, augment_query},
    restriction::resolve_language_code,
};

/// Default selection narrowed to entities in one language.
///
/// The language comes from the `language_restriction` setting, resolved
/// against the language provider and the acting user each time a query is
/// built.
pub struct LanguageRestrictSelection<'a> {
    base: DefaultSelection<'a>,
    languages: &'a dyn LanguageProvider,
    account: &'a dyn AccountProvider,
}

impl<'a> LanguageRestrictSelection<'a> {
    pub fn new(
        base: DefaultSelection<'a>,
        languages: &'a dyn LanguageProvider,
        account: &'a dyn AccountProvider,
    ) -> Self {
        Self {
            base,
            languages,
            account,
        }
    }

    pub fn restriction_options(&self) -> SelectOptions {
        list_restriction_options(
            &self.languages.languages(true),
            &self.languages.default_language().name,
            self.base.localize(),
        )
    }

    /// Resolution context for the current request.
    pub fn resolution_context(&self) -> ResolutionContext {
        ResolutionContext::capture(self.languages, self.account)
    }

    /// The language code queries are filtered on, empty for none.
    pub fn language_restriction(&self) -> String {
        resolve_language_code(
            &self.base.configuration().language_restriction,
            &self.resolution_context(),
        )
    }
}

impl SelectionHandler for LanguageRestrictSelection<'_> {
    fn configuration(&self) -> &SelectionConfiguration {
        self.base.configuration()
    }

    fn default_configuration(&self) -> SelectionConfiguration {
        SelectionConfiguration {
            language_restriction: String::new(),
            ..self.base.default_configuration()
        }
    }

    fn build_configuration_form(&self) -> Vec<FormElement> {
        let mut form = self.base.build_configuration_form();
        form.push(FormElement::Select {
            name: "language_restriction".to_string(),
            title: self
                .base
                .localize()
                .localize("Restrict available items by language", &[]),
            options: self.restriction_options(),
            default_value: self.configuration().language_restriction.clone(),
        });
        form
    }

    fn build_entity_query(
        &self,
        search: Option<&str>,
        match_operator: MatchOperator,
    ) -> Result<EntityQuery> {
        let query = self.base.build_entity_query(search, match_operator)?;
        let langcode = self.language_restriction();
        let language_key = self.entity_types().language_key(&query.entity_type);

        debug!(
            restriction = %self.configuration().language_restriction,
            langcode = %langcode,
            language_key = ?language_key,
            "resolved language restriction"
        );

        Ok(augment_query(query, language_key, &langcode))
    }

    fn entity_types(&self) -> &dyn EntityTypeRepository {
        self.base.entity_types()
    }

    fn store(&self) -> &dyn EntityStore {
        self.base.store()
    }
}
