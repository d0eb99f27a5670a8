//! Language restriction core.
//!
//! Configuration (admin time) → resolution (per query) → query filter (per
//! execution):
//!
//! - `restriction`: restriction modes and [`resolve_language_code`]
//! - `context`: request-scoped [`ResolutionContext`]
//! - `options`: option listing for the restriction setting
//! - `query`: [`EntityQuery`] and [`augment_query`]
//! - `selection`: selection handlers wiring it all together
//! - `language`, `account`, `entity`: collaborator traits and in-memory providers

pub mod account;
pub mod context;
pub mod entity;
pub mod form;
pub mod language;
pub mod options;
pub mod query;
pub mod restriction;
pub mod selection;

pub use account::{Account, AccountProvider};
pub use context::ResolutionContext;
pub use entity::{Entity, EntityKeys, EntityStore, EntityType, EntityTypeRepository, MemoryEntityStore};
pub use form::FormElement;
pub use language::{Language, LanguageManager, LanguageProvider};
pub use options::{Localize, PlaceholderLocalizer, SelectOptions, list_restriction_options};
pub use query::{Condition, EntityQuery, MatchOperator, SortDirection, augment_query};
pub use restriction::{LanguageRestriction, resolve_language_code};
pub use selection::{
    DefaultSelection, LanguageRestrictSelection, ReferenceableEntities, SelectionConfiguration,
    SelectionHandler, SortSettings,
};
