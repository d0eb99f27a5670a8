//! Entity queries as built by selection handlers.
//!
//! An [`EntityQuery`] is a plain description: a target entity type, a list of
//! AND-ed conditions, sorts and an optional range. Executing it is the job of
//! an [`EntityStore`](super::entity::EntityStore).

use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MatchOperator {
    #[serde(rename = "=")]
    Equals,
    #[serde(rename = "<>")]
    NotEquals,
    #[default]
    #[serde(rename = "CONTAINS")]
    Contains,
    #[serde(rename = "STARTS_WITH")]
    StartsWith,
    #[serde(rename = "ENDS_WITH")]
    EndsWith,
}

impl MatchOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "<>",
            Self::Contains => "CONTAINS",
            Self::StartsWith => "STARTS_WITH",
            Self::EndsWith => "ENDS_WITH",
        }
    }
}

impl FromStr for MatchOperator {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "=" | "EQUALS" => Ok(Self::Equals),
            "<>" | "!=" | "NOT_EQUALS" => Ok(Self::NotEquals),
            "CONTAINS" => Ok(Self::Contains),
            "STARTS_WITH" => Ok(Self::StartsWith),
            "ENDS_WITH" => Ok(Self::EndsWith),
            _ => bail!("Unknown match operator: \"{}\"", s),
        }
    }
}

impl fmt::Display for MatchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "camelCase")]
pub enum ConditionValue {
    /// Compare with a match operator.
    Match(MatchOperator, String),
    /// Field value must be one of the listed values. An empty list matches nothing.
    In(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Condition {
    pub field: String,
    #[serde(flatten)]
    pub value: ConditionValue,
}

impl Condition {
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::matching(field, MatchOperator::Equals, value)
    }

    pub fn matching(
        field: impl Into<String>,
        operator: MatchOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            value: ConditionValue::Match(operator, value.into()),
        }
    }

    pub fn one_of(field: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            field: field.into(),
            value: ConditionValue::In(values),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            ConditionValue::Match(op, value) => write!(f, "{} {} {:?}", self.field, op, value),
            ConditionValue::In(values) => write!(f, "{} IN {:?}", self.field, values),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("ASC"),
            Self::Desc => f.write_str("DESC"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityQuery {
    pub entity_type: String,
    pub conditions: Vec<Condition>,
    pub sorts: Vec<Sort>,
    /// Maximum number of results, `None` for all.
    pub limit: Option<usize>,
}

impl EntityQuery {
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            conditions: Vec::new(),
            sorts: Vec::new(),
            limit: None,
        }
    }

    /// Add a condition unless an identical one is already present.
    pub fn condition(&mut self, condition: Condition) -> &mut Self {
        if !self.conditions.contains(&condition) {
            self.conditions.push(condition);
        }
        self
    }

    pub fn sort(&mut self, field: impl Into<String>, direction: SortDirection) -> &mut Self {
        self.sorts.push(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn range(&mut self, limit: usize) -> &mut Self {
        self.limit = Some(limit);
        self
    }
}

impl fmt::Display for EntityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FROM {}", self.entity_type)?;
        for (i, condition) in self.conditions.iter().enumerate() {
            let keyword = if i == 0 { "WHERE" } else { "AND" };
            write!(f, "\n  {} {}", keyword, condition)?;
        }
        if !self.sorts.is_empty() {
            let sorts: Vec<String> = self
                .sorts
                .iter()
                .map(|s| format!("{} {}", s.field, s.direction))
                .collect();
            write!(f, "\n  ORDER BY {}", sorts.join(", "))?;
        }
        if let Some(limit) = self.limit {
            write!(f, "\n  LIMIT {}", limit)?;
        }
        Ok(())
    }
}

/// Condition `base_query` on the entity's language attribute.
///
/// The base query comes back untouched when no language resolved or the
/// entity type has no language attribute.
pub fn augment_query(
    mut base_query: EntityQuery,
    language_key: Option<&str>,
    resolved_langcode: &str,
) -> EntityQuery {
    if let Some(key) = language_key
        && !resolved_langcode.is_empty()
    {
        base_query.condition(Condition::eq(key, resolved_langcode));
    }
    base_query
}
