//! Entity name and its derived naming forms

use super::helpers::TemplateHelpers;
use crate::error::{Result, ScaffoldError};
use std::fmt;

/// Name of the scaffolded entity (e.g. `Post`)
///
/// Used verbatim for type names and lower-cased for paths, routes and
/// schema names. Only emptiness is checked; any other string is accepted and
/// flows into the generated identifiers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Create an entity name
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidInput`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ScaffoldError::InvalidInput(
                "entity name must not be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    /// The name as given (`Post`)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased name (`post`)
    #[must_use]
    pub fn lower(&self) -> String {
        TemplateHelpers::to_lower(&self.0)
    }

    /// Naive lower-cased plural (`posts`)
    #[must_use]
    pub fn plural(&self) -> String {
        TemplateHelpers::pluralize(&self.0)
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
