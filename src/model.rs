//! Item entity and the request shapes accepted at the HTTP boundary.

use serde::{Deserialize, Serialize};

/// A persisted item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Set by SQLite (`CURRENT_TIMESTAMP`) on insert; never updated.
    pub created_at: String,
}

/// Body of `POST /items` and `PUT /items/:id`.
///
/// `name` is optional here so a missing name is reported as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Query string of `GET /items`. Empty values impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemFilter {
    /// Build from raw query pairs. Unknown keys are ignored and a repeated key keeps its last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => filter.name = Some(value),
                "description" => filter.description = Some(value),
                _ => {}
            }
        }
        filter
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn by_description(description: impl Into<String>) -> Self {
        Self {
            name: None,
            description: Some(description.into()),
        }
    }

    /// Name filter, if it constrains anything.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// Description filter, if it constrains anything.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }
}

/// Validated create/update input: trimmed non-empty name, description with
/// empty strings folded to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}
