//! Field rules shared by the handlers and the repository.

use crate::error::{RepoError, NAME_REQUIRED};
use crate::model::{ItemPayload, NewItem};

pub struct RequestValidator;

impl RequestValidator {
    /// Trim and require `name`; fold an empty `description` to `None`.
    pub fn item(name: Option<&str>, description: Option<&str>) -> Result<NewItem, RepoError> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| RepoError::Validation(NAME_REQUIRED.into()))?;
        Ok(NewItem {
            name: name.to_string(),
            description: description.filter(|d| !d.is_empty()).map(str::to_string),
        })
    }

    pub fn payload(payload: &ItemPayload) -> Result<NewItem, RepoError> {
        Self::item(payload.name.as_deref(), payload.description.as_deref())
    }
}
