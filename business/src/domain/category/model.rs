use serde::{Deserialize, Serialize};

use super::errors::CategoryError;
use crate::domain::shared::value_objects::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Expected to be unique, but nothing enforces it.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub fn new(name: String) -> Result<Self, CategoryError> {
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }
        Ok(Self { name })
    }

    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
        }
    }
}

impl Category {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: CategoryId, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_draft_when_name_valid() {
        let draft = CategoryDraft::new("Minuman".to_string()).unwrap();

        assert_eq!(draft.into_category(CategoryId::new(3)).name, "Minuman");
    }

    #[test]
    fn should_reject_draft_when_name_empty() {
        let result = CategoryDraft::new(" ".to_string());

        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }
}
