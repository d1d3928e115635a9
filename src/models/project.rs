use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Fields supplied by a caller when adding a project. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl NewProject {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }

    /// Pull the three fields out of an arbitrary JSON value. Anything that is
    /// not a string (or is absent) comes through as an empty string.
    pub fn from_json(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            title: field("title"),
            description: field("description"),
            image_url: field("image_url"),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty() && !self.image_url.is_empty()
    }

    pub fn with_id(self, id: i64) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
        }
    }
}
