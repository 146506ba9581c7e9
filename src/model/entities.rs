use std::{fmt::Display, ops::Deref};

use serde::{Deserialize, Deserializer};

/// The identifier of a category.
///
/// Remote services send it either as a JSON number or as a string, it is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(pub String);

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Self(id.to_string()),
            RawId::Text(id) => Self(id),
        })
    }
}

impl Deref for CategoryId {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The display name of a category.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(pub String);

impl Deref for CategoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the category hierarchy.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// The identifier of the category.
    #[serde(alias = "idCategory")]
    id: CategoryId,

    /// The display name of the category.
    #[serde(alias = "strCategory")]
    name: CategoryName,

    /// The URL of the category thumbnail, if any.
    #[serde(default, alias = "strCategoryThumb")]
    thumbnail: Option<String>,

    /// The description of the category, if any.
    #[serde(default, alias = "strCategoryDescription")]
    description: Option<String>,

    /// The nested sub-categories.
    #[serde(default, alias = "subCategories")]
    children: Vec<Category>,
}

impl Category {
    /// Creates a new leaf `Category` with no metadata.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: CategoryId(id.to_string()),
            name: CategoryName(name.to_string()),
            thumbnail: None,
            description: None,
            children: vec![],
        }
    }

    /// Sets the thumbnail URL.
    pub fn with_thumbnail(mut self, thumbnail: &str) -> Self {
        self.thumbnail = Some(thumbnail.to_string());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets the nested sub-categories.
    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.children = children;
        self
    }

    /// Retrieves the category identifier.
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Retrieves the category name.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Retrieves the thumbnail URL.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    /// Retrieves the description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Retrieves the nested sub-categories.
    pub fn children(&self) -> &[Category] {
        &self.children
    }

    /// Creates a dummy `Category` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("1", "Books")
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Category: id={}, name={}, children={}",
            self.id,
            self.name,
            self.children.len()
        )
    }
}
