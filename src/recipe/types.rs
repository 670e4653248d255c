use serde::{Deserialize, Deserializer, Serialize};

/// One line of a recipe's ingredient list.
///
/// `quantity` is `None` for entries like "salt, to taste"; such entries
/// are never touched by serving-size scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub unit: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

// The catalog sends `null` for blank units.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Ingredient {
    pub fn new(quantity: Option<f64>, unit: &str, description: &str) -> Self {
        Self {
            quantity,
            unit: unit.to_string(),
            description: description.to_string(),
        }
    }
}

/// The full entity for one dish.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    /// Mirrors membership in the bookmark set. Owned by the state store.
    pub bookmarked: bool,
    /// Present only for user-submitted recipes.
    pub key: Option<String>,
}

impl Recipe {
    /// Projection stored in the bookmark set.
    pub fn summary(&self) -> Bookmark {
        Bookmark {
            id: self.id.clone(),
            title: self.title.clone(),
            publisher: self.publisher.clone(),
            image: self.image.clone(),
            key: self.key.clone(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }
}

/// Reduced projection of a recipe used in result lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A persisted bookmark.
///
/// Same shape as [`SearchSummary`]. Fields written by other versions of
/// the application are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl From<SearchSummary> for Bookmark {
    fn from(summary: SearchSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            publisher: summary.publisher,
            image: summary.image,
            key: summary.key,
            extra: serde_json::Map::new(),
        }
    }
}

/// Borrowed view shared by list templates (results and bookmarks).
pub trait Preview {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn publisher(&self) -> &str;
    fn image(&self) -> &str;
    fn is_user_generated(&self) -> bool;
}

impl Preview for SearchSummary {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn publisher(&self) -> &str {
        &self.publisher
    }
    fn image(&self) -> &str {
        &self.image
    }
    fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }
}

impl Preview for Bookmark {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn publisher(&self) -> &str {
        &self.publisher
    }
    fn image(&self) -> &str {
        &self.image
    }
    fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }
}
