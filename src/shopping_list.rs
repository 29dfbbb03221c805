use crate::grocery::{Cereal, Fruit, Grocery};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ShoppingListError {
    #[error("Failed to read shopping list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON shopping list at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Failed to parse TOML shopping list: {0}")]
    Toml(String),

    #[error("Grocery #{index} in [{section}] has a blank name")]
    BlankName { section: String, index: usize },
}

impl From<serde_json::Error> for ShoppingListError {
    fn from(err: serde_json::Error) -> Self {
        ShoppingListError::Json {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ShoppingListError {
    fn from(err: toml::de::Error) -> Self {
        ShoppingListError::Toml(err.message().to_string())
    }
}

/// The groceries to shop for.
///
/// ```toml
/// [[fruits]]
/// name = "Apples"
///
/// [[cereals]]
/// name = "Pops"
/// calories = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(default)]
    pub fruits: Vec<Fruit>,
    #[serde(default)]
    pub cereals: Vec<Cereal>,
}

impl Default for ShoppingList {
    fn default() -> Self {
        ShoppingList {
            fruits: vec![Fruit::new("Apples"), Fruit::new("Bananas")],
            cereals: vec![
                Cereal::new("Pops", 100),
                Cereal::new("Lucky Charms", 200),
                // It's ok to buy generic brands
                Cereal::new("Great Value", 50),
            ],
        }
    }
}

impl ShoppingList {
    pub fn from_json(content: &str) -> Result<Self, ShoppingListError> {
        let list: ShoppingList = serde_json::from_str(content)?;
        list.validate()
    }

    pub fn from_toml(content: &str) -> Result<Self, ShoppingListError> {
        let list: ShoppingList = toml::from_str(content)?;
        list.validate()
    }

    /// Loads a list, choosing the format by extension and falling back to
    /// sniffing the content.
    pub fn from_file(path: &Path) -> Result<Self, ShoppingListError> {
        let content = fs::read_to_string(path).map_err(|source| ShoppingListError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        debug!(path = %path.display(), format = ?format, "loading shopping list");

        let list = match format.as_deref() {
            Some("json") => Self::from_json(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json(&content)?
                } else {
                    Self::from_toml(&content)?
                }
            }
        };

        info!(
            fruits = list.fruits.len(),
            cereals = list.cereals.len(),
            "loaded shopping list"
        );
        Ok(list)
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty() && self.cereals.is_empty()
    }

    fn validate(self) -> Result<Self, ShoppingListError> {
        check_names("fruits", &self.fruits)?;
        check_names("cereals", &self.cereals)?;
        Ok(self)
    }
}

fn check_names<T: Grocery>(section: &str, groceries: &[T]) -> Result<(), ShoppingListError> {
    match groceries.iter().position(|g| g.name().trim().is_empty()) {
        Some(index) => Err(ShoppingListError::BlankName {
            section: section.to_string(),
            index,
        }),
        None => Ok(()),
    }
}
