//! Type definitions for the recipe API.
//!
//! ## Key Types
//!
//! - [`Recipe`] - a recipe record, with a tolerant deserializer
//! - [`SearchResults`] - the parsed body of a search response
//!
//! ## API Compatibility
//!
//! The service is loose about the shape of recipe objects, so [`Recipe`] does
//! not use a derived deserializer:
//! - the identifier may arrive as `recipe_id` or `id`, as a string or a number
//! - an optional field with an unexpected type is dropped instead of failing
//!   the whole record
//! - only `id` and `title` are mandatory

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recipe as returned by the search and get endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    /// Recipe identifier, used with the get endpoint
    #[serde(rename = "recipe_id")]
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Absolute URL of the recipe picture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Original recipe page on the publisher's site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Recipe page on the API provider's site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f2f_url: Option<String>,
    /// Publisher name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Publisher home page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,
    /// Popularity score (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_rank: Option<f64>,
    /// Ingredient lines. Only returned by the get endpoint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Builds a recipe from a recipe-shaped JSON object, or `None` when the
    /// object lacks a usable `id` or `title`.
    pub fn from_json(value: &Value) -> Option<Self> {
        Recipe::deserialize(value).ok()
    }
}

/// Custom deserializer for Recipe to tolerate API inconsistencies.
///
/// Every value is first read as a [`Value`] so a malformed optional field
/// can be discarded without aborting the map.
impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct RecipeVisitor;

        impl<'de> Visitor<'de> for RecipeVisitor {
            type Value = Recipe;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a recipe object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut recipe_id = None;
                let mut id = None;
                let mut title = None;
                let mut image_url = None;
                let mut source_url = None;
                let mut f2f_url = None;
                let mut publisher = None;
                let mut publisher_url = None;
                let mut social_rank = None;
                let mut ingredients = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    let value = map.next_value::<Value>()?;
                    match key.as_str() {
                        "recipe_id" => recipe_id = identifier(value),
                        "id" => id = identifier(value),
                        "title" => title = text(value),
                        "image_url" => image_url = text(value),
                        "source_url" => source_url = text(value),
                        "f2f_url" => f2f_url = text(value),
                        "publisher" => publisher = text(value),
                        "publisher_url" => publisher_url = text(value),
                        "social_rank" => social_rank = number(value),
                        "ingredients" => ingredients = lines(value),
                        _ => {}
                    }
                }

                // The live API uses recipe_id; older payloads and fixtures use id
                let id = recipe_id
                    .or(id)
                    .ok_or_else(|| de::Error::missing_field("recipe_id or id"))?;
                let title = title.ok_or_else(|| de::Error::missing_field("title"))?;

                Ok(Recipe {
                    id,
                    title,
                    image_url,
                    source_url,
                    f2f_url,
                    publisher,
                    publisher_url,
                    social_rank,
                    ingredients,
                })
            }
        }

        deserializer.deserialize_map(RecipeVisitor)
    }
}

fn identifier(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => integral(&n).map(|i| i.to_string()),
        _ => None,
    }
}

// Ids are sent back verbatim as `rId`, so `42.0` must read as `42`
fn integral(n: &serde_json::Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.into());
    }
    n.as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15)
        .map(|f| f as i128)
}

fn text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

fn number(value: Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lines(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.into_iter().filter_map(text).collect(),
        _ => Vec::new(),
    }
}

/// Parsed body of a search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    /// Number of matches the API reported for this page, if it sent one
    pub count: Option<u64>,
    /// Valid recipes in API order
    pub recipes: Vec<Recipe>,
}

impl SearchResults {
    /// Parses a search body: a top-level object with a `recipes` array.
    ///
    /// Elements that are not valid recipes are skipped. The body itself being
    /// unparseable, or `recipes` missing or not an array, is an error.
    pub fn from_slice(body: &[u8]) -> anyhow::Result<Self> {
        let json: Value = serde_json::from_slice(body)
            .map_err(|e| anyhow::anyhow!("Search response is not valid JSON: {}", e))?;

        let Some(items) = json.get("recipes").and_then(Value::as_array) else {
            anyhow::bail!("Search response has no 'recipes' array");
        };

        let recipes: Vec<Recipe> = items
            .iter()
            .filter_map(|item| {
                let recipe = Recipe::from_json(item);
                if recipe.is_none() {
                    tracing::debug!("Skipping invalid recipe in search results: {}", item);
                }
                recipe
            })
            .collect();

        Ok(SearchResults {
            count: json.get("count").and_then(Value::as_u64),
            recipes,
        })
    }
}

/// Parses a get body into one recipe.
///
/// The top-level object is the record when it is a valid recipe on its own;
/// otherwise a recipe wrapped in a `recipe` field is used.
pub fn parse_recipe(body: &[u8]) -> anyhow::Result<Recipe> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| anyhow::anyhow!("Recipe response is not valid JSON: {}", e))?;

    let top_level = match Recipe::deserialize(&json) {
        Ok(recipe) => return Ok(recipe),
        Err(e) => e,
    };

    match json.get("recipe") {
        Some(inner) if inner.is_object() => Recipe::deserialize(inner)
            .map_err(|e| anyhow::anyhow!("Invalid recipe in response: {}", e)),
        _ => Err(anyhow::anyhow!("Invalid recipe in response: {}", top_level)),
    }
}
