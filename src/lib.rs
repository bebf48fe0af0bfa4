//! # Recipe Client Library
//!
//! A thin async client for a third-party recipe search API (the Food2Fork
//! `search` / `get` endpoints). It builds request URLs, decodes JSON
//! responses into [`Recipe`] records, and downloads recipe images.
//!
//! See the [`client`] module for details.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_client::RecipeClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Reads RECIPE_API_BASE_URL, RECIPE_API_KEY and RECIPE_API_TIMEOUT_SECS
//! let client = RecipeClient::from_env()?;
//!
//! let recipes = client.search("pasta", Some(2)).await;
//! for recipe in &recipes {
//!     println!("{} ({})", recipe.title, recipe.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{ClientConfiguration, ImageDownload, Recipe, RecipeClient, SearchResults};
