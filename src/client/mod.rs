//! # Recipe API Client
//!
//! This module provides an async HTTP client for the recipe web API, handling
//! request URL construction, recipe search and lookup, and image downloads.
//!
//! ## Modules
//!
//! - [`config`] - Validated base endpoint, API key and timeout
//! - [`request`] - Request kinds, query parameters and URL building
//! - [`client`] - Main HTTP client implementation with all API methods
//! - [`download`] - Cancellable background image downloads
//! - [`types`] - Recipe record and response parsing
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_client::client::{ClientConfiguration, RecipeClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfiguration::new("http://food2fork.com/api/", "my-api-key")?;
//! let client = RecipeClient::new(config)?;
//!
//! // Search for recipes
//! let recipes = client.search("chicken soup", None).await;
//! println!("Found {} recipes", recipes.len());
//!
//! // Fetch full details for the first hit
//! if let Some(first) = recipes.first() {
//!     let recipe = client.recipe(&first.id).await;
//!     println!("{:#?}", recipe);
//! }
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod config;
pub mod download;
pub mod request;
pub mod types;

pub use client::RecipeClient;
pub use config::ClientConfiguration;
pub use download::ImageDownload;
pub use request::{build_url, QueryParameters, RequestKind};
pub use types::*;
