use std::sync::Arc;

use anyhow::{Context, Result};
use image::DynamicImage;
use reqwest::{Client, Response};
use url::Url;

use crate::client::{
    config::ClientConfiguration,
    download::ImageDownload,
    request::{build_url, redacted, QueryParameters, RequestKind},
    types::*,
};

/// # Recipe API Client
///
/// Cheap to clone: clones share one connection pool and one configuration.
///
/// ## Error Handling
///
/// `search` and `recipe` collapse every failure into an empty or absent
/// result, so callers cannot tell "no match" from "request failed". The
/// `try_*` variants return the underlying error instead.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    client: Client,
    config: Arc<ClientConfiguration>,
}

impl RecipeClient {
    pub fn new(config: ClientConfiguration) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfiguration::from_env()?)
    }

    pub fn config(&self) -> &ClientConfiguration {
        &self.config
    }

    pub fn search_url(&self, query: &str, page: Option<i32>) -> Url {
        let params = QueryParameters::new().with("q", Some(query)).page(page);
        build_url(&self.config, RequestKind::Search, &params)
    }

    pub fn recipe_url(&self, id: &str) -> Url {
        let params = QueryParameters::new().with("rId", Some(id));
        build_url(&self.config, RequestKind::GetById, &params)
    }

    async fn get(&self, url: &Url, what: &str) -> Result<Response> {
        tracing::debug!("Requesting {}: {}", what, redacted(url));

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Network error requesting {}: {}", what, e);
                anyhow::anyhow!("Failed to connect to recipe API: {}", e)
            })?;

        let status = response.status();
        tracing::debug!("{} response status: {}", what, status);

        if !status.is_success() {
            anyhow::bail!("Failed to get {}: {}", what, status);
        }

        Ok(response)
    }

    // Recipe operations
    pub async fn try_search(&self, query: &str, page: Option<i32>) -> Result<SearchResults> {
        let url = self.search_url(query, page);
        let response = self.get(&url, "search results").await?;

        let body = response
            .bytes()
            .await
            .context("Failed to read search response body")?;
        let results = SearchResults::from_slice(&body)?;

        tracing::debug!("Search for '{}' returned {} recipes", query, results.recipes.len());
        Ok(results)
    }

    /// Recipes matching `query`, in API order. Empty on any failure.
    pub async fn search(&self, query: &str, page: Option<i32>) -> Vec<Recipe> {
        match self.try_search(query, page).await {
            Ok(results) => results.recipes,
            Err(e) => {
                tracing::warn!("Recipe search for '{}' failed: {:#}", query, e);
                Vec::new()
            }
        }
    }

    pub async fn try_recipe(&self, id: &str) -> Result<Recipe> {
        let url = self.recipe_url(id);
        let response = self.get(&url, "recipe").await?;

        let body = response
            .bytes()
            .await
            .context("Failed to read recipe response body")?;

        parse_recipe(&body).with_context(|| format!("Recipe {} could not be parsed", id))
    }

    /// The recipe with identifier `id`, or `None` if it is missing or unreadable.
    pub async fn recipe(&self, id: &str) -> Option<Recipe> {
        match self.try_recipe(id).await {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                tracing::warn!("Recipe lookup for '{}' failed: {:#}", id, e);
                None
            }
        }
    }

    // Image operations
    pub async fn try_fetch_image(&self, url: &str) -> Result<DynamicImage> {
        let url = Url::parse(url).with_context(|| format!("Invalid image URL: {}", url))?;
        let response = self.get(&url, "image").await?;

        let body = response
            .bytes()
            .await
            .context("Failed to read image body")?;

        tokio::task::spawn_blocking(move || image::load_from_memory(&body))
            .await
            .context("Image decoding task failed")?
            .context("Failed to decode image")
    }

    pub async fn fetch_image(&self, url: &str) -> Option<DynamicImage> {
        match self.try_fetch_image(url).await {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!("Image download from {} failed: {:#}", url, e);
                None
            }
        }
    }

    /// Starts downloading the image at `url` in the background.
    ///
    /// `completion` receives the decoded image, or `None` on any failure,
    /// unless the returned handle is cancelled first. Must be called from
    /// within a Tokio runtime.
    pub fn download_image<F>(&self, url: &str, completion: F) -> ImageDownload
    where
        F: FnOnce(Option<DynamicImage>) + Send + 'static,
    {
        let client = self.clone();
        let url = url.to_string();
        ImageDownload::spawn(async move { client.fetch_image(&url).await }, completion)
    }
}
