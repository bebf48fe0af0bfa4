//! Request URL construction.
//!
//! Every request is a GET against `<base>/<segment>` with the API key as the
//! first query item, followed by the caller's parameters in insertion order.

use url::Url;

use crate::client::config::ClientConfiguration;

/// Which API endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Free-text recipe search (`<base>/search`)
    Search,
    /// Single recipe lookup by identifier (`<base>/get`)
    GetById,
}

impl RequestKind {
    pub fn path_segment(self) -> &'static str {
        match self {
            RequestKind::Search => "search",
            RequestKind::GetById => "get",
        }
    }
}

/// Ordered query parameters. Entries without a value are kept here but never
/// encoded into a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.entries.push((name.into(), value.map(Into::into)));
        self
    }

    /// Adds `page` only for a positive page number.
    pub fn page(self, page: Option<i32>) -> Self {
        let page = page.filter(|p| *p > 0).map(|p| p.to_string());
        self.with("page", page)
    }

    /// Parameters that will actually be sent, in order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for QueryParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (name, value)| params.with(name, value))
    }
}

/// Builds the absolute request URL for `kind` with the given parameters.
pub fn build_url(config: &ClientConfiguration, kind: RequestKind, params: &QueryParameters) -> Url {
    let mut url = config.base_url().clone();

    let path = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        kind.path_segment()
    );
    url.set_path(&path);

    let mut query = vec![format!("key={}", urlencoding::encode(config.api_key()))];
    for (name, value) in params.present() {
        query.push(format!(
            "{}={}",
            urlencoding::encode(name),
            urlencoding::encode(value)
        ));
    }
    url.set_query(Some(&query.join("&")));
    url.set_fragment(None);

    url
}

/// The URL with its `key` parameter masked, for logging.
pub(crate) fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    if pairs.is_empty() {
        return masked.to_string();
    }
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
