use pretty_assertions::assert_eq;
use recipe_client::client::{
    build_url, ClientConfiguration, QueryParameters, RecipeClient, RequestKind,
};

const KEY: &str = "secret-key";

fn config(base: &str) -> ClientConfiguration {
    ClientConfiguration::new(base, KEY).expect("Valid configuration")
}

fn pairs(url: &url::Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn test_path_segment_per_kind() {
    let config = config("http://food2fork.com/api/");
    let params = QueryParameters::new();

    let search = build_url(&config, RequestKind::Search, &params);
    let get = build_url(&config, RequestKind::GetById, &params);

    assert_eq!(search.as_str(), "http://food2fork.com/api/search?key=secret-key");
    assert_eq!(get.as_str(), "http://food2fork.com/api/get?key=secret-key");
}

#[test]
fn test_base_without_trailing_slash() {
    let none = QueryParameters::new();
    let search = RequestKind::Search;
    let with_slash = build_url(&config("https://api.example.com/v1/"), search, &none);
    let without_slash = build_url(&config("https://api.example.com/v1"), search, &none);
    let bare_host = build_url(&config("https://api.example.com"), RequestKind::GetById, &none);

    assert_eq!(with_slash.path(), "/v1/search");
    assert_eq!(without_slash.path(), "/v1/search");
    assert_eq!(bare_host.path(), "/get");
}

#[test]
fn test_key_first_then_params_in_order() {
    let params = QueryParameters::new()
        .with("q", Some("chicken"))
        .with("sort", Some("r"))
        .with("rId", Some("7"));

    let url = build_url(&config("http://food2fork.com/api/"), RequestKind::Search, &params);

    assert_eq!(
        pairs(&url),
        vec![
            ("key".to_string(), KEY.to_string()),
            ("q".to_string(), "chicken".to_string()),
            ("sort".to_string(), "r".to_string()),
            ("rId".to_string(), "7".to_string()),
        ]
    );
}

#[test]
fn test_absent_params_are_dropped_and_key_kept() {
    let params: QueryParameters = vec![
        ("q", Some("soup")),
        ("sort", None),
        ("page", None),
    ]
    .into_iter()
    .collect();

    for kind in [RequestKind::Search, RequestKind::GetById] {
        let url = build_url(&config("http://food2fork.com/api/"), kind, &params);
        let names: Vec<String> = pairs(&url).into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["key".to_string(), "q".to_string()]);
    }

    let empty = QueryParameters::new().with("q", None::<String>);
    assert!(empty.is_empty());
    let url = build_url(&config("http://food2fork.com/api/"), RequestKind::Search, &empty);
    assert_eq!(pairs(&url), vec![("key".to_string(), KEY.to_string())]);
}

#[test]
fn test_page_only_when_positive() {
    let config = config("http://food2fork.com/api/");

    for page in [Some(0), Some(-1), Some(i32::MIN), None] {
        let params = QueryParameters::new().with("q", Some("x")).page(page);
        let url = build_url(&config, RequestKind::Search, &params);
        assert!(
            !url.query().unwrap_or_default().contains("page="),
            "page {:?} should not be sent: {}",
            page,
            url
        );
    }

    for page in [1, 2, 30, i32::MAX] {
        let params = QueryParameters::new().with("q", Some("x")).page(Some(page));
        let url = build_url(&config, RequestKind::Search, &params);
        let sent: Vec<String> = pairs(&url)
            .into_iter()
            .filter(|(k, _)| k == "page")
            .map(|(_, v)| v)
            .collect();
        assert_eq!(sent, vec![page.to_string()]);
    }
}

#[test]
fn test_values_are_percent_encoded() {
    let params = QueryParameters::new().with("q", Some("mac & cheese=yum"));
    let url = build_url(&config("http://food2fork.com/api/"), RequestKind::Search, &params);

    assert_eq!(url.query(), Some("key=secret-key&q=mac%20%26%20cheese%3Dyum"));
    assert_eq!(pairs(&url)[1].1, "mac & cheese=yum");
}

#[test]
fn test_base_query_and_fragment_are_replaced() {
    let url = build_url(
        &config("http://food2fork.com/api/?stale=1#frag"),
        RequestKind::GetById,
        &QueryParameters::new().with("rId", Some("35382")),
    );

    assert_eq!(url.as_str(), "http://food2fork.com/api/get?key=secret-key&rId=35382");
}

#[test]
fn test_client_request_urls() {
    let client =
        RecipeClient::new(config("http://food2fork.com/api/")).expect("Client should build");

    assert_eq!(
        client.search_url("pasta", Some(2)).as_str(),
        "http://food2fork.com/api/search?key=secret-key&q=pasta&page=2"
    );
    assert_eq!(
        client.search_url("pasta", Some(0)).as_str(),
        "http://food2fork.com/api/search?key=secret-key&q=pasta"
    );
    assert_eq!(
        client.recipe_url("35382").as_str(),
        "http://food2fork.com/api/get?key=secret-key&rId=35382"
    );
}
