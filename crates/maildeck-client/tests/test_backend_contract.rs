//! Contract checks against a live backend.
//!
//! Run with: cargo test --package maildeck-client --test test_backend_contract -- --ignored --nocapture
//! Requires API_URL to point at a reachable backend.

use maildeck_client::ContentApi;
use maildeck_common::config::Config;
use maildeck_common::content::SearchQuery;

#[tokio::test]
#[ignore] // Requires network access
async fn test_list_contents() {
    let api = ContentApi::from_config(&Config::from_env()).unwrap();

    let items = api.list_contents().await.expect("list_contents failed");

    println!("Backend returned {} items", items.len());
    for item in items.iter().take(5) {
        println!("---");
        println!("id: {}", item.id);
        println!("source: {} / category: {}", item.source.as_str(), item.category.as_str());
        println!("subject: {:?}", item.subject);
        println!("entities: {}", item.entities.len());
    }
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_empty_search_matches_list_all() {
    let api = ContentApi::from_config(&Config::from_env()).unwrap();

    let all = api.list_contents().await.expect("list_contents failed");
    let searched = api
        .search(&SearchQuery::default())
        .await
        .expect("search failed");

    assert_eq!(
        all.len(),
        searched.len(),
        "search with no filters should return the same set as list-all"
    );
}
