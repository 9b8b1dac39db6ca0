//! Search form — keyword, date range, category, and source filters over the
//! backend's `search_query` endpoint.

use axum::{extract::State, response::Html, Form};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use maildeck_common::content::{Category, ContentItem, SearchQuery, Source};

use crate::handlers::dashboard::{page_shell, render_card, render_error_page};
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    pub keywords: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
}

impl SearchForm {
    /// Empty fields mean "unset"; keywords split on whitespace; unknown
    /// dropdown values are dropped rather than rejected.
    pub fn into_query(self) -> SearchQuery {
        SearchQuery {
            keywords: self.keywords.as_deref().and_then(|s| {
                let words: Vec<String> = s.split_whitespace().map(String::from).collect();
                if words.is_empty() { None } else { Some(words) }
            }),
            start_date: self.start_date.as_deref().and_then(parse_date),
            end_date: self.end_date.as_deref().and_then(parse_date),
            category: self.category.as_deref().and_then(Category::parse),
            source: self.source.as_deref().and_then(Source::parse),
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub async fn search_page(State(_state): State<SharedState>) -> Html<String> {
    Html(render_search_page(None))
}

pub async fn search_submit(
    State(state): State<SharedState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let query = form.into_query();
    match state.api.search(&query).await {
        Ok(items) => Html(render_search_page(Some(&items))),
        Err(e) => {
            error!(error = %e, "search request failed");
            Html(render_error_page("Search failed. Please try again later.", "/search"))
        }
    }
}

fn render_search_page(results: Option<&[ContentItem]>) -> String {
    let results_html = match results {
        None => String::new(),
        Some([]) => r#"<div class="empty-state">
            <p class="empty-title">No search results found</p>
            <p class="empty-hint">Try adjusting your search criteria</p>
        </div>"#
            .to_string(),
        Some(items) => format!(
            r#"<h2 class="results-title">Search Results ({} items)</h2>
        <div class="card-grid">{}</div>"#,
            items.len(),
            items.iter().map(render_card).collect::<String>()
        ),
    };

    let category_options: String = Category::ALL
        .iter()
        .map(|c| format!(r#"<option value="{0}">{0}</option>"#, c.as_str()))
        .collect();
    let source_options: String = Source::ALL
        .iter()
        .map(|s| format!(r#"<option value="{0}">{0}</option>"#, s.as_str()))
        .collect();

    let body = format!(
        r#"<div class="page-header">
        <div>
            <h1 class="page-title">Search</h1>
            <p class="text-muted">Filter content by keyword, date range, category, and source</p>
        </div>
        <a href="/" class="btn btn-outline">&larr; Back to Dashboard</a>
    </div>

    <form method="POST" action="/search" class="search-form">
        <div class="form-section">
            <label class="form-label" for="keywords">Search Keywords</label>
            <input type="text" id="keywords" name="keywords" placeholder="Enter search keywords...">
        </div>

        <div class="form-row">
            <div class="form-section">
                <label class="form-label" for="start_date">Start Date</label>
                <input type="date" id="start_date" name="start_date">
            </div>
            <div class="form-section">
                <label class="form-label" for="end_date">End Date</label>
                <input type="date" id="end_date" name="end_date">
            </div>
        </div>

        <div class="form-row">
            <div class="form-section">
                <label class="form-label" for="category">Category</label>
                <select id="category" name="category">
                    <option value="">Select Category</option>
                    {}
                </select>
            </div>
            <div class="form-section">
                <label class="form-label" for="source">Source</label>
                <select id="source" name="source">
                    <option value="">Select Source</option>
                    {}
                </select>
            </div>
        </div>

        <button type="submit" class="btn">Search</button>
    </form>

    {}"#,
        category_options, source_options, results_html
    );

    page_shell("Search", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_maps_to_empty_query() {
        let form = SearchForm {
            keywords: Some("".into()),
            start_date: Some("".into()),
            end_date: None,
            category: Some("".into()),
            source: Some("".into()),
        };
        assert!(form.into_query().is_empty());
    }

    #[test]
    fn form_fields_convert_to_typed_filters() {
        let form = SearchForm {
            keywords: Some("apartment  rent".into()),
            start_date: Some("2024-03-20".into()),
            end_date: Some("2024-03-21".into()),
            category: Some("meeting".into()),
            source: Some("telegram".into()),
        };
        let query = form.into_query();
        assert_eq!(query.keywords, Some(vec!["apartment".into(), "rent".into()]));
        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2024, 3, 20));
        assert_eq!(query.end_date, NaiveDate::from_ymd_opt(2024, 3, 21));
        assert_eq!(query.category, Some(Category::Meeting));
        assert_eq!(query.source, Some(Source::Telegram));
    }

    #[test]
    fn unknown_dropdown_values_are_dropped() {
        let form = SearchForm {
            category: Some("residential".into()),
            source: Some("fax".into()),
            start_date: Some("21/03/2024".into()),
            ..Default::default()
        };
        assert!(form.into_query().is_empty());
    }
}
