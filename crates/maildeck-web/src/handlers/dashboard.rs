//! Dashboard handler — card grid of every ingested content item, plus the
//! shared page chrome and card rendering used by the other pages.

use axum::{extract::State, response::Html};
use chrono::{DateTime, Utc};
use tracing::error;

use maildeck_common::content::{Category, ContentItem, EntityType, Source};

use crate::state::SharedState;

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    match state.api.list_contents().await {
        Ok(items) => Html(render_dashboard(&items)),
        Err(e) => {
            error!(error = %e, "failed to load dashboard contents");
            Html(render_error_page(
                "Failed to load content. Please try again later.",
                "/",
            ))
        }
    }
}

fn render_dashboard(items: &[ContentItem]) -> String {
    let grid = if items.is_empty() {
        r#"<div class="empty-state">
            <p class="empty-title">No content available</p>
            <p class="empty-hint">Content will appear here when available</p>
        </div>"#
            .to_string()
    } else {
        format!(
            r#"<div class="card-grid">{}</div>"#,
            items.iter().map(render_card).collect::<String>()
        )
    };

    let body = format!(
        r#"<div class="page-header">
        <div>
            <h1 class="page-title">Content Dashboard</h1>
            <p class="text-muted">All your content in one place</p>
        </div>
        <div class="header-stat">
            <div class="stat-value">{}</div>
            <div class="stat-label">Total Items</div>
        </div>
    </div>
    {}"#,
        items.len(),
        grid
    );

    page_shell("Dashboard", &body)
}

/// A single content-item card: category badge, source, event time, subject,
/// body preview, entity tags.
pub(crate) fn render_card(item: &ContentItem) -> String {
    let subject_html = match &item.subject {
        Some(s) => format!(r#"<h3 class="card-subject">{}</h3>"#, escape_html(s)),
        None => String::new(),
    };

    let entities_html = if item.entities.is_empty() {
        String::new()
    } else {
        let tags: String = item
            .entities
            .iter()
            .map(|e| {
                format!(
                    r#"<span class="tag {}">{}</span>"#,
                    entity_class(e.entity_type),
                    escape_html(&e.entity_value)
                )
            })
            .collect();
        format!(r#"<div class="tag-row">{}</div>"#, tags)
    };

    format!(
        r#"<div class="card">
        <div class="card-top">
            <span class="badge {}">{}</span>
            <span class="source">{} {}</span>
            <span class="card-time">{}</span>
        </div>
        {}
        <p class="card-body"><a href="/contents/{}">{}</a></p>
        {}
    </div>"#,
        category_class(item.category),
        item.category.as_str(),
        source_icon(item.source),
        item.source.as_str(),
        format_event_time(item.timestamp),
        subject_html,
        item.id,
        escape_html(preview(&item.content_data)),
        entities_html
    )
}

/// Error state with a retry link, mirroring the dashboard's failure view.
pub(crate) fn render_error_page(message: &str, retry_href: &str) -> String {
    let body = format!(
        r#"<div class="empty-state">
        <p class="empty-title error-text">{}</p>
        <a href="{}" class="btn">Try Again</a>
    </div>"#,
        escape_html(message),
        retry_href
    );
    page_shell("Error", &body)
}

/// Common HTML skeleton: head, top navigation, main content.
pub(crate) fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — Maildeck</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<nav class="topnav">
    <a href="/" class="brand">Maildeck</a>
    <div class="nav-links">
        <a href="/">Dashboard</a>
        <a href="/search">Search</a>
    </div>
</nav>
<main class="main-content">
{}
</main>
</body>
</html>"#,
        title, body
    )
}

pub(crate) fn category_class(category: Category) -> &'static str {
    match category {
        Category::Spam => "cat-spam",
        Category::Meeting => "cat-meeting",
        Category::Task => "cat-task",
        Category::Information => "cat-information",
        Category::Idea => "cat-idea",
        Category::Other => "cat-other",
    }
}

pub(crate) fn entity_class(entity_type: EntityType) -> &'static str {
    match entity_type {
        EntityType::Contact => "ent-contact",
        EntityType::Date => "ent-date",
        EntityType::Keyword => "ent-keyword",
        EntityType::Project => "ent-project",
    }
}

pub(crate) fn source_icon(source: Source) -> &'static str {
    match source {
        Source::Email => "✉",
        Source::Telegram => "✈",
    }
}

pub(crate) fn format_event_time(ts: DateTime<Utc>) -> String {
    ts.format("%b %d, %Y %H:%M").to_string()
}

/// Clip the body text for card previews.
fn preview(text: &str) -> &str {
    const MAX: usize = 240;
    match text.char_indices().nth(MAX) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Content bodies and subjects come from untrusted mail/telegram input.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("hi")</script>"#),
            "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let long = "ü".repeat(500);
        let clipped = preview(&long);
        assert_eq!(clipped.chars().count(), 240);
    }

    #[test]
    fn event_time_formats_for_cards() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 20, 10, 0, 0).unwrap();
        assert_eq!(format_event_time(ts), "Mar 20, 2024 10:00");
    }
}
