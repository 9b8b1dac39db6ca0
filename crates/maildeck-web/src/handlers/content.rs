//! Content detail page — the full body and metadata of one item.

use axum::{
    extract::{Path, State},
    response::Html,
};
use uuid::Uuid;

use maildeck_common::content::ContentItem;
use maildeck_common::error::ApiError;

use crate::handlers::dashboard::{
    category_class, entity_class, escape_html, format_event_time, page_shell, source_icon,
};
use crate::state::SharedState;

pub async fn content_page(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    let item = state.api.get_content(id).await.map_err(|e| {
        if e.backend_status() == Some(404) {
            ApiError::NotFound(format!("No content item with id {}", id))
        } else {
            ApiError::Internal(e)
        }
    })?;

    Ok(Html(render_content_page(&item)))
}

fn render_content_page(item: &ContentItem) -> String {
    // The backend sanitizes content_html before storing it; plain text is
    // escaped here.
    let body_html = match &item.content_html {
        Some(html) => html.clone(),
        None => format!("<p>{}</p>", escape_html(&item.content_data)),
    };

    let subject = item.subject.as_deref().unwrap_or("(no subject)");

    let entities_html = if item.entities.is_empty() {
        r#"<p class="text-muted">No extracted entities.</p>"#.to_string()
    } else {
        let rows: String = item
            .entities
            .iter()
            .map(|e| {
                format!(
                    r#"<tr>
                <td><span class="tag {}">{}</span></td>
                <td>{}</td>
                <td class="text-muted">{}</td>
            </tr>"#,
                    entity_class(e.entity_type),
                    e.entity_type.as_str(),
                    escape_html(&e.entity_value),
                    format_event_time(e.created_at)
                )
            })
            .collect();
        format!(
            r#"<table class="entity-table">
            <thead><tr><th>Type</th><th>Value</th><th>Extracted</th></tr></thead>
            <tbody>{}</tbody>
        </table>"#,
            rows
        )
    };

    let body = format!(
        r#"<div class="page-header">
        <div>
            <h1 class="page-title">{}</h1>
            <p class="text-muted">
                <span class="badge {}">{}</span>
                <span class="source">{} {}</span>
                · {} · received {}
            </p>
        </div>
        <a href="/" class="btn btn-outline">&larr; Back to Dashboard</a>
    </div>

    <div class="detail-card">
        {}
    </div>

    <h2 class="section-title">Entities</h2>
    {}"#,
        escape_html(subject),
        category_class(item.category),
        item.category.as_str(),
        source_icon(item.source),
        item.source.as_str(),
        item.content_type.as_str(),
        format_event_time(item.timestamp),
        body_html,
        entities_html
    );

    page_shell(&escape_html(subject), &body)
}
