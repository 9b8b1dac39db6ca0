/// Data-transfer shapes for the content backend API.
/// These mirror the backend's JSON schema; Maildeck consumes them but does
/// not own their lifecycle or enforce invariants on them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Where a content item was ingested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Email,
    Telegram,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Email, Source::Telegram];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Email => "email",
            Source::Telegram => "telegram",
        }
    }

    /// Parse the wire name; unknown values map to `None` (unset filter).
    pub fn parse(s: &str) -> Option<Source> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Voice,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Voice => "voice",
        }
    }
}

/// Category assigned by the backend's classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spam,
    Meeting,
    Task,
    Information,
    Idea,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Spam,
        Category::Meeting,
        Category::Task,
        Category::Information,
        Category::Idea,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Spam => "spam",
            Category::Meeting => "meeting",
            Category::Task => "task",
            Category::Information => "information",
            Category::Idea => "idea",
            Category::Other => "other",
        }
    }

    /// Parse the wire name; unknown values map to `None` (unset filter).
    pub fn parse(s: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Structured fact extracted from a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Contact,
    Date,
    Keyword,
    Project,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Contact => "CONTACT",
            EntityType::Date => "DATE",
            EntityType::Keyword => "KEYWORD",
            EntityType::Project => "PROJECT",
        }
    }
}

// ---------------------------------------------------------------------------
// Content item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: i64,
    pub content_id: Uuid,
    pub entity_type: EntityType,
    pub entity_value: String,
    pub created_at: DateTime<Utc>,
}

/// A single ingested message record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub source_id: String,
    pub content_type: ContentType,
    pub content_data: String,
    pub content_html: Option<String>,
    pub source: Source,
    pub category: Category,
    pub subject: Option<String>,
    /// When the underlying message happened (send time), as opposed to
    /// when the backend stored it.
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

// ---------------------------------------------------------------------------
// Search query
// ---------------------------------------------------------------------------

/// Filter set sent to `POST /contents/search_query`. All fields are optional;
/// the backend ANDs whatever is present. `None` fields are omitted from the
/// serialized body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl SearchQuery {
    /// True when no filter is set; the backend treats this as list-all.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.category.is_none()
            && self.source.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_item_deserializes_backend_schema() {
        let json = r#"{
            "id": "7b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d",
            "source_id": "imap-42",
            "content_type": "text",
            "content_data": "Quarterly planning meets Thursday at 10am.",
            "content_html": null,
            "source": "email",
            "category": "meeting",
            "subject": "Quarterly planning",
            "timestamp": "2024-03-20T10:00:00Z",
            "created_at": "2024-03-20T10:00:05Z",
            "updated_at": "2024-03-20T10:00:05Z",
            "entities": [
                {
                    "id": 1,
                    "content_id": "7b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d",
                    "entity_type": "DATE",
                    "entity_value": "Thursday 10am",
                    "created_at": "2024-03-20T10:00:06Z"
                },
                {
                    "id": 2,
                    "content_id": "7b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d",
                    "entity_type": "PROJECT",
                    "entity_value": "Q2 planning",
                    "created_at": "2024-03-20T10:00:06Z"
                }
            ]
        }"#;

        let item: ContentItem = serde_json::from_str(json).expect("valid content item");
        assert_eq!(item.source, Source::Email);
        assert_eq!(item.category, Category::Meeting);
        assert_eq!(item.content_type, ContentType::Text);
        assert_eq!(item.subject.as_deref(), Some("Quarterly planning"));
        assert_eq!(item.entities.len(), 2);
        assert_eq!(item.entities[0].entity_type, EntityType::Date);
    }

    #[test]
    fn content_item_defaults_missing_entities() {
        let json = r#"{
            "id": "7b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d",
            "source_id": "tg-9",
            "content_type": "voice",
            "content_data": "voice note transcript",
            "content_html": null,
            "source": "telegram",
            "category": "other",
            "subject": null,
            "timestamp": "2024-03-21T08:30:00Z",
            "created_at": "2024-03-21T08:30:01Z",
            "updated_at": "2024-03-21T08:30:01Z"
        }"#;

        let item: ContentItem = serde_json::from_str(json).expect("valid content item");
        assert!(item.entities.is_empty());
        assert!(item.subject.is_none());
        assert_eq!(item.content_type, ContentType::Voice);
    }

    #[test]
    fn search_query_omits_unset_fields() {
        let query = SearchQuery {
            keywords: Some(vec!["apartment".into()]),
            category: Some(Category::Task),
            ..Default::default()
        };
        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(body["keywords"][0], "apartment");
        assert_eq!(body["category"], "task");
        assert!(body.get("start_date").is_none());
        assert!(body.get("end_date").is_none());
        assert!(body.get("source").is_none());
    }

    #[test]
    fn empty_search_query_serializes_to_empty_object() {
        let query = SearchQuery::default();
        assert!(query.is_empty());
        assert_eq!(serde_json::to_string(&query).unwrap(), "{}");
    }

    #[test]
    fn filter_values_parse_from_wire_names() {
        assert_eq!(Category::parse("meeting"), Some(Category::Meeting));
        assert_eq!(Category::parse("residential"), None);
        assert_eq!(Source::parse("telegram"), Some(Source::Telegram));
        assert_eq!(Source::parse(""), None);
    }

    #[test]
    fn enum_wire_names_match_backend() {
        assert_eq!(serde_json::to_string(&Source::Telegram).unwrap(), r#""telegram""#);
        assert_eq!(serde_json::to_string(&Category::Idea).unwrap(), r#""idea""#);
        assert_eq!(serde_json::to_string(&EntityType::Keyword).unwrap(), r#""KEYWORD""#);
        let parsed: EntityType = serde_json::from_str(r#""CONTACT""#).unwrap();
        assert_eq!(parsed, EntityType::Contact);
    }
}
