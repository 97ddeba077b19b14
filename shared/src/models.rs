//! Content record models shared by every listing and detail view.

use serde::{Deserialize, Serialize};

/// Publication state of a dashboard item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Published,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
        }
    }
}

/// One magazine/news/article/story item as returned by the backend.
///
/// The backend stores documents with `_id`; the alias keeps both spellings
/// deserializable. Per-type variance is carried as optional fields rather
/// than separate structs, since every view treats the types uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// May contain rich-text HTML; sanitize or strip before display.
    #[serde(default)]
    pub description: String,
    /// Absent images fall back to the placeholder asset at render time.
    #[serde(default)]
    pub image: Option<String>,
    /// Free text, compared case-insensitively against the category list.
    /// Values outside the list are kept but match no filter button.
    #[serde(default)]
    pub category: String,
    /// Free-form: sometimes ISO (`2024-03-12`), sometimes a display string
    /// ("Today"). No normalization is enforced anywhere.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
    /// Magazines only: URL of the uploaded PDF fed to the flipbook viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

/// Promotional banner shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// The four content collections the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Magazine,
    News,
    Article,
    Story,
}

impl ContentKind {
    /// Singular display label ("Article", "News item", ...).
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Magazine => "Magazine",
            ContentKind::News => "News",
            ContentKind::Article => "Article",
            ContentKind::Story => "Story",
        }
    }

    /// Plural section heading.
    pub fn plural(&self) -> &'static str {
        match self {
            ContentKind::Magazine => "Magazines",
            ContentKind::News => "News",
            ContentKind::Article => "Articles",
            ContentKind::Story => "Stories",
        }
    }

    /// URL path segment used by the frontend router.
    pub fn slug(&self) -> &'static str {
        match self {
            ContentKind::Magazine => "magazines",
            ContentKind::News => "news",
            ContentKind::Article => "articles",
            ContentKind::Story => "stories",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_underscore_id() {
        let record: ContentRecord = serde_json::from_value(serde_json::json!({
            "_id": "66b2", "title": "A", "category": "Tech",
            "description": "x", "date": "Today", "author": "Ed"
        }))
        .expect("record");
        assert_eq!(record.id, "66b2");
        assert_eq!(record.image, None);
        assert_eq!(record.status, None);
    }

    #[test]
    fn status_uses_lowercase_wire_form() {
        let record: ContentRecord = serde_json::from_value(serde_json::json!({
            "id": "1", "title": "A", "status": "draft"
        }))
        .expect("record");
        assert_eq!(record.status, Some(ContentStatus::Draft));
        assert_eq!(ContentStatus::Published.as_str(), "published");
    }
}
