//! The Book record and its input types

use crate::notice::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog record
///
/// Serialized field names match the persisted catalog layout, including the
/// camel-cased `pdfUrl`. `cover` and `pdf_url` are blob reference keys; the
/// empty string means "no cover" / "no document".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier, assigned as max(existing ids) + 1
    pub id: u64,

    pub title: String,
    pub author: String,
    pub category: String,

    #[serde(default)]
    pub description: String,

    pub status: BookStatus,

    /// Reference key of the cover image blob, or ""
    #[serde(default)]
    pub cover: String,

    /// Reference key of the PDF blob, or ""
    #[serde(rename = "pdfUrl", default)]
    pub pdf_url: String,
}

impl Book {
    /// Cover blob reference, if the record has one
    pub fn cover_ref(&self) -> Option<&str> {
        if self.cover.is_empty() {
            None
        } else {
            Some(&self.cover)
        }
    }

    /// PDF blob reference, if the record has one
    pub fn pdf_ref(&self) -> Option<&str> {
        if self.pdf_url.is_empty() {
            None
        } else {
            Some(&self.pdf_url)
        }
    }
}

/// Publication status of a record
///
/// Stored values outside the known set deserialize into `Other` so an edited
/// or hand-migrated catalog still loads; the presentation layer gives those a
/// default treatment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Active,
    Draft,
    Archived,
    #[serde(untagged)]
    Other(String),
}

impl BookStatus {
    /// Badge severity for the status label
    pub fn severity(&self) -> Severity {
        match self {
            BookStatus::Active => Severity::Success,
            BookStatus::Draft => Severity::Warning,
            BookStatus::Archived => Severity::Info,
            BookStatus::Other(_) => Severity::Info,
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::Active => write!(f, "active"),
            BookStatus::Draft => write!(f, "draft"),
            BookStatus::Archived => write!(f, "archived"),
            BookStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for BookStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "active" => BookStatus::Active,
            "draft" => BookStatus::Draft,
            "archived" => BookStatus::Archived,
            other => BookStatus::Other(other.to_string()),
        })
    }
}

/// Input for creating a record
///
/// The surface collects the whole draft and hands it over in one piece; the
/// store never reads field values out of the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub status: BookStatus,
}

/// Partial input for updating a record; `None` fields keep their prior value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub status: Option<BookStatus>,
}

impl BookPatch {
    /// Merge this patch into an existing record
    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(category) = &self.category {
            book.category = category.clone();
        }
        if let Some(description) = &self.description {
            book.description = description.clone();
        }
        if let Some(status) = &self.status {
            book.status = status.clone();
        }
    }
}
