//! Database models for Literalura
//!
//! Row types for the `authors` and `books` tables plus the insert payloads
//! used by reconciliation.
//!
//! # SQLite Adaptations
//! - DateTime stored as TEXT in ISO 8601 format
//! - Downloads stored as REAL (the catalog reports plain counts, kept as
//!   floating point for the statistics)
//! - Books are read through a LEFT JOIN so each row carries its author

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Language code stored when the catalog reports no language
pub const UNKNOWN_LANGUAGE: &str = "unknown";

// ============================================================================
// AUTHORS
// ============================================================================

/// Author entity
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    #[sqlx(default)]
    pub birth_year: Option<i32>,
    /// `None` means alive or unknown
    #[sqlx(default)]
    pub death_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// New author for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

impl NewAuthor {
    pub fn new(name: String, birth_year: Option<i32>, death_year: Option<i32>) -> Self {
        Self {
            name,
            birth_year,
            death_year,
        }
    }
}

// ============================================================================
// BOOKS
// ============================================================================

/// Book entity with its author resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Option<Author>,
    pub language: String,
    pub downloads: f64,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Author name, if the book has one
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.as_str())
    }
}

/// Flat row produced by `books LEFT JOIN authors`
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    pub language: String,
    pub downloads: f64,
    pub created_at: DateTime<Utc>,
    pub author_id: Option<i64>,
    pub author_name: Option<String>,
    pub author_birth_year: Option<i32>,
    pub author_death_year: Option<i32>,
    pub author_created_at: Option<DateTime<Utc>>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        let author = match (row.author_id, row.author_name) {
            (Some(id), Some(name)) => Some(Author {
                id,
                name,
                birth_year: row.author_birth_year,
                death_year: row.author_death_year,
                created_at: row.author_created_at.unwrap_or(row.created_at),
            }),
            _ => None,
        };

        Book {
            id: row.id,
            title: row.title,
            author,
            language: row.language,
            downloads: row.downloads,
            created_at: row.created_at,
        }
    }
}

/// New book for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author_id: Option<i64>,
    pub language: String,
    pub downloads: f64,
}

impl NewBook {
    pub fn new(title: String, author_id: Option<i64>, language: String, downloads: f64) -> Self {
        Self {
            title,
            author_id,
            language,
            downloads,
        }
    }
}

// ============================================================================
// AGGREGATES
// ============================================================================

/// Download statistics over all catalogued books
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DownloadStatistics {
    pub count: i64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_row_without_author() {
        let row = BookRow {
            id: 7,
            title: "Anonymous Tales".to_string(),
            language: "en".to_string(),
            downloads: 12.0,
            created_at: Utc::now(),
            author_id: None,
            author_name: None,
            author_birth_year: None,
            author_death_year: None,
            author_created_at: None,
        };

        let book = Book::from(row);
        assert!(book.author.is_none());
        assert_eq!(book.author_name(), None);
    }
}
