// Literalura - Personal Book Catalog
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Catalog API response structures
//!
//! Immutable value types decoded straight from the Gutendex search response:
//!
//! ```json
//! {
//!   "count": 1,
//!   "results": [
//!     {
//!       "title": "Pride and Prejudice",
//!       "authors": [{ "name": "Austen, Jane", "birth_year": 1775, "death_year": 1817 }],
//!       "languages": ["en"],
//!       "download_count": 54321
//!     }
//!   ]
//! }
//! ```
//!
//! Fields the catalog sends but Literalura does not store (`id`, `formats`,
//! `subjects`, ...) are ignored during decoding.

use serde::{Deserialize, Serialize};

/// Search response container
/// Maps to response from GET {base_url}?search=...
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matches in catalog order
    #[serde(default)]
    pub results: Vec<BookRecord>,
}

impl SearchResponse {
    pub fn new(results: Vec<BookRecord>) -> Self {
        Self { results }
    }

    /// The first match, which is the only one Literalura keeps
    pub fn candidate(&self) -> Option<&BookRecord> {
        self.results.first()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A single book in the search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,

    /// Authors in catalog order
    #[serde(default)]
    pub authors: Vec<AuthorRecord>,

    /// Language codes (e.g. "en", "fr")
    #[serde(default)]
    pub languages: Vec<String>,

    pub download_count: f64,
}

impl BookRecord {
    /// First listed author
    pub fn primary_author(&self) -> Option<&AuthorRecord> {
        self.authors.first()
    }

    /// First listed language code
    pub fn primary_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }
}

/// Author as reported by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,

    #[serde(default)]
    pub birth_year: Option<i32>,

    #[serde(default)]
    pub death_year: Option<i32>,
}
