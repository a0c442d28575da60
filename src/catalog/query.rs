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


//! Read-only catalog views

use super::CatalogService;
use crate::api::CatalogGateway;
use crate::error::Result;
use crate::storage::models::{Author, Book, DownloadStatistics};
use crate::storage::queries;

/// Number of books in the download ranking
pub const TOP_DOWNLOADS_LIMIT: i64 = 10;

impl<G: CatalogGateway> CatalogService<G> {
    /// All stored books, oldest first
    pub async fn list_all_books(&self) -> Result<Vec<Book>> {
        queries::list_books(self.db.pool()).await
    }

    /// All stored authors, oldest first
    pub async fn list_all_authors(&self) -> Result<Vec<Author>> {
        queries::list_authors(self.db.pool()).await
    }

    /// Books whose language code equals `code` exactly
    pub async fn list_books_by_language(&self, code: &str) -> Result<Vec<Book>> {
        queries::list_books_by_language(self.db.pool(), code).await
    }

    /// Authors born in or before `year` and not known to have died before it
    ///
    /// Authors without a birth year never match.
    pub async fn list_authors_alive_in_year(&self, year: i32) -> Result<Vec<Author>> {
        queries::list_authors_alive_in_year(self.db.pool(), year).await
    }

    /// Authors born within `start..=end`
    ///
    /// The bounds are not validated; `start > end` yields an empty list.
    pub async fn list_authors_by_birth_year_range(&self, start: i32, end: i32) -> Result<Vec<Author>> {
        queries::list_authors_by_birth_year_range(self.db.pool(), start, end).await
    }

    /// Authors whose name contains `fragment`, ignoring case
    pub async fn search_authors_by_name(&self, fragment: &str) -> Result<Vec<Author>> {
        queries::search_authors_by_name(self.db.pool(), fragment).await
    }

    pub async fn top10_by_downloads(&self) -> Result<Vec<Book>> {
        queries::top_books_by_downloads(self.db.pool(), TOP_DOWNLOADS_LIMIT).await
    }

    /// Aggregate download figures, `None` while the catalog is empty
    pub async fn download_statistics(&self) -> Result<Option<DownloadStatistics>> {
        queries::download_statistics(self.db.pool()).await
    }
}
