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


//! Search-and-save reconciliation
//!
//! Maps the first catalog match for a title onto stored rows:
//!
//! 1. Fetch search results; an empty list is `NotFound` and nothing is written
//! 2. Return an already stored book whose title overlaps the candidate title
//! 3. Find the first listed author by exact name, or create it
//! 4. Insert the book with its first language (or `"unknown"`)
//!
//! The author and book inserts are separate statements. If the book insert
//! fails, a freshly created author stays behind.

use super::CatalogService;
use crate::api::models::{AuthorRecord, BookRecord};
use crate::api::CatalogGateway;
use crate::error::{CatalogError, Result};
use crate::storage::models::{Author, Book, NewAuthor, NewBook, UNKNOWN_LANGUAGE};
use crate::storage::queries;

impl<G: CatalogGateway> CatalogService<G> {
    /// Search the catalog by title and store the first match
    ///
    /// Returns the stored book, either newly inserted or the existing row that
    /// overlaps the candidate title. Existing rows are never updated.
    ///
    /// # Errors
    /// - Gateway errors are passed through unchanged
    /// - `NotFound` when the catalog has no match
    /// - `PersistFailed` when the author or book cannot be written
    pub async fn search_and_save(&self, title: &str) -> Result<Book> {
        let response = self.gateway.fetch_by_title(title).await?;

        let candidate = match response.candidate() {
            Some(candidate) => candidate,
            None => {
                tracing::info!(query = title, "no catalog match");
                return Err(CatalogError::not_found(title));
            }
        };

        let pool = self.db.pool();

        if let Some(existing) = queries::find_book_by_title_overlap(pool, &candidate.title).await? {
            tracing::info!(
                book_id = existing.id,
                title = %existing.title,
                "already catalogued"
            );
            return Ok(existing);
        }

        let author = match candidate.primary_author() {
            Some(record) => Some(self.find_or_create_author(record).await?),
            None => None,
        };

        let new_book = new_book_from(candidate, author.as_ref());
        let book_id = queries::insert_book(pool, &new_book)
            .await
            .map_err(|e| into_persist_error("book", e))?;

        let book = queries::find_book_by_id(pool, book_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(&new_book.title))?;

        tracing::info!(
            book_id = book.id,
            title = %book.title,
            language = %book.language,
            "saved book"
        );

        Ok(book)
    }

    /// Exact, case-sensitive name match; otherwise insert with the reported years
    async fn find_or_create_author(&self, record: &AuthorRecord) -> Result<Author> {
        let pool = self.db.pool();

        if let Some(author) = queries::find_author_by_name(pool, &record.name).await? {
            tracing::debug!(author_id = author.id, name = %author.name, "reusing author");
            return Ok(author);
        }

        let new_author = NewAuthor::new(record.name.clone(), record.birth_year, record.death_year);
        let author_id = queries::insert_author(pool, &new_author)
            .await
            .map_err(|e| into_persist_error("author", e))?;

        tracing::debug!(author_id, name = %new_author.name, "created author");

        queries::find_author_by_id(pool, author_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(&new_author.name))
    }
}

fn new_book_from(candidate: &BookRecord, author: Option<&Author>) -> NewBook {
    let language = candidate
        .primary_language()
        .unwrap_or(UNKNOWN_LANGUAGE)
        .to_string();

    NewBook::new(
        candidate.title.clone(),
        author.map(|a| a.id),
        language,
        candidate.download_count,
    )
}

fn into_persist_error(entity: &str, err: CatalogError) -> CatalogError {
    match err {
        CatalogError::Database(source) => CatalogError::persist_failed(entity, source),
        other => other,
    }
}
