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


//! Database query functions
//!
//! Explicit data-access functions for the catalog tables. Every function
//! takes the pool and typed parameters and returns typed rows.
//!
//! # Query Patterns
//! - One function per lookup, no query derivation
//! - Async/await for all database operations
//! - Books are always read joined with their author
//! - Case-insensitive text matching is done in Rust with Unicode lowercase
//!   folding, since SQLite's `lower()` only folds ASCII

use crate::error::Result;
use crate::storage::models::*;
use chrono::Utc;
use sqlx::SqlitePool;

/// Column list shared by every book query
const BOOK_SELECT: &str = r#"
    SELECT
        b.id,
        b.title,
        b.language,
        b.downloads,
        b.created_at,
        a.id AS author_id,
        a.name AS author_name,
        a.birth_year AS author_birth_year,
        a.death_year AS author_death_year,
        a.created_at AS author_created_at
    FROM books b
    LEFT JOIN authors a ON b.author_id = a.id
"#;

// ============================================================================
// TEXT MATCHING
// ============================================================================

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether two titles overlap: either contains the other, ignoring case
///
/// This is the duplicate heuristic for books. "War" and "War and Peace"
/// overlap.
pub fn titles_overlap(existing: &str, candidate: &str) -> bool {
    let existing = existing.to_lowercase();
    let candidate = candidate.to_lowercase();
    existing.contains(&candidate) || candidate.contains(&existing)
}

// ============================================================================
// AUTHOR QUERIES
// ============================================================================

/// Insert a new author
///
/// Returns the id of the inserted author.
pub async fn insert_author(pool: &SqlitePool, author: &NewAuthor) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO authors (name, birth_year, death_year, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&author.name)
    .bind(author.birth_year)
    .bind(author.death_year)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find author by ID
pub async fn find_author_by_id(pool: &SqlitePool, author_id: i64) -> Result<Option<Author>> {
    let author = sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = ?")
        .bind(author_id)
        .fetch_optional(pool)
        .await?;

    Ok(author)
}

/// Find author by exact (case-sensitive) name
///
/// Names are not unique; the oldest row wins.
pub async fn find_author_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Author>> {
    let author = sqlx::query_as::<_, Author>(
        "SELECT * FROM authors WHERE name = ? ORDER BY id LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(author)
}

/// List all authors in insertion order
pub async fn list_authors(pool: &SqlitePool) -> Result<Vec<Author>> {
    let authors = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(authors)
}

/// Authors alive in `year`
///
/// `birth_year <= year AND (death_year IS NULL OR death_year >= year)`.
/// A NULL birth year fails the comparison, so those authors never match.
pub async fn list_authors_alive_in_year(pool: &SqlitePool, year: i32) -> Result<Vec<Author>> {
    let authors = sqlx::query_as::<_, Author>(
        r#"
        SELECT * FROM authors
        WHERE birth_year <= ?1 AND (death_year IS NULL OR death_year >= ?1)
        ORDER BY id
        "#,
    )
    .bind(year)
    .fetch_all(pool)
    .await?;

    Ok(authors)
}

/// Authors born in `[start_year, end_year]`
///
/// The range is not validated; an inverted range simply matches nothing.
pub async fn list_authors_by_birth_year_range(
    pool: &SqlitePool,
    start_year: i32,
    end_year: i32,
) -> Result<Vec<Author>> {
    let authors = sqlx::query_as::<_, Author>(
        "SELECT * FROM authors WHERE birth_year BETWEEN ? AND ? ORDER BY id",
    )
    .bind(start_year)
    .bind(end_year)
    .fetch_all(pool)
    .await?;

    Ok(authors)
}

/// Search authors by partial name, ignoring case
pub async fn search_authors_by_name(pool: &SqlitePool, fragment: &str) -> Result<Vec<Author>> {
    let authors = list_authors(pool)
        .await?
        .into_iter()
        .filter(|author| contains_ignore_case(&author.name, fragment))
        .collect();

    Ok(authors)
}

// ============================================================================
// BOOK QUERIES
// ============================================================================

/// Insert a new book
///
/// Returns the id of the inserted book. Fails on a duplicate exact title
/// (UNIQUE constraint) or an unknown author id.
pub async fn insert_book(pool: &SqlitePool, book: &NewBook) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO books (title, author_id, language, downloads, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&book.title)
    .bind(book.author_id)
    .bind(&book.language)
    .bind(book.downloads)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find book by ID
pub async fn find_book_by_id(pool: &SqlitePool, book_id: i64) -> Result<Option<Book>> {
    let row = sqlx::query_as::<_, BookRow>(&format!("{} WHERE b.id = ?", BOOK_SELECT))
        .bind(book_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Book::from))
}

/// Find the first book whose title overlaps `title`
///
/// See [`titles_overlap`]. The oldest matching row wins.
pub async fn find_book_by_title_overlap(pool: &SqlitePool, title: &str) -> Result<Option<Book>> {
    let titles = sqlx::query_as::<_, (i64, String)>("SELECT id, title FROM books ORDER BY id")
        .fetch_all(pool)
        .await?;

    match titles
        .into_iter()
        .find(|(_, existing)| titles_overlap(existing, title))
    {
        Some((book_id, _)) => find_book_by_id(pool, book_id).await,
        None => Ok(None),
    }
}

/// List all books in insertion order
pub async fn list_books(pool: &SqlitePool) -> Result<Vec<Book>> {
    let rows = sqlx::query_as::<_, BookRow>(&format!("{} ORDER BY b.id", BOOK_SELECT))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Book::from).collect())
}

/// List books with an exact language code
pub async fn list_books_by_language(pool: &SqlitePool, language: &str) -> Result<Vec<Book>> {
    let rows = sqlx::query_as::<_, BookRow>(&format!(
        "{} WHERE b.language = ? ORDER BY b.id",
        BOOK_SELECT
    ))
    .bind(language)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Book::from).collect())
}

/// Most downloaded books, highest first
///
/// Ties keep insertion order.
pub async fn top_books_by_downloads(pool: &SqlitePool, limit: i64) -> Result<Vec<Book>> {
    let rows = sqlx::query_as::<_, BookRow>(&format!(
        "{} ORDER BY b.downloads DESC, b.id ASC LIMIT ?",
        BOOK_SELECT
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Book::from).collect())
}

/// Count total books
pub async fn count_books(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Count total authors
pub async fn count_authors(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Download statistics over all books
///
/// Returns `None` when there are no books.
pub async fn download_statistics(pool: &SqlitePool) -> Result<Option<DownloadStatistics>> {
    let (count, sum, min, max, average) =
        sqlx::query_as::<_, (i64, Option<f64>, Option<f64>, Option<f64>, Option<f64>)>(
            r#"
            SELECT COUNT(*), SUM(downloads), MIN(downloads), MAX(downloads), AVG(downloads)
            FROM books
            "#,
        )
        .fetch_one(pool)
        .await?;

    if count == 0 {
        return Ok(None);
    }

    Ok(Some(DownloadStatistics {
        count,
        sum: sum.unwrap_or_default(),
        min: min.unwrap_or_default(),
        max: max.unwrap_or_default(),
        average: average.unwrap_or_default(),
    }))
}
