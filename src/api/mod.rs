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


//! Book catalog API client
//!
//! Talks to a Gutendex-compatible search endpoint and decodes its JSON into
//! the value types in [`models`].
//!
//! The [`CatalogGateway`] trait is the seam between reconciliation and the
//! network. [`GutendexClient`] is the production implementation and
//! [`MockGateway`] serves scripted responses in tests.

pub mod client;
pub mod mock;
pub mod models;

use crate::error::Result;
use async_trait::async_trait;

// Re-export commonly used types
pub use client::{ClientConfig, GutendexClient, DEFAULT_BASE_URL};
pub use mock::MockGateway;
pub use models::{AuthorRecord, BookRecord, SearchResponse};

/// Source of book search results
///
/// Implementations issue at most one request per call and never retry.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Search the catalog by title
    ///
    /// An empty `results` list is a successful response. Transport failures,
    /// non-success statuses and undecodable bodies are gateway errors.
    async fn fetch_by_title(&self, title: &str) -> Result<SearchResponse>;
}

#[async_trait]
impl<G: CatalogGateway + ?Sized> CatalogGateway for std::sync::Arc<G> {
    async fn fetch_by_title(&self, title: &str) -> Result<SearchResponse> {
        (**self).fetch_by_title(title).await
    }
}
