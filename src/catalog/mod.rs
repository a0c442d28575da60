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


//! Catalog service
//!
//! Ties the catalog gateway to local storage:
//! - [`reconcile`]: search by title and save the first match
//! - [`query`]: read-only views over saved books and authors
//!
//! # Example
//! ```no_run
//! use literalura::api::GutendexClient;
//! use literalura::catalog::CatalogService;
//! use literalura::storage::Database;
//!
//! # async fn example() -> literalura::error::Result<()> {
//! let db = Database::new("./catalog.db").await?;
//! let service = CatalogService::new(db, GutendexClient::new()?);
//!
//! let book = service.search_and_save("Moby Dick").await?;
//! println!("{} ({})", book.title, book.language);
//!
//! for book in service.top10_by_downloads().await? {
//!     println!("{:.0} {}", book.downloads, book.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod query;
pub mod reconcile;

use crate::api::CatalogGateway;
use crate::storage::Database;

/// Book catalog backed by a gateway and a local database
///
/// All operations run one at a time; the service holds no state besides the
/// database pool and the gateway.
pub struct CatalogService<G> {
    db: Database,
    gateway: G,
}

impl<G: CatalogGateway> CatalogService<G> {
    pub fn new(db: Database, gateway: G) -> Self {
        Self { db, gateway }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Close the underlying database
    pub async fn close(self) -> crate::error::Result<()> {
        self.db.close().await
    }
}
