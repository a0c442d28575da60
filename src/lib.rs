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


//! Literalura: a personal book catalog
//!
//! Searches a Gutendex-compatible book API by title, keeps the first match
//! (book and author) in a local SQLite database, and answers questions about
//! the saved catalog.
//!
//! # Modules
//! - [`api`]: catalog gateway trait, HTTP client and response types
//! - [`catalog`]: search-and-save reconciliation and read-only queries
//! - [`storage`]: SQLite database, migrations, models and queries
//! - [`shell`]: interactive menu over any `BufRead`/`Write` pair
//! - [`error`]: crate error type
//!
//! # Example
//! ```no_run
//! use literalura::{CatalogService, Database, GutendexClient};
//!
//! # async fn example() -> literalura::Result<()> {
//! let db = Database::new(Database::get_default_path()).await?;
//! let service = CatalogService::new(db, GutendexClient::new()?);
//!
//! service.search_and_save("Don Quijote").await?;
//! for author in service.list_authors_alive_in_year(1600).await? {
//!     println!("{}", author.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod catalog;
pub mod error;
pub mod shell;
pub mod storage;

pub use api::{CatalogGateway, ClientConfig, GutendexClient};
pub use catalog::CatalogService;
pub use error::{CatalogError, Result};
pub use shell::Shell;
pub use storage::Database;
