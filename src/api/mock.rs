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


//! Scripted catalog gateway for tests

use super::models::{AuthorRecord, BookRecord, SearchResponse};
use super::CatalogGateway;
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
enum Scripted {
    Found(SearchResponse),
    Failure { message: String, status_code: Option<u16> },
}

/// In-memory catalog gateway
///
/// Responses are keyed by the exact title passed to `fetch_by_title`. Titles
/// with no scripted response get an empty result list, which reconciliation
/// reports as not found. Every requested title is recorded so tests can
/// assert how often the gateway was hit.
///
/// # Examples
///
/// ```
/// use literalura::api::{CatalogGateway, MockGateway};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = MockGateway::new()
///     .with_book("Dracula", "Stoker, Bram", Some(1847), Some(1912), &["en"], 9000.0);
///
/// let response = gateway.fetch_by_title("Dracula").await?;
/// assert_eq!(response.results.len(), 1);
/// assert!(gateway.fetch_by_title("Emma").await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockGateway {
    scripted: RwLock<HashMap<String, Scripted>>,
    requests: RwLock<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a full response for a title
    pub fn with_response<S: Into<String>>(mut self, title: S, response: SearchResponse) -> Self {
        self.scripted
            .get_mut()
            .insert(title.into(), Scripted::Found(response));
        self
    }

    /// Script a single-result response with one author
    pub fn with_book(
        self,
        title: &str,
        author: &str,
        birth_year: Option<i32>,
        death_year: Option<i32>,
        languages: &[&str],
        download_count: f64,
    ) -> Self {
        let record = BookRecord {
            title: title.to_string(),
            authors: vec![AuthorRecord {
                name: author.to_string(),
                birth_year,
                death_year,
            }],
            languages: languages.iter().map(|l| l.to_string()).collect(),
            download_count,
        };
        self.with_response(title, SearchResponse::new(vec![record]))
    }

    /// Script a gateway failure for a title
    pub fn with_failure<S: Into<String>>(mut self, title: S, status_code: Option<u16>) -> Self {
        let title = title.into();
        let failure = Scripted::Failure {
            message: format!("scripted failure for '{}'", title),
            status_code,
        };
        self.scripted.get_mut().insert(title, failure);
        self
    }

    /// Titles requested so far, in call order
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl CatalogGateway for MockGateway {
    async fn fetch_by_title(&self, title: &str) -> Result<SearchResponse> {
        self.requests.write().await.push(title.to_string());

        match self.scripted.read().await.get(title) {
            Some(Scripted::Found(response)) => Ok(response.clone()),
            Some(Scripted::Failure {
                message,
                status_code,
            }) => Err(CatalogError::gateway_failed(message.clone(), *status_code)),
            None => Ok(SearchResponse::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_failure_and_request_log() {
        let gateway = MockGateway::new().with_failure("Ulysses", Some(503));

        let err = gateway.fetch_by_title("Ulysses").await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::GatewayRequestFailed {
                status_code: Some(503),
                ..
            }
        ));

        gateway.fetch_by_title("Dune").await.unwrap();
        assert_eq!(gateway.requests().await, vec!["Ulysses", "Dune"]);
    }
}
