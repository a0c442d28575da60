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


//! Interactive menu shell
//!
//! Reads one line per prompt from a `BufRead` and writes rendered output to a
//! `Write`. Every catalog or input error is rendered as a boxed message and the
//! menu is shown again; only option `0` or end of input leaves the loop.
//!
//! # Example
//! ```no_run
//! use literalura::api::GutendexClient;
//! use literalura::catalog::CatalogService;
//! use literalura::shell::Shell;
//! use literalura::storage::Database;
//!
//! # async fn example() -> literalura::error::Result<()> {
//! let service = CatalogService::new(Database::new_in_memory().await?, GutendexClient::new()?);
//! let stdin = std::io::stdin();
//! let mut shell = Shell::new(&service, stdin.lock(), std::io::stdout());
//! shell.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod menu;
pub mod render;

use crate::api::CatalogGateway;
use crate::catalog::CatalogService;
use crate::error::{CatalogError, Result};
use menu::{Language, MenuOption};
use render::UnknownPeriod;
use std::io::{BufRead, Write};

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu loop over a catalog service
pub struct Shell<'a, G, R, W> {
    service: &'a CatalogService<G>,
    input: R,
    output: W,
}

impl<'a, G, R, W> Shell<'a, G, R, W>
where
    G: CatalogGateway,
    R: BufRead,
    W: Write,
{
    pub fn new(service: &'a CatalogService<G>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user exits or input ends
    ///
    /// # Errors
    /// Only failures to read input or write output end the loop with an error.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            render::menu(&mut self.output)?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed");
                writeln!(self.output)?;
                break;
            };

            let flow = match MenuOption::from_selection(&line) {
                Ok(option) => self.dispatch(option).await,
                Err(e) => Err(e),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(CatalogError::Io(e)) => return Err(CatalogError::Io(e)),
                Err(e) => {
                    tracing::warn!(error = %e, "action failed");
                    render::error(&mut self.output, &e.user_message())?;
                }
            }
        }

        render::farewell(&mut self.output)?;
        self.output.flush()?;
        Ok(())
    }

    async fn dispatch(&mut self, option: MenuOption) -> Result<Flow> {
        tracing::debug!(?option, "menu selection");

        match option {
            MenuOption::SearchBook => self.search_book().await,
            MenuOption::ListBooks => {
                let books = self.service.list_all_books().await?;
                render::book_list(&mut self.output, &books)?;
                Ok(Flow::Continue)
            }
            MenuOption::ListAuthors => {
                let authors = self.service.list_all_authors().await?;
                render::author_list(
                    &mut self.output,
                    "REGISTERED AUTHORS",
                    &authors,
                    UnknownPeriod::Show,
                    "There are no authors in the catalog",
                )?;
                Ok(Flow::Continue)
            }
            MenuOption::AuthorsAliveInYear => self.authors_alive_in_year().await,
            MenuOption::BooksByLanguage => self.books_by_language().await,
            MenuOption::DownloadStatistics => {
                let stats = self.service.download_statistics().await?;
                render::statistics(&mut self.output, stats.as_ref())?;
                Ok(Flow::Continue)
            }
            MenuOption::TopDownloads => {
                let books = self.service.top10_by_downloads().await?;
                render::top_downloads(&mut self.output, &books)?;
                Ok(Flow::Continue)
            }
            MenuOption::SearchAuthor => self.search_author().await,
            MenuOption::AuthorsByBirthRange => self.authors_by_birth_range().await,
            MenuOption::Exit => Ok(Flow::Quit),
        }
    }

    async fn search_book(&mut self) -> Result<Flow> {
        let Some(title) = self.ask("\nEnter the title of the book to search for: ")? else {
            return Ok(Flow::Quit);
        };
        let title = title.trim();
        if title.is_empty() {
            return Err(CatalogError::invalid_input("Please enter a title"));
        }

        writeln!(self.output, "\nSearching the book catalog...")?;
        let book = self.service.search_and_save(title).await?;
        render::saved_book(&mut self.output, &book)?;
        Ok(Flow::Continue)
    }

    async fn authors_alive_in_year(&mut self) -> Result<Flow> {
        let Some(year) = self.ask_year("\nEnter the year: ")? else {
            return Ok(Flow::Quit);
        };

        let authors = self.service.list_authors_alive_in_year(year).await?;
        render::author_list(
            &mut self.output,
            &format!("AUTHORS ALIVE IN {}", year),
            &authors,
            UnknownPeriod::Hide,
            &format!("No authors found alive in {}", year),
        )?;
        Ok(Flow::Continue)
    }

    async fn books_by_language(&mut self) -> Result<Flow> {
        render::language_menu(&mut self.output)?;
        let Some(line) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let language = Language::from_selection(&line)?;

        let books = self.service.list_books_by_language(language.code()).await?;
        render::books_in_language(&mut self.output, language, &books)?;
        Ok(Flow::Continue)
    }

    async fn search_author(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("\nEnter the author name to search for: ")? else {
            return Ok(Flow::Quit);
        };

        let authors = self.service.search_authors_by_name(name.trim()).await?;
        render::author_list(
            &mut self.output,
            "SEARCH RESULTS",
            &authors,
            UnknownPeriod::Hide,
            "No authors found with that name",
        )?;
        Ok(Flow::Continue)
    }

    async fn authors_by_birth_range(&mut self) -> Result<Flow> {
        let Some(start) = self.ask_year("\nEnter the start year: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(end) = self.ask_year("Enter the end year: ")? else {
            return Ok(Flow::Quit);
        };
        if start > end {
            return Err(CatalogError::invalid_input(
                "The start year must be less than or equal to the end year",
            ));
        }

        let authors = self
            .service
            .list_authors_by_birth_year_range(start, end)
            .await?;
        render::author_list(
            &mut self.output,
            &format!("AUTHORS BORN BETWEEN {} AND {}", start, end),
            &authors,
            UnknownPeriod::Hide,
            "No authors found in that year range",
        )?;
        Ok(Flow::Continue)
    }

    /// Next input line without its line ending, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask(&mut self, text: &str) -> Result<Option<String>> {
        render::prompt(&mut self.output, text)?;
        self.read_line()
    }

    fn ask_year(&mut self, text: &str) -> Result<Option<i32>> {
        match self.ask(text)? {
            Some(line) => line
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| CatalogError::invalid_input("Please enter a valid year")),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockGateway;
    use crate::storage::models::NewAuthor;
    use crate::storage::{queries, Database};
    use std::io::Cursor;

    async fn service(gateway: MockGateway) -> CatalogService<MockGateway> {
        let db = Database::new_in_memory()
            .await
            .expect("Failed to create database");
        CatalogService::new(db, gateway)
    }

    async fn run_script(service: &CatalogService<MockGateway>, script: &str) -> String {
        let mut shell = Shell::new(service, Cursor::new(script.as_bytes()), Vec::new());
        shell.run().await.expect("Shell failed");
        String::from_utf8(shell.into_output()).expect("Output is not UTF-8")
    }

    #[tokio::test]
    async fn test_exit_option() {
        let service = service(MockGateway::new()).await;
        let output = run_script(&service, "0\n").await;

        assert_eq!(output.matches("Choose an option: ").count(), 1);
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let service = service(MockGateway::new()).await;
        let output = run_script(&service, "2\n").await;

        assert!(output.contains("There are no books in the catalog"));
        assert_eq!(output.matches("Choose an option: ").count(), 2);
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_invalid_input_reprompts() {
        let service = service(MockGateway::new()).await;
        let output = run_script(&service, "abc\n42\n0\n").await;

        assert!(output.contains("Please enter a valid number"));
        assert!(output.contains("Invalid option"));
        assert_eq!(output.matches("Choose an option: ").count(), 3);
    }

    #[tokio::test]
    async fn test_search_then_list() {
        let gateway = MockGateway::new().with_book(
            "Frankenstein",
            "Shelley, Mary Wollstonecraft",
            Some(1797),
            Some(1851),
            &["en"],
            2500.0,
        );
        let service = service(gateway).await;
        let output = run_script(&service, "1\nFrankenstein\n2\n3\n0\n").await;

        assert!(output.contains("BOOK FOUND AND SAVED"));
        assert!(output.contains("║ Title: Frankenstein"));
        assert!(output.contains("║    (1797 - 1851)"));
        assert!(output.contains("║ Downloads: 2500"));
        assert!(output.contains("Total: 1 book(s)"));
        assert!(output.contains("Total: 1 author(s)"));
    }

    #[tokio::test]
    async fn test_not_found_is_rendered_and_loop_continues() {
        let service = service(MockGateway::new()).await;
        let output = run_script(&service, "1\nZzzxqv\n0\n").await;

        assert!(output.contains("ERROR"));
        assert!(output.contains("Book 'Zzzxqv' was not found in the catalog."));
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_gateway_failure_is_rendered() {
        let service = service(MockGateway::new().with_failure("Ulysses", Some(503))).await;
        let output = run_script(&service, "1\nUlysses\n0\n").await;

        assert!(output.contains("HTTP 503"));
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_year_validation() {
        let service = service(MockGateway::new()).await;
        let output = run_script(&service, "4\nnineteen\n9\n1900\n1800\n0\n").await;

        assert!(output.contains("Please enter a valid year"));
        assert!(output.contains("The start year must be less than or equal to the end year"));
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_birth_range_listing() {
        let service = service(MockGateway::new()).await;
        let pool = service.database().pool();
        for (name, birth) in [("A", 1790), ("B", 1820), ("C", 1850), ("D", 1860)] {
            queries::insert_author(pool, &NewAuthor::new(name.to_string(), Some(birth), None))
                .await
                .unwrap();
        }

        let output = run_script(&service, "9\n1800\n1850\n0\n").await;
        assert!(output.contains("AUTHORS BORN BETWEEN 1800 AND 1850"));
        assert!(output.contains("║ 1. B"));
        assert!(output.contains("║ 2. C"));
        assert!(output.contains("Total: 2 author(s)"));
    }

    #[tokio::test]
    async fn test_language_submenu() {
        let gateway = MockGateway::new().with_book(
            "Les Misérables",
            "Hugo, Victor",
            Some(1802),
            Some(1885),
            &["fr"],
            1500.0,
        );
        let service = service(gateway).await;
        service.search_and_save("Les Misérables").await.unwrap();

        let output = run_script(&service, "5\n3\n5\n1\n5\n7\n0\n").await;
        assert!(output.contains("BOOKS IN FRENCH"));
        assert!(output.contains("║ 1. Les Misérables"));
        assert!(output.contains("No books found in Spanish"));
        assert!(output.contains("Invalid option"));
    }

    #[tokio::test]
    async fn test_statistics_and_top_downloads() {
        let gateway = MockGateway::new()
            .with_book("Emma", "Austen, Jane", Some(1775), Some(1817), &["en"], 100.0)
            .with_book("Dracula", "Stoker, Bram", Some(1847), Some(1912), &["en"], 300.0);
        let service = service(gateway).await;
        service.search_and_save("Emma").await.unwrap();
        service.search_and_save("Dracula").await.unwrap();

        let output = run_script(&service, "6\n7\n0\n").await;
        assert!(output.contains("Total books: 2"));
        assert!(output.contains("Average downloads: 200.00"));

        let top = output.find("TOP 10 MOST DOWNLOADED BOOKS").unwrap();
        let dracula = output[top..].find("1. Dracula").unwrap();
        let emma = output[top..].find("2. Emma").unwrap();
        assert!(dracula < emma);
        assert!(output.contains("║    300 downloads"));
    }

    #[tokio::test]
    async fn test_author_search_ignores_case() {
        let gateway = MockGateway::new().with_book(
            "Jane Eyre",
            "Brontë, Charlotte",
            Some(1816),
            Some(1855),
            &["en"],
            900.0,
        );
        let service = service(gateway).await;
        service.search_and_save("Jane Eyre").await.unwrap();

        let output = run_script(&service, "8\nBRONTË\n8\nDickens\n0\n").await;
        assert!(output.contains("║ 1. Brontë, Charlotte"));
        assert!(output.contains("Total: 1 author(s)"));
        assert!(output.contains("No authors found with that name"));
    }
}
