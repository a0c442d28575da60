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


//! Console rendering
//!
//! Everything is written to a generic `Write` so the output can be captured
//! in tests. Sections are drawn as boxes:
//!
//! ```text
//! ╔════════════════════════════════════════════════════════════════╗
//! ║                       REGISTERED BOOKS                         ║
//! ╠════════════════════════════════════════════════════════════════╣
//! ║ 1. Pride and Prejudice
//! ║    Author: Austen, Jane
//! ╚════════════════════════════════════════════════════════════════╝
//! Total: 1 book(s)
//! ```

use super::menu::{Language, MenuOption};
use crate::storage::models::{Author, Book, DownloadStatistics};
use std::io::{self, Write};

/// Inner width of a box, in characters
const BOX_WIDTH: usize = 64;

const SEPARATOR: &str = "║    ────────────────────────────────────────────────────────────";

/// How an author's life period is shown when no years are known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownPeriod {
    Show,
    Hide,
}

/// `(1812 - 1870)`, `(1950 - present)`, or `None` without a birth year
pub fn period(author: &Author) -> Option<String> {
    match (author.birth_year, author.death_year) {
        (Some(birth), Some(death)) => Some(format!("({} - {})", birth, death)),
        (Some(birth), None) => Some(format!("({} - present)", birth)),
        (None, _) => None,
    }
}

fn box_open<W: Write>(out: &mut W, heading: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "╔{}╗", "═".repeat(BOX_WIDTH))?;
    writeln!(out, "║{:^width$}║", heading, width = BOX_WIDTH)?;
    writeln!(out, "╠{}╣", "═".repeat(BOX_WIDTH))
}

fn box_close<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "╚{}╝", "═".repeat(BOX_WIDTH))
}

/// Write the numbered entries of a list, separated by rules
fn entries<W, T, F>(out: &mut W, items: &[T], mut entry: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(&mut W, usize, &T) -> io::Result<()>,
{
    for (index, item) in items.iter().enumerate() {
        entry(out, index + 1, item)?;
        if index + 1 < items.len() {
            writeln!(out, "{}", SEPARATOR)?;
        }
    }
    Ok(())
}

fn notice<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", message)?;
    writeln!(out)
}

pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    const MENU_WIDTH: usize = 40;

    writeln!(out)?;
    writeln!(out, "╔{}╗", "═".repeat(MENU_WIDTH))?;
    writeln!(out, "║{:^width$}║", "LITERALURA - CATALOG", width = MENU_WIDTH)?;
    writeln!(out, "╠{}╣", "═".repeat(MENU_WIDTH))?;
    for option in MenuOption::ALL {
        let line = format!(" {} - {}", option.number(), option.label());
        writeln!(out, "║{:<width$}║", line, width = MENU_WIDTH)?;
    }
    writeln!(out, "╚{}╝", "═".repeat(MENU_WIDTH))?;
    write!(out, "Choose an option: ")?;
    out.flush()
}

pub fn language_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Select the language:")?;
    for (index, language) in Language::ALL.iter().enumerate() {
        writeln!(
            out,
            "{} - {} ({})",
            index + 1,
            language.display_name(),
            language.code()
        )?;
    }
    write!(out, "Option: ")?;
    out.flush()
}

pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

pub fn saved_book<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    box_open(out, "BOOK FOUND AND SAVED")?;
    writeln!(out, "║ Title: {}", book.title)?;
    if let Some(author) = &book.author {
        writeln!(out, "║ Author: {}", author.name)?;
        if let Some(period) = period(author) {
            writeln!(out, "║    {}", period)?;
        }
    }
    writeln!(out, "║ Language: {}", book.language)?;
    writeln!(out, "║ Downloads: {:.0}", book.downloads)?;
    box_close(out)?;
    writeln!(out)
}

pub fn book_list<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return notice(out, "There are no books in the catalog");
    }

    box_open(out, "REGISTERED BOOKS")?;
    entries(out, books, |out, n, book| {
        writeln!(out, "║ {}. {}", n, book.title)?;
        writeln!(out, "║    Author: {}", book.author_name().unwrap_or("Unknown"))?;
        writeln!(out, "║    Language: {}", book.language)?;
        writeln!(out, "║    Downloads: {:.0}", book.downloads)
    })?;
    box_close(out)?;
    writeln!(out, "Total: {} book(s)", books.len())?;
    writeln!(out)
}

pub fn books_in_language<W: Write>(out: &mut W, language: Language, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return notice(out, &format!("No books found in {}", language.display_name()));
    }

    box_open(
        out,
        &format!("BOOKS IN {}", language.display_name().to_uppercase()),
    )?;
    entries(out, books, |out, n, book| {
        writeln!(out, "║ {}. {}", n, book.title)?;
        writeln!(out, "║    {}", book.author_name().unwrap_or("Unknown author"))
    })?;
    box_close(out)?;
    writeln!(out, "Total: {} book(s)", books.len())?;
    writeln!(out)
}

/// Boxed author list with a `Total` footer
///
/// `empty` is printed instead when there are no authors.
pub fn author_list<W: Write>(
    out: &mut W,
    heading: &str,
    authors: &[Author],
    unknown: UnknownPeriod,
    empty: &str,
) -> io::Result<()> {
    if authors.is_empty() {
        return notice(out, empty);
    }

    box_open(out, heading)?;
    entries(out, authors, |out, n, author| {
        writeln!(out, "║ {}. {}", n, author.name)?;
        match (period(author), unknown) {
            (Some(period), _) => writeln!(out, "║    {}", period),
            (None, UnknownPeriod::Show) => writeln!(out, "║    (dates unknown)"),
            (None, UnknownPeriod::Hide) => Ok(()),
        }
    })?;
    box_close(out)?;
    writeln!(out, "Total: {} author(s)", authors.len())?;
    writeln!(out)
}

pub fn statistics<W: Write>(out: &mut W, stats: Option<&DownloadStatistics>) -> io::Result<()> {
    let Some(stats) = stats else {
        return notice(out, "There are no books in the catalog");
    };

    box_open(out, "DOWNLOAD STATISTICS")?;
    writeln!(out, "║ Total books: {}", stats.count)?;
    writeln!(out, "║ Total downloads: {:.0}", stats.sum)?;
    writeln!(out, "║ Average downloads: {:.2}", stats.average)?;
    writeln!(out, "║ Most downloads: {:.0}", stats.max)?;
    writeln!(out, "║ Fewest downloads: {:.0}", stats.min)?;
    box_close(out)?;
    writeln!(out)
}

pub fn top_downloads<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return notice(out, "There are no books in the catalog");
    }

    box_open(out, "TOP 10 MOST DOWNLOADED BOOKS")?;
    entries(out, books, |out, n, book| {
        writeln!(out, "║ {}. {}", n, book.title)?;
        writeln!(out, "║    {}", book.author_name().unwrap_or("Unknown"))?;
        writeln!(out, "║    {:.0} downloads", book.downloads)
    })?;
    box_close(out)?;
    writeln!(out)
}

pub fn error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    box_open(out, "ERROR")?;
    writeln!(out, "║ {}", message)?;
    box_close(out)?;
    writeln!(out)
}

pub fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    notice(out, "Goodbye!")
}
