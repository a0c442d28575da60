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


//! Menu choices

use crate::error::{CatalogError, Result};

/// Top-level menu entries, keyed by the number the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    SearchBook,
    ListBooks,
    ListAuthors,
    AuthorsAliveInYear,
    BooksByLanguage,
    DownloadStatistics,
    TopDownloads,
    SearchAuthor,
    AuthorsByBirthRange,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 10] = [
        MenuOption::SearchBook,
        MenuOption::ListBooks,
        MenuOption::ListAuthors,
        MenuOption::AuthorsAliveInYear,
        MenuOption::BooksByLanguage,
        MenuOption::DownloadStatistics,
        MenuOption::TopDownloads,
        MenuOption::SearchAuthor,
        MenuOption::AuthorsByBirthRange,
        MenuOption::Exit,
    ];

    /// Parse the user's menu selection
    pub fn from_selection(input: &str) -> Result<Self> {
        let number: u8 = input
            .trim()
            .parse()
            .map_err(|_| CatalogError::invalid_input("Please enter a valid number"))?;

        Self::ALL
            .into_iter()
            .find(|option| option.number() == number)
            .ok_or_else(|| CatalogError::invalid_input("Invalid option"))
    }

    pub fn number(self) -> u8 {
        match self {
            MenuOption::SearchBook => 1,
            MenuOption::ListBooks => 2,
            MenuOption::ListAuthors => 3,
            MenuOption::AuthorsAliveInYear => 4,
            MenuOption::BooksByLanguage => 5,
            MenuOption::DownloadStatistics => 6,
            MenuOption::TopDownloads => 7,
            MenuOption::SearchAuthor => 8,
            MenuOption::AuthorsByBirthRange => 9,
            MenuOption::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::SearchBook => "Search book by title",
            MenuOption::ListBooks => "List registered books",
            MenuOption::ListAuthors => "List registered authors",
            MenuOption::AuthorsAliveInYear => "List authors alive in a year",
            MenuOption::BooksByLanguage => "List books by language",
            MenuOption::DownloadStatistics => "Download statistics",
            MenuOption::TopDownloads => "Top 10 most downloaded books",
            MenuOption::SearchAuthor => "Search author by name",
            MenuOption::AuthorsByBirthRange => "Authors by birth year range",
            MenuOption::Exit => "Exit",
        }
    }
}

/// Languages offered by the language filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Spanish,
    English,
    French,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Spanish,
        Language::English,
        Language::French,
        Language::Portuguese,
    ];

    /// Parse a language sub-menu selection (1-4)
    pub fn from_selection(input: &str) -> Result<Self> {
        let number: usize = input
            .trim()
            .parse()
            .map_err(|_| CatalogError::invalid_input("Please enter a valid number"))?;

        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| CatalogError::invalid_input("Invalid option"))
    }

    /// Code stored in `books.language`
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
            Language::French => "fr",
            Language::Portuguese => "pt",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
            Language::English => "English",
            Language::French => "French",
            Language::Portuguese => "Portuguese",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_selection() {
        assert_eq!(MenuOption::from_selection("1").unwrap(), MenuOption::SearchBook);
        assert_eq!(MenuOption::from_selection(" 9 \n").unwrap(), MenuOption::AuthorsByBirthRange);
        assert_eq!(MenuOption::from_selection("0").unwrap(), MenuOption::Exit);

        for bad in ["", "abc", "10", "-1", "1.5"] {
            let err = MenuOption::from_selection(bad).unwrap_err();
            assert!(err.is_input_error(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_menu_numbers_are_unique() {
        let mut numbers: Vec<u8> = MenuOption::ALL.iter().map(|o| o.number()).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (0..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_language_selection() {
        assert_eq!(Language::from_selection("1").unwrap().code(), "es");
        assert_eq!(Language::from_selection("2").unwrap().code(), "en");
        assert_eq!(Language::from_selection("3").unwrap().code(), "fr");
        assert_eq!(Language::from_selection("4").unwrap().display_name(), "Portuguese");

        assert!(Language::from_selection("0").is_err());
        assert!(Language::from_selection("5").is_err());
        assert!(Language::from_selection("en").is_err());
    }
}
