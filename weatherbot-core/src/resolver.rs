use async_trait::async_trait;
use scraper::{Html, Selector};
use std::fmt::Debug;

use crate::error::ExtractError;

pub mod geonames;

pub use geonames::GeonamesResolver;

/// Turns free-text user input into a canonical place name.
#[async_trait]
pub trait LocationResolver: Send + Sync + Debug {
    /// Returns `None` when the input matches nothing or the lookup failed.
    /// Implementations log their failures and never propagate them.
    async fn normalize(&self, raw: &str) -> Option<String>;
}

/// Strategy for pulling the best match out of a search results page.
pub trait MatchExtractor: Send + Sync + Debug {
    fn first_match(&self, html: &str) -> Result<String, ExtractError>;
}

/// Positional scraper for tabular search results.
///
/// Picks the `row`-th `tr` in the document, its `cell`-th `td`, and returns
/// the text of the first link inside that cell. Positions are 1-based, as in
/// CSS `nth-of-type`. The defaults match the geonames.org results page, where
/// the first two rows are the table caption and header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMatchExtractor {
    pub row: usize,
    pub cell: usize,
}

impl Default for TableMatchExtractor {
    fn default() -> Self {
        Self { row: 3, cell: 2 }
    }
}

impl MatchExtractor for TableMatchExtractor {
    fn first_match(&self, html: &str) -> Result<String, ExtractError> {
        let row_selector = selector(&format!("tr:nth-of-type({})", self.row))?;
        let cell_selector = selector(&format!("td:nth-of-type({})", self.cell))?;
        let link_selector = selector("a")?;

        let document = Html::parse_document(html);

        let row = document
            .select(&row_selector)
            .next()
            .ok_or(ExtractError::MissingRow(self.row))?;
        let cell = row.select(&cell_selector).next().ok_or(ExtractError::MissingCell(self.cell))?;
        let link = cell.select(&link_selector).next().ok_or(ExtractError::MissingLink)?;

        let name = link.text().collect::<String>();
        let name = name.trim();
        if name.is_empty() {
            return Err(ExtractError::EmptyName);
        }

        Ok(name.to_string())
    }
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(e.to_string()))
}
