//! Post-scan keyword search.
//!
//! Case- and whitespace-insensitive substring search over the per-page text
//! retained by the OCR pass. A page matches when its space-joined token
//! list contains the normalized query; for each matching page the
//! individual tokens whose own normalized form contains the query are
//! reported as the matching lines. Exact normalized substring only; no
//! fuzzy or tokenized matching.
//!
//! The search phase shares nothing with the OCR phase except the
//! [`PageText`] list, and every invocation recomputes its result set from
//! scratch.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use memchr::memmem;
use serde::{Deserialize, Serialize};

use crate::error::{MoabitError, Result};
use crate::scan::PageText;
use crate::text::normalize;

/// One matching page: its 1-based page number and the matching lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMatch {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Result set of a single search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The query as the user typed it.
    pub query: String,
    /// The normalized form actually matched against.
    pub normalized_query: String,
    pub matches: Vec<PageMatch>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Scan the retained page texts for a normalized substring match.
///
/// # Errors
///
/// `Validation` if the query normalizes to the empty string; no search is
/// performed and nothing is written.
pub fn search_pages(query: &str, pages: &[PageText]) -> Result<SearchOutcome> {
    let normalized_query = normalize(query);
    if normalized_query.is_empty() {
        return Err(MoabitError::validation("No valid search term provided"));
    }

    let finder = memmem::Finder::new(normalized_query.as_bytes());
    let mut matches = Vec::new();

    for (page_index, page) in pages.iter().enumerate() {
        let page_text = normalize(&page.joined());
        if finder.find(page_text.as_bytes()).is_none() {
            continue;
        }

        // Tokens are already normalized; re-normalizing keeps the per-line
        // check self-contained and is a no-op by idempotence.
        let lines: Vec<String> = page
            .tokens
            .iter()
            .filter(|token| finder.find(normalize(token).as_bytes()).is_some())
            .cloned()
            .collect();

        matches.push(PageMatch {
            page_number: page_index + 1,
            lines,
        });
    }

    Ok(SearchOutcome {
        query: query.to_string(),
        normalized_query,
        matches,
    })
}

/// Write the search report artifact (truncating any prior file).
pub fn write_search_report(path: &Path, document: &str, outcome: &SearchOutcome) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Search Results for '{}' in {}", outcome.query, document)?;
    writeln!(writer)?;

    if outcome.is_empty() {
        writeln!(writer, "No matches found for '{}'.", outcome.query)?;
    } else {
        for page_match in &outcome.matches {
            writeln!(writer, "Page {}:", page_match.page_number)?;
            for line in &page_match.lines {
                writeln!(writer, "- {}", line)?;
            }
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Run a search over retained page texts and persist the report.
///
/// Validates the query first: an empty query fails before the artifact is
/// created, leaving any previous search report untouched.
pub fn search_and_report(query: &str, pages: &[PageText], document: &str, path: &Path) -> Result<SearchOutcome> {
    let outcome = search_pages(query, pages)?;

    for page_match in &outcome.matches {
        tracing::info!(
            page = page_match.page_number,
            lines = page_match.lines.len(),
            query = %outcome.normalized_query,
            "matched page"
        );
    }
    if outcome.is_empty() {
        tracing::info!(query = %outcome.normalized_query, "no matches found");
    }

    write_search_report(path, document, &outcome)?;
    tracing::info!(report = %path.display(), "search results saved");

    Ok(outcome)
}
