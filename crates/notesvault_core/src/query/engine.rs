//! Note query evaluation and the paging view state.
//!
//! # Invariants
//! - Filtering never reorders notes.
//! - `total_pages` is at least 1, even for an empty result.
//! - The reported page is always within `[1, total_pages]`.
//! - Text matching is case-insensitive; subject matching is exact.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::model::note::Note;

/// Inputs for one page computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesQuery {
    /// Free-text query; empty matches everything.
    pub text: String,
    /// Exact `subName` filter; empty means all subjects.
    pub subject: String,
    /// Requested 1-based page; clamped into range during evaluation.
    pub page: u32,
    /// Page size; 0 falls back to the configured default.
    pub page_size: u32,
}

impl NotesQuery {
    /// Creates a query for page 1 with the default page size.
    pub fn new(text: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subject: subject.into(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of filtered notes plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesPage {
    /// Notes on the current page, collection order preserved.
    pub items: Vec<Note>,
    /// Total notes matching the filter across all pages.
    pub filtered_count: usize,
    /// Total pages for the filtered set; at least 1.
    pub total_pages: u32,
    /// Clamped 1-based page the items belong to.
    pub page: u32,
}

/// Distinct subject names present in `notes`, sorted ascending.
///
/// Case-sensitive ordinal sort. The implicit "All" wildcard is the empty
/// filter value and is not part of the option set.
pub fn subject_options(notes: &[Note]) -> Vec<String> {
    let mut subjects: Vec<String> = notes.iter().map(|note| note.sub_name.clone()).collect();
    subjects.sort();
    subjects.dedup();
    subjects
}

/// Evaluates one query against the full note list.
///
/// Pure transformation, no persistence side effects.
pub fn query_notes(notes: &[Note], query: &NotesQuery) -> NotesPage {
    let text = query.text.trim().to_lowercase();
    let filtered: Vec<&Note> = notes
        .iter()
        .filter(|note| matches_query(note, &text, &query.subject))
        .collect();

    let page_size = effective_page_size(query.page_size);
    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count, page_size);
    let page = query.page.clamp(1, total_pages);

    let offset = ((page - 1) * page_size) as usize;
    let items = filtered
        .into_iter()
        .skip(offset)
        .take(page_size as usize)
        .cloned()
        .collect();

    NotesPage {
        items,
        filtered_count,
        total_pages,
        page,
    }
}

fn matches_query(note: &Note, text_lower: &str, subject: &str) -> bool {
    if !subject.is_empty() && note.sub_name != subject {
        return false;
    }
    if text_lower.is_empty() {
        return true;
    }

    let combined = format!(
        "{} {} {} {}",
        note.sub_code, note.sub_name, note.topic, note.notes_name
    )
    .to_lowercase();
    combined.contains(text_lower)
}

fn effective_page_size(page_size: u32) -> u32 {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

fn total_pages(filtered_count: usize, page_size: u32) -> u32 {
    filtered_count.div_ceil(page_size as usize).max(1) as u32
}

/// Stateful paging view over the note collection.
///
/// Mirrors the browsing rules of the vault page: editing the text or subject
/// filter resets the view to page 1, page navigation clamps into range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEngine {
    text: String,
    subject: String,
    page: u32,
    page_size: u32,
}

impl QueryEngine {
    /// Creates a view on page 1 with no active filters.
    pub fn new(page_size: u32) -> Self {
        Self {
            text: String::new(),
            subject: String::new(),
            page: 1,
            page_size: effective_page_size(page_size),
        }
    }

    /// Replaces the free-text query; resets to page 1 when it changed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.page = 1;
        }
    }

    /// Replaces the subject filter; resets to page 1 when it changed.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        let subject = subject.into();
        if subject != self.subject {
            self.subject = subject;
            self.page = 1;
        }
    }

    /// Requests a page; out-of-range values are clamped on evaluation.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Returns the page the view currently sits on.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Evaluates the view against the current note collection.
    ///
    /// The clamped page is written back so that later navigation starts from
    /// the page actually shown.
    pub fn evaluate(&mut self, notes: &[Note]) -> NotesPage {
        let result = query_notes(
            notes,
            &NotesQuery {
                text: self.text.clone(),
                subject: self.subject.clone(),
                page: self.page,
                page_size: self.page_size,
            },
        );
        self.page = result.page;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::{effective_page_size, total_pages};
    use crate::config::DEFAULT_PAGE_SIZE;

    #[test]
    fn zero_page_size_falls_back_to_default() {
        assert_eq!(effective_page_size(0), DEFAULT_PAGE_SIZE);
        assert_eq!(effective_page_size(9), 9);
    }

    #[test]
    fn total_pages_is_never_zero() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
    }
}
