// src/specs/words.rs
//! Spec for the per-letter word listing: `/dialect/<dialect>/words/<letter>`.
//!
//! The words sit in `<ul class="grid-list">` as plain `<a>` links. Link order is
//! kept and duplicates are not collapsed.

use crate::config::consts::WORD_LIST_MARKER;
use crate::config::options::ScrapeOptions;
use crate::core::Markup;

/// One listed word and the detail page built for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub link: String,
}

/// Empty when the listing container is missing.
pub fn extract_word_list(doc: &Markup, scrape: &ScrapeOptions, dialect: &str) -> Vec<WordEntry> {
    let Some(list) = doc.find_first(WORD_LIST_MARKER) else {
        return Vec::new();
    };

    list.find_all("a")
        .iter()
        .map(|a| {
            let word = a.text();
            let link = scrape.term_url(&word, dialect);
            WordEntry { word, link }
        })
        .collect()
}
