// src/scrape.rs
use std::{ thread, time::Duration };

use tracing::{ debug, info, warn };

use crate::{
    config::options::ScrapeOptions,
    core::{ Fetch, sanitize::strip_latin },
    data::Record,
    progress::Progress,
    specs::{ term::extract_detail, words::extract_word_list },
};

/// Walk dialects × letters × listed words and collect one record per word.
/// Page failures are logged and skipped; this never fails as a whole.
pub fn collect(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<Record> {
    let letters = scrape.letters.resolve();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(scrape.dialects.len() * letters.len());
    }

    let mut records = Vec::new();

    for dialect in &scrape.dialects {
        for &letter in &letters {
            let before = records.len();
            collect_letter(fetcher, scrape, dialect, letter, &mut records);
            let count = records.len() - before;

            info!("Finished letter {letter} for dialect {dialect}: {count} words");
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(dialect, letter, count);
            }
        }
    }

    info!("Collected {} records in total", records.len());
    if let Some(p) = progress.as_deref_mut() {
        p.finish(records.len());
    }
    records
}

fn collect_letter(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    dialect: &str,
    letter: char,
    out: &mut Vec<Record>,
) {
    let url = scrape.word_list_url(dialect, letter);
    let page = fetcher.fetch(&url);
    pause(scrape.pause_ms);

    let Some(doc) = page else {
        warn!("Failed to fetch word list for letter {letter}, dialect {dialect}");
        return;
    };

    let entries = extract_word_list(&doc, scrape, dialect);
    if entries.is_empty() {
        warn!("No word list found for letter {letter}, dialect {dialect}");
        return;
    }

    for entry in entries {
        let detail = fetcher
            .fetch(&entry.link)
            .map(|d| extract_detail(&d))
            .unwrap_or_default();
        pause(scrape.pause_ms);

        debug!(word = %entry.word, label = %detail.dialect_label, "term");

        out.push(Record {
            harf: letter,
            words: strip_latin(&entry.word),
            explin: detail.definition,
            dialect: s!(dialect),
            link: entry.link,
        });
    }
}

fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms)); // be polite
    }
}
