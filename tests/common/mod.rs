// tests/common/mod.rs
//
// In-memory site: exact URL (fragment included) → page body. Anything else is a 404.
//
#![allow(dead_code)]
use std::cell::RefCell;
use std::collections::HashMap;

use mo3jam_scrape::FetchError;
use mo3jam_scrape::core::Fetch;

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

impl Fetch for FakeSite {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        })
    }
}

pub fn word_list(words: &[&str]) -> String {
    let items: String = words
        .iter()
        .map(|w| format!("<li><a href=\"/term/{w}\">{w}</a></li>"))
        .collect();
    format!("<html><body><ul class=\"grid-list\">{items}</ul></body></html>")
}

pub fn term_page(dialect_line: &str, body: &str) -> String {
    format!(
        "<html><body><div class=\"def-main\">\
           <div class=\"dialects\">{dialect_line}</div>\
           <div class=\"def-body\">{body}</div>\
         </div></body></html>"
    )
}
