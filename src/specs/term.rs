// src/specs/term.rs
//! Spec for a word's detail page: `/term/<word>`.
//!
//! ```text
//! <div class="def-main">
//!   <div class="dialects">لهجة الجزائرية</div>
//!   <div class="def-body">…definition…</div>
//! </div>
//! ```
//! The dialect line always starts with a fixed prefix word, which is dropped.

use crate::config::consts::{ DEF_BODY_MARKER, DEF_DIALECT_MARKER, DEF_MAIN_MARKER, DEFAULT_DIALECT_LABEL };
use crate::core::Markup;
use crate::core::sanitize::drop_first_token;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermDetail {
    pub dialect_label: String,
    pub definition: String,
}

impl Default for TermDetail {
    fn default() -> Self {
        Self { dialect_label: s!(DEFAULT_DIALECT_LABEL), definition: s!() }
    }
}

/// Never fails: each missing piece keeps its default.
pub fn extract_detail(doc: &Markup) -> TermDetail {
    let mut detail = TermDetail::default();

    let Some(main) = doc.find_first(DEF_MAIN_MARKER) else {
        return detail;
    };
    if let Some(d) = main.find_first(DEF_DIALECT_MARKER) {
        detail.dialect_label = drop_first_token(&d.text());
    }
    if let Some(b) = main.find_first(DEF_BODY_MARKER) {
        detail.definition = b.text();
    }
    detail
}
