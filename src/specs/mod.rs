// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how to read exactly one kind of mo3jam page: *where the ground
//! truth lives in the HTML* and *what to fall back to when it isn't there*.
//!
//! ## What lives here
//! - Pure extraction over an already-fetched [`Markup`](crate::core::Markup).
//! - Marker choice (class attributes from `config::consts`).
//! - Defaults for missing structure. Specs never fail; a page with the wrong
//!   shape yields an empty list or default fields.
//!
//! ## What does **not** live here
//! - Networking, pacing, logging of fetch failures (`core::net`, `scrape`).
//! - Record assembly or export (`scrape`, `file`).
//!
//! ## Typical call chain
//! ```text
//! scrape::collect → core::net::Fetch::fetch(list url) → specs::words::extract_word_list
//!                 → core::net::Fetch::fetch(term url) → specs::term::extract_detail
//! ```
//!
//! ## Testing notes
//! Everything here is testable offline against inline HTML fixtures.
pub mod term;
pub mod words;
