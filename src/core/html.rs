// src/core/html.rs
//! Thin capability layer over `scraper`: find the first element carrying a
//! structural marker, list child links, read visible text.

use scraper::{ ElementRef, Html, Selector };

/// `(tag, class)` pair used to locate an element, e.g. `("ul", "grid-list")`.
pub type Marker<'m> = (&'m str, &'m str);

/// A parsed HTML document.
pub struct Markup {
    doc: Html,
}

impl Markup {
    pub fn parse(text: &str) -> Self {
        Self { doc: Html::parse_document(text) }
    }

    /// First element in document order matching `marker`.
    pub fn find_first(&self, marker: Marker) -> Option<Node<'_>> {
        let sel = marker_selector(marker)?;
        self.doc.select(&sel).next().map(Node)
    }
}

/// Borrowed handle to one element of a [`Markup`].
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// First descendant matching `marker`.
    pub fn find_first(&self, marker: Marker) -> Option<Node<'a>> {
        let sel = marker_selector(marker)?;
        self.0.select(&sel).next().map(Node)
    }

    /// All descendants with tag name `tag`, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<Node<'a>> {
        match Selector::parse(tag) {
            Ok(sel) => self.0.select(&sel).map(Node).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Concatenated text of the element and its descendants, trimmed.
    pub fn text(&self) -> String {
        let raw: String = self.0.text().collect();
        s!(raw.trim())
    }
}

fn marker_selector((tag, class): Marker) -> Option<Selector> {
    Selector::parse(&format!("{tag}.{class}")).ok()
}
