// src/config/options.rs
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LetterSelector {
    All,
    Only(Vec<char>),
}

impl LetterSelector {
    /// Letters to walk, always in alphabet order regardless of how they were given.
    pub fn resolve(&self) -> Vec<char> {
        match self {
            LetterSelector::All     => LETTERS.to_vec(),
            LetterSelector::Only(v) => LETTERS.iter().copied().filter(|c| v.contains(c)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub dialects: Vec<String>,
    pub letters: LetterSelector,
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            dialects: DEFAULT_DIALECTS.iter().map(|d| s!(*d)).collect(),
            letters: LetterSelector::All,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl ScrapeOptions {
    /// `<base>/dialect/<dialect>/words/<letter>#<letter>`
    pub fn word_list_url(&self, dialect: &str, letter: char) -> String {
        format!("{}/dialect/{}/words/{}#{}", self.base(), dialect, letter, letter)
    }

    /// `<base>/term/<word>#<dialect>`
    pub fn term_url(&self, word: &str, dialect: &str) -> String {
        format!("{}/term/{}#{}", self.base(), word, dialect)
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUT_FILE) }
    }
}

impl ExportOptions {
    /// Absolute target path; relative input is resolved against the working directory.
    pub fn out_path(&self) -> PathBuf {
        if self.out_path.is_absolute() {
            return self.out_path.clone();
        }
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(&self.out_path),
            Err(_) => self.out_path.clone(),
        }
    }

    pub fn set_path(&mut self, p: impl AsRef<Path>) {
        self.out_path = p.as_ref().to_path_buf();
    }
}
