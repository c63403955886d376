// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://ar.mo3jam.com";

// Arabic alphabet, including the regional variants the site indexes by
pub const LETTERS: [char; 36] = [
    'ا', 'إ', 'أ', 'آ', 'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ',
    'ر', 'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ع', 'غ', 'ف', 'ق',
    'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ي', 'پ', 'چ', 'ڥ', 'ڨ', 'گ',
];

// Scrape
pub const DEFAULT_DIALECTS: [&str; 3] = ["Algerian", "Egyptian", "Moroccan"];
pub const REQUEST_PAUSE_MS: u64 = 0;

// Structural markers (tag, class)
pub const WORD_LIST_MARKER: (&str, &str) = ("ul", "grid-list");
pub const DEF_MAIN_MARKER: (&str, &str) = ("div", "def-main");
pub const DEF_DIALECT_MARKER: (&str, &str) = ("div", "dialects");
pub const DEF_BODY_MARKER: (&str, &str) = ("div", "def-body");

pub const DEFAULT_DIALECT_LABEL: &str = "default-dialect-placeholder";

// Export
pub const DEFAULT_OUT_FILE: &str = "words_data.csv";
pub const CSV_HEADERS: [&str; 5] = ["harf", "words", "explin", "dialect", "link"];

// Local debug log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
