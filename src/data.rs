// src/data.rs

/// One output row. Built once per listed word, never changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub harf: char,
    pub words: String,
    pub explin: String,
    pub dialect: String,
    pub link: String,
}

impl Record {
    /// Cells in `CSV_HEADERS` order.
    pub fn to_row(&self) -> [String; 5] {
        [
            self.harf.to_string(),
            self.words.clone(),
            self.explin.clone(),
            self.dialect.clone(),
            self.link.clone(),
        ]
    }
}
