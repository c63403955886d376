// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::consts::{ BASE_URL, DEFAULT_DIALECTS, DEFAULT_OUT_FILE, LETTERS, REQUEST_PAUSE_MS },
    config::options::{ AppOptions, LetterSelector },
    core::HttpFetcher,
    error::Result,
    file, log,
    progress::Progress,
    scrape,
};

/// Collect Arabic dialect words from mo3jam into a CSV file.
#[derive(Debug, Parser)]
#[command(name = "mo3jam", version, about)]
pub struct Args {
    /// Dialects to collect, as named in the site's URLs
    #[arg(value_name = "DIALECT", default_values_t = DEFAULT_DIALECTS.map(String::from))]
    pub dialects: Vec<String>,

    /// Output CSV file (relative paths resolve against the working directory)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Only these letters, e.g. "ابت"
    #[arg(long, value_name = "LETTERS", value_parser = parse_letters)]
    pub letters: Option<LetterSelector>,

    #[arg(long, value_name = "URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Pause after every request, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Print the letters that are walked, then exit
    #[arg(long)]
    pub list_letters: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.dialects = self.dialects.clone();
        opts.scrape.base_url = self.base_url.clone();
        opts.scrape.pause_ms = self.pause_ms;
        if let Some(sel) = &self.letters {
            opts.scrape.letters = sel.clone();
        }
        opts.export.set_path(&self.out);
        opts
    }
}

pub fn run(args: Args) -> Result<()> {
    if args.list_letters {
        let letters: Vec<String> = LETTERS.iter().map(char::to_string).collect();
        println!("{}", letters.join(" "));
        return Ok(());
    }

    log::init(args.verbose);
    let opts = args.to_options();

    let fetcher = HttpFetcher::new()?;
    let mut progress = CliProgress::default();
    let records = scrape::collect(&fetcher, &opts.scrape, Some(&mut progress));

    let path = file::export_records(&opts.export, &records)?;
    println!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Distinct letters of `s`, each of which must be in the fixed alphabet.
fn parse_letters(s: &str) -> std::result::Result<LetterSelector, String> {
    let mut out = Vec::new();
    for ch in s.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        if !LETTERS.contains(&ch) {
            return Err(format!("'{ch}' is not one of the indexed letters"));
        }
        if !out.contains(&ch) { out.push(ch); }
    }
    if out.is_empty() {
        return Err(s!("no letters given"));
    }
    Ok(LetterSelector::Only(out))
}

/// Per-letter counts are already logged by `scrape`; this only frames the run on stdout.
#[derive(Default)]
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.log(&format!("Collecting {total} word-list pages"));
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, _dialect: &str, _letter: char, _count: usize) {
        self.done += 1;
    }
    fn finish(&mut self, total: usize) {
        self.log(&format!("Done: {total} records from {}/{} pages", self.done, self.total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_parsed_and_validated() {
        assert_eq!(parse_letters("ب, ا ب").unwrap(), LetterSelector::Only(vec!['ب', 'ا']));
        assert!(parse_letters("x").is_err());
        assert!(parse_letters(" , ").is_err());
    }

    #[test]
    fn defaults_match_the_original_run() {
        let args = Args::try_parse_from(["mo3jam"]).unwrap();
        assert_eq!(args.dialects, vec!["Algerian", "Egyptian", "Moroccan"]);
        assert_eq!(args.out, PathBuf::from("words_data.csv"));
        assert_eq!(args.to_options().scrape, crate::config::options::ScrapeOptions::default());
    }

    #[test]
    fn args_map_onto_options() {
        let args = Args::try_parse_from([
            "mo3jam", "Tunisian", "-o", "/tmp/t.csv", "--letters", "ت", "--pause-ms", "10",
        ]).unwrap();
        let opts = args.to_options();
        assert_eq!(opts.scrape.dialects, vec!["Tunisian"]);
        assert_eq!(opts.scrape.letters.resolve(), vec!['ت']);
        assert_eq!(opts.scrape.pause_ms, 10);
        assert_eq!(opts.export.out_path(), PathBuf::from("/tmp/t.csv"));
    }
}
