//! Loading of on-disk word-list (`.dic`) and affix-table (`.aff`) resources.
//!
//! The format is the Hunspell plain-text layout: the word list holds an
//! optional leading entry-count line followed by one entry per line, where an
//! entry may carry affix flags after a `/`. Of the affix table only the subset
//! these dictionaries actually ship is interpreted: `SET` (encoding, must be
//! UTF-8) and `TRY` (the suggestion alphabet). Unknown directives are ignored.

use std::fs;
use std::path::Path;
use std::str;

use hashbrown::HashSet;
use smol_str::SmolStr;

pub mod error;

pub use self::error::DictionaryError;

/// An in-memory dictionary: a word set plus its suggestion alphabet.
///
/// Read-only after loading; shared freely between threads.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<SmolStr>,
    try_chars: Vec<char>,
}

impl Dictionary {
    /// Loads a dictionary from a word-list file and its affix table.
    pub fn from_paths(dic: &Path, aff: &Path) -> Result<Dictionary, DictionaryError> {
        let dic_bytes = fs::read(dic).map_err(|source| DictionaryError::Io {
            path: dic.to_path_buf(),
            source,
        })?;
        let aff_bytes = fs::read(aff).map_err(|source| DictionaryError::Io {
            path: aff.to_path_buf(),
            source,
        })?;

        Dictionary::from_bytes(&dic_bytes, &aff_bytes)
    }

    /// Parses a dictionary from raw word-list and affix-table contents.
    pub fn from_bytes(dic: &[u8], aff: &[u8]) -> Result<Dictionary, DictionaryError> {
        let try_chars = parse_affix(aff)?;
        let words = parse_word_list(dic);

        Ok(Dictionary { words, try_chars })
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of entries in the word set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The `TRY` alphabet, best-guess characters for edit candidates.
    pub fn try_chars(&self) -> &[char] {
        &self.try_chars
    }

    /// Iterates over every entry in the word set, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &SmolStr> {
        self.words.iter()
    }
}

fn parse_word_list(bytes: &[u8]) -> HashSet<SmolStr> {
    let mut lines = bytes.split(|b| *b == b'\n');
    let mut words = HashSet::new();

    let first = lines.next().map(trim_line).unwrap_or(&[]);
    match str::from_utf8(first).ok().and_then(|s| s.parse::<usize>().ok()) {
        Some(count) => words.reserve(count),
        // Not a count line, treat it as an ordinary entry.
        None => insert_entry(&mut words, first),
    }

    for line in lines {
        insert_entry(&mut words, trim_line(line));
    }

    words
}

fn insert_entry(words: &mut HashSet<SmolStr>, line: &[u8]) {
    let entry = match str::from_utf8(line) {
        Ok(s) => s,
        Err(_) => {
            // Undecodable entries are skipped, the rest of the list still
            // loads.
            log::debug!("skipping word-list entry with invalid UTF-8");
            return;
        }
    };

    let entry = entry
        .split(|c| c == '/' || c == '\t')
        .next()
        .unwrap_or("")
        .trim();

    if !entry.is_empty() {
        words.insert(SmolStr::new(entry));
    }
}

fn trim_line(line: &[u8]) -> &[u8] {
    match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}

fn parse_affix(bytes: &[u8]) -> Result<Vec<char>, DictionaryError> {
    let text = String::from_utf8_lossy(bytes);
    let mut try_chars = Vec::new();

    for line in text.lines() {
        let line = line.split('#').next().unwrap_or("");
        let mut fields = line.split_whitespace();

        match fields.next() {
            Some("SET") => {
                let encoding = fields.next().unwrap_or("");
                if !encoding.eq_ignore_ascii_case("UTF-8") {
                    return Err(DictionaryError::UnsupportedEncoding(encoding.to_string()));
                }
            }
            Some("TRY") => {
                if let Some(alphabet) = fields.next() {
                    try_chars = alphabet.chars().collect();
                }
            }
            _ => {}
        }
    }

    Ok(try_chars)
}
