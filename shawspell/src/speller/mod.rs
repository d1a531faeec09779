//! Spell-checking backends.
//!
//! A [`Speller`] answers two questions for one script's dictionary: is this
//! word correct, and what word-forms come close to it. [`WordListSpeller`] is
//! the word-list/affix-table implementation used for both the Shavian and the
//! Latin dictionaries.

use std::path::Path;
use std::sync::Arc;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use unic_ucd_category::GeneralCategory;

use self::suggestion::{Suggestion, Weight};
use crate::dictionary::{Dictionary, DictionaryError};
use crate::tokenizer::case_handling;

pub mod suggestion;

/// Tuning knobs shared by every backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpellerConfig {
    /// Maximum number of suggestions returned; `None` for unbounded.
    pub n_best: Option<usize>,
    /// Suggestions above this weight are discarded; `None` for unbounded.
    pub max_weight: Option<Weight>,
}

impl SpellerConfig {
    /// The default configuration: ten best suggestions within edit weight 3.
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            n_best: Some(10),
            max_weight: Some(3.0),
        }
    }
}

/// A spell-checking backend for one script's dictionary.
///
/// Backends are built once at startup and shared read-only afterwards.
pub trait Speller: Send + Sync {
    /// Whether `word` is correctly spelled according to this backend.
    fn is_correct_with_config(&self, word: &str, config: &SpellerConfig) -> bool;

    /// Suggested corrections for `word`, best first.
    fn suggest_with_config(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion>;

    /// [`Speller::is_correct_with_config`] with the default configuration.
    fn is_correct(&self, word: &str) -> bool {
        self.is_correct_with_config(word, &SpellerConfig::default())
    }

    /// [`Speller::suggest_with_config`] with the default configuration.
    fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.suggest_with_config(word, &SpellerConfig::default())
    }
}

/// Backend over a loaded word list and its suggestion alphabet.
#[derive(Debug)]
pub struct WordListSpeller {
    dictionary: Dictionary,
}

impl WordListSpeller {
    /// Wraps an already loaded dictionary.
    pub fn new(dictionary: Dictionary) -> Arc<WordListSpeller> {
        Arc::new(WordListSpeller { dictionary })
    }

    /// Loads the word list and affix table from disk.
    pub fn from_paths(dic: &Path, aff: &Path) -> Result<Arc<WordListSpeller>, DictionaryError> {
        Ok(WordListSpeller::new(Dictionary::from_paths(dic, aff)?))
    }

    /// The backing dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

impl Speller for WordListSpeller {
    fn is_correct_with_config(&self, word: &str, _config: &SpellerConfig) -> bool {
        if word.is_empty() {
            return true;
        }

        // Tokens with zero letters (numbers, punctuation) are not spellable.
        if word.chars().all(|c| !GeneralCategory::of(c).is_letter()) {
            return true;
        }

        if self.dictionary.contains(word) {
            return true;
        }

        case_handling::membership_variants(word)
            .iter()
            .any(|variant| self.dictionary.contains(variant))
    }

    fn suggest_with_config(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        if word.is_empty() {
            return vec![];
        }

        let folded = case_handling::lower_case(word);
        let mut candidates: HashSet<SmolStr> = HashSet::new();

        for candidate in single_edits(&folded, self.dictionary.try_chars()) {
            if self.dictionary.contains(&candidate) {
                candidates.insert(candidate);
            }
        }

        if candidates.is_empty() {
            // No single-edit hit, scan the word list for near misses.
            for entry in self.dictionary.words() {
                if strsim::damerau_levenshtein(&folded, entry) <= 2 {
                    candidates.insert(entry.clone());
                }
            }
        }

        let mut out: Vec<Suggestion> = candidates
            .into_iter()
            .filter(|candidate| *candidate != folded)
            .map(|candidate| {
                let weight = strsim::damerau_levenshtein(&folded, &candidate) as Weight;
                Suggestion::new(case_handling::apply_case(word, &candidate), weight)
            })
            .collect();

        if let Some(max_weight) = config.max_weight {
            out.retain(|suggestion| suggestion.weight <= max_weight);
        }

        out.sort();

        if let Some(n_best) = config.n_best {
            out.truncate(n_best);
        }

        out
    }
}

/// Every string one edit away from `word`: deletes, transposes, and, over the
/// suggestion alphabet, replaces and inserts.
fn single_edits(word: &str, alphabet: &[char]) -> Vec<SmolStr> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = Vec::new();

    for skip in 0..chars.len() {
        let edit: SmolStr = chars
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, c)| *c)
            .collect();
        edits.push(edit);
    }

    for left in 0..chars.len().saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(left, left + 1);
        edits.push(swapped.iter().copied().collect());
    }

    for position in 0..chars.len() {
        for replacement in alphabet {
            if chars[position] == *replacement {
                continue;
            }
            let mut replaced = chars.clone();
            replaced[position] = *replacement;
            edits.push(replaced.iter().copied().collect());
        }
    }

    for position in 0..=chars.len() {
        for insertion in alphabet {
            let mut inserted = chars.clone();
            inserted.insert(position, *insertion);
            edits.push(inserted.iter().copied().collect());
        }
    }

    edits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin_speller() -> Arc<WordListSpeller> {
        let dictionary = Dictionary::from_bytes(
            b"4\nhello\nworld\nword\nwords\n",
            b"SET UTF-8\nTRY abcdefghijklmnopqrstuvwxyz\n",
        )
        .unwrap();
        WordListSpeller::new(dictionary)
    }

    fn shavian_speller() -> Arc<WordListSpeller> {
        let dictionary = Dictionary::from_bytes(
            "3\n𐑣𐑩𐑤𐑴\n𐑢𐑻𐑤𐑛\n𐑞\n".as_bytes(),
            "SET UTF-8\nTRY 𐑣𐑩𐑤𐑴𐑢𐑻𐑛𐑞\n".as_bytes(),
        )
        .unwrap();
        WordListSpeller::new(dictionary)
    }

    #[test]
    fn membership_with_case_fallback() {
        let speller = latin_speller();
        assert!(speller.is_correct("hello"));
        assert!(speller.is_correct("Hello"));
        assert!(speller.is_correct("HELLO"));
        assert!(!speller.is_correct("helo"));
    }

    #[test]
    fn letterless_tokens_are_correct() {
        let speller = latin_speller();
        assert!(speller.is_correct(""));
        assert!(speller.is_correct("1234"));
        assert!(speller.is_correct("?!"));
    }

    #[test]
    fn suggestions_are_ranked_best_first() {
        let speller = latin_speller();
        let suggestions = speller.suggest("wordz");
        let values: Vec<&str> = suggestions.iter().map(|s| s.value()).collect();

        // both one edit away, tie broken by value
        assert_eq!(values, vec!["word", "words"]);
        assert!(suggestions[0].weight() <= suggestions[1].weight());
    }

    #[test]
    fn suggestions_restore_capitalization() {
        let speller = latin_speller();
        let suggestions = speller.suggest("Helo");
        assert_eq!(suggestions[0].value(), "Hello");
    }

    #[test]
    fn suggestions_never_include_the_input() {
        let speller = latin_speller();
        assert!(speller.suggest("hello").iter().all(|s| s.value() != "hello"));
    }

    #[test]
    fn n_best_truncates() {
        let speller = latin_speller();
        let config = SpellerConfig {
            n_best: Some(1),
            max_weight: None,
        };
        assert!(speller.suggest_with_config("wordz", &config).len() <= 1);
    }

    #[test]
    fn shavian_suggestions() {
        let speller = shavian_speller();
        assert!(speller.is_correct("𐑣𐑩𐑤𐑴"));
        let suggestions = speller.suggest("𐑣𐑩𐑤");
        assert_eq!(suggestions[0].value(), "𐑣𐑩𐑤𐑴");
    }

    #[test]
    fn fallback_scan_without_try_alphabet() {
        let dictionary =
            Dictionary::from_bytes(b"1\nhello\n", b"SET UTF-8\n").unwrap();
        let speller = WordListSpeller::new(dictionary);
        let suggestions = speller.suggest("helo");
        assert_eq!(suggestions[0].value(), "hello");
    }
}
