//! The script router: segments text, dispatches each run to the speller
//! registered for its script, and merges results back into original-string
//! coordinates.
//!
//! The two `find_misspelled_word_in_string`/`suggest_guesses_for_word`
//! methods mirror the platform spell-service delegate contract, which has no
//! error channel: they absorb every failure into "no misspellings" or an
//! empty suggestion list. The fallible `check`/`suggest` variants are for
//! callers that do want the error.

use std::ops::Range;
use std::sync::Arc;

use hashbrown::HashMap;
use language_tags::LanguageTag;
use thiserror::Error;

use crate::paths;
use crate::script::{self, Script};
use crate::speller::suggestion::Suggestion;
use crate::speller::{Speller, SpellerConfig, WordListSpeller};
use crate::tokenizer::Tokenize;

/// Language tags served by the router.
pub const LANGUAGE_TAGS: [(&str, Script); 2] = [("en", Script::Latin), ("en-Shaw", Script::Shavian)];

/// Errors absorbed at the platform boundary.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The language tag is malformed or names a language this router does
    /// not serve.
    #[error("unsupported language tag `{0}`")]
    UnsupportedLanguage(String),

    /// The dictionary for a script failed to load at startup.
    #[error("no dictionary available for the {0:?} script")]
    BackendUnavailable(Script),
}

/// Outcome of one find-misspelled-word call.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    /// Byte range of the first misspelled word in the input, `None` when
    /// nothing was found or the call was count-only.
    pub range: Option<Range<usize>>,
    /// Number of misspellings: the total in count-only mode, otherwise the
    /// number located before returning (one or zero).
    pub count: usize,
}

impl CheckResult {
    fn none() -> CheckResult {
        CheckResult {
            range: None,
            count: 0,
        }
    }
}

/// Routes checking and suggestion requests to per-script backends.
///
/// Backends are registered once before serving requests; the router itself
/// holds no mutable state between calls.
pub struct SpellRouter {
    backends: HashMap<Script, Arc<dyn Speller>>,
    config: SpellerConfig,
}

impl SpellRouter {
    /// An empty router. Every script is fail-open until a backend is
    /// registered for it.
    pub fn new(config: SpellerConfig) -> SpellRouter {
        SpellRouter {
            backends: HashMap::new(),
            config,
        }
    }

    /// A router over the dictionaries installed in the platform spelling
    /// directories.
    ///
    /// A missing or unloadable dictionary leaves its script fail-open; the
    /// failure is logged here, once, not per request.
    pub fn from_installed_dictionaries(config: SpellerConfig) -> SpellRouter {
        let mut router = SpellRouter::new(config);

        for (tag_str, script) in LANGUAGE_TAGS {
            let tag: LanguageTag = match tag_str.parse() {
                Ok(tag) => tag,
                Err(_) => continue,
            };

            let found = match paths::find_dictionary_path(&tag) {
                Some(found) => found,
                None => {
                    log::warn!("{}", RouterError::BackendUnavailable(script));
                    continue;
                }
            };

            match WordListSpeller::from_paths(&found.dic, &found.aff) {
                Ok(speller) => router.register(script, speller),
                Err(e) => {
                    log::warn!("{}: {}", RouterError::BackendUnavailable(script), e);
                }
            }
        }

        router
    }

    /// Registers the backend serving `script`.
    pub fn register(&mut self, script: Script, speller: Arc<dyn Speller>) {
        self.backends.insert(script, speller);
    }

    /// Finds the first misspelled word in `text`, or counts them all.
    ///
    /// Platform-facing: never fails. An unrecognized language is logged and
    /// reported as "no misspellings".
    pub fn find_misspelled_word_in_string(
        &self,
        text: &str,
        language: &str,
        count_only: bool,
    ) -> CheckResult {
        match self.check(text, language, count_only) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("spell check failed: {}", e);
                CheckResult::none()
            }
        }
    }

    /// Suggests corrections for `word`, best first.
    ///
    /// Platform-facing: never fails. Unknown languages and scripts without a
    /// backend yield an empty list.
    pub fn suggest_guesses_for_word(&self, word: &str, language: &str) -> Vec<Suggestion> {
        match self.suggest(word, language) {
            Ok(suggestions) => suggestions,
            Err(e) => {
                log::warn!("suggestion lookup failed: {}", e);
                vec![]
            }
        }
    }

    /// Fallible form of [`SpellRouter::find_misspelled_word_in_string`].
    ///
    /// In locate mode the first misspelling in document order is returned
    /// and checking stops; the caller advances past it and calls again. In
    /// count-only mode every span is checked and the total returned with no
    /// range. Spans whose script has no registered backend are treated as
    /// correctly spelled.
    pub fn check(
        &self,
        text: &str,
        language: &str,
        count_only: bool,
    ) -> Result<CheckResult, RouterError> {
        self.validate_language(language)?;

        let mut count = 0;

        for span in script::script_spans(text) {
            let speller = match self.backends.get(&span.script) {
                Some(speller) => speller,
                None => continue,
            };

            for (offset, word) in span.text.word_bound_indices() {
                if !word.chars().any(|ch| ch.is_alphanumeric()) {
                    continue;
                }

                if speller.is_correct_with_config(word, &self.config) {
                    continue;
                }

                let start = span.start + offset;
                if count_only {
                    count += 1;
                } else {
                    return Ok(CheckResult {
                        range: Some(start..start + word.len()),
                        count: 1,
                    });
                }
            }
        }

        Ok(CheckResult { range: None, count })
    }

    /// Fallible form of [`SpellRouter::suggest_guesses_for_word`].
    ///
    /// The word's dominant script picks exactly one backend; its ranking is
    /// returned unmodified.
    pub fn suggest(&self, word: &str, language: &str) -> Result<Vec<Suggestion>, RouterError> {
        self.validate_language(language)?;

        let script = match script::dominant_script(word) {
            Some(script) => script,
            None => return Ok(vec![]),
        };

        match self.backends.get(&script) {
            Some(speller) => Ok(speller.suggest_with_config(word, &self.config)),
            None => Ok(vec![]),
        }
    }

    fn validate_language(&self, language: &str) -> Result<LanguageTag, RouterError> {
        let tag: LanguageTag = language
            .parse()
            .map_err(|_| RouterError::UnsupportedLanguage(language.to_string()))?;

        if tag.primary_language() != "en" {
            return Err(RouterError::UnsupportedLanguage(language.to_string()));
        }

        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smol_str::SmolStr;

    /// Backend flagging a fixed set of words as misspelled.
    struct StubSpeller {
        bad: &'static [&'static str],
        suggestions: &'static [&'static str],
    }

    impl Speller for StubSpeller {
        fn is_correct_with_config(&self, word: &str, _config: &SpellerConfig) -> bool {
            !self.bad.contains(&word)
        }

        fn suggest_with_config(&self, _word: &str, _config: &SpellerConfig) -> Vec<Suggestion> {
            self.suggestions
                .iter()
                .enumerate()
                .map(|(i, s)| Suggestion::new(SmolStr::new(*s), i as f32))
                .collect()
        }
    }

    fn router_with(
        latin_bad: &'static [&'static str],
        shavian_bad: &'static [&'static str],
    ) -> SpellRouter {
        let mut router = SpellRouter::new(SpellerConfig::default());
        router.register(
            Script::Latin,
            Arc::new(StubSpeller {
                bad: latin_bad,
                suggestions: &["latin"],
            }),
        );
        router.register(
            Script::Shavian,
            Arc::new(StubSpeller {
                bad: shavian_bad,
                suggestions: &["𐑖𐑱𐑝𐑾𐑯"],
            }),
        );
        router
    }

    #[test]
    fn clean_text_returns_no_range() {
        let router = router_with(&[], &[]);
        let result = router.find_misspelled_word_in_string("all fine here", "en", false);
        assert_eq!(result.range, None);
        assert_eq!(result.count, 0);
    }

    #[test]
    fn misspelling_in_latin_span_uses_global_offset() {
        let router = router_with(&["hello"], &[]);
        // "hello" starts at byte 5, after the four-byte 𐑞 and a space
        let result = router.find_misspelled_word_in_string("𐑞 hello", "en", false);
        assert_eq!(result.range, Some(5..10));
        assert_eq!(result.count, 1);
    }

    #[test]
    fn first_misspelling_in_document_order_wins() {
        let router = router_with(&["bb"], &["𐑞"]);
        let text = "aa 𐑞 bb";
        let result = router.find_misspelled_word_in_string(text, "en", false);
        // the Shavian flag comes before the Latin one
        assert_eq!(result.range, Some(3..7));
    }

    #[test]
    fn count_only_sums_across_spans() {
        let router = router_with(&["helo", "wrld"], &["𐑣𐑩"]);
        let result =
            router.find_misspelled_word_in_string("helo 𐑣𐑩 𐑢𐑻𐑤𐑛 wrld ok", "en", true);
        assert_eq!(result.range, None);
        assert_eq!(result.count, 3);
    }

    #[test]
    fn repeated_misspellings_each_count() {
        let router = router_with(&["helo"], &[]);
        let result = router.find_misspelled_word_in_string("helo helo helo", "en", true);
        assert_eq!(result.count, 3);
    }

    #[test]
    fn unregistered_script_is_fail_open() {
        let mut router = SpellRouter::new(SpellerConfig::default());
        router.register(
            Script::Latin,
            Arc::new(StubSpeller {
                bad: &[],
                suggestions: &[],
            }),
        );

        let result = router.find_misspelled_word_in_string("𐑣𐑩𐑤𐑴 𐑢𐑻𐑤𐑛", "en-Shaw", false);
        assert_eq!(result.range, None);
    }

    #[test]
    fn unknown_language_is_absorbed() {
        let router = router_with(&["helo"], &[]);

        assert!(matches!(
            router.check("helo", "tlh", false),
            Err(RouterError::UnsupportedLanguage(_))
        ));
        assert!(matches!(
            router.check("helo", "not a tag!", false),
            Err(RouterError::UnsupportedLanguage(_))
        ));

        // the platform-facing methods degrade instead of failing
        let result = router.find_misspelled_word_in_string("helo", "tlh", false);
        assert_eq!(result.range, None);
        assert!(router.suggest_guesses_for_word("helo", "tlh").is_empty());
    }

    #[test]
    fn shaw_language_tag_is_accepted() {
        let router = router_with(&[], &["𐑣𐑩"]);
        let result = router.find_misspelled_word_in_string("𐑣𐑩", "en-Shaw", false);
        assert_eq!(result.range, Some(0..8));
    }

    #[test]
    fn suggestions_dispatch_on_dominant_script() {
        let router = router_with(&[], &[]);

        let latin = router.suggest_guesses_for_word("helo", "en");
        assert_eq!(latin[0].value(), "latin");

        let shavian = router.suggest_guesses_for_word("𐑣𐑩𐑤", "en-Shaw");
        assert_eq!(shavian[0].value(), "𐑖𐑱𐑝𐑾𐑯");

        // majority Shavian even though the word starts with Latin letters
        let mixed = router.suggest_guesses_for_word("a𐑣𐑩𐑤", "en");
        assert_eq!(mixed[0].value(), "𐑖𐑱𐑝𐑾𐑯");
    }

    #[test]
    fn suggestions_without_backend_are_empty() {
        let router = SpellRouter::new(SpellerConfig::default());
        assert!(router.suggest_guesses_for_word("helo", "en").is_empty());
        assert!(router.suggest_guesses_for_word("...", "en").is_empty());
    }
}
