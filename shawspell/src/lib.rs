/*! Script-aware spell-checking for Shavian and Latin English.

English written in the constructed [Shavian alphabet] needs its own
dictionary, while Latin-script English is served by an ordinary word list.
This library segments input text into same-script runs, routes each run to
the speller registered for its script, and merges the results back into
coordinates of the original string. The routing facade mirrors the two call
shapes of a platform spell service ("find next misspelled word, or count
them all" and "suggest guesses for a word") and never signals failure across
that boundary.

[Shavian alphabet]: https://en.wikipedia.org/wiki/Shavian_alphabet

# Usage example

```no_run
use std::sync::Arc;
use shawspell::router::SpellRouter;
use shawspell::script::Script;
use shawspell::speller::{SpellerConfig, WordListSpeller};

let speller = WordListSpeller::from_paths(
    "/Library/Spelling/en-Shaw.dic".as_ref(),
    "/Library/Spelling/en-Shaw.aff".as_ref(),
).unwrap();

let mut router = SpellRouter::new(SpellerConfig::default());
router.register(Script::Shavian, speller);

let result = router.find_misspelled_word_in_string("𐑣𐑩𐑤𐑴 𐑢𐑻𐑤𐑛", "en-Shaw", false);
println!("{:?}", result.range);
```
*/

#![warn(missing_docs)]
pub mod dictionary;
pub mod paths;
pub mod router;
pub mod script;
pub mod speller;
pub mod tokenizer;
