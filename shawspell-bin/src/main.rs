use std::io::{self, Read};
use std::path::PathBuf;

use gumdrop::Options;
use serde::Serialize;

use shawspell::router::SpellRouter;
use shawspell::script::{script_spans, Script};
use shawspell::speller::suggestion::Suggestion;
use shawspell::speller::{SpellerConfig, WordListSpeller};
use shawspell::tokenizer::Tokenize;

trait OutputWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool);
    fn write_suggestions(&mut self, word: &str, suggestions: &[Suggestion]);
    fn write_misspelling(&mut self, text: &str, start: usize, end: usize);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        println!(
            "Input: {}\t\t[{}]",
            &word,
            if is_correct { "CORRECT" } else { "INCORRECT" }
        );
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        for sugg in suggestions {
            println!("{}\t\t{}", sugg.value(), sugg.weight());
        }
        println!();
    }

    fn write_misspelling(&mut self, text: &str, start: usize, end: usize) {
        println!("{:>4}..{:<4} \"{}\"", start, end, &text[start..end]);
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct SuggestionRequest {
    word: String,
    is_correct: bool,
    suggestions: Vec<Suggestion>,
}

#[derive(Serialize)]
struct Misspelling {
    word: String,
    start: usize,
    end: usize,
}

#[derive(Serialize, Default)]
struct JsonWriter {
    results: Vec<SuggestionRequest>,
    misspellings: Vec<Misspelling>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter::default()
    }
}

impl OutputWriter for JsonWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        self.results.push(SuggestionRequest {
            word: word.to_owned(),
            is_correct,
            suggestions: vec![],
        });
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        let i = self.results.len() - 1;
        self.results[i].suggestions = suggestions.to_vec();
    }

    fn write_misspelling(&mut self, text: &str, start: usize, end: usize) {
        self.misspellings.push(Misspelling {
            word: text[start..end].to_owned(),
            start,
            end,
        });
    }

    fn finish(&mut self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap());
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "find misspelled words in the provided text")]
    Check(CheckArgs),

    #[options(help = "get suggestions for provided words")]
    Suggest(SuggestArgs),

    #[options(help = "print input segmented into script spans or words")]
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Options)]
struct CheckArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(no_short, help = "Latin word list (.dic, with .aff next to it)")]
    latin: Option<PathBuf>,

    #[options(no_short, help = "Shavian word list (.dic, with .aff next to it)")]
    shavian: Option<PathBuf>,

    #[options(help = "language tag to check against", default = "en")]
    language: String,

    #[options(no_short, long = "count-only", help = "only report the number of misspellings")]
    count_only: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to be checked")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct SuggestArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(no_short, help = "Latin word list (.dic, with .aff next to it)")]
    latin: Option<PathBuf>,

    #[options(no_short, help = "Shavian word list (.dic, with .aff next to it)")]
    shavian: Option<PathBuf>,

    #[options(help = "language tag to suggest for", default = "en")]
    language: String,

    #[options(help = "maximum weight limit for suggestions")]
    weight: Option<f32>,

    #[options(help = "maximum number of results")]
    nbest: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(short = "w", long = "words", help = "show words instead of script spans")]
    is_words_only: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

fn collect_input(inputs: Vec<String>) -> String {
    if inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .expect("reading stdin");
        buffer
    } else {
        inputs.join(" ")
    }
}

fn build_router(
    latin: Option<PathBuf>,
    shavian: Option<PathBuf>,
    config: SpellerConfig,
) -> anyhow::Result<SpellRouter> {
    if latin.is_none() && shavian.is_none() {
        return Ok(SpellRouter::from_installed_dictionaries(config));
    }

    let mut router = SpellRouter::new(config);

    for (script, dic) in [(Script::Latin, latin), (Script::Shavian, shavian)] {
        if let Some(dic) = dic {
            let aff = dic.with_extension("aff");
            let speller = WordListSpeller::from_paths(&dic, &aff)?;
            router.register(script, speller);
        }
    }

    Ok(router)
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let router = build_router(args.latin, args.shavian, SpellerConfig::default())?;
    let text = collect_input(args.inputs);

    if args.count_only {
        let result = router.find_misspelled_word_in_string(&text, &args.language, true);
        println!("{}", result.count);
        return Ok(());
    }

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    // The platform calls the delegate once per misspelling, advancing past
    // the previous match each time; do the same here.
    let mut offset = 0;
    loop {
        let result = router.find_misspelled_word_in_string(&text[offset..], &args.language, false);
        match result.range {
            Some(range) => {
                let start = offset + range.start;
                let end = offset + range.end;
                writer.write_misspelling(&text, start, end);
                offset = end;
            }
            None => break,
        }
    }

    writer.finish();

    Ok(())
}

fn suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let mut suggest_cfg = SpellerConfig::default();

    if let Some(v) = args.nbest {
        if v == 0 {
            suggest_cfg.n_best = None;
        } else {
            suggest_cfg.n_best = Some(v);
        }
    }

    if let Some(v) = args.weight.filter(|x| x >= &0.0) {
        if v == 0.0 {
            suggest_cfg.max_weight = None;
        } else {
            suggest_cfg.max_weight = Some(v);
        }
    }

    let router = build_router(args.latin, args.shavian, suggest_cfg)?;

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let words: Vec<String> = if args.inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .expect("reading stdin");
        buffer
            .trim()
            .split('\n')
            .map(|x| x.trim().to_string())
            .collect()
    } else {
        args.inputs
    };

    for word in words {
        let is_correct = router
            .find_misspelled_word_in_string(&word, &args.language, false)
            .range
            .is_none();
        writer.write_correction(&word, is_correct);

        let suggestions = router.suggest_guesses_for_word(&word, &args.language);
        writer.write_suggestions(&word, &suggestions);
    }

    writer.finish();

    Ok(())
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs = collect_input(args.inputs);

    if args.is_words_only {
        for (index, token) in inputs.word_bound_indices() {
            println!("{:>4}: \"{}\"", index, token);
        }
    } else {
        for span in script_spans(&inputs) {
            println!("{:>4}: {:?} \"{}\"", span.start, span.script, span.text);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Check(args)) => check(args),
        Some(Command::Suggest(args)) => suggest(args),
        Some(Command::Tokenize(args)) => tokenize(args),
    }
}
