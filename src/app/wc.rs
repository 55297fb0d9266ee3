
use fnv::FnvHashMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{InputError, PipelineError},
    mr::{Coordinator, MapReduce},
    KeyValue,
};

/// Final word to occurrence count mapping.
pub type WordCounts = FnvHashMap<String, u64>;

// ASCII punctuation only, the same 32 characters as `char::is_ascii_punctuation`.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:punct:]]").unwrap());

/// Strips punctuation and splits on whitespace. Case is kept as-is, so `The` and `the` are
/// different tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped = PUNCTUATION.replace_all(text, "");
    stripped
        .split(is_separator)
        .filter(|x| !x.is_empty())
        .map(|x| x.to_owned())
        .collect()
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators (U+001C..=U+001F), which
/// are not `White_Space` but still delimit words in plain text.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn map(word: String) -> KeyValue<String, u64> {
    KeyValue::new(word, 1)
}

pub fn reduce(_key: &str, values: &[u64]) -> u64 {
    values.iter().sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WordCount;

impl MapReduce for WordCount {
    type Input = String;
    type Key = String;
    type Value = u64;
    type Output = u64;

    fn map(&self, input: String) -> KeyValue<String, u64> {
        map(input)
    }

    fn reduce(&self, key: &String, values: Vec<u64>) -> u64 {
        reduce(key, &values)
    }
}

/// Counts every word of `text`. Empty or punctuation-only text gives an empty mapping.
pub fn count_words(coordinator: &Coordinator, text: &str) -> Result<WordCounts, PipelineError> {
    let tokens = tokenize(text);
    log::info!("[Tokenize] #{} token(s) extracted", tokens.len());
    coordinator.run(&WordCount, tokens)
}

/// Like [`count_words`], but a missing input counts as empty text instead of failing the run.
pub fn count_input(
    coordinator: &Coordinator,
    input: Result<String, InputError>,
) -> Result<WordCounts, PipelineError> {
    match input {
        Ok(text) => count_words(coordinator, &text),
        Err(e) => {
            log::warn!("[Tokenize] No input text ({}), nothing to count", e);
            Ok(WordCounts::default())
        }
    }
}
