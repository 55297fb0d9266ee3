use sortcount::{
    app::wc::{self, WordCounts},
    mr::{Coordinator, PipelineConfig},
    report,
};

const SAMPLE: &str = "It was the best of times, it was the worst of times; it was the age of \
wisdom, it was the age of foolishness... The end!";

fn count(text: &str, workers: usize) -> WordCounts {
    let coordinator = Coordinator::new(&PipelineConfig { workers }).unwrap();
    wc::count_words(&coordinator, text).unwrap()
}

#[test]
fn the_cat_the_dog_the() {
    let counts = count("the cat the dog the", 2);
    let expected: WordCounts = [("the", 3), ("cat", 1), ("dog", 1)]
        .into_iter()
        .map(|(w, c)| (w.to_owned(), c))
        .collect();
    assert_eq!(counts, expected);
}

#[test]
fn empty_and_punctuation_only() {
    assert!(count("", 2).is_empty());
    assert!(count("!!! ,,, ...", 2).is_empty());
}

#[test]
fn total_equals_token_count() {
    for text in [SAMPLE, "a a a", "one,two;three four", "  spaced\n\nout\ttext  "] {
        let counts = count(text, 3);
        let total: u64 = counts.values().sum();
        assert_eq!(total as usize, wc::tokenize(text).len(), "text: {:?}", text);
        for word in counts.keys() {
            assert!(wc::tokenize(text).contains(word));
        }
    }
}

#[test]
fn case_sensitive() {
    let counts = count(SAMPLE, 2);
    assert_eq!(counts["it"], 3);
    assert_eq!(counts["It"], 1);
    assert_eq!(counts["the"], 4);
    assert_eq!(counts["The"], 1);
    assert_eq!(counts["times"], 2);
}

#[test]
fn same_result_for_any_pool_size() {
    let text = SAMPLE.repeat(50);
    let reference = count(&text, 1);
    for workers in [1, 2, 4, 16, 0] {
        assert_eq!(count(&text, workers), reference, "workers: {}", workers);
    }
}

#[test]
fn idempotent() {
    let coordinator = Coordinator::new(&PipelineConfig { workers: 4 }).unwrap();
    let first = wc::count_words(&coordinator, SAMPLE).unwrap();
    let second = wc::count_words(&coordinator, SAMPLE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn top_words_are_deterministic() {
    let counts = count(SAMPLE, 4);
    let top: Vec<(String, u64)> = report::top_n(&counts, 5)
        .into_iter()
        .map(|f| (f.word, f.count))
        .collect();
    assert_eq!(
        top,
        vec![
            ("of".to_owned(), 4),
            ("the".to_owned(), 4),
            ("was".to_owned(), 4),
            ("it".to_owned(), 3),
            ("age".to_owned(), 2),
        ]
    );
}
