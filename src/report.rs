//! Top-N selection and plain-text rendering of word counts.

use serde::{Deserialize, Serialize};

use crate::app::wc::WordCounts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// The `n` most frequent words, highest count first. Equal counts are ordered by word so the
/// result does not depend on hash map iteration order.
pub fn top_n(counts: &WordCounts, n: usize) -> Vec<WordFrequency> {
    let mut entries: Vec<(&String, &u64)> = counts.iter().collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(n)
        .map(|(word, &count)| WordFrequency {
            word: word.clone(),
            count,
        })
        .collect()
}

/// Horizontal bar chart, the longest bar is `width` characters.
pub fn render_bar_chart(entries: &[WordFrequency], width: usize) -> String {
    if entries.is_empty() {
        return "no words to show\n".to_owned();
    }

    let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);
    let label_width = entries.iter().map(|e| e.word.chars().count()).max().unwrap_or(0);

    let title = format!("Top-{} most frequent words\n", entries.len());
    entries.iter().fold(title, |mut out, entry| {
        let bar = "#".repeat(bar_len(entry.count, max_count, width));
        out.push_str(&format!("{:>label_width$} | {} {}\n", entry.word, bar, entry.count));
        out
    })
}

fn bar_len(count: u64, max_count: u64, width: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let scaled = (count as u128 * width as u128 / max_count as u128) as usize;
    scaled.max(1)
}
