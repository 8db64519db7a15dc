//! Hashtag extraction from topic and outcome words.

use indexmap::IndexSet;

const MIN_TOKEN_LEN: usize = 3;
const MAX_HASHTAGS: usize = 6;
const FALLBACK_STRATEGY_TAG: &str = "#LinkedInStrategy";
const FALLBACK_GROWTH_TAG: &str = "#Growth";

/// Splits on whitespace and keeps only `[A-Za-z0-9_]` from each word.
fn word_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
}

fn to_hashtag(token: &str) -> String {
    // Tokens are ASCII, so byte slicing at 1 is safe.
    let (head, tail) = token.split_at(1);
    format!("#{}{}", head.to_ascii_uppercase(), tail)
}

/// Builds up to six hashtags, topic words first, then outcome words.
///
/// Tags are deduplicated in insertion order. Short lists are padded with
/// `#LinkedInStrategy` (below four) and `#Growth` (below five).
pub fn build_hashtags(topic: &str, outcome: &str) -> Vec<String> {
    let mut tags: IndexSet<String> = word_tokens(topic)
        .chain(word_tokens(outcome))
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .map(|token| to_hashtag(&token))
        .collect();

    if tags.len() < 4 {
        tags.insert(FALLBACK_STRATEGY_TAG.to_string());
    }
    if tags.len() < 5 {
        tags.insert(FALLBACK_GROWTH_TAG.to_string());
    }

    tags.into_iter().take(MAX_HASHTAGS).collect()
}
