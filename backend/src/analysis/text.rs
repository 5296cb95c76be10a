use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Terms that say nothing about a channel's niche.
pub const DOMAIN_STOPWORDS: [&str; 12] = [
    "video", "watch", "this", "new", "best", "how", "to", "your", "for", "with", "from", "what",
];

/// General English stopwords, dropped from TF-IDF documents and topic modeling input.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "about", "after", "all", "also", "am", "an", "and", "another", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "between", "both", "but", "by", "came", "can", "come",
    "could", "did", "do", "each", "for", "from", "get", "got", "has", "had", "he", "have", "her",
    "here", "him", "himself", "his", "how", "if", "in", "into", "is", "it", "like", "make",
    "many", "me", "might", "more", "most", "much", "must", "my", "never", "now", "of", "on",
    "only", "or", "other", "our", "out", "over", "said", "same", "see", "should", "since", "some",
    "still", "such", "take", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "up", "very", "was", "way", "we",
    "well", "were", "what", "where", "which", "while", "who", "with", "would", "you", "your",
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "_",
];

const MIN_KEYWORD_LEN: usize = 4;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[A-Za-zА-Яа-я0-9_]+").expect("word pattern is valid");
    static ref DOMAIN_STOPWORD_SET: HashSet<&'static str> =
        DOMAIN_STOPWORDS.iter().copied().collect();
    static ref ENGLISH_STOPWORD_SET: HashSet<&'static str> =
        ENGLISH_STOPWORDS.iter().copied().collect();
}

/// Lowercases `text` and splits it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn is_keyword_candidate(token: &str) -> bool {
    !DOMAIN_STOPWORD_SET.contains(token) && token.chars().count() >= MIN_KEYWORD_LEN
}

pub fn is_english_stopword(token: &str) -> bool {
    ENGLISH_STOPWORD_SET.contains(token)
}

pub fn filter_keyword_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| is_keyword_candidate(token))
        .cloned()
        .collect()
}

/// First `limit` distinct items, in first-seen order.
pub fn unique_first<I>(items: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .take(limit)
        .collect()
}

/// Space-joined contiguous windows of `n` tokens.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).map(|window| window.join(" ")).collect()
}
