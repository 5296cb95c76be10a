use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

// AFINN-165: one `term<TAB>valence` pair per line, valences -5 to +5.
const AFINN: &str = include_str!("../../data/afinn-165.txt");

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "without", "cannot",
    "dont", "isnt", "wasnt", "aint",
];

lazy_static! {
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref VALENCES: HashMap<&'static str, i8> = parse_lexicon(AFINN);
    static ref STEMMED_VALENCES: HashMap<String, i8> = stem_lexicon(AFINN);
    static ref NEGATION_SET: HashSet<&'static str> = NEGATIONS.iter().copied().collect();
}

/// Lexicon entries in file order. Lines without a numeric valence are skipped.
fn lexicon_entries<'a>(data: &'a str) -> impl Iterator<Item = (&'a str, i8)> + 'a {
    data.lines().filter_map(|line| {
        let (term, valence) = line.trim_end().rsplit_once(char::is_whitespace)?;
        Some((term.trim(), valence.parse().ok()?))
    })
}

fn parse_lexicon(data: &str) -> HashMap<&str, i8> {
    lexicon_entries(data).collect()
}

/// Valences keyed by stem. When several terms share a stem the first one wins.
fn stem_lexicon(data: &str) -> HashMap<String, i8> {
    let mut stemmed = HashMap::new();
    for (term, valence) in lexicon_entries(data) {
        stemmed
            .entry(STEMMER.stem(term).into_owned())
            .or_insert(valence);
    }
    stemmed
}

/// Valence of a single token: exact lexicon hit first, then its stem.
fn valence(token: &str) -> Option<i8> {
    VALENCES
        .get(token)
        .or_else(|| STEMMED_VALENCES.get(&*STEMMER.stem(token)))
        .copied()
}

/// Lexicon polarity of a token sequence, normalised by its length.
///
/// A negator flips every scored word that follows it. Empty input scores 0.
pub fn sentiment_score(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;
    let mut negator = 1.0;
    for token in tokens {
        if NEGATION_SET.contains(token.as_str()) {
            negator = -1.0;
        } else if let Some(valence) = valence(token) {
            score += negator * f64::from(valence);
        }
    }
    score / tokens.len() as f64
}

/// Mean of per-document scores; 0 when there are no documents.
pub fn average(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn lexicon_loads_every_entry() {
        assert!(VALENCES.len() > 2000);
        assert_eq!(VALENCES.get("outstanding"), Some(&5));
        assert_eq!(VALENCES.get("catastrophic"), Some(&-4));
        assert_eq!(VALENCES.get("does not work"), Some(&-3));
    }

    #[test]
    fn positive_and_negative_words_cancel() {
        assert_eq!(sentiment_score(&tokens("good bad")), 0.0);
        assert!((sentiment_score(&tokens("amazing pasta")) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn inflections_score_through_their_stem() {
        assert_eq!(
            sentiment_score(&tokens("loving")),
            sentiment_score(&tokens("love"))
        );
        assert_eq!(sentiment_score(&tokens("loving")), 3.0);
        // "hacks" only matches through "hacked"
        assert!((sentiment_score(&tokens("amazing cooking hacks")) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn words_across_the_whole_lexicon_score() {
        assert!((sentiment_score(&tokens("loving hilarious fabulous")) - 3.0).abs() < 1e-9);
        assert!(sentiment_score(&tokens("dreadful")) < 0.0);
        assert!(sentiment_score(&tokens("breathtaking")) > 0.0);
    }

    #[test]
    fn negation_inverts_following_words() {
        assert!((sentiment_score(&tokens("not good")) - -1.5).abs() < 1e-9);
        assert_eq!(sentiment_score(&tokens("good not")), 1.5);
    }

    #[test]
    fn unknown_words_dilute_the_score() {
        assert!((sentiment_score(&tokens("great knife skills tutorial")) - 0.75).abs() < 1e-9);
        assert_eq!(sentiment_score(&[]), 0.0);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average(&[]), 0.0);
        assert!((average(&[0.6, 0.8]) - 0.7).abs() < 1e-9);
    }
}
