pub mod sentiment;
pub mod text;
pub mod tfidf;
pub mod titles;
pub mod topics;

use crate::models::{AnalysisResult, VideoSummary};
use log::{info, warn};
use rand::Rng;
use std::collections::BTreeMap;
use tfidf::TfIdf;
use topics::LdaConfig;

pub const MAX_KEYWORDS: usize = 15;
pub const MAX_NGRAMS: usize = 10;
pub const MAX_SUGGESTED_TAGS: usize = 25;

fn video_text(video: &VideoSummary) -> String {
    format!(
        "{} {} {}",
        video.title,
        video.description,
        video.tags.join(" ")
    )
}

/// Keyword, n-gram, TF-IDF, sentiment, topic and title analysis over the
/// fetched videos. `trending_keywords` is passed through untouched.
pub fn build_analysis<R: Rng>(
    videos: &[VideoSummary],
    trending_keywords: Vec<String>,
    year: i32,
    rng: &mut R,
) -> AnalysisResult {
    let mut all_tokens = Vec::new();
    let mut documents = Vec::with_capacity(videos.len());
    let mut sentiment_scores = Vec::with_capacity(videos.len());
    let mut index = TfIdf::new();

    for video in videos {
        let tokens = text::tokenize(&video_text(video));
        index.add_document(&tokens);
        sentiment_scores.push(sentiment::sentiment_score(&tokens));
        all_tokens.extend(tokens.iter().cloned());
        documents.push(tokens);
    }

    let filtered = text::filter_keyword_tokens(&all_tokens);
    let keywords = text::unique_first(filtered.iter().cloned(), MAX_KEYWORDS);
    let bigrams = text::unique_first(text::ngrams(&filtered, 2), MAX_NGRAMS);
    let trigrams = text::unique_first(text::ngrams(&filtered, 3), MAX_NGRAMS);

    let tfidf_scores = index.list_terms(0);
    let suggested_tags = rank_tags(&keywords, &bigrams, &trigrams, &tfidf_scores);

    let topics = if documents.is_empty() {
        Vec::new()
    } else {
        match topics::extract_topics(&documents, &LdaConfig::default(), rng) {
            Ok(extracted) => extracted.iter().map(|t| topics::render_topic(t)).collect(),
            Err(e) => {
                warn!("Topic modeling skipped: {e}");
                Vec::new()
            }
        }
    };

    let suggested_title =
        titles::suggest_title(keywords.first().map(String::as_str), year, rng);

    info!(
        "Analyzed {} videos: {} keywords, {} topics, {} suggested tags",
        videos.len(),
        keywords.len(),
        topics.len(),
        suggested_tags.len()
    );

    AnalysisResult {
        keywords,
        bigrams,
        trigrams,
        tfidf_scores,
        trending_keywords,
        avg_sentiment: sentiment::average(&sentiment_scores),
        topics,
        suggested_title,
        suggested_tags,
    }
}

/// Union of keywords and n-grams, deduplicated, ordered by descending weight.
/// Terms without a weight count as 0; ties keep union order.
pub fn rank_tags(
    keywords: &[String],
    bigrams: &[String],
    trigrams: &[String],
    weights: &BTreeMap<String, f64>,
) -> Vec<String> {
    let mut tags = text::unique_first(
        keywords.iter().chain(bigrams).chain(trigrams).cloned(),
        usize::MAX,
    );
    let weight = |tag: &String| weights.get(tag).copied().unwrap_or(0.0);
    tags.sort_by(|a, b| {
        weight(b)
            .partial_cmp(&weight(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    tags.truncate(MAX_SUGGESTED_TAGS);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MISSING_COUNT, MISSING_DESCRIPTION};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn video(id: &str, title: &str, description: &str, tags: &[&str]) -> VideoSummary {
        VideoSummary {
            video_id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            views: MISSING_COUNT.to_string(),
            likes: MISSING_COUNT.to_string(),
            comments: MISSING_COUNT.to_string(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn cooking_videos() -> Vec<VideoSummary> {
        vec![
            video("v1", "Best Cooking Tips", MISSING_DESCRIPTION, &[]),
            video("v2", "Amazing Cooking Hacks", MISSING_DESCRIPTION, &[]),
        ]
    }

    #[test]
    fn cooking_channel_keywords() {
        let result = build_analysis(&cooking_videos(), vec![], 2026, &mut StdRng::seed_from_u64(1));

        assert_eq!(
            result.keywords,
            strings(&["cooking", "tips", "description", "amazing", "hacks"])
        );
        assert!(!result.keywords.contains(&"best".to_string()));
        assert_eq!(
            result.bigrams,
            strings(&[
                "cooking tips",
                "tips description",
                "description amazing",
                "amazing cooking",
                "cooking hacks",
                "hacks description",
            ])
        );
        assert_eq!(
            result.trigrams,
            strings(&[
                "cooking tips description",
                "tips description amazing",
                "description amazing cooking",
                "amazing cooking hacks",
                "cooking hacks description",
            ])
        );
    }

    #[test]
    fn cooking_channel_tags_follow_first_video_weights() {
        let result = build_analysis(&cooking_videos(), vec![], 2026, &mut StdRng::seed_from_u64(1));

        // "tips" only occurs in the first video, "cooking" and "description" in both.
        assert!((result.tfidf_scores["tips"] - 1.0).abs() < 1e-9);
        assert!(result.tfidf_scores["cooking"] < result.tfidf_scores["tips"]);
        assert_eq!(
            &result.suggested_tags[..5],
            &strings(&["tips", "cooking", "description", "amazing", "hacks"])[..]
        );
        assert_eq!(result.suggested_tags.len(), 16);
        assert_eq!(result.suggested_tags[5], "cooking tips");
    }

    #[test]
    fn cooking_channel_sentiment_and_title() {
        let result = build_analysis(&cooking_videos(), vec![], 2026, &mut StdRng::seed_from_u64(1));

        // best (+3) over 5 tokens; amazing (+4) and hacks (-1, via "hacked") over 5 tokens
        assert!((result.avg_sentiment - 0.6).abs() < 1e-9);
        assert!(titles::candidate_titles(Some("cooking"), 2026).contains(&result.suggested_title));
        assert_eq!(result.topics.len(), 3);
    }

    #[test]
    fn no_videos_yields_empty_analysis() {
        let trending = strings(&["world cup"]);
        let result = build_analysis(&[], trending.clone(), 2026, &mut StdRng::seed_from_u64(1));

        assert_eq!(result.avg_sentiment, 0.0);
        assert!(result.keywords.is_empty());
        assert!(result.bigrams.is_empty());
        assert!(result.trigrams.is_empty());
        assert!(result.tfidf_scores.is_empty());
        assert!(result.topics.is_empty());
        assert!(result.suggested_tags.is_empty());
        assert_eq!(result.trending_keywords, trending);
        assert!(titles::candidate_titles(None, 2026).contains(&result.suggested_title));
    }

    #[test]
    fn keywords_exclude_stopwords_and_short_tokens() {
        let videos = vec![video(
            "v1",
            "How to Watch the NEW Video with your Best friends",
            "Tips for cats and dogs from what this channel does",
            &["new", "video", "kittens"],
        )];
        let result = build_analysis(&videos, vec![], 2026, &mut StdRng::seed_from_u64(5));

        for keyword in &result.keywords {
            assert!(keyword.chars().count() > 3, "{keyword} too short");
            assert!(!text::DOMAIN_STOPWORDS.contains(&keyword.as_str()));
        }
        assert!(result.keywords.contains(&"kittens".to_string()));
    }

    #[test]
    fn limits_and_uniqueness_hold_for_large_input() {
        let words: Vec<String> = (0..60).map(|i| format!("term{i:02}")).collect();
        let videos: Vec<VideoSummary> = words
            .chunks(6)
            .enumerate()
            .map(|(i, chunk)| {
                let id = format!("v{i}");
                let title = chunk.join(" ");
                video(&id, &title, "", &["term00", "term01"])
            })
            .collect();
        let result = build_analysis(&videos, vec![], 2026, &mut StdRng::seed_from_u64(2));

        assert_eq!(result.keywords.len(), MAX_KEYWORDS);
        assert_eq!(result.bigrams.len(), MAX_NGRAMS);
        assert_eq!(result.trigrams.len(), MAX_NGRAMS);
        assert_eq!(result.suggested_tags.len(), MAX_SUGGESTED_TAGS);
        for list in [&result.keywords, &result.bigrams, &result.trigrams, &result.suggested_tags] {
            assert_eq!(list.iter().collect::<HashSet<_>>().len(), list.len());
        }

        let weight = |tag: &String| result.tfidf_scores.get(tag).copied().unwrap_or(0.0);
        assert!(result
            .suggested_tags
            .windows(2)
            .all(|pair| weight(&pair[0]) >= weight(&pair[1])));
    }

    #[test]
    fn rank_tags_breaks_ties_by_union_order() {
        let weights: BTreeMap<String, f64> =
            [("zeta".to_string(), 2.0), ("beta".to_string(), 0.5)].into();
        let tags = rank_tags(
            &strings(&["alpha", "beta", "zeta"]),
            &strings(&["alpha beta", "beta"]),
            &strings(&["gamma delta epsilon"]),
            &weights,
        );
        assert_eq!(
            tags,
            strings(&["zeta", "beta", "alpha", "alpha beta", "gamma delta epsilon"])
        );
    }
}
