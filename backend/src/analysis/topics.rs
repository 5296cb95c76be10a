//! Latent Dirichlet allocation by collapsed Gibbs sampling.

use super::text::is_english_stopword;
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TopicError {
    #[error("no indexable terms in corpus")]
    EmptyCorpus,

    #[error("invalid topic model configuration: {0}")]
    InvalidConfig(&'static str),
}

#[derive(Debug, Clone)]
pub struct LdaConfig {
    pub topics: usize,
    pub terms_per_topic: usize,
    pub alpha: f64,
    pub beta: f64,
    pub iterations: usize,
    pub burn_in: usize,
    pub sample_lag: usize,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            topics: 3,
            terms_per_topic: 5,
            alpha: 0.1,
            beta: 0.01,
            iterations: 1000,
            burn_in: 200,
            sample_lag: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicTerm {
    pub term: String,
    pub probability: f64,
}

/// Documents as vocabulary indices plus the vocabulary itself.
struct Corpus {
    vocabulary: Vec<String>,
    documents: Vec<Vec<usize>>,
}

impl Corpus {
    fn build(documents: &[Vec<String>]) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut vocabulary = Vec::new();
        let documents: Vec<Vec<usize>> = documents
            .iter()
            .map(|doc| {
                doc.iter()
                    .filter(|t| t.chars().count() > 1 && !is_english_stopword(t))
                    .map(|t| {
                        *index.entry(t.clone()).or_insert_with(|| {
                            vocabulary.push(t.clone());
                            vocabulary.len() - 1
                        })
                    })
                    .collect::<Vec<usize>>()
            })
            .collect();
        Self {
            vocabulary,
            documents,
        }
    }
}

/// Runs LDA over `documents` and returns the top terms of every topic, most
/// probable first.
pub fn extract_topics<R: Rng>(
    documents: &[Vec<String>],
    config: &LdaConfig,
    rng: &mut R,
) -> Result<Vec<Vec<TopicTerm>>, TopicError> {
    if config.topics == 0 {
        return Err(TopicError::InvalidConfig("topic count must be positive"));
    }
    if config.sample_lag == 0 || config.burn_in >= config.iterations {
        return Err(TopicError::InvalidConfig(
            "sampling needs a positive lag and iterations past burn-in",
        ));
    }

    let corpus = Corpus::build(documents);
    if corpus.vocabulary.is_empty() {
        return Err(TopicError::EmptyCorpus);
    }

    let k = config.topics;
    let v = corpus.vocabulary.len();
    let mut word_topic = vec![vec![0usize; k]; v];
    let mut topic_total = vec![0usize; k];
    let mut doc_topic = vec![vec![0usize; k]; corpus.documents.len()];
    let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(corpus.documents.len());

    for (d, doc) in corpus.documents.iter().enumerate() {
        let mut doc_assignments = Vec::with_capacity(doc.len());
        for &w in doc {
            let topic = rng.gen_range(0..k);
            word_topic[w][topic] += 1;
            topic_total[topic] += 1;
            doc_topic[d][topic] += 1;
            doc_assignments.push(topic);
        }
        assignments.push(doc_assignments);
    }

    let mut phi_sum = vec![vec![0.0f64; v]; k];
    let mut samples = 0usize;
    let mut weights = vec![0.0f64; k];
    let v_beta = v as f64 * config.beta;

    for iteration in 0..config.iterations {
        for (d, doc) in corpus.documents.iter().enumerate() {
            for (i, &w) in doc.iter().enumerate() {
                let old = assignments[d][i];
                word_topic[w][old] -= 1;
                topic_total[old] -= 1;
                doc_topic[d][old] -= 1;

                let mut total = 0.0;
                for (t, weight) in weights.iter_mut().enumerate() {
                    *weight = (word_topic[w][t] as f64 + config.beta)
                        / (topic_total[t] as f64 + v_beta)
                        * (doc_topic[d][t] as f64 + config.alpha);
                    total += *weight;
                }

                let mut target = rng.gen::<f64>() * total;
                let mut new = k - 1;
                for (t, weight) in weights.iter().enumerate() {
                    if target < *weight {
                        new = t;
                        break;
                    }
                    target -= weight;
                }

                assignments[d][i] = new;
                word_topic[w][new] += 1;
                topic_total[new] += 1;
                doc_topic[d][new] += 1;
            }
        }

        if iteration >= config.burn_in && (iteration - config.burn_in) % config.sample_lag == 0 {
            for (t, row) in phi_sum.iter_mut().enumerate() {
                for (w, cell) in row.iter_mut().enumerate() {
                    *cell += (word_topic[w][t] as f64 + config.beta)
                        / (topic_total[t] as f64 + v_beta);
                }
            }
            samples += 1;
        }
    }

    let topics: Vec<Vec<TopicTerm>> = phi_sum
        .into_iter()
        .map(|row| {
            let mut ranked: Vec<(usize, f64)> = row
                .into_iter()
                .map(|p| p / samples as f64)
                .enumerate()
                .collect();
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            ranked
                .into_iter()
                .take(config.terms_per_topic)
                .map(|(w, probability)| TopicTerm {
                    term: corpus.vocabulary[w].clone(),
                    probability,
                })
                .collect()
        })
        .collect();

    Ok(topics)
}

pub fn render_topic(terms: &[TopicTerm]) -> String {
    terms
        .iter()
        .map(|t| t.term.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn doc(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    fn quick_config() -> LdaConfig {
        LdaConfig {
            iterations: 300,
            burn_in: 50,
            sample_lag: 10,
            ..LdaConfig::default()
        }
    }

    #[test]
    fn same_seed_gives_same_topics() {
        let docs = vec![
            doc("pasta sauce garlic pasta sauce garlic basil"),
            doc("garlic pasta basil sauce pasta"),
            doc("engine turbo piston engine turbo exhaust"),
            doc("piston exhaust engine turbo engine"),
        ];
        let config = LdaConfig {
            topics: 2,
            terms_per_topic: 3,
            ..quick_config()
        };
        let first = extract_topics(&docs, &config, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = extract_topics(&docs, &config, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert!(first.iter().all(|topic| topic.len() == 3));
    }

    #[test]
    fn topic_terms_come_from_the_filtered_vocabulary() {
        let docs = vec![doc("the pasta and the sauce"), doc("a garlic of basil")];
        let mut rng = StdRng::seed_from_u64(3);
        let topics = extract_topics(&docs, &quick_config(), &mut rng).unwrap();

        let vocabulary: HashSet<&str> = ["pasta", "sauce", "garlic", "basil"].into();
        for topic in &topics {
            assert!(topic.iter().all(|t| vocabulary.contains(t.term.as_str())));
        }
    }

    #[test]
    fn terms_are_ranked_by_probability() {
        let docs = vec![doc("alpha beta gamma delta alpha alpha")];
        let mut rng = StdRng::seed_from_u64(1);
        let topics = extract_topics(&docs, &quick_config(), &mut rng).unwrap();
        assert_eq!(topics.len(), 3);
        for topic in topics {
            assert!(topic.len() <= 5);
            assert!(topic.windows(2).all(|w| w[0].probability >= w[1].probability));
        }
    }

    #[test]
    fn stopword_only_corpus_is_an_error() {
        let docs = vec![doc("the and of"), vec![]];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            extract_topics(&docs, &quick_config(), &mut rng),
            Err(TopicError::EmptyCorpus)
        );
        assert_eq!(
            extract_topics(&[], &quick_config(), &mut rng),
            Err(TopicError::EmptyCorpus)
        );
    }

    #[test]
    fn rejects_zero_topics() {
        let config = LdaConfig {
            topics: 0,
            ..LdaConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            extract_topics(&[doc("pasta")], &config, &mut rng),
            Err(TopicError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rendering_joins_terms_with_commas() {
        let terms = vec![
            TopicTerm {
                term: "pasta".to_string(),
                probability: 0.5,
            },
            TopicTerm {
                term: "sauce".to_string(),
                probability: 0.3,
            },
        ];
        assert_eq!(render_topic(&terms), "pasta, sauce");
    }
}
