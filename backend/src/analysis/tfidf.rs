use super::text::is_english_stopword;
use std::collections::{BTreeMap, HashMap};

/// Term-frequency × inverse-document-frequency over a small document set.
///
/// Each document is a token sequence; English stopwords are not indexed.
/// `idf(t) = 1 + ln(N / (1 + df(t)))`, `tf` is the raw count in the document.
#[derive(Debug, Default)]
pub struct TfIdf {
    documents: Vec<HashMap<String, usize>>,
}

impl TfIdf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, tokens: &[String]) {
        let mut counts = HashMap::new();
        for token in tokens.iter().filter(|t| !is_english_stopword(t)) {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        self.documents.push(counts);
    }

    pub fn idf(&self, term: &str) -> f64 {
        let n = self.documents.len() as f64;
        let df = self
            .documents
            .iter()
            .filter(|doc| doc.contains_key(term))
            .count() as f64;
        1.0 + (n / (1.0 + df)).ln()
    }

    pub fn tfidf(&self, term: &str, document: usize) -> f64 {
        self.documents
            .get(document)
            .and_then(|doc| doc.get(term))
            .map(|&tf| tf as f64 * self.idf(term))
            .unwrap_or(0.0)
    }

    /// Weights of every term in `document`. Empty for an unknown index.
    pub fn list_terms(&self, document: usize) -> BTreeMap<String, f64> {
        self.documents
            .get(document)
            .map(|doc| {
                doc.keys()
                    .map(|term| (term.clone(), self.tfidf(term, document)))
                    .collect()
            })
            .unwrap_or_default()
    }
}
