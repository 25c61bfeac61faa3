//! TF-IDF vector space: vocabulary, IDF weights, and the fit/transform pair.
//!
//! `fit` is called once at startup over the corpus documents; `transform`
//! projects query text into the same space on every request. The vocabulary
//! is closed over training-time tokens — query tokens never seen during fit
//! contribute nothing, they never error.

use std::collections::{HashMap, HashSet};

use crate::errors::EngineError;
use crate::similarity::tokenizer::tokenize;

/// Frozen term-weighting model: token → dimension plus per-dimension IDF.
/// All weights are strictly positive, and rarer tokens weigh more.
#[derive(Debug)]
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl VectorSpace {
    /// Fits a vector space over `documents` and returns it together with the
    /// unit-normalized TF-IDF vector of each document, in input order.
    ///
    /// IDF is the smoothed form `ln(N / df) + 1.0`, so a token present in
    /// every document still carries weight 1.0. Fails with `EmptyCorpus` on
    /// zero documents; otherwise returns fully-formed structures or fails
    /// atomically, never partially.
    pub fn fit(documents: &[String]) -> Result<(Self, Vec<Vec<f64>>), EngineError> {
        if documents.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| tokenize(d))
            .collect::<Result<_, _>>()?;

        // Vocabulary in first-seen order, document frequency per token.
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                if !vocabulary.contains_key(token) {
                    let dim = vocabulary.len();
                    vocabulary.insert(token.to_string(), dim);
                }
                *doc_freq.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (token, &dim) in &vocabulary {
            let df = doc_freq[token] as f64;
            idf[dim] = (n / df).ln() + 1.0;
        }

        let space = Self { vocabulary, idf };
        let vectors = tokenized.iter().map(|t| space.weigh(t)).collect();
        Ok((space, vectors))
    }

    /// Projects `text` into the fitted space: tokenize, weigh by TF × IDF,
    /// L2-normalize. A query whose every token is out-of-vocabulary yields
    /// the zero vector — a valid state, not an error.
    pub fn transform(&self, text: &str) -> Result<Vec<f64>, EngineError> {
        let tokens = tokenize(text)?;
        Ok(self.weigh(&tokens))
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.idf.len()];
        for token in tokens {
            if let Some(&dim) = self.vocabulary.get(token) {
                vector[dim] += self.idf[dim];
            }
        }
        normalize(&mut vector);
        vector
    }
}

/// Scales `vector` to unit L2 norm. An all-zero vector is left as-is rather
/// than dividing by zero.
fn normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in vector.iter_mut() {
            *w /= norm;
        }
    }
}
