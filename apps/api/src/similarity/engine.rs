//! RecommendEngine — the one value the shell talks to.
//!
//! Built once at startup (load corpus → fit vector space → precompute
//! document vectors) and shared read-only for the process lifetime. The
//! request path is pure and allocation-local, so an `Arc<RecommendEngine>`
//! needs no locking under any number of concurrent requests.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::corpus::CorpusStore;
use crate::errors::{AppError, EngineError};
use crate::similarity::ranking::best_match;
use crate::similarity::vector_space::VectorSpace;

/// The single best catalog match for one query.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub career: String,
    /// Cosine similarity in [0, 1]. 0 means no token overlap with the
    /// catalog — the label is then the tie-break winner, not a real match.
    pub score: f64,
    pub index: usize,
}

#[derive(Debug)]
pub struct RecommendEngine {
    store: CorpusStore,
    space: VectorSpace,
    doc_vectors: Vec<Vec<f64>>,
}

impl RecommendEngine {
    /// Loads the corpus from `path` and fits the vector space over it.
    /// Any failure aborts initialization entirely — a partially-initialized
    /// engine is never exposed.
    pub fn initialize(path: &Path) -> Result<Self, AppError> {
        let store = CorpusStore::load(path)?;
        info!("Corpus loaded: {} records", store.len());

        let engine = Self::from_store(store)?;
        info!(
            "Vector space fitted: {} dimensions",
            engine.space.vocabulary_len()
        );
        Ok(engine)
    }

    /// Fits an engine over an already-loaded store. An empty store fails
    /// with `EmptyCorpus` here, before any request is served.
    pub fn from_store(store: CorpusStore) -> Result<Self, EngineError> {
        let documents = store.documents();
        let (space, doc_vectors) = VectorSpace::fit(&documents)?;
        Ok(Self {
            store,
            space,
            doc_vectors,
        })
    }

    /// Recommends the best-matching career for a query. The query document
    /// is built exactly like a corpus document: interest and skills joined
    /// by a single space.
    ///
    /// Always returns the top-ranked entry, even at score 0 — there is no
    /// minimum-similarity floor. Callers that want a "no match" policy can
    /// apply their own threshold to `score`.
    pub fn recommend(&self, interest: &str, skills: &str) -> Result<Recommendation, EngineError> {
        let query = self.space.transform(&format!("{interest} {skills}"))?;
        let best = best_match(&self.doc_vectors, &query)?;

        let record = self.store.get(best.index).ok_or_else(|| {
            EngineError::InvariantViolation(format!(
                "ranked index {} out of bounds for corpus of {}",
                best.index,
                self.store.len()
            ))
        })?;

        Ok(Recommendation {
            career: record.career.clone(),
            score: best.score,
            index: best.index,
        })
    }

    pub fn corpus_len(&self) -> usize {
        self.store.len()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.space.vocabulary_len()
    }
}
