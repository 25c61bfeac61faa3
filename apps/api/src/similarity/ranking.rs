//! Cosine ranking over the precomputed corpus vectors.

use crate::errors::EngineError;

/// One scored corpus entry. `index` is the record's position in the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    pub index: usize,
    pub score: f64,
}

/// Scores `query` against every corpus vector and returns the full ordering:
/// descending by score, ties broken by ascending index so the result is a
/// deterministic total order. Both sides are unit vectors (or zero), so the
/// score is the plain dot product.
///
/// An empty vector set is a programming error — `fit` guarantees at least
/// one document if it succeeded.
pub fn rank(doc_vectors: &[Vec<f64>], query: &[f64]) -> Result<Vec<RankedMatch>, EngineError> {
    if doc_vectors.is_empty() {
        return Err(EngineError::InvariantViolation(
            "ranking requires at least one corpus vector".to_string(),
        ));
    }

    let mut ranked: Vec<RankedMatch> = doc_vectors
        .iter()
        .enumerate()
        .map(|(index, doc)| RankedMatch {
            index,
            score: dot(doc, query),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });

    Ok(ranked)
}

/// First element of `rank`. For an all-zero query every score is 0 and the
/// tie-break alone decides, so the "best match" is index 0 — deterministic
/// but not meaningful.
pub fn best_match(doc_vectors: &[Vec<f64>], query: &[f64]) -> Result<RankedMatch, EngineError> {
    let ranked = rank(doc_vectors, query)?;
    ranked
        .into_iter()
        .next()
        .ok_or_else(|| EngineError::InvariantViolation("rank returned no entries".to_string()))
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vector_set_is_invariant_violation() {
        let err = rank(&[], &[1.0]).unwrap_err();
        assert!(matches!(err, EngineError::InvariantViolation(_)));
    }

    #[test]
    fn test_scores_are_cosine_of_unit_vectors() {
        let docs = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let ranked = rank(&docs, &[1.0, 0.0]).unwrap();
        assert_eq!(ranked[0].index, 0);
        assert!((ranked[0].score - 1.0).abs() < 1e-9);
        assert!((ranked[1].score - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_is_descending_by_score() {
        let sqrt_half = (0.5_f64).sqrt();
        let docs = vec![
            vec![0.0, 1.0],
            vec![sqrt_half, sqrt_half],
            vec![1.0, 0.0],
        ];
        let ranked = rank(&docs, &[1.0, 0.0]).unwrap();
        let indices: Vec<usize> = ranked.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
        for pair in ranked.windows(2) {
            assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].index < pair[1].index)
            );
        }
    }

    #[test]
    fn test_ties_break_by_ascending_index() {
        let docs = vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![1.0, 0.0]];
        let ranked = rank(&docs, &[1.0, 0.0]).unwrap();
        let indices: Vec<usize> = ranked.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_query_scores_all_zero_and_best_is_index_zero() {
        let docs = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let ranked = rank(&docs, &[0.0, 0.0]).unwrap();
        assert!(ranked.iter().all(|m| m.score == 0.0));
        let best = best_match(&docs, &[0.0, 0.0]).unwrap();
        assert_eq!(best.index, 0);
    }

    #[test]
    fn test_best_match_is_first_of_rank() {
        let docs = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let best = best_match(&docs, &[1.0, 0.0]).unwrap();
        assert_eq!(best.index, 1);
        assert!((best.score - 1.0).abs() < 1e-9);
    }
}
