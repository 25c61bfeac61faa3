use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub interest: String,
    pub skills: String,
}

impl RecommendRequest {
    /// Rejects empty or whitespace-only fields before the engine is touched.
    /// The caller should retry with both fields filled in.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.interest.trim().is_empty() {
            return Err(AppError::InvalidQuery(
                "'interest' is required and must not be empty".to_string(),
            ));
        }
        if self.skills.trim().is_empty() {
            return Err(AppError::InvalidQuery(
                "'skills' is required and must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub career: String,
    pub score: f64,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(interest: &str, skills: &str) -> RecommendRequest {
        RecommendRequest {
            interest: interest.to_string(),
            skills: skills.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("web development", "html css").validate().is_ok());
    }

    #[test]
    fn test_empty_interest_rejected() {
        let err = request("", "html").validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
    }

    #[test]
    fn test_whitespace_skills_rejected() {
        let err = request("web", "   ").validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
    }

    #[test]
    fn test_both_empty_rejected_on_interest_first() {
        let err = request("", "").validate().unwrap_err();
        match err {
            AppError::InvalidQuery(msg) => assert!(msg.contains("interest")),
            other => panic!("Expected InvalidQuery, got {other:?}"),
        }
    }
}
