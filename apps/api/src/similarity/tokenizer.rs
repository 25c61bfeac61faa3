//! Tokenizer shared by `fit` and `transform`. The two sides must split text
//! identically or query vectors land in the wrong dimensions.

use crate::errors::EngineError;

/// Splits `text` on non-alphanumeric boundaries and case-folds each token.
/// Returns an empty list for text with no alphanumeric content.
///
/// Embedded NUL characters are rejected as non-text input: they only appear
/// when binary data is handed to the engine by mistake.
pub fn tokenize(text: &str) -> Result<Vec<String>, EngineError> {
    if text.contains('\0') {
        return Err(EngineError::Tokenization(
            "input contains NUL bytes and is not text".to_string(),
        ));
    }

    Ok(text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect())
}
