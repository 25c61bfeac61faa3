pub mod engine;
pub mod ranking;
pub mod tokenizer;
pub mod vector_space;

pub use engine::{Recommendation, RecommendEngine};
