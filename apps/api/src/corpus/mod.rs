pub mod store;

pub use store::{CareerRecord, CorpusStore};
