pub mod config;
pub mod consts;
pub mod corpus;
pub mod error;
pub mod ngrams;
pub mod ranker;
pub mod store;
pub mod tokenizer;
// cmd and reports belong to the binary crate (main.rs).

pub use error::{ShingleError, ShingleResult};
pub use ngrams::NGramLength;
pub use ranker::ShingleRecord;
pub use store::{NGram, ShingleStore};
